//! Aggregate outcome of one batch submission.

/// Created and failed task ids, in submission order.
///
/// Every submitted task id lands in exactly one of the two lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub created: Vec<String>,
    pub failed: Vec<String>,
}

impl RunReport {
    pub fn record_created(&mut self, task_id: &str) {
        self.created.push(task_id.to_string());
    }

    pub fn record_failed(&mut self, task_id: &str) {
        self.failed.push(task_id.to_string());
    }

    /// Number of tasks accounted for so far.
    pub fn total(&self) -> usize {
        self.created.len() + self.failed.len()
    }

    /// A run succeeds iff nothing failed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Summary lines printed after a run.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Summary: {} created, {} failed",
            self.created.len(),
            self.failed.len()
        )];
        if !self.failed.is_empty() {
            lines.push(format!("Failed tasks: {}", self.failed.join(", ")));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_success() {
        let report = RunReport::default();
        assert!(report.is_success());
        assert_eq!(report.total(), 0);
        assert_eq!(report.summary_lines(), vec!["Summary: 0 created, 0 failed"]);
    }

    #[test]
    fn any_failure_fails_the_run() {
        let mut report = RunReport::default();
        report.record_created("TASK-001");
        report.record_failed("TASK-002");
        report.record_failed("TASK-003");

        assert!(!report.is_success());
        assert_eq!(report.total(), 3);
        assert_eq!(
            report.summary_lines(),
            vec![
                "Summary: 1 created, 2 failed".to_string(),
                "Failed tasks: TASK-002, TASK-003".to_string(),
            ]
        );
    }
}
