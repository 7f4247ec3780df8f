//! Sequential batch submission of catalog tasks.

use tracing::{info, instrument, warn};

use crate::core::render::render;
use crate::core::report::RunReport;
use crate::core::repository::Repository;
use crate::core::task::TaskRecord;
use crate::io::tracker::{CreateIssueRequest, CreateOutcome, IssueTracker};

/// Per-task outcome handed to the observer as soon as it is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitEvent {
    Created {
        task_id: String,
        number: u64,
    },
    Rejected {
        task_id: String,
        status: u16,
        reason: String,
        body: String,
    },
    Faulted {
        task_id: String,
        description: String,
    },
}

impl SubmitEvent {
    fn from_outcome(task_id: &str, outcome: CreateOutcome) -> Self {
        let task_id = task_id.to_string();
        match outcome {
            CreateOutcome::Created { number } => Self::Created { task_id, number },
            CreateOutcome::Rejected {
                status,
                reason,
                body,
            } => Self::Rejected {
                task_id,
                status,
                reason,
                body,
            },
            CreateOutcome::Fault { description } => Self::Faulted {
                task_id,
                description,
            },
        }
    }

    /// Console lines for this event.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Created { task_id, number } => {
                vec![format!("✓ Created: {task_id} - #{number}")]
            }
            Self::Rejected {
                task_id,
                status,
                reason,
                body,
            } => vec![
                format!("✗ Failed: {task_id} - {status} {reason}"),
                format!("  Error: {body}"),
            ],
            Self::Faulted {
                task_id,
                description,
            } => vec![format!("✗ Failed: {task_id} - {description}")],
        }
    }
}

/// Submit every task in order, one call at a time.
///
/// A failed task never stops the batch and is never retried. Each outcome is
/// passed to `on_event` before the next task is attempted.
#[instrument(skip_all, fields(repository = %repository, tasks = tasks.len()))]
pub fn submit_all<T: IssueTracker, F: FnMut(&SubmitEvent)>(
    tasks: &[TaskRecord],
    repository: &Repository,
    tracker: &T,
    mut on_event: F,
) -> RunReport {
    let mut report = RunReport::default();

    for task in tasks {
        let request = CreateIssueRequest::from(render(task));
        let outcome = tracker.create_issue(repository, &request);
        let event = SubmitEvent::from_outcome(&task.id, outcome);

        match &event {
            SubmitEvent::Created { number, .. } => {
                info!(task_id = %task.id, number, "issue created");
                report.record_created(&task.id);
            }
            SubmitEvent::Rejected { status, .. } => {
                warn!(task_id = %task.id, status, "issue rejected");
                report.record_failed(&task.id);
            }
            SubmitEvent::Faulted { description, .. } => {
                warn!(task_id = %task.id, error = %description, "issue request failed");
                report.record_failed(&task.id);
            }
        }
        on_event(&event);
    }

    info!(
        created = report.created.len(),
        failed = report.failed.len(),
        "batch finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedTracker, task};

    fn repo() -> Repository {
        "octo/demo".parse().expect("repo")
    }

    fn rejected(status: u16, reason: &str, body: &str) -> CreateOutcome {
        CreateOutcome::Rejected {
            status,
            reason: reason.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn partial_failure_is_recorded_and_batch_continues() {
        let tasks = vec![
            task("TASK-001", "First", &["a"]),
            task("TASK-002", "Second", &["b"]),
        ];
        let tracker = ScriptedTracker::new(vec![
            CreateOutcome::Created { number: 42 },
            rejected(422, "Unprocessable Entity", "validation failed"),
        ]);

        let mut events = Vec::new();
        let report = submit_all(&tasks, &repo(), &tracker, |event| {
            events.push(event.clone());
        });

        assert_eq!(report.created, vec!["TASK-001"]);
        assert_eq!(report.failed, vec!["TASK-002"]);
        assert!(!report.is_success());
        assert_eq!(
            events,
            vec![
                SubmitEvent::Created {
                    task_id: "TASK-001".to_string(),
                    number: 42
                },
                SubmitEvent::Rejected {
                    task_id: "TASK-002".to_string(),
                    status: 422,
                    reason: "Unprocessable Entity".to_string(),
                    body: "validation failed".to_string(),
                },
            ]
        );
    }

    #[test]
    fn every_task_lands_in_exactly_one_list() {
        let tasks: Vec<_> = (1..=6)
            .map(|n| task(&format!("TASK-{n:03}"), "Work", &["x"]))
            .collect();
        let tracker = ScriptedTracker::new(vec![
            CreateOutcome::Fault {
                description: "connection refused".to_string(),
            },
            CreateOutcome::Created { number: 1 },
            rejected(403, "Forbidden", "{}"),
            CreateOutcome::Created { number: 2 },
            CreateOutcome::Fault {
                description: "timed out".to_string(),
            },
            CreateOutcome::Created { number: 3 },
        ]);

        let report = submit_all(&tasks, &repo(), &tracker, |_| {});

        assert_eq!(report.total(), tasks.len());
        assert_eq!(report.created, vec!["TASK-002", "TASK-004", "TASK-006"]);
        assert_eq!(report.failed, vec!["TASK-001", "TASK-003", "TASK-005"]);
        assert!(report.created.iter().all(|id| !report.failed.contains(id)));
        assert_eq!(tracker.calls().len(), tasks.len());
    }

    #[test]
    fn sends_rendered_request_to_repository() {
        let tasks = vec![task("TASK-010", "Wire it", &["core", "api"])];
        let tracker = ScriptedTracker::new(vec![CreateOutcome::Created { number: 7 }]);

        let report = submit_all(&tasks, &repo(), &tracker, |_| {});

        assert!(report.is_success());
        let calls = tracker.calls();
        assert_eq!(calls.len(), 1);
        let (repository, request) = &calls[0];
        assert_eq!(repository, "octo/demo");
        assert_eq!(request, &CreateIssueRequest::from(render(&tasks[0])));
        assert_eq!(request.title, "TASK-010: Wire it");
    }

    #[test]
    fn empty_catalog_is_a_successful_run() {
        let tracker = ScriptedTracker::new(Vec::new());
        let report = submit_all(&[], &repo(), &tracker, |_| {});
        assert!(report.is_success());
        assert!(tracker.calls().is_empty());
    }

    #[test]
    fn event_lines_match_console_format() {
        let created = SubmitEvent::Created {
            task_id: "TASK-001".to_string(),
            number: 42,
        };
        assert_eq!(created.lines(), vec!["✓ Created: TASK-001 - #42"]);

        let rejected = SubmitEvent::Rejected {
            task_id: "TASK-002".to_string(),
            status: 422,
            reason: "Unprocessable Entity".to_string(),
            body: "validation failed".to_string(),
        };
        assert_eq!(
            rejected.lines(),
            vec![
                "✗ Failed: TASK-002 - 422 Unprocessable Entity",
                "  Error: validation failed"
            ]
        );

        let faulted = SubmitEvent::Faulted {
            task_id: "TASK-003".to_string(),
            description: "dns error".to_string(),
        };
        assert_eq!(faulted.lines(), vec!["✗ Failed: TASK-003 - dns error"]);
    }
}
