//! Dry-run preview lines.

use crate::core::render::issue_title;
use crate::core::task::TaskRecord;

/// Header plus one line per task that would be created.
pub fn preview_lines(tasks: &[TaskRecord]) -> Vec<String> {
    let mut lines = Vec::with_capacity(tasks.len() + 1);
    lines.push(format!("Would create {} issues:", tasks.len()));
    for task in tasks {
        lines.push(format!(
            "  - {} [{}]",
            issue_title(task),
            task.labels.join(", ")
        ));
    }
    lines
}
