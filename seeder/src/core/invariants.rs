//! Semantic catalog invariants not expressible via JSON Schema.

use std::collections::HashSet;

use crate::core::task::TaskRecord;

/// Check catalog invariants:
/// - No duplicate ids
/// - Ids and titles are not blank
/// - Labels within one task are neither blank nor repeated
pub fn validate_catalog(tasks: &[TaskRecord]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, task) in tasks.iter().enumerate() {
        let at = format!("tasks[{index}]");
        if task.id.trim().is_empty() {
            errors.push(format!("{at}: id must not be blank"));
        } else if !seen.insert(task.id.as_str()) {
            errors.push(format!("duplicate id '{}' at {at}", task.id));
        }
        if task.title.trim().is_empty() {
            errors.push(format!("{at}: title must not be blank"));
        }
        validate_labels(task, &at, &mut errors);
    }

    errors
}

fn validate_labels(task: &TaskRecord, at: &str, errors: &mut Vec<String>) {
    let mut labels = HashSet::new();
    for label in &task.labels {
        if label.trim().is_empty() {
            errors.push(format!("{at}: labels must not be blank"));
        } else if !labels.insert(label.as_str()) {
            errors.push(format!("{at}: duplicate label '{label}'"));
        }
    }
}
