//! Issue body rendering.
//!
//! Rendering is pure: the same task always yields byte-identical output, and
//! no task can make it fail.

use crate::core::task::{RenderedIssue, TaskRecord};

const ESTIMATE: &str = "1-4 hours";

const DEPENDENCY_NOTE: &str = "This task may depend on completion of previous tasks in its category. \
Please check the project roadmap for dependencies.";

const ACCEPTANCE_CRITERIA: [&str; 5] = [
    "Implementation follows Rust and WebGPU best practices",
    "Code includes appropriate error handling",
    "Changes are tested (unit/integration tests as applicable)",
    "Documentation is updated if needed",
    "Cross-platform compatibility maintained (native + WASM)",
];

/// Render a task into the issue that will be created or exported.
pub fn render(task: &TaskRecord) -> RenderedIssue {
    RenderedIssue {
        title: issue_title(task),
        body: issue_body(task),
        labels: task.labels.clone(),
    }
}

/// `"{id}: {title}"`.
pub fn issue_title(task: &TaskRecord) -> String {
    format!("{}: {}", task.id, task.title)
}

/// Markdown body: description, metadata, dependency note, acceptance criteria.
pub fn issue_body(task: &TaskRecord) -> String {
    let mut body = String::new();
    body.push_str(&task.description);
    body.push_str("\n\n## Task Metadata\n");
    body.push_str(&format!("- **Task ID**: {}\n", task.id));
    body.push_str(&format!("- **Category**: {}\n", task.labels.join(", ")));
    body.push_str(&format!("- **Estimated Time**: {ESTIMATE}\n"));
    body.push_str("\n## Dependencies\n");
    body.push_str(DEPENDENCY_NOTE);
    body.push('\n');
    body.push_str("\n## Acceptance Criteria\n");
    for criterion in ACCEPTANCE_CRITERIA {
        body.push_str("- ");
        body.push_str(criterion);
        body.push('\n');
    }
    body
}
