//! Test-only helpers for building tasks and scripting tracker responses.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use crate::core::repository::Repository;
use crate::core::task::TaskRecord;
use crate::io::tracker::{CreateIssueRequest, CreateOutcome, IssueTracker};

/// Create a deterministic task with a generated description.
pub fn task(id: &str, title: &str, labels: &[&str]) -> TaskRecord {
    TaskRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} description", id),
        labels: labels.iter().map(|label| label.to_string()).collect(),
    }
}

/// Write `tasks` as a catalog file accepted by `--catalog`.
pub fn write_catalog(path: &Path, tasks: &[TaskRecord]) -> Result<()> {
    let mut buf = serde_json::to_string_pretty(&json!({ "tasks": tasks }))?;
    buf.push('\n');
    fs::write(path, buf).with_context(|| format!("write catalog {}", path.display()))
}

/// Tracker that replays scripted outcomes in order and records every call.
///
/// Calls beyond the script yield a `Fault`.
pub struct ScriptedTracker {
    outcomes: RefCell<VecDeque<CreateOutcome>>,
    calls: RefCell<Vec<(String, CreateIssueRequest)>>,
}

impl ScriptedTracker {
    pub fn new(outcomes: Vec<CreateOutcome>) -> Self {
        Self {
            outcomes: RefCell::new(outcomes.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Recorded `(repository, request)` pairs in call order.
    pub fn calls(&self) -> Vec<(String, CreateIssueRequest)> {
        self.calls.borrow().clone()
    }
}

impl IssueTracker for ScriptedTracker {
    fn create_issue(&self, repository: &Repository, request: &CreateIssueRequest) -> CreateOutcome {
        self.calls
            .borrow_mut()
            .push((repository.to_string(), request.clone()));
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| CreateOutcome::Fault {
                description: "scripted tracker exhausted".to_string(),
            })
    }
}
