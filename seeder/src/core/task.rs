//! Catalog task records and their rendered issue form.

use serde::{Deserialize, Serialize};

/// One catalog entry describing a unit of work.
///
/// Records are loaded once at startup and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub labels: Vec<String>,
}

/// Title/body/labels triple ready for submission or export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}
