//! Issue tracker abstraction.
//!
//! The [`IssueTracker`] trait decouples batch submission from the actual
//! tracking backend (currently the GitHub REST API). Tests use scripted
//! trackers that return predetermined outcomes without touching the network.

use serde::Serialize;

use crate::core::repository::Repository;
use crate::core::task::RenderedIssue;

/// JSON payload of a create-issue call.
///
/// Field names and order are part of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateIssueRequest {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

impl From<RenderedIssue> for CreateIssueRequest {
    fn from(issue: RenderedIssue) -> Self {
        Self {
            title: issue.title,
            body: issue.body,
            labels: issue.labels,
        }
    }
}

/// Result of one create-issue call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The tracker created the issue and assigned it a number.
    Created { number: u64 },
    /// The tracker answered with a non-success status.
    Rejected {
        status: u16,
        reason: String,
        body: String,
    },
    /// The call could not be completed.
    Fault { description: String },
}

/// Abstraction over issue tracking backends.
pub trait IssueTracker {
    /// Create one issue. Never panics and never returns an error: every
    /// failure is folded into [`CreateOutcome`].
    fn create_issue(&self, repository: &Repository, request: &CreateIssueRequest) -> CreateOutcome;
}
