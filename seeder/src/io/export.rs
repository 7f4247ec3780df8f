//! JSON export of the rendered catalog.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::core::render::render;
use crate::core::repository::Repository;
use crate::core::task::TaskRecord;

/// Portable document written by `--export`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportDocument {
    pub repository: String,
    pub tasks: Vec<ExportedIssue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedIssue {
    pub id: String,
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

impl ExportDocument {
    /// Render every task, keeping catalog order.
    pub fn build(tasks: &[TaskRecord], repository: &Repository) -> Self {
        let tasks = tasks
            .iter()
            .map(|task| {
                let issue = render(task);
                ExportedIssue {
                    id: task.id.clone(),
                    title: issue.title,
                    body: issue.body,
                    labels: issue.labels,
                }
            })
            .collect();
        Self {
            repository: repository.to_string(),
            tasks,
        }
    }
}

/// Write the rendered catalog to `path` and return the number of tasks written.
///
/// The document lands in a sibling temp file first and is renamed into place,
/// so a failed export leaves nothing at `path`. Missing parent directories are
/// an error.
#[instrument(skip_all, fields(path = %path.display(), tasks = tasks.len()))]
pub fn export_catalog(tasks: &[TaskRecord], repository: &Repository, path: &Path) -> Result<usize> {
    let document = ExportDocument::build(tasks, repository);
    let mut buf = serde_json::to_string_pretty(&document).context("serialize export json")?;
    buf.push('\n');
    write_atomic(path, &buf)?;
    info!("export written");
    Ok(document.tasks.len())
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = temp_path(path)?;
    debug!(tmp = %tmp_path.display(), "writing export temp file");
    if let Err(err) = fs::write(&tmp_path, contents) {
        return Err(err).with_context(|| format!("write {}", tmp_path.display()));
    }
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err).with_context(|| format!("replace {}", path.display()));
    }
    Ok(())
}

fn temp_path(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .with_context(|| format!("export path has no file name {}", path.display()))?;
    let mut tmp_name = OsString::from(file_name);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}
