//! Invocation mode selection.

use std::path::PathBuf;

/// What a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Write the rendered catalog to a JSON file.
    Export(PathBuf),
    /// Print the planned issues without side effects.
    DryRun,
    /// Create one issue per task on the tracker.
    Submit { token: String },
    /// Nothing actionable was requested.
    Usage,
}

impl Mode {
    /// Short name for logs; never includes the token.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Export(_) => "export",
            Self::DryRun => "dry-run",
            Self::Submit { .. } => "submit",
            Self::Usage => "usage",
        }
    }
}

/// Pick the mode from the flags. Export wins over dry-run, which wins over
/// submission. Empty values count as absent.
pub fn select_mode(export: Option<PathBuf>, dry_run: bool, token: Option<String>) -> Mode {
    if let Some(path) = export.filter(|path| !path.as_os_str().is_empty()) {
        return Mode::Export(path);
    }
    if dry_run {
        return Mode::DryRun;
    }
    match token.filter(|token| !token.is_empty()) {
        Some(token) => Mode::Submit { token },
        None => Mode::Usage,
    }
}
