//! Stable exit codes for the seeder CLI.

/// Export or dry-run finished, or every issue was created.
pub const SUCCESS: i32 = 0;
/// At least one issue failed, no mode was selected, or a fatal error occurred.
pub const FAILURE: i32 = 1;
