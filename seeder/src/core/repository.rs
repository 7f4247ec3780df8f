//! Repository identifiers (`owner/name`).

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use anyhow::{Result, anyhow};
use regex::Regex;

/// Repository used when neither the command line nor the config names one.
pub const DEFAULT_REPOSITORY: &str = "telecos/wgpu_playground";

static SLUG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)$").expect("repository regex is valid")
});

/// Target repository on the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl FromStr for Repository {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let caps = SLUG_RE
            .captures(trimmed)
            .filter(|caps| !is_dot_segment(&caps[1]) && !is_dot_segment(&caps[2]))
            .ok_or_else(|| anyhow!("invalid repository '{raw}': expected owner/name"))?;
        Ok(Self {
            owner: caps[1].to_string(),
            name: caps[2].to_string(),
        })
    }
}

/// `.` and `..` would rewrite the request path.
fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
