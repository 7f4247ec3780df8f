//! Seeder configuration loaded from `seeder.toml`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::repository::{DEFAULT_REPOSITORY, Repository};

/// Config file consulted when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "seeder.toml";

/// Seeder configuration (TOML).
///
/// Every field is optional in the file; missing fields take the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeederConfig {
    /// Base URL of the tracker REST API, without trailing slash.
    pub api_base_url: String,

    /// Repository used when `--repo` is not passed.
    pub repository: String,

    /// `User-Agent` header sent with every request.
    pub user_agent: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            repository: DEFAULT_REPOSITORY.to_string(),
            user_agent: format!("seeder/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_secs: 30,
        }
    }
}

impl SeederConfig {
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(anyhow!("api_base_url must not be empty"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(anyhow!("user_agent must not be empty"));
        }
        if self.request_timeout_secs == 0 {
            return Err(anyhow!("request_timeout_secs must be > 0"));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolve the target repository: explicit override first, then config.
    ///
    /// The configured value is only parsed when no override is given.
    pub fn resolve_repository(&self, explicit: Option<&str>) -> Result<Repository> {
        match explicit {
            Some(raw) => raw.parse(),
            None => self.repository.parse().context("config repository"),
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SeederConfig::default()`.
pub fn load_config(path: &Path) -> Result<SeederConfig> {
    if !path.exists() {
        let cfg = SeederConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SeederConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, SeederConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("seeder.toml");
        fs::write(&path, "api_base_url = \"http://127.0.0.1:9000\"\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(cfg.repository, DEFAULT_REPOSITORY);
        assert_eq!(cfg.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn rejects_zero_timeout() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("seeder.toml");
        fs::write(&path, "request_timeout_secs = 0\n").expect("write");

        let err = load_config(&path).expect_err("zero timeout");
        assert!(format!("{err:#}").contains("request_timeout_secs must be > 0"));
    }

    #[test]
    fn malformed_repository_only_fails_when_used() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("seeder.toml");
        fs::write(&path, "repository = \"not-a-slug\"\n").expect("write");

        let cfg = load_config(&path).expect("load");
        let repo = cfg.resolve_repository(Some("good/one")).expect("override");
        assert_eq!(repo.to_string(), "good/one");

        let err = cfg.resolve_repository(None).expect_err("configured value");
        assert!(format!("{err:#}").contains("config repository"));
    }

    #[test]
    fn explicit_repository_wins() {
        let cfg = SeederConfig::default();
        let repo = cfg.resolve_repository(Some("octo/demo")).expect("resolve");
        assert_eq!(repo.to_string(), "octo/demo");
        let fallback = cfg.resolve_repository(None).expect("resolve");
        assert_eq!(fallback.to_string(), DEFAULT_REPOSITORY);
    }
}
