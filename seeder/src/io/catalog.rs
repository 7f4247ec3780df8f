//! Catalog loading with schema + invariant validation.
//!
//! The built-in catalog is compiled into the binary; `--catalog` swaps in a
//! file with the same layout.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::core::invariants::validate_catalog;
use crate::core::task::TaskRecord;

const CATALOG_SCHEMA: &str = include_str!("../../schemas/catalog/v1.schema.json");
const BUILTIN_CATALOG: &str = include_str!("../../catalog/tasks.json");

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    tasks: Vec<TaskRecord>,
}

/// Load the catalog compiled into the binary.
pub fn builtin_catalog() -> Result<Vec<TaskRecord>> {
    parse_catalog(BUILTIN_CATALOG).context("built-in catalog")
}

/// Load a catalog file from disk.
pub fn load_catalog(path: &Path) -> Result<Vec<TaskRecord>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read catalog {}", path.display()))?;
    parse_catalog(&contents).with_context(|| format!("catalog {}", path.display()))
}

/// Load from `path` when given, otherwise the built-in catalog.
pub fn resolve_catalog(path: Option<&Path>) -> Result<Vec<TaskRecord>> {
    match path {
        Some(path) => load_catalog(path),
        None => builtin_catalog(),
    }
}

/// Parse and validate catalog JSON: schema conformance + semantic invariants.
pub fn parse_catalog(raw: &str) -> Result<Vec<TaskRecord>> {
    let value: Value = serde_json::from_str(raw).context("parse catalog json")?;
    validate_schema(&value)?;
    let document: CatalogDocument = serde_json::from_value(value).context("deserialize catalog")?;
    let errors = validate_catalog(&document.tasks);
    if !errors.is_empty() {
        return Err(anyhow!("catalog invariants failed: {}", errors.join("; ")));
    }
    debug!(tasks = document.tasks.len(), "catalog loaded");
    Ok(document.tasks)
}

fn validate_schema(catalog: &Value) -> Result<()> {
    let schema_value: Value =
        serde_json::from_str(CATALOG_SCHEMA).context("parse catalog schema")?;
    let compiled =
        validator_for(&schema_value).map_err(|err| anyhow!("invalid schema: {}", err))?;
    let messages = compiled
        .iter_errors(catalog)
        .map(|err| err.to_string())
        .collect::<Vec<_>>();
    if !messages.is_empty() {
        return Err(anyhow!(
            "catalog schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let tasks = builtin_catalog().expect("builtin");
        assert_eq!(tasks.len(), 80);
        assert_eq!(tasks[0].id, "TASK-023");
        assert_eq!(tasks[tasks.len() - 1].id, "TASK-139");
    }

    #[test]
    fn loads_catalog_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("catalog.json");
        fs::write(
            &path,
            r#"{"tasks": [{"id": "T-1", "title": "One", "description": "", "labels": ["x"]}]}"#,
        )
        .expect("write");

        let tasks = resolve_catalog(Some(&path)).expect("load");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].labels, vec!["x"]);
    }

    #[test]
    fn rejects_schema_violations() {
        let err = parse_catalog(r#"{"tasks": [{"id": "T-1", "title": "One"}]}"#)
            .expect_err("missing fields");
        assert!(err.to_string().contains("catalog schema validation failed"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let raw = r#"{"tasks": [
            {"id": "T-1", "title": "One", "description": "", "labels": []},
            {"id": "T-1", "title": "Two", "description": "", "labels": []}
        ]}"#;
        let err = parse_catalog(raw).expect_err("duplicate");
        assert!(err.to_string().contains("duplicate id 'T-1'"));
    }

    #[test]
    fn missing_file_reports_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("absent.json");
        let err = load_catalog(&path).expect_err("missing");
        assert!(format!("{err:#}").contains("absent.json"));
    }
}
