//! Command-line surface and mode dispatch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use crate::core::mode::{Mode, select_mode};
use crate::core::preview::preview_lines;
use crate::core::repository::Repository;
use crate::core::task::TaskRecord;
use crate::exit_codes;
use crate::io::catalog::resolve_catalog;
use crate::io::config::{DEFAULT_CONFIG_FILE, SeederConfig, load_config};
use crate::io::export::export_catalog;
use crate::io::github::GitHubTracker;
use crate::submit::submit_all;

const USAGE: &str = "\
Error: Either provide --token for creating issues or --export for exporting to JSON
Usage:
  seeder --token YOUR_GITHUB_TOKEN [--repo owner/name]
  seeder --export issues_data.json
  seeder --dry-run";

#[derive(Debug, Parser)]
#[command(
    name = "seeder",
    version,
    about = "Create tracker issues for every task in the catalog"
)]
pub struct Cli {
    /// Personal access token used to create issues.
    #[arg(long)]
    pub token: Option<String>,

    /// Target repository as owner/name. Defaults to the config value.
    #[arg(long)]
    pub repo: Option<String>,

    /// Export the rendered catalog to this JSON file instead of creating issues.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Print what would be created without creating anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Catalog JSON file. Defaults to the built-in catalog.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Config file (TOML). Read only if it exists.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

/// Run the selected mode and return the process exit code.
pub fn run(cli: Cli) -> Result<i32> {
    let mode = select_mode(cli.export.clone(), cli.dry_run, cli.token.clone());
    debug!(mode = mode.name(), "mode selected");
    match mode {
        Mode::Usage => {
            eprintln!("{USAGE}");
            Ok(exit_codes::FAILURE)
        }
        Mode::DryRun => {
            let (_, tasks) = load_inputs(&cli)?;
            Ok(dry_run(&tasks))
        }
        Mode::Export(path) => {
            let (config, tasks) = load_inputs(&cli)?;
            let repository = config.resolve_repository(cli.repo.as_deref())?;
            export(&tasks, &repository, &path)
        }
        Mode::Submit { token } => {
            let (config, tasks) = load_inputs(&cli)?;
            let repository = config.resolve_repository(cli.repo.as_deref())?;
            submit(&tasks, &repository, &config, &token)
        }
    }
}

fn load_inputs(cli: &Cli) -> Result<(SeederConfig, Vec<TaskRecord>)> {
    let config = load_config(&cli.config)?;
    let tasks = resolve_catalog(cli.catalog.as_deref())?;
    Ok((config, tasks))
}

fn export(tasks: &[TaskRecord], repository: &Repository, path: &Path) -> Result<i32> {
    let written = export_catalog(tasks, repository, path)
        .with_context(|| format!("export to {}", path.display()))?;
    println!("Exported {} tasks to {}", written, path.display());
    Ok(exit_codes::SUCCESS)
}

fn dry_run(tasks: &[TaskRecord]) -> i32 {
    for line in preview_lines(tasks) {
        println!("{line}");
    }
    exit_codes::SUCCESS
}

fn submit(
    tasks: &[TaskRecord],
    repository: &Repository,
    config: &SeederConfig,
    token: &str,
) -> Result<i32> {
    let tracker = GitHubTracker::new(config, token)?;
    info!(repository = %repository, tasks = tasks.len(), "creating issues");

    let report = submit_all(tasks, repository, &tracker, |event| {
        for line in event.lines() {
            println!("{line}");
        }
    });

    println!();
    for line in report.summary_lines() {
        println!("{line}");
    }
    Ok(if report.is_success() {
        exit_codes::SUCCESS
    } else {
        exit_codes::FAILURE
    })
}
