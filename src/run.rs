use crate::config::RunConfig;
use crate::git::GitLog;
use crate::locate;
use crate::model::CommitRecord;
use crate::record;
use crate::report::{self, REPORT_FILE};
use anyhow::Context;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Run the whole pipeline: locate repositories, extract and decode each
/// one's history, then write the aggregated report once at the end.
pub fn exec(config: RunConfig) -> anyhow::Result<()> {
    let repos = locate::find_repositories(&config.root, config.walk_policy)
        .context("Failed to scan for repositories")?;
    tracing::debug!(
        "found {} repositories under {}",
        repos.len(),
        config.root.display()
    );

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );

    let mut records: Vec<CommitRecord> = Vec::new();
    for repo in &repos {
        let project = repo.project();
        pb.set_message(format!("Reading {project}"));

        let raw = GitLog::at(repo.marker())
            .history(&config.user, &config.after)
            .with_context(|| format!("Failed to read history of {}", repo.marker().display()))?;

        if raw.is_empty() {
            tracing::debug!("no matching commits in {project}");
            pb.inc(1);
            continue;
        }

        let decoded = record::decode_records(&raw, &project)
            .with_context(|| format!("Failed to decode history of {}", repo.marker().display()))?;
        tracing::debug!("{} records from {project}", decoded.len());
        records.extend(decoded);

        pb.inc(1);
    }
    pb.finish_and_clear();

    report::write_report(&records, Path::new(REPORT_FILE)).context("Failed to write report")?;

    println!(
        "{} {} records from {} repositories to {}",
        style("Wrote").green().bold(),
        records.len(),
        repos.len(),
        REPORT_FILE
    );

    Ok(())
}
