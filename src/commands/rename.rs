//! Rename command - apply the country mapping to the image directory.

use crate::mapping::{CountryMapping, DEFAULT_MAPPING_FILE};
use crate::rename::{self, EntryOutcome};
use crate::utils::display_path;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// Rename `<code>.<ext>` files to `<name>.<ext>` per the mapping.
pub fn execute(
    dir: PathBuf,
    mapping_path: Option<PathBuf>,
    ext: String,
    dry_run: bool,
) -> Result<()> {
    let mapping_path = mapping_path.unwrap_or_else(|| dir.join(DEFAULT_MAPPING_FILE));
    let mapping =
        CountryMapping::load(&mapping_path).context("Could not load the country mapping")?;

    if dry_run {
        println!("{}", "Dry run - no files will be renamed".dimmed());
        println!();
    }

    let report = rename::run(&dir, &mapping, &ext, dry_run)?;

    for (code, outcome) in &report.outcomes {
        match outcome {
            EntryOutcome::Renamed { from, to } => {
                let verb = if dry_run { "Would rename" } else { "Renamed" };
                println!(
                    "{} {} {} -> {}",
                    "✓".green().bold(),
                    verb,
                    display_path(from, &dir),
                    display_path(to, &dir)
                );
            }
            EntryOutcome::SourceMissing { source } => {
                println!(
                    "{} File not found: {}",
                    "─".dimmed(),
                    display_path(source, &dir).dimmed()
                );
            }
            EntryOutcome::DestinationExists { from, to } => {
                println!(
                    "{} Skipped {}: {} already exists",
                    "─".yellow(),
                    display_path(from, &dir),
                    display_path(to, &dir)
                );
            }
            EntryOutcome::InvalidName { reason } => {
                println!("{} Skipped entry '{}': {}", "✗".red().bold(), code, reason);
            }
            EntryOutcome::Failed { from, to, error } => {
                println!(
                    "{} Failed to rename {} -> {}: {}",
                    "✗".red().bold(),
                    display_path(from, &dir),
                    display_path(to, &dir),
                    error
                );
            }
        }
    }

    println!();
    let mut summary = format!(
        "{} renamed, {} skipped (destination exists), {} not found",
        report.renamed(),
        report.conflicts(),
        report.missing()
    );
    if report.invalid() > 0 {
        summary.push_str(&format!(", {} invalid", report.invalid()));
    }
    if report.failed() > 0 {
        summary.push_str(&format!(", {} failed", report.failed()));
    }
    println!("{summary}");

    Ok(())
}
