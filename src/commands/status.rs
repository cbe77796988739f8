//! Status command - read-only view of what a rename run would do.

use crate::mapping::{CountryMapping, DEFAULT_MAPPING_FILE};
use crate::rename::{classify, EntryState};
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// Show the state of every mapping entry without renaming anything.
pub fn execute(dir: PathBuf, mapping_path: Option<PathBuf>, ext: String) -> Result<()> {
    let mapping_path = mapping_path.unwrap_or_else(|| dir.join(DEFAULT_MAPPING_FILE));
    let mapping =
        CountryMapping::load(&mapping_path).context("Could not load the country mapping")?;

    if !dir.is_dir() {
        bail!("{} is not a directory", dir.display());
    }

    let (mut ready, mut done, mut conflicts, mut absent, mut invalid) = (0, 0, 0, 0, 0);

    for (code, name) in mapping.iter() {
        match classify(&dir, code, name, &ext) {
            Ok(EntryState::Ready) => {
                ready += 1;
                println!("{} {code} -> {name}", "✓".green());
            }
            Ok(EntryState::Done) => {
                done += 1;
                println!("{} {code}: already renamed to {name}", "─".dimmed());
            }
            Ok(EntryState::Conflict) => {
                conflicts += 1;
                println!("{} {code}: {name}.{ext} already exists", "─".yellow());
            }
            Ok(EntryState::Absent) => {
                absent += 1;
                println!("{} {code}: no file", "─".dimmed());
            }
            Err(e) => {
                invalid += 1;
                println!("{} {code}: {e}", "✗".red().bold());
            }
        }
    }

    println!();
    println!(
        "{} entries: {ready} ready, {done} done, {conflicts} conflicts, {absent} absent{}",
        mapping.len(),
        if invalid > 0 {
            format!(", {invalid} invalid")
        } else {
            String::new()
        }
    );

    Ok(())
}
