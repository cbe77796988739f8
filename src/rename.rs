//! Rename engine: best-effort, per-entry renames driven by the mapping.
//!
//! Each mapping entry is handled independently. Nothing is ever overwritten:
//! if the destination filename already exists the entry is skipped. There is
//! no rollback across entries, so a second run over the same directory is a
//! pure no-op for everything already renamed.

use crate::mapping::CountryMapping;
use crate::validation::validate_name;
use anyhow::{bail, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of processing a single mapping entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Source renamed to destination (or would be, in dry-run mode).
    Renamed { from: PathBuf, to: PathBuf },
    /// No file with the entry's code stem exists.
    SourceMissing { source: PathBuf },
    /// Destination already present; nothing touched.
    DestinationExists { from: PathBuf, to: PathBuf },
    /// Country name is not usable as a filename stem.
    InvalidName { reason: String },
    /// The OS refused the rename (permissions, etc.).
    Failed {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },
}

/// Read-only classification of a mapping entry, for the status command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// Source present, destination free: a rename run would move it.
    Ready,
    /// Destination present, source gone: already renamed.
    Done,
    /// Both present: a rename run would skip it.
    Conflict,
    /// Neither present.
    Absent,
}

/// Report of a whole run, in mapping order.
#[derive(Debug, Default)]
pub struct RenameReport {
    pub outcomes: Vec<(String, EntryOutcome)>,
}

impl RenameReport {
    pub fn renamed(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Renamed { .. }))
    }

    pub fn conflicts(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::DestinationExists { .. }))
    }

    pub fn missing(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::SourceMissing { .. }))
    }

    pub fn invalid(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::InvalidName { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Failed { .. }))
    }

    fn count(&self, predicate: impl Fn(&EntryOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| predicate(o)).count()
    }
}

/// Resolve the source file for a code, matching case-insensitively.
///
/// Flag images are normally named with the lowercased code, so that form is
/// probed first, then the code as written in the mapping, then uppercased.
/// First existing candidate wins.
pub fn resolve_source(dir: &Path, code: &str, ext: &str) -> Option<PathBuf> {
    let stems = [code.to_lowercase(), code.to_string(), code.to_uppercase()];
    stems
        .iter()
        .map(|stem| dir.join(format!("{stem}.{ext}")))
        .find(|path| path.exists())
}

/// Classify one entry without touching the filesystem beyond existence checks.
///
/// Entries with an invalid name return an error rather than a state, so the
/// name never reaches path construction.
pub fn classify(dir: &Path, code: &str, name: &str, ext: &str) -> Result<EntryState> {
    validate_name(name)?;

    let source = resolve_source(dir, code, ext);
    let destination = dir.join(format!("{name}.{ext}"));

    Ok(match (source.is_some(), destination.exists()) {
        (true, true) => EntryState::Conflict,
        (true, false) => EntryState::Ready,
        (false, true) => EntryState::Done,
        (false, false) => EntryState::Absent,
    })
}

fn process_entry(dir: &Path, code: &str, name: &str, ext: &str, dry_run: bool) -> EntryOutcome {
    if let Err(e) = validate_name(name) {
        return EntryOutcome::InvalidName {
            reason: e.to_string(),
        };
    }

    let from = match resolve_source(dir, code, ext) {
        Some(path) => path,
        None => {
            // Report the code as the user wrote it in the mapping
            return EntryOutcome::SourceMissing {
                source: dir.join(format!("{code}.{ext}")),
            };
        }
    };

    let to = dir.join(format!("{name}.{ext}"));
    if to.exists() {
        return EntryOutcome::DestinationExists { from, to };
    }

    if dry_run {
        return EntryOutcome::Renamed { from, to };
    }

    match fs::rename(&from, &to) {
        Ok(()) => EntryOutcome::Renamed { from, to },
        Err(e) => EntryOutcome::Failed {
            from,
            to,
            error: e.to_string(),
        },
    }
}

/// Run the renamer over every mapping entry.
///
/// Entries are processed in sorted code order. Every outcome is recorded in
/// the report; per-entry failures never abort the run.
pub fn run(dir: &Path, mapping: &CountryMapping, ext: &str, dry_run: bool) -> Result<RenameReport> {
    if !dir.is_dir() {
        bail!("{} is not a directory", dir.display());
    }

    let mut report = RenameReport::default();
    for (code, name) in mapping.iter() {
        let outcome = process_entry(dir, code, name, ext, dry_run);
        report.outcomes.push((code.to_string(), outcome));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, filename: &str, content: &str) {
        fs::write(dir.path().join(filename), content).expect("Failed to write fixture file");
    }

    #[test]
    fn test_resolve_source_prefers_lowercase() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "us.png", "lower");
        touch(&dir, "US.png", "upper");

        let resolved = resolve_source(dir.path(), "US", "png").unwrap();
        assert_eq!(resolved, dir.path().join("us.png"));
    }

    #[test]
    fn test_resolve_source_uppercase_fallback() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "FI.png", "flag");

        let resolved = resolve_source(dir.path(), "fi", "png").unwrap();
        assert_eq!(resolved, dir.path().join("FI.png"));
    }

    #[test]
    fn test_resolve_source_missing() {
        let dir = TempDir::new().unwrap();
        assert!(resolve_source(dir.path(), "us", "png").is_none());
    }

    #[test]
    fn test_run_renames_and_preserves_content() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "us.png", "stars and stripes");

        let mapping = CountryMapping::from_entries([("us", "United States")]);
        let report = run(dir.path(), &mapping, "png", false).unwrap();

        assert_eq!(report.renamed(), 1);
        assert!(!dir.path().join("us.png").exists());
        let content = fs::read_to_string(dir.path().join("United States.png")).unwrap();
        assert_eq!(content, "stars and stripes");
    }

    #[test]
    fn test_run_skips_existing_destination() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "us.png", "new");
        touch(&dir, "United States.png", "original");

        let mapping = CountryMapping::from_entries([("us", "United States")]);
        let report = run(dir.path(), &mapping, "png", false).unwrap();

        assert_eq!(report.conflicts(), 1);
        assert_eq!(report.renamed(), 0);
        // Neither file touched
        assert_eq!(
            fs::read_to_string(dir.path().join("us.png")).unwrap(),
            "new"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("United States.png")).unwrap(),
            "original"
        );
    }

    #[test]
    fn test_run_reports_missing_source() {
        let dir = TempDir::new().unwrap();

        let mapping = CountryMapping::from_entries([("fr", "France")]);
        let report = run(dir.path(), &mapping, "png", false).unwrap();

        assert_eq!(report.missing(), 1);
        assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_missing_source_reports_code_as_written() {
        let dir = TempDir::new().unwrap();

        let mapping = CountryMapping::from_entries([("US", "United States")]);
        let report = run(dir.path(), &mapping, "png", false).unwrap();

        assert_eq!(report.missing(), 1);
        match &report.outcomes[0].1 {
            EntryOutcome::SourceMissing { source } => {
                assert_eq!(source, &dir.path().join("US.png"));
            }
            other => panic!("Expected SourceMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_run_records_os_rename_failure_and_continues() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "aa.png", "flag");
        touch(&dir, "zz.png", "other flag");

        // A 255-byte stem passes name validation, but stem + ".png" exceeds
        // the filesystem's filename limit, so the rename itself fails.
        let long_name = "a".repeat(255);
        let mapping = CountryMapping::from_entries([
            ("aa".to_string(), long_name),
            ("zz".to_string(), "Zedland".to_string()),
        ]);

        let report = run(dir.path(), &mapping, "png", false).unwrap();

        assert_eq!(report.failed(), 1);
        match &report.outcomes[0].1 {
            EntryOutcome::Failed { from, error, .. } => {
                assert_eq!(from, &dir.path().join("aa.png"));
                assert!(!error.is_empty());
            }
            other => panic!("Expected Failed, got {other:?}"),
        }

        // The failure does not abort the run: the later entry still renamed.
        assert_eq!(report.renamed(), 1);
        assert!(dir.path().join("aa.png").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("Zedland.png")).unwrap(),
            "other flag"
        );
    }

    #[test]
    fn test_run_is_idempotent() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "se.png", "blue and yellow");

        let mapping = CountryMapping::from_entries([("se", "Sweden")]);

        let first = run(dir.path(), &mapping, "png", false).unwrap();
        assert_eq!(first.renamed(), 1);

        // Second run: the source is gone, nothing changes.
        let second = run(dir.path(), &mapping, "png", false).unwrap();
        assert_eq!(second.renamed(), 0);
        assert_eq!(second.missing(), 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("Sweden.png")).unwrap(),
            "blue and yellow"
        );
    }

    #[test]
    fn test_run_dry_run_touches_nothing() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "no.png", "cross");

        let mapping = CountryMapping::from_entries([("no", "Norway")]);
        let report = run(dir.path(), &mapping, "png", true).unwrap();

        assert_eq!(report.renamed(), 1);
        assert!(dir.path().join("no.png").exists());
        assert!(!dir.path().join("Norway.png").exists());
    }

    #[test]
    fn test_run_rejects_invalid_name() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "xx.png", "flag");

        let mapping = CountryMapping::from_entries([("xx", "../escape")]);
        let report = run(dir.path(), &mapping, "png", false).unwrap();

        assert_eq!(report.invalid(), 1);
        assert!(dir.path().join("xx.png").exists());
    }

    #[test]
    fn test_run_code_equals_name_is_conflict() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "us.png", "flag");

        // Destination resolves to the source itself; reported as a conflict,
        // nothing moves.
        let mapping = CountryMapping::from_entries([("us", "us")]);
        let report = run(dir.path(), &mapping, "png", false).unwrap();

        assert_eq!(report.conflicts(), 1);
        assert!(dir.path().join("us.png").exists());
    }

    #[test]
    fn test_run_missing_directory() {
        let dir = TempDir::new().unwrap();
        let mapping = CountryMapping::from_entries([("us", "United States")]);
        let result = run(&dir.path().join("nope"), &mapping, "png", false);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_mixed_outcomes() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "us.png", "a");
        touch(&dir, "fi.png", "b");
        touch(&dir, "Finland.png", "c");

        let mapping = CountryMapping::from_entries([
            ("us", "United States"),
            ("fi", "Finland"),
            ("fr", "France"),
        ]);
        let report = run(dir.path(), &mapping, "png", false).unwrap();

        assert_eq!(report.renamed(), 1);
        assert_eq!(report.conflicts(), 1);
        assert_eq!(report.missing(), 1);

        // Sorted code order: fi, fr, us
        let codes: Vec<_> = report.outcomes.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(codes, vec!["fi", "fr", "us"]);
    }

    #[test]
    fn test_classify_states() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "us.png", "a");
        touch(&dir, "fi.png", "b");
        touch(&dir, "Finland.png", "c");
        touch(&dir, "Sweden.png", "d");

        assert_eq!(
            classify(dir.path(), "us", "United States", "png").unwrap(),
            EntryState::Ready
        );
        assert_eq!(
            classify(dir.path(), "fi", "Finland", "png").unwrap(),
            EntryState::Conflict
        );
        assert_eq!(
            classify(dir.path(), "se", "Sweden", "png").unwrap(),
            EntryState::Done
        );
        assert_eq!(
            classify(dir.path(), "fr", "France", "png").unwrap(),
            EntryState::Absent
        );
        assert!(classify(dir.path(), "xx", "bad/name", "png").is_err());
    }
}
