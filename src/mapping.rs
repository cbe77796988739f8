//! Country code to name mapping, loaded from a JSON file.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Default mapping filename, looked up next to the images.
pub const DEFAULT_MAPPING_FILE: &str = "countries.json";

/// Flat `code -> name` mapping.
///
/// Backed by a `BTreeMap` so entries are processed in sorted code order,
/// independent of the key order in the JSON file.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct CountryMapping(BTreeMap<String, String>);

impl CountryMapping {
    /// Load the mapping from a JSON file.
    ///
    /// The file must contain a non-empty JSON object whose values are all
    /// strings. Anything else is a fatal error: without a usable mapping
    /// there is nothing to run.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read mapping file {}", path.display()))?;

        let mapping: CountryMapping = serde_json::from_str(&content).with_context(|| {
            format!(
                "Mapping file {} is not a JSON object of strings",
                path.display()
            )
        })?;

        if mapping.0.is_empty() {
            bail!("Mapping file {} contains no entries", path.display());
        }

        Ok(mapping)
    }

    /// Build a mapping from `(code, name)` pairs.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(|(code, name)| (code.into(), name.into()))
                .collect(),
        )
    }

    /// Iterate entries in sorted code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(code, name)| (code.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
