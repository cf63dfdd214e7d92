//! Country display labels and sub-header rewriting.
//!
//! Catalog authors write countries in Spanish; the page shows a translated
//! label. Unknown countries fall back to the raw value so a missing entry never
//! hides a wine.

use crate::catalog::Country;
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Separator between grape/style and origin inside a sub-header (en dash).
pub const ORIGIN_SEPARATOR: char = '\u{2013}';

const BUILTIN_LABELS: &[(&str, &str)] = &[
    ("Alemania", "Germany"),
    ("Argentina", "Argentina"),
    ("Australia", "Australia"),
    ("Chile", "Chile"),
    ("España", "Spain"),
    ("Estados Unidos", "United States"),
    ("Francia", "France"),
    ("Italia", "Italy"),
    ("Nueva Zelanda", "New Zealand"),
    ("Portugal", "Portugal"),
    ("Sudáfrica", "South Africa"),
];

/// Translation table from catalog country to display label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountryLabels {
    table: BTreeMap<String, String>,
}

impl Default for CountryLabels {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CountryLabels {
    pub fn builtin() -> Self {
        let table = BUILTIN_LABELS
            .iter()
            .map(|(raw, label)| (raw.to_string(), label.to_string()))
            .collect();
        Self { table }
    }

    pub fn empty() -> Self {
        Self {
            table: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, raw: impl Into<String>, label: impl Into<String>) {
        self.table.insert(raw.into(), label.into());
    }

    /// Merge a JSON object of `{"raw": "label"}` pairs over the current table.
    pub fn merge_json(&mut self, data: &str) -> Result<()> {
        let value: Value = serde_json::from_str(data).context("parsing country labels")?;
        let Value::Object(entries) = value else {
            bail!("country labels must be a JSON object of strings");
        };
        for (raw, label) in entries {
            let Some(label) = label.as_str() else {
                bail!("country label for '{raw}' must be a string");
            };
            self.insert(raw, label);
        }
        Ok(())
    }

    /// Built-in table with overrides from `path`.
    pub fn load_with_overrides(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading country labels {}", path.display()))?;
        let mut labels = Self::builtin();
        labels
            .merge_json(&data)
            .with_context(|| format!("loading {}", path.display()))?;
        Ok(labels)
    }

    /// Translated label, or the raw country when no translation exists.
    pub fn label<'a>(&'a self, country: &'a Country) -> &'a str {
        self.table
            .get(country.as_str())
            .map(String::as_str)
            .unwrap_or(country.as_str())
    }
}

/// Replace the origin segment of a sub-header with `label`.
///
/// Everything after the first separator is the origin; without a separator the
/// sub-header is returned verbatim.
pub fn localize_sub_header(sub_header: &str, label: &str) -> String {
    match sub_header.split_once(ORIGIN_SEPARATOR) {
        Some((head, _origin)) => format!("{} {ORIGIN_SEPARATOR} {label}", head.trim_end()),
        None => sub_header.to_string(),
    }
}

/// Origin segment of a sub-header, trimmed, if a separator is present.
pub fn origin_segment(sub_header: &str) -> Option<&str> {
    sub_header
        .split_once(ORIGIN_SEPARATOR)
        .map(|(_, origin)| origin.trim())
}
