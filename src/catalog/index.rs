//! Indexed view of a loaded wine catalog.
//!
//! The index validates the document against the catalog schema, rejects
//! duplicate or blank ids, and keeps the wines in their authored order next to
//! an id lookup table. Once built it is never mutated.

use crate::catalog::model::{Wine, parse_catalog};
use crate::catalog::{Country, WineId};
use crate::schema_loader::CatalogSchema;
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
/// Wines in catalog order plus a derived index keyed by id.
pub struct CatalogIndex {
    wines: Vec<Wine>,
    by_id: BTreeMap<WineId, usize>,
}

impl CatalogIndex {
    /// An index with no wines; what the store holds before or after a failed load.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load and validate a catalog file.
    pub fn load(path: &Path, schema: &CatalogSchema) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        Self::from_json(&data, schema, &path.display().to_string())
    }

    /// Validate and index a catalog document already held in memory.
    pub fn from_json(data: &str, schema: &CatalogSchema, source: &str) -> Result<Self> {
        let document: Value =
            serde_json::from_str(data).with_context(|| format!("parsing catalog {source}"))?;
        schema.validate(&document, source)?;
        let wines = parse_catalog(data).with_context(|| format!("loading {source}"))?;
        Self::from_wines(wines)
    }

    /// Index wines that were produced elsewhere (tests, fixtures).
    pub fn from_wines(wines: Vec<Wine>) -> Result<Self> {
        let by_id = build_index(&wines)?;
        Ok(Self { wines, by_id })
    }

    /// All wines in authored order.
    pub fn wines(&self) -> &[Wine] {
        &self.wines
    }

    /// Resolve a wine by id.
    ///
    /// Returns `None` instead of erroring; an unknown selection is not a
    /// failure for the caller.
    pub fn wine(&self, id: &WineId) -> Option<&Wine> {
        self.by_id.get(id).map(|&position| &self.wines[position])
    }

    pub fn len(&self) -> usize {
        self.wines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wines.is_empty()
    }

    /// Distinct countries in order of first appearance.
    pub fn countries(&self) -> Vec<&Country> {
        let mut seen: Vec<&Country> = Vec::new();
        for wine in &self.wines {
            if !seen.contains(&&wine.country) {
                seen.push(&wine.country);
            }
        }
        seen
    }
}

fn build_index(wines: &[Wine]) -> Result<BTreeMap<WineId, usize>> {
    let mut map = BTreeMap::new();
    for (position, wine) in wines.iter().enumerate() {
        if wine.id.0.trim().is_empty() {
            bail!("encountered wine '{}' with no id", wine.name);
        }
        if map.insert(wine.id.clone(), position).is_some() {
            bail!("duplicate wine id {}", wine.id);
        }
    }
    Ok(map)
}
