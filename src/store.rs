//! Catalog store: the loaded catalog plus the active filter selection.
//!
//! The catalog is installed at most once per session. A failed load still
//! counts as the one load; the store then serves an empty catalog.

use crate::catalog::{CatalogIndex, Wine, WineId};
use crate::filter::{FilterChange, FilterState};
use anyhow::Result;
use tracing::{error, info, warn};

#[derive(Debug, Default)]
pub struct CatalogStore {
    catalog: CatalogIndex,
    filters: FilterState,
    loaded: bool,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the outcome of the one-shot load.
    ///
    /// Errors are logged and leave the catalog empty. Returns false when a
    /// catalog had already been installed; the second outcome is dropped.
    pub fn install(&mut self, outcome: Result<CatalogIndex>, source: &str) -> bool {
        if self.loaded {
            warn!(source, "catalog already loaded; ignoring second load");
            return false;
        }
        self.loaded = true;
        match outcome {
            Ok(catalog) => {
                info!(source, wines = catalog.len(), "wine catalog loaded");
                self.catalog = catalog;
            }
            Err(err) => {
                error!(source, error = %format!("{err:#}"), "failed to load wine catalog");
                self.catalog = CatalogIndex::empty();
            }
        }
        true
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    pub fn wines(&self) -> &[Wine] {
        self.catalog.wines()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn apply(&mut self, change: FilterChange) {
        self.filters.apply_change(change);
    }

    pub fn find(&self, id: &WineId) -> Option<&Wine> {
        self.catalog.wine(id)
    }

    /// Visible subset under the current filters.
    pub fn visible(&self) -> Vec<&Wine> {
        self.filters.visible(self.catalog.wines())
    }
}
