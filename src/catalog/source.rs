//! Data providers that hand a catalog to the session.

use crate::catalog::CatalogIndex;
use crate::schema_loader::CatalogSchema;
use anyhow::Result;
use std::path::PathBuf;

/// Delivers the catalog once at startup.
pub trait CatalogSource {
    /// Human-readable origin used in log lines.
    fn describe(&self) -> String;

    fn load(&self) -> Result<CatalogIndex>;
}

/// Reads `wines.json` from disk and validates it.
#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
    pub schema_path: Option<PathBuf>,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            schema_path: None,
        }
    }

    pub fn with_schema(mut self, schema_path: Option<PathBuf>) -> Self {
        self.schema_path = schema_path;
        self
    }
}

impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<CatalogIndex> {
        let schema = CatalogSchema::load(self.schema_path.as_deref())?;
        CatalogIndex::load(&self.path, &schema)
    }
}

/// Catalog document held in memory.
#[derive(Debug, Clone)]
pub struct InlineSource {
    pub document: String,
}

impl CatalogSource for InlineSource {
    fn describe(&self) -> String {
        "inline catalog".to_string()
    }

    fn load(&self) -> Result<CatalogIndex> {
        let schema = CatalogSchema::embedded()?;
        CatalogIndex::from_json(&self.document, &schema, &self.describe())
    }
}
