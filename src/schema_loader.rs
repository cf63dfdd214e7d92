//! JSON Schema loading for the wine catalog.
//!
//! The default schema ships inside the binary; callers can point at another
//! schema file to validate catalogs with extra house rules. Either way the
//! schema is compiled once and reused for every document validated with it.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::path::Path;

/// Schema bundled with the crate (`schema/wine_catalog.schema.json`).
pub const EMBEDDED_CATALOG_SCHEMA: &str = include_str!("../schema/wine_catalog.schema.json");

/// Compiled validator plus where it came from, for error messages.
pub struct CatalogSchema {
    origin: String,
    compiled: JSONSchema,
}

impl CatalogSchema {
    /// Compile the bundled schema.
    pub fn embedded() -> Result<Self> {
        let raw: Value =
            serde_json::from_str(EMBEDDED_CATALOG_SCHEMA).context("parsing embedded schema")?;
        Self::compile(raw, "embedded catalog schema".to_string())
    }

    /// Read and compile a schema file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw: Value = serde_json::from_reader(
            File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
        )
        .with_context(|| format!("parsing schema {}", path.display()))?;
        Self::compile(raw, path.display().to_string())
    }

    /// Use `path` when given, otherwise the bundled schema.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    fn compile(raw: Value, origin: String) -> Result<Self> {
        if !raw.is_object() {
            bail!("schema {origin} must be a JSON object");
        }
        let compiled = JSONSchema::compile(&raw)
            .map_err(|err| anyhow!("compiling schema {origin}: {err}"))?;
        Ok(Self { origin, compiled })
    }

    /// Validate a parsed catalog document, joining every violation into one
    /// error so authors can fix the file in a single pass.
    pub fn validate(&self, document: &Value, source: &str) -> Result<()> {
        if let Err(errors) = self.compiled.validate(document) {
            let details = errors
                .map(|err| err.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            bail!(
                "wine catalog {source} failed validation against {}:\n{details}",
                self.origin
            );
        }
        Ok(())
    }
}
