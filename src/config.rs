//! Path resolution for the catalog, country labels, and schema.
//!
//! Precedence is explicit flag, then environment variable, then the default
//! location under the data root. Only the catalog has a default; labels and
//! schema fall back to the built-in table and the embedded schema.

use crate::labels::CountryLabels;
use crate::{CATALOG_RELATIVE_PATH, find_data_root};
use anyhow::Result;
use std::env;
use tracing::warn;
use std::path::{Path, PathBuf};

pub const CATALOG_ENV: &str = "WINELIST_CATALOG";
pub const LABELS_ENV: &str = "WINELIST_LABELS";
pub const SCHEMA_ENV: &str = "WINELIST_SCHEMA";

/// Values supplied on the command line.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub catalog: Option<PathBuf>,
    pub labels: Option<PathBuf>,
    pub schema: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub labels_path: Option<PathBuf>,
    pub schema_path: Option<PathBuf>,
}

impl Config {
    /// Resolve against the process environment and the discovered data root.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        let catalog_path = match overrides.catalog.or_else(|| env_path(CATALOG_ENV)) {
            Some(path) => path,
            None => default_catalog_path(find_data_root()),
        };
        Ok(Self {
            catalog_path,
            labels_path: overrides.labels.or_else(|| env_path(LABELS_ENV)),
            schema_path: overrides.schema.or_else(|| env_path(SCHEMA_ENV)),
        })
    }

    /// Resolve relative to an explicit data root, ignoring the environment.
    pub fn under_root(root: &Path, overrides: ConfigOverrides) -> Self {
        Self {
            catalog_path: overrides
                .catalog
                .unwrap_or_else(|| root.join(CATALOG_RELATIVE_PATH)),
            labels_path: overrides.labels,
            schema_path: overrides.schema,
        }
    }

    /// Built-in labels, merged with the overrides file when one is configured.
    pub fn country_labels(&self) -> Result<CountryLabels> {
        match &self.labels_path {
            Some(path) => CountryLabels::load_with_overrides(path),
            None => Ok(CountryLabels::builtin()),
        }
    }
}

/// Catalog under the data root. Without one, the path is relative to the
/// working directory and a missing file surfaces later as a logged load
/// failure, the same as any other unreadable catalog.
fn default_catalog_path(root: Result<PathBuf>) -> PathBuf {
    match root {
        Ok(root) => root.join(CATALOG_RELATIVE_PATH),
        Err(err) => {
            warn!(error = %format!("{err:#}"), "no data root found");
            PathBuf::from(CATALOG_RELATIVE_PATH)
        }
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn root_default_and_flag_override() {
        let root = TempDir::new().unwrap();
        let config = Config::under_root(root.path(), ConfigOverrides::default());
        assert_eq!(config.catalog_path, root.path().join("data/wines.json"));
        assert!(config.labels_path.is_none());

        let config = Config::under_root(
            root.path(),
            ConfigOverrides {
                catalog: Some(PathBuf::from("/tmp/other.json")),
                ..ConfigOverrides::default()
            },
        );
        assert_eq!(config.catalog_path, PathBuf::from("/tmp/other.json"));
    }

    #[test]
    fn missing_data_root_still_resolves() {
        let path = default_catalog_path(Err(anyhow::anyhow!("nothing here")));
        assert_eq!(path, PathBuf::from("data/wines.json"));

        let root = TempDir::new().unwrap();
        let path = default_catalog_path(Ok(root.path().to_path_buf()));
        assert_eq!(path, root.path().join("data/wines.json"));
    }

    #[test]
    fn labels_file_merges_over_builtin() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"Uruguay": "Uruguay (UY)"}}"#).unwrap();
        let root = TempDir::new().unwrap();
        let config = Config::under_root(
            root.path(),
            ConfigOverrides {
                labels: Some(file.path().to_path_buf()),
                ..ConfigOverrides::default()
            },
        );
        let labels = config.country_labels().unwrap();
        assert_eq!(
            labels.label(&crate::catalog::Country("Uruguay".into())),
            "Uruguay (UY)"
        );
        assert_eq!(
            labels.label(&crate::catalog::Country("Italia".into())),
            "Italy"
        );
    }

    #[test]
    fn missing_labels_file_is_an_error() {
        let root = TempDir::new().unwrap();
        let config = Config::under_root(
            root.path(),
            ConfigOverrides {
                labels: Some(root.path().join("missing.json")),
                ..ConfigOverrides::default()
            },
        );
        assert!(config.country_labels().is_err());
    }
}
