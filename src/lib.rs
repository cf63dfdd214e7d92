//! Shared library for the wine list catalog.
//!
//! The crate loads a static wine catalog, filters it along two independent
//! axes (country and category), and maps the result to view models: summary
//! cards grouped by section and a detail overlay per wine. Rendering goes
//! through the `View` trait; `HtmlView` is the bundled implementation used by
//! the `winelist` binary.

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod catalog;
pub mod config;
pub mod filter;
pub mod labels;
pub mod logging;
pub mod render;
pub mod schema_loader;
pub mod session;
pub mod store;

pub use catalog::{
    Body, CatalogIndex, CatalogSource, Category, Country, FileSource, InlineSource, Price, Wine,
    WineId, load_catalog_from_path,
};
pub use config::{Config, ConfigOverrides};
pub use filter::{FilterChange, FilterState, Selector, visible_items};
pub use labels::CountryLabels;
pub use render::{
    Card, CardGroup, DetailView, FilterControls, HtmlView, Overlay, View, card_groups,
    render_cards,
};
pub use session::{ChromeState, Event, PointerTarget, Session};
pub use store::CatalogStore;

/// Catalog location relative to the data root.
pub const CATALOG_RELATIVE_PATH: &str = "data/wines.json";

/// Environment variable naming a directory that contains `data/wines.json`.
pub const ROOT_ENV: &str = "WINELIST_ROOT";

fn catalog_under(dir: &Path) -> bool {
    dir.join(CATALOG_RELATIVE_PATH).is_file()
}

/// A configured root counts only when the catalog is actually there.
fn root_with_catalog(raw: &str) -> Option<PathBuf> {
    let dir = Path::new(raw);
    if raw.is_empty() || !catalog_under(dir) {
        return None;
    }
    fs::canonicalize(dir).ok()
}

/// Nearest ancestor of `start` (itself included) that holds the catalog.
fn nearest_catalog_ancestor(start: &Path) -> Option<PathBuf> {
    let start = fs::canonicalize(start).ok()?;
    start
        .ancestors()
        .find(|dir| catalog_under(dir))
        .map(Path::to_path_buf)
}

/// Locate the directory that holds `data/wines.json`.
///
/// Tried in turn: `WINELIST_ROOT`, the ancestors of the running executable
/// (so `target/debug/winelist` finds the checkout), and the manifest
/// directory recorded at build time.
pub fn find_data_root() -> Result<PathBuf> {
    let from_env = env::var(ROOT_ENV)
        .ok()
        .and_then(|raw| root_with_catalog(&raw));
    let from_exe = || {
        env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().and_then(nearest_catalog_ancestor))
    };
    let from_build = || option_env!("WINELIST_ROOT_HINT").and_then(root_with_catalog);

    match from_env.or_else(from_exe).or_else(from_build) {
        Some(root) => Ok(root),
        None => bail!("no {CATALOG_RELATIVE_PATH} found; set {ROOT_ENV} or pass --catalog"),
    }
}
