//! Wine catalog wiring.
//!
//! This module wraps the JSON catalog under `data/wines.json` so the rest of
//! the crate works with a validated, read-only snapshot. Types here mirror the
//! catalog fields; callers use `CatalogIndex` for ordered access and id lookup
//! and a `CatalogSource` to obtain one.

pub mod identity;
pub mod index;
pub mod model;
pub mod source;

pub use identity::{Body, Category, Country, WineId};
pub use index::CatalogIndex;
pub use model::{Price, Wine, parse_catalog};
pub use source::{CatalogSource, FileSource, InlineSource};

pub use model::load_catalog_from_path;
