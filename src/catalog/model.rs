//! Deserializable representation of `data/wines.json`.
//!
//! The catalog file is a JSON array of wine records. Field names follow the
//! published data contract (`pais`, `subHeader`, `tasting_es`, ...), so the
//! serde renames below are part of the external interface. Use `CatalogIndex`
//! for validation and id lookup; these structs are the raw records.

use crate::catalog::identity::{Body, Category, Country, WineId};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// One wine list entry.
pub struct Wine {
    pub id: WineId,
    pub name: String,
    pub category: Category,
    #[serde(rename = "pais")]
    pub country: Country,
    pub volume: String,
    pub price: Price,
    #[serde(rename = "subHeader")]
    pub sub_header: String,
    pub body: Body,
    pub tasting_es: String,
    pub tasting_en: String,
    pub pairing_es: String,
    pub pairing_en: String,
    #[serde(default)]
    pub image: String,
}

/// Price as authored: either a bare number or a preformatted display string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(amount) => write!(f, "{amount}"),
            Price::Text(text) => f.write_str(text),
        }
    }
}

/// Parse a catalog document without additional validation.
pub fn parse_catalog(data: &str) -> Result<Vec<Wine>> {
    let wines: Vec<Wine> = serde_json::from_str(data).context("parsing wine catalog")?;
    Ok(wines)
}

/// Read and parse a catalog from disk without additional validation.
pub fn load_catalog_from_path(path: &Path) -> Result<Vec<Wine>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    parse_catalog(&data).with_context(|| format!("loading {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> serde_json::Value {
        json!({
            "id": "t1",
            "name": "Marqués de Riscal Reserva",
            "category": "tintos",
            "pais": "España",
            "volume": "75cl",
            "price": 38,
            "subHeader": "Tempranillo – Rioja, España",
            "body": "Robusto",
            "tasting_es": "Fruta madura",
            "tasting_en": "Ripe fruit",
            "pairing_es": "Cordero",
            "pairing_en": "Lamb",
            "image": "img/riscal.png"
        })
    }

    #[test]
    fn parses_contract_field_names() {
        let wine: Wine = serde_json::from_value(record()).unwrap();
        assert_eq!(wine.id, WineId("t1".into()));
        assert_eq!(wine.country, Country("España".into()));
        assert_eq!(wine.category, Category::Red);
        assert_eq!(wine.body, Body::Full);
        assert_eq!(wine.sub_header, "Tempranillo – Rioja, España");
        assert_eq!(wine.price.to_string(), "38");
    }

    #[test]
    fn price_keeps_display_strings_and_image_defaults() {
        let mut value = record();
        value["price"] = json!("38,00 €");
        value.as_object_mut().unwrap().remove("image");
        let wine: Wine = serde_json::from_value(value).unwrap();
        assert_eq!(wine.price, Price::Text("38,00 €".into()));
        assert_eq!(wine.price.to_string(), "38,00 €");
        assert!(wine.image.is_empty());
    }

    #[test]
    fn fractional_prices_render_without_padding() {
        assert_eq!(Price::Amount(24.5).to_string(), "24.5");
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let mut value = record();
        value.as_object_mut().unwrap().remove("pais");
        let data = serde_json::to_string(&vec![value]).unwrap();
        assert!(parse_catalog(&data).is_err());
    }
}
