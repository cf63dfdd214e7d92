use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Stable identifier for one wine entry (the `id` field).
///
/// Cards carry this value so a later selection can resolve back to the full
/// record.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WineId(pub String);

/// Country of origin exactly as written in the catalog (the `pais` field).
///
/// Filtering compares this raw value; translation to a display label happens
/// in `CountryLabels`.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Country(pub String);

impl WineId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Country {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wine list section an entry belongs to.
///
/// The four known buckets map to the page sections; `Other` keeps unknown
/// tags around so they can be excluded from rendering instead of failing the
/// whole catalog.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Category {
    Sparkling,
    White,
    Rose,
    Red,
    Other(String),
}

/// Body descriptor driving the position on the body scale.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Body {
    Light,
    Medium,
    Full,
    Other(String),
}

impl Category {
    /// Known buckets in page order.
    pub fn known() -> [Category; 4] {
        [
            Category::Sparkling,
            Category::White,
            Category::Rose,
            Category::Red,
        ]
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }

    /// Canonical catalog tag, also used as the section id on the page.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Sparkling => "espumosos",
            Category::White => "blancos",
            Category::Rose => "rosados",
            Category::Red => "tintos",
            Category::Other(value) => value.as_str(),
        }
    }

    /// Bilingual section heading.
    pub fn title(&self) -> &str {
        match self {
            Category::Sparkling => "Espumosos / Sparkling",
            Category::White => "Blancos / White",
            Category::Rose => "Rosados / Rosé",
            Category::Red => "Tintos / Red",
            Category::Other(value) => value.as_str(),
        }
    }

    /// Parse a catalog tag or CLI value; Spanish and English tags are both
    /// accepted, case-insensitively.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "espumosos" | "sparkling" => Category::Sparkling,
            "blancos" | "white" => Category::White,
            "rosados" | "rose" | "rosé" => Category::Rose,
            "tintos" | "red" => Category::Red,
            _ => Category::Other(value.to_string()),
        }
    }
}

impl Body {
    pub fn as_str(&self) -> &str {
        match self {
            Body::Light => "ligero",
            Body::Medium => "medio",
            Body::Full => "robusto",
            Body::Other(value) => value.as_str(),
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "ligero" | "light" => Body::Light,
            "medio" | "medium" => Body::Medium,
            "robusto" | "full" => Body::Full,
            _ => Body::Other(value.to_string()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

impl Serialize for Body {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Body {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}
