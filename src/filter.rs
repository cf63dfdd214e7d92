//! Two-axis filtering of the catalog.
//!
//! Country and category selectors are independent and conjunctive. The visible
//! subset is recomputed from scratch on every call and always keeps catalog
//! order, so the same inputs give the same sequence.

use crate::catalog::{Category, Country, Wine};
use serde::Serialize;

/// One filter axis: either no restriction or a single required value.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }
}

impl<T> From<Option<T>> for Selector<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Selector::Only(value),
            None => Selector::All,
        }
    }
}

/// Current country and category selection. Starts as all/all.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FilterState {
    pub country: Selector<Country>,
    pub category: Selector<Category>,
}

/// A single filter control activation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FilterChange {
    Country(Selector<Country>),
    Category(Selector<Category>),
}

impl FilterState {
    pub fn new(country: Selector<Country>, category: Selector<Category>) -> Self {
        Self { country, category }
    }

    pub fn apply_change(&mut self, change: FilterChange) {
        match change {
            FilterChange::Country(selector) => self.country = selector,
            FilterChange::Category(selector) => self.category = selector,
        }
    }

    pub fn visible<'a>(&self, catalog: &'a [Wine]) -> Vec<&'a Wine> {
        visible_items(catalog, &self.country, &self.category)
    }
}

/// Wines passing both selectors, in catalog order.
pub fn visible_items<'a>(
    catalog: &'a [Wine],
    country: &Selector<Country>,
    category: &Selector<Category>,
) -> Vec<&'a Wine> {
    catalog
        .iter()
        .filter(|wine| country.matches(&wine.country))
        .filter(|wine| category.matches(&wine.category))
        .collect()
}
