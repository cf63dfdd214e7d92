//! Filter control groups derived from the loaded catalog.

use crate::catalog::{CatalogIndex, Category, Country};
use crate::filter::{FilterChange, FilterState, Selector};
use crate::labels::CountryLabels;
use serde::Serialize;

pub const ALL_LABEL: &str = "Todos / All";

#[derive(Clone, Debug, PartialEq, Serialize)]
/// One button: its label, the selector it applies, and whether it is active.
pub struct FilterControl<T> {
    pub label: String,
    pub selector: Selector<T>,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FilterControls {
    pub countries: Vec<FilterControl<Country>>,
    pub categories: Vec<FilterControl<Category>>,
}

impl<T: PartialEq> FilterControl<T> {
    fn new(label: impl Into<String>, selector: Selector<T>, current: &Selector<T>) -> Self {
        let active = &selector == current;
        Self {
            label: label.into(),
            selector,
            active,
        }
    }
}

impl FilterControl<Country> {
    pub fn change(&self) -> FilterChange {
        FilterChange::Country(self.selector.clone())
    }
}

impl FilterControl<Category> {
    pub fn change(&self) -> FilterChange {
        FilterChange::Category(self.selector.clone())
    }
}

impl FilterControls {
    /// "All" first, then one country per distinct catalog value in order of
    /// first appearance; categories are the four known sections.
    pub fn from_catalog(
        catalog: &CatalogIndex,
        labels: &CountryLabels,
        state: &FilterState,
    ) -> Self {
        let mut countries = vec![FilterControl::new(ALL_LABEL, Selector::All, &state.country)];
        countries.extend(catalog.countries().into_iter().map(|country| {
            FilterControl::new(
                labels.label(country),
                Selector::Only(country.clone()),
                &state.country,
            )
        }));

        let mut categories = vec![FilterControl::new(ALL_LABEL, Selector::All, &state.category)];
        categories.extend(Category::known().into_iter().map(|category| {
            FilterControl::new(
                category.title().to_string(),
                Selector::Only(category),
                &state.category,
            )
        }));

        Self {
            countries,
            categories,
        }
    }
}
