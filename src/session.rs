//! Event handling for one browsing session.
//!
//! A `Session` owns every piece of mutable state (store, overlay, chrome) and
//! turns user events into view instructions. Each event is handled to
//! completion before the next one; `&mut self` makes overlapping handlers
//! impossible. Nothing is drawn until the catalog load has completed, whether
//! it succeeded or not.

use crate::catalog::{CatalogSource, WineId};
use crate::filter::FilterChange;
use crate::labels::CountryLabels;
use crate::render::{
    CardGroup, Dismissal, FilterControls, Overlay, View, card_groups, render_cards,
};
use crate::store::CatalogStore;
use tracing::debug;

/// Scroll offset (px) past which the logo collapses.
pub const LOGO_HIDE_OFFSET: f64 = 100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChromeState {
    pub logo_hidden: bool,
}

impl ChromeState {
    pub fn for_scroll(offset: f64) -> Self {
        Self {
            logo_hidden: offset > LOGO_HIDE_OFFSET,
        }
    }
}

/// Where a pointer press landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// The dimmed overlay area around the detail content.
    OverlayBackground,
    OverlayContent,
    Page,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    FilterSelected(FilterChange),
    CardSelected(WineId),
    CloseRequested,
    HomeSelected,
    PointerPressed(PointerTarget),
    Scrolled(f64),
}

#[derive(Debug, Default)]
pub struct Session {
    store: CatalogStore,
    overlay: Overlay,
    chrome: ChromeState,
    labels: CountryLabels,
}

impl Session {
    pub fn new(labels: CountryLabels) -> Self {
        Self {
            labels,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn chrome(&self) -> ChromeState {
        self.chrome
    }

    pub fn labels(&self) -> &CountryLabels {
        &self.labels
    }

    /// Run the one-shot catalog load and draw the first frame.
    pub fn load<V: View + ?Sized>(&mut self, source: &dyn CatalogSource, view: &mut V) {
        let origin = source.describe();
        if self.store.is_loaded() {
            debug!(source = %origin, "catalog already loaded; skipping");
            return;
        }
        let outcome = source.load();
        if self.store.install(outcome, &origin) {
            self.redraw(view);
        }
    }

    pub fn handle<V: View + ?Sized>(&mut self, event: Event, view: &mut V) {
        match event {
            Event::FilterSelected(change) => {
                self.store.apply(change);
                if self.store.is_loaded() {
                    self.redraw(view);
                } else {
                    debug!("filter selected before catalog load; deferring render");
                }
            }
            Event::CardSelected(id) => self.select(&id, view),
            Event::CloseRequested => self.dismiss(Dismissal::CloseControl, view),
            Event::HomeSelected => self.dismiss(Dismissal::HomeControl, view),
            Event::PointerPressed(PointerTarget::OverlayBackground) => {
                self.dismiss(Dismissal::Background, view)
            }
            Event::PointerPressed(_) => {}
            Event::Scrolled(offset) => {
                let chrome = ChromeState::for_scroll(offset);
                if chrome != self.chrome {
                    self.chrome = chrome;
                    view.set_logo_hidden(chrome.logo_hidden);
                }
            }
        }
    }

    /// Card groups for the current filter state.
    pub fn groups(&self) -> Vec<CardGroup> {
        card_groups(&self.store.visible(), &self.labels)
    }

    pub fn controls(&self) -> FilterControls {
        FilterControls::from_catalog(self.store.catalog(), &self.labels, self.store.filters())
    }

    fn redraw<V: View + ?Sized>(&self, view: &mut V) {
        render_cards(view, &self.groups());
        view.set_active_filters(self.store.filters());
    }

    fn select<V: View + ?Sized>(&mut self, id: &WineId, view: &mut V) {
        if !self.store.is_loaded() {
            debug!(%id, "card selected before catalog load; ignoring");
            return;
        }
        if !self.overlay.select(self.store.catalog(), id, &self.labels) {
            debug!(%id, "ignoring selection of unknown wine");
            return;
        }
        if let Some(detail) = self.overlay.detail() {
            view.show_detail(detail);
            view.set_scroll_locked(true);
        }
    }

    fn dismiss<V: View + ?Sized>(&mut self, reason: Dismissal, view: &mut V) {
        if self.overlay.dismiss(reason) {
            view.hide_detail();
            view.set_scroll_locked(false);
        }
    }
}
