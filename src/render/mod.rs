//! View models and the instructions sent to a view.
//!
//! Everything in this module is a pure mapping from catalog state to view
//! models (`CardGroup`, `DetailView`, `FilterControls`). The `View` trait is the
//! seam to whatever draws them; `html::HtmlView` is the bundled implementation.

pub mod cards;
pub mod controls;
pub mod detail;
pub mod html;

pub use cards::{Card, CardGroup, card_groups, render_cards};
pub use controls::{FilterControl, FilterControls};
pub use detail::{BilingualText, BodyScale, DetailView, Dismissal, Overlay};
pub use html::HtmlView;

use crate::catalog::Category;
use crate::filter::FilterState;

/// Receiver of render instructions.
///
/// Containers are addressed by category; the overlay is replaced wholesale on
/// every `show_detail`.
pub trait View {
    fn clear_group(&mut self, category: &Category);
    fn append_card(&mut self, category: &Category, card: &Card);
    fn show_detail(&mut self, detail: &DetailView);
    fn hide_detail(&mut self);
    fn set_scroll_locked(&mut self, locked: bool);
    fn set_logo_hidden(&mut self, hidden: bool);
    fn set_active_filters(&mut self, filters: &FilterState);
}
