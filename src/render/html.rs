//! Static HTML rendition of the wine list.
//!
//! `HtmlView` applies render instructions to in-memory markup fragments: one
//! grid per section, the overlay, and the page chrome flags. `page` stitches
//! them into a self-contained document.

use crate::catalog::{Category, Country};
use crate::filter::{FilterState, Selector};
use crate::render::controls::{FilterControl, FilterControls};
use crate::render::detail::{BODY_HEADING, BODY_LABELS, PAIRING_HEADING, TASTING_HEADING};
use crate::render::{Card, DetailView, View};
use std::fmt::Write;

const PAGE_TITLE: &str = "Carta de Vinos | Wine List";

#[derive(Debug, Default)]
pub struct HtmlView {
    sections: Vec<(Category, Vec<String>)>,
    overlay: Option<String>,
    scroll_locked: bool,
    logo_hidden: bool,
    active: FilterState,
}

impl HtmlView {
    pub fn new() -> Self {
        let sections = Category::known()
            .into_iter()
            .map(|category| (category, Vec::new()))
            .collect();
        Self {
            sections,
            ..Self::default()
        }
    }

    /// Card fragments currently in `category`'s grid.
    pub fn section(&self, category: &Category) -> &[String] {
        self.sections
            .iter()
            .find(|(section, _)| section == category)
            .map(|(_, cards)| cards.as_slice())
            .unwrap_or(&[])
    }

    pub fn overlay(&self) -> Option<&str> {
        self.overlay.as_deref()
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn logo_hidden(&self) -> bool {
        self.logo_hidden
    }

    pub fn active_filters(&self) -> &FilterState {
        &self.active
    }

    /// Full document with filter buttons, the four sections, and the overlay.
    ///
    /// `controls` supplies the buttons; which of them is marked active follows
    /// the last `set_active_filters` instruction.
    pub fn page(&self, controls: &FilterControls) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(out, "<title>{}</title>", escape(PAGE_TITLE));
        out.push_str("</head>\n");
        let overflow = if self.scroll_locked { "hidden" } else { "auto" };
        let _ = writeln!(out, "<body id=\"top\" style=\"overflow: {overflow};\">");

        let logo_class = if self.logo_hidden {
            "hotel-logo-text hidden"
        } else {
            "hotel-logo-text"
        };
        let _ = writeln!(out, "<header><div class=\"{logo_class}\">{}</div></header>", escape(PAGE_TITLE));

        out.push_str("<nav class=\"filters country-filters\">\n");
        for control in &controls.countries {
            out.push_str(&country_button(control, &self.active.country));
        }
        out.push_str("</nav>\n<nav class=\"filters category-filters\">\n");
        for control in &controls.categories {
            out.push_str(&category_button(control, &self.active.category));
        }
        out.push_str("</nav>\n<main>\n");

        for (category, cards) in &self.sections {
            let _ = writeln!(
                out,
                "<section id=\"{}\"><h2>{}</h2><div class=\"wine-grid\">",
                escape(category.as_str()),
                escape(category.title())
            );
            for card in cards {
                out.push_str(card);
            }
            out.push_str("</div></section>\n");
        }
        out.push_str("</main>\n");

        let display = if self.overlay.is_some() { "block" } else { "none" };
        let _ = write!(out, "<div id=\"wineModal\" class=\"modal\" style=\"display: {display};\">");
        if let Some(overlay) = &self.overlay {
            out.push_str(overlay);
        }
        out.push_str("</div>\n</body>\n</html>\n");
        out
    }
}

impl View for HtmlView {
    fn clear_group(&mut self, category: &Category) {
        match self.sections.iter_mut().find(|(section, _)| section == category) {
            Some((_, cards)) => cards.clear(),
            None => self.sections.push((category.clone(), Vec::new())),
        }
    }

    fn append_card(&mut self, category: &Category, card: &Card) {
        let markup = card_markup(card);
        match self.sections.iter_mut().find(|(section, _)| section == category) {
            Some((_, cards)) => cards.push(markup),
            None => self.sections.push((category.clone(), vec![markup])),
        }
    }

    fn show_detail(&mut self, detail: &DetailView) {
        self.overlay = Some(detail_markup(detail));
    }

    fn hide_detail(&mut self) {
        self.overlay = None;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn set_logo_hidden(&mut self, hidden: bool) {
        self.logo_hidden = hidden;
    }

    fn set_active_filters(&mut self, filters: &FilterState) {
        self.active = filters.clone();
    }
}

fn card_markup(card: &Card) -> String {
    format!(
        "<div class=\"wine-card\" data-wine-id=\"{id}\">\
<div class=\"img-container\"><img src=\"{image}\" alt=\"{name}\"></div>\
<div><h3>{name}</h3><span class=\"volume\">{volume}</span>\
<p class=\"origin\">{origin}</p><p class=\"price\">{price}</p></div></div>\n",
        id = escape(card.id.as_str()),
        image = escape(&card.image),
        name = escape(&card.name),
        volume = escape(&card.volume),
        origin = escape(&card.country_label),
        price = escape(&card.price),
    )
}

fn detail_markup(detail: &DetailView) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"modal-content\">");
    out.push_str("<span class=\"close-button\" data-action=\"close\">&times;</span>");
    out.push_str("<a href=\"#top\" class=\"home-button\" data-action=\"home\">&#8962;</a>");
    let _ = write!(
        out,
        "<div class=\"modal-image\"><img src=\"{}\" alt=\"{}\"></div>",
        escape(&detail.image),
        escape(&detail.name)
    );
    out.push_str("<div class=\"modal-info\">");
    let _ = write!(out, "<h2>{}</h2>", escape(&detail.name));
    let _ = write!(
        out,
        "<p class=\"wine-sub-header\">{}</p>",
        escape(&detail.volume_line())
    );
    let _ = write!(out, "<h3>{}</h3>", escape(TASTING_HEADING));
    out.push_str(&lang_block("ES", &detail.tasting.es));
    out.push_str(&lang_block("EN", &detail.tasting.en));
    let _ = write!(out, "<h3>{}</h3>", escape(PAIRING_HEADING));
    out.push_str(&lang_block("ES", &detail.pairing.es));
    out.push_str(&lang_block("EN", &detail.pairing.en));
    let _ = write!(out, "<h3>{}</h3>", escape(BODY_HEADING));
    let _ = write!(
        out,
        "<div class=\"body-scale\"><div class=\"body-indicator\" style=\"left: {};\"></div></div>",
        detail.body.css_left()
    );
    out.push_str("<div class=\"body-labels\">");
    for label in BODY_LABELS {
        let _ = write!(out, "<span>{}</span>", escape(label));
    }
    out.push_str("</div></div></div>");
    out
}

fn lang_block(tag: &str, text: &str) -> String {
    format!(
        "<div class=\"lang-block\"><span class=\"lang-tag\">{tag}</span><p>{}</p></div>",
        escape(text)
    )
}

// "All" buttons carry `data-filter-all` instead of a sentinel value so a
// country literally named "all" stays selectable.
fn country_button(control: &FilterControl<Country>, current: &Selector<Country>) -> String {
    let attribute = match &control.selector {
        Selector::All => "data-filter-all".to_string(),
        Selector::Only(country) => format!("data-country=\"{}\"", escape(country.as_str())),
    };
    button(&control.label, &attribute, &control.selector == current)
}

fn category_button(control: &FilterControl<Category>, current: &Selector<Category>) -> String {
    let attribute = match &control.selector {
        Selector::All => "data-filter-all".to_string(),
        Selector::Only(category) => format!("data-category=\"{}\"", escape(category.as_str())),
    };
    button(&control.label, &attribute, &control.selector == current)
}

fn button(label: &str, attribute: &str, active: bool) -> String {
    let class = if active { "filter-btn active" } else { "filter-btn" };
    format!(
        "<button class=\"{class}\" {attribute}>{}</button>\n",
        escape(label)
    )
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
