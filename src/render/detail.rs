//! Detail overlay for a single wine.
//!
//! The overlay is a two-state machine. `Hidden` is the initial state; `Shown`
//! is entered only by selecting a wine that exists and carries the fully
//! computed view model, so callers can assert on it without any markup.

use crate::catalog::{Body, CatalogIndex, Wine, WineId};
use crate::labels::{CountryLabels, localize_sub_header};
use serde::Serialize;
use tracing::debug;

pub const TASTING_HEADING: &str = "NOTAS DE CATA | TASTING NOTES";
pub const PAIRING_HEADING: &str = "MARIDAJE | PAIRING";
pub const BODY_HEADING: &str = "CUERPO | BODY";
pub const BODY_LABELS: [&str; 3] = ["Ligero / Light", "Medio / Medium", "Robusto / Full-Bodied"];

/// Position of the body indicator along the 0–100% scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BodyScale {
    pub percent: u8,
}

impl BodyScale {
    pub fn for_body(body: &Body) -> Self {
        let percent = match body {
            Body::Light => 15,
            Body::Medium => 50,
            Body::Full => 85,
            Body::Other(_) => 50,
        };
        Self { percent }
    }

    /// CSS offset, e.g. `"15%"`.
    pub fn css_left(&self) -> String {
        format!("{}%", self.percent)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BilingualText {
    pub es: String,
    pub en: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DetailView {
    pub id: WineId,
    pub image: String,
    pub name: String,
    pub volume: String,
    pub country_label: String,
    pub sub_header: String,
    pub tasting: BilingualText,
    pub pairing: BilingualText,
    pub body: BodyScale,
}

impl DetailView {
    pub fn for_wine(wine: &Wine, labels: &CountryLabels) -> Self {
        let country_label = labels.label(&wine.country).to_string();
        Self {
            id: wine.id.clone(),
            image: wine.image.clone(),
            name: wine.name.clone(),
            volume: wine.volume.clone(),
            sub_header: localize_sub_header(&wine.sub_header, &country_label),
            country_label,
            tasting: BilingualText {
                es: wine.tasting_es.clone(),
                en: wine.tasting_en.clone(),
            },
            pairing: BilingualText {
                es: wine.pairing_es.clone(),
                en: wine.pairing_en.clone(),
            },
            body: BodyScale::for_body(&wine.body),
        }
    }

    /// The "volume | sub-header" line under the name.
    pub fn volume_line(&self) -> String {
        format!("{} | {}", self.volume, self.sub_header)
    }
}

/// Why the overlay was dismissed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismissal {
    CloseControl,
    HomeControl,
    Background,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Overlay {
    #[default]
    Hidden,
    Shown(Box<DetailView>),
}

impl Overlay {
    pub fn is_shown(&self) -> bool {
        matches!(self, Overlay::Shown(_))
    }

    pub fn detail(&self) -> Option<&DetailView> {
        match self {
            Overlay::Shown(detail) => Some(detail.as_ref()),
            Overlay::Hidden => None,
        }
    }

    /// Page scrolling is suspended exactly while the overlay is shown.
    pub fn scroll_locked(&self) -> bool {
        self.is_shown()
    }

    /// Show the overlay for `id`. Returns false and leaves the state untouched
    /// when the id is not in the catalog.
    pub fn select(&mut self, catalog: &CatalogIndex, id: &WineId, labels: &CountryLabels) -> bool {
        match catalog.wine(id) {
            Some(wine) => {
                *self = Overlay::Shown(Box::new(DetailView::for_wine(wine, labels)));
                true
            }
            None => false,
        }
    }

    /// Hide the overlay. Returns whether it was shown before.
    pub fn dismiss(&mut self, reason: Dismissal) -> bool {
        let was_shown = self.is_shown();
        if was_shown {
            debug!(?reason, "overlay dismissed");
        }
        *self = Overlay::Hidden;
        was_shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Country, Price};

    fn riscal() -> Wine {
        Wine {
            id: WineId("t1".into()),
            name: "Marqués de Riscal".into(),
            category: Category::Red,
            country: Country("España".into()),
            volume: "75cl".into(),
            price: Price::Amount(38.0),
            sub_header: "Tempranillo – Rioja, España".into(),
            body: Body::Full,
            tasting_es: "Fruta madura".into(),
            tasting_en: "Ripe fruit".into(),
            pairing_es: "Cordero".into(),
            pairing_en: "Lamb".into(),
            image: "img/riscal.png".into(),
        }
    }

    #[test]
    fn body_positions() {
        assert_eq!(BodyScale::for_body(&Body::Light).percent, 15);
        assert_eq!(BodyScale::for_body(&Body::Medium).percent, 50);
        assert_eq!(BodyScale::for_body(&Body::Full).percent, 85);
        assert_eq!(BodyScale::for_body(&Body::Other("?".into())).percent, 50);
        assert_eq!(BodyScale::for_body(&Body::Light).css_left(), "15%");
    }

    #[test]
    fn detail_matches_wine_fields() {
        let wine = riscal();
        let detail = DetailView::for_wine(&wine, &CountryLabels::builtin());
        assert_eq!(detail.name, wine.name);
        assert_eq!(detail.volume, wine.volume);
        assert_eq!(detail.tasting.es, wine.tasting_es);
        assert_eq!(detail.tasting.en, wine.tasting_en);
        assert_eq!(detail.pairing.es, wine.pairing_es);
        assert_eq!(detail.pairing.en, wine.pairing_en);
        assert_eq!(detail.country_label, "Spain");
        assert_eq!(detail.sub_header, "Tempranillo – Spain");
        assert_eq!(detail.volume_line(), "75cl | Tempranillo – Spain");
        assert_eq!(detail.body.percent, 85);
    }

    #[test]
    fn overlay_ignores_unknown_ids() {
        let catalog = CatalogIndex::from_wines(vec![riscal()]).unwrap();
        let labels = CountryLabels::builtin();
        let mut overlay = Overlay::default();

        assert!(!overlay.select(&catalog, &WineId("nope".into()), &labels));
        assert_eq!(overlay, Overlay::Hidden);

        assert!(overlay.select(&catalog, &WineId("t1".into()), &labels));
        let shown = overlay.clone();
        assert!(!overlay.select(&catalog, &WineId("nope".into()), &labels));
        assert_eq!(overlay, shown);
        assert!(overlay.scroll_locked());
    }

    #[test]
    fn every_dismissal_hides() {
        let catalog = CatalogIndex::from_wines(vec![riscal()]).unwrap();
        let labels = CountryLabels::builtin();
        for reason in [
            Dismissal::CloseControl,
            Dismissal::HomeControl,
            Dismissal::Background,
        ] {
            let mut overlay = Overlay::default();
            overlay.select(&catalog, &WineId("t1".into()), &labels);
            assert!(overlay.dismiss(reason));
            assert!(!overlay.is_shown());
            assert!(!overlay.scroll_locked());
            assert!(!overlay.dismiss(reason));
        }
    }
}
