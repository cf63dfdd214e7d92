//! Summary cards grouped into the four wine list sections.

use crate::catalog::{Category, Wine, WineId};
use crate::labels::CountryLabels;
use crate::render::View;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
/// What a card shows; `id` binds it back to the full record.
pub struct Card {
    pub id: WineId,
    pub image: String,
    pub name: String,
    pub volume: String,
    pub country_label: String,
    pub price: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CardGroup {
    pub category: Category,
    pub cards: Vec<Card>,
}

impl Card {
    pub fn for_wine(wine: &Wine, labels: &CountryLabels) -> Self {
        Self {
            id: wine.id.clone(),
            image: wine.image.clone(),
            name: wine.name.clone(),
            volume: wine.volume.clone(),
            country_label: labels.label(&wine.country).to_string(),
            price: wine.price.to_string(),
        }
    }
}

/// One group per known section, in page order. Wines in unknown categories
/// are dropped.
pub fn card_groups(visible: &[&Wine], labels: &CountryLabels) -> Vec<CardGroup> {
    Category::known()
        .into_iter()
        .map(|category| {
            let cards = visible
                .iter()
                .filter(|wine| wine.category == category)
                .map(|wine| Card::for_wine(wine, labels))
                .collect();
            CardGroup { category, cards }
        })
        .collect()
}

/// Redraw every section: clear it, then append its cards in order.
pub fn render_cards<V: View + ?Sized>(view: &mut V, groups: &[CardGroup]) {
    for group in groups {
        view.clear_group(&group.category);
        for card in &group.cards {
            view.append_card(&group.category, card);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Body, Country, Price};

    fn wine(id: &str, category: Category, country: &str) -> Wine {
        Wine {
            id: WineId(id.into()),
            name: format!("Wine {id}"),
            category,
            country: Country(country.into()),
            volume: "75cl".into(),
            price: Price::Text("32 €".into()),
            sub_header: String::new(),
            body: Body::Light,
            tasting_es: String::new(),
            tasting_en: String::new(),
            pairing_es: String::new(),
            pairing_en: String::new(),
            image: format!("img/{id}.png"),
        }
    }

    #[test]
    fn groups_follow_page_order_and_keep_filter_order() {
        let catalog = [
            wine("r2", Category::Red, "Chile"),
            wine("s1", Category::Sparkling, "Francia"),
            wine("r1", Category::Red, "Uruguay"),
        ];
        let visible: Vec<&Wine> = catalog.iter().collect();
        let groups = card_groups(&visible, &CountryLabels::builtin());

        let order: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(order, ["espumosos", "blancos", "rosados", "tintos"]);
        assert!(groups[1].cards.is_empty());

        let reds: Vec<&str> = groups[3].cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(reds, ["r2", "r1"]);
        assert_eq!(groups[0].cards[0].country_label, "France");
        assert_eq!(groups[3].cards[1].country_label, "Uruguay");
        assert_eq!(groups[0].cards[0].price, "32 €");
        assert_eq!(groups[0].cards[0].image, "img/s1.png");
    }

    #[test]
    fn unknown_categories_never_render() {
        let catalog = [
            wine("g1", Category::Other("generosos".into()), "España"),
            wine("w1", Category::White, "España"),
        ];
        let visible: Vec<&Wine> = catalog.iter().collect();
        let groups = card_groups(&visible, &CountryLabels::builtin());
        let total: usize = groups.iter().map(|g| g.cards.len()).sum();
        assert_eq!(total, 1);
        assert!(groups.iter().all(|g| g.cards.iter().all(|c| c.id.as_str() != "g1")));
    }
}
