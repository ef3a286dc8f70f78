//! Published JSON shape of the catalog.
//!
//! These records are a pure projection of the domain model. Optional fields
//! are written as `null`, not omitted; only an empty `cards` list is left out.

use ptcg_chs_core::{
    Card, CardKind, CardType, Catalog, CollectionAttr, EnergyAttr, Label, Mechanic, PSet,
    PokemonAttr, Series,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetRecord {
    pub name: String,
    pub symbol: String,
    pub release_date: Option<String>,
    pub series: Series,
    pub main_expansion: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cards: Vec<CardRecord>,
    pub cards_num: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    pub text: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub mechanic: Option<Mechanic>,
    pub label: Option<Label>,
    pub pokemon_attr: Option<PokemonAttr>,
    pub collection_attr: CollectionRecord,
    pub energy_attr: Option<EnergyAttr>,
    pub regulation_mark: Option<String>,
    pub effect_id: String,
}

/// `collection_attr` as published.
pub type CollectionRecord = CollectionAttr;

impl From<&Card> for CardRecord {
    fn from(card: &Card) -> Self {
        let (pokemon_attr, energy_attr) = match &card.kind {
            CardKind::Pokemon(attr) => (Some(attr.clone()), None),
            CardKind::BasicEnergy(attr) => (None, Some(*attr)),
            CardKind::Trainer(_) | CardKind::SpecialEnergy => (None, None),
        };
        Self {
            name: card.name.clone(),
            text: card.text.clone(),
            card_type: card.card_type(),
            mechanic: card.mechanic,
            label: card.label,
            pokemon_attr,
            collection_attr: card.collection.clone(),
            energy_attr,
            regulation_mark: card.regulation_mark.clone(),
            effect_id: card.effect_id().to_string(),
        }
    }
}

impl From<&PSet> for SetRecord {
    fn from(set: &PSet) -> Self {
        Self {
            name: set.name.clone(),
            symbol: set.symbol.clone(),
            release_date: set.release_date.clone(),
            series: set.series,
            main_expansion: set.is_main_expansion(),
            cards: set.cards.iter().map(CardRecord::from).collect(),
            cards_num: set.cards_num(),
        }
    }
}

/// Project a catalog into records, in catalog order.
pub fn catalog_records(catalog: &Catalog) -> Vec<SetRecord> {
    catalog.sets().map(SetRecord::from).collect()
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
