//! Normalized cards and their kind-specific payloads.

use serde::{Deserialize, Serialize};

use crate::effect::effect_fingerprint;
use crate::enums::{CardType, Energy, Label, Mechanic, Rarity, Series, Stage, TrainerType};

// ── Pokémon payload ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weakness {
    pub weakness_type: Energy,
    /// Damage formula as printed, e.g. "×2".
    pub weakness_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resistance {
    pub resistance_type: Energy,
    pub resistance_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    pub text: String,
    /// Energy cost in printed order.
    pub cost: Vec<Energy>,
    /// Free-form damage, e.g. "30", "60+", "20×".
    pub damage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonAttr {
    pub energy_type: Energy,
    pub stage: Stage,
    pub hp: u32,
    pub abilities: Vec<Ability>,
    pub weakness: Option<Weakness>,
    pub resistance: Option<Resistance>,
    pub retreat_cost: u32,
    pub pokedex: Option<String>,
    pub attacks: Vec<Attack>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyAttr {
    pub energy: Energy,
}

// ── Kind ────────────────────────────────────────────────────────────────────

/// What a card is, together with the data only that kind of card has.
///
/// Pokémon carry a [`PokemonAttr`] and basic energy an [`EnergyAttr`]; no
/// other kind can hold either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardKind {
    Pokemon(PokemonAttr),
    Trainer(TrainerType),
    BasicEnergy(EnergyAttr),
    SpecialEnergy,
}

impl CardKind {
    pub fn card_type(&self) -> CardType {
        match self {
            Self::Pokemon(_) => CardType::Pokemon,
            Self::Trainer(t) => t.card_type(),
            Self::BasicEnergy(_) => CardType::BasicEnergy,
            Self::SpecialEnergy => CardType::SpecialEnergy,
        }
    }

    pub fn pokemon(&self) -> Option<&PokemonAttr> {
        match self {
            Self::Pokemon(attr) => Some(attr),
            _ => None,
        }
    }

    pub fn pokemon_mut(&mut self) -> Option<&mut PokemonAttr> {
        match self {
            Self::Pokemon(attr) => Some(attr),
            _ => None,
        }
    }

    pub fn energy(&self) -> Option<&EnergyAttr> {
        match self {
            Self::BasicEnergy(attr) => Some(attr),
            _ => None,
        }
    }
}

// ── Collection ──────────────────────────────────────────────────────────────

/// Where a print is filed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionAttr {
    pub series: Series,
    /// Symbol the card is currently filed under; reconciliation rewrites it.
    pub set_symbol: String,
    /// Number within the set. `None` for unnumbered promos until a synthetic
    /// number is assigned.
    pub card_no: Option<String>,
    /// Sub-collection token (the printed set total, or a promo marker).
    pub set_collect_num: Option<String>,
    pub artist_name: Option<String>,
    pub rarity: Rarity,
}

// ── Card ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub text: String,
    pub kind: CardKind,
    pub mechanic: Option<Mechanic>,
    pub label: Option<Label>,
    pub collection: CollectionAttr,
    pub regulation_mark: Option<String>,
    /// Image path relative to the dataset root.
    pub image_path: String,
    effect_id: String,
}

impl Card {
    /// Create a card, computing its effect fingerprint from `name` and `kind`.
    pub fn new(
        name: impl Into<String>,
        text: impl Into<String>,
        kind: CardKind,
        collection: CollectionAttr,
    ) -> Self {
        let name = name.into();
        let effect_id = effect_fingerprint(&name, &kind);
        Self {
            name,
            text: text.into(),
            kind,
            mechanic: None,
            label: None,
            collection,
            regulation_mark: None,
            image_path: String::new(),
            effect_id,
        }
    }

    pub fn with_mechanic(mut self, mechanic: Option<Mechanic>) -> Self {
        self.mechanic = mechanic;
        self
    }

    pub fn with_label(mut self, label: Option<Label>) -> Self {
        self.label = label;
        self
    }

    pub fn with_regulation_mark(mut self, mark: Option<String>) -> Self {
        self.regulation_mark = mark;
        self
    }

    pub fn with_image_path(mut self, path: impl Into<String>) -> Self {
        self.image_path = path.into();
        self
    }

    pub fn card_type(&self) -> CardType {
        self.kind.card_type()
    }

    /// Gameplay-equivalence fingerprint, fixed at construction.
    pub fn effect_id(&self) -> &str {
        &self.effect_id
    }

    pub fn card_no(&self) -> Option<&str> {
        self.collection.card_no.as_deref()
    }
}
