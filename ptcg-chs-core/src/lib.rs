//! Domain model for the simplified-Chinese PTCG card catalog.
//!
//! This crate holds the normalized shape every later stage agrees on: the
//! closed vendor enumerations, cards with their kind-specific payloads, sets,
//! and the insertion-ordered [`Catalog`] that reconciliation rewrites. It
//! knows nothing about the vendor document or output files.

pub mod card;
pub mod card_no;
pub mod catalog;
pub mod effect;
pub mod enums;
pub mod set;

pub use card::{
    Ability, Attack, Card, CardKind, CollectionAttr, EnergyAttr, PokemonAttr, Resistance,
    Weakness,
};
pub use card_no::CardNoKey;
pub use catalog::Catalog;
pub use effect::effect_fingerprint;
pub use enums::{CardType, Energy, Label, Mechanic, Rarity, Series, SetType, Stage, TrainerType};
pub use set::PSet;
