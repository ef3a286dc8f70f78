//! Closed enumerations decoded from the vendor data.
//!
//! Every enum serializes to the string published in `sets.json`, so the
//! serde renames here are the output contract.

use serde::{Deserialize, Serialize};

// ── Series ──────────────────────────────────────────────────────────────────

/// A card-game era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Series {
    #[serde(rename = "Sun & Moon")]
    SunMoon,
    #[serde(rename = "Sword & Shield")]
    SwordShield,
    #[serde(rename = "Scarlet & Violet")]
    ScarletViolet,
}

impl Series {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SunMoon => "Sun & Moon",
            Self::SwordShield => "Sword & Shield",
            Self::ScarletViolet => "Scarlet & Violet",
        }
    }

    /// Symbol of the promotional catalog entry for this era, if it has one.
    pub fn promo_symbol(&self) -> Option<&'static str> {
        match self {
            Self::SunMoon => Some("SMP"),
            Self::SwordShield => Some("SSP"),
            Self::ScarletViolet => None,
        }
    }

    pub fn all() -> &'static [Series] {
        &[Self::SunMoon, Self::SwordShield, Self::ScarletViolet]
    }
}

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Set type ────────────────────────────────────────────────────────────────

/// Whether a set is one of the numbered main expansions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetType {
    MainExpansion,
    SideProduct,
}

/// Symbols of the main expansions; everything else is a side product.
const MAIN_EXPANSION_SYMBOLS: &[&str] = &[
    // SM
    "CSM1aC", "CSM1bC", "CSM1cC", "CSM1.5C", "CSM2aC", "CSM2bC", "CSM2cC", "CSM2.5C",
    // SS
    "CS1aC", "CS1bC", "CS1.5C", "CS2aC", "CS2bC",
];

impl SetType {
    pub fn for_symbol(symbol: &str) -> Self {
        if MAIN_EXPANSION_SYMBOLS.contains(&symbol) {
            Self::MainExpansion
        } else {
            Self::SideProduct
        }
    }
}

// ── Card type ───────────────────────────────────────────────────────────────

/// Published card type.
///
/// `Trainer` and `Energy` are the coarse vendor categories; decoded cards
/// always carry one of the refined variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Pokemon,
    Trainer,
    Energy,
    Item,
    Supporter,
    Stadium,
    #[serde(rename = "Pokemon Tool")]
    Tool,
    #[serde(rename = "Basic Energy")]
    BasicEnergy,
    #[serde(rename = "Special Energy")]
    SpecialEnergy,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pokemon => "Pokemon",
            Self::Trainer => "Trainer",
            Self::Energy => "Energy",
            Self::Item => "Item",
            Self::Supporter => "Supporter",
            Self::Stadium => "Stadium",
            Self::Tool => "Pokemon Tool",
            Self::BasicEnergy => "Basic Energy",
            Self::SpecialEnergy => "Special Energy",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Refined trainer subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrainerType {
    Item,
    Tool,
    Supporter,
    Stadium,
}

impl TrainerType {
    pub fn card_type(&self) -> CardType {
        match self {
            Self::Item => CardType::Item,
            Self::Tool => CardType::Tool,
            Self::Supporter => CardType::Supporter,
            Self::Stadium => CardType::Stadium,
        }
    }
}

// ── Mechanic / Label ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mechanic {
    #[serde(rename = "ex")]
    Ex,
    V,
    #[serde(rename = "GX")]
    Gx,
    Radiant,
    #[serde(rename = "Prism Star")]
    PrismStar,
    #[serde(rename = "ACE SPEC")]
    AceSpec,
}

impl Mechanic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ex => "ex",
            Self::V => "V",
            Self::Gx => "GX",
            Self::Radiant => "Radiant",
            Self::PrismStar => "Prism Star",
            Self::AceSpec => "ACE SPEC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "TAG TEAM")]
    TagTeam,
    #[serde(rename = "Ultra Beast")]
    UltraBeast,
    #[serde(rename = "Fusion Strike")]
    FusionStrike,
    #[serde(rename = "Single Strike")]
    SingleStrike,
    #[serde(rename = "Rapid Strike")]
    RapidStrike,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TagTeam => "TAG TEAM",
            Self::UltraBeast => "Ultra Beast",
            Self::FusionStrike => "Fusion Strike",
            Self::SingleStrike => "Single Strike",
            Self::RapidStrike => "Rapid Strike",
        }
    }
}

// ── Rarity ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    #[serde(rename = "C")]
    Common,
    #[serde(rename = "U")]
    Uncommon,
    #[serde(rename = "R")]
    Rare,
    #[serde(rename = "PR")]
    PrismRare,
    #[serde(rename = "RR")]
    DoubleRare,
    #[serde(rename = "RRR")]
    TripleRare,
    #[serde(rename = "S")]
    Shiny,
    #[serde(rename = "SR")]
    SuperRare,
    #[serde(rename = "SSR")]
    ShinySuperRare,
    #[serde(rename = "CSR")]
    CharacterSuperRare,
    #[serde(rename = "CHR")]
    CharacterRare,
    #[serde(rename = "A")]
    AmazingRare,
    #[serde(rename = "HR")]
    HyperRare,
    #[serde(rename = "UR")]
    UltraRare,
    /// Printed without a rarity mark.
    #[serde(rename = "")]
    NoLabel,
}

const ALL_RARITIES: &[Rarity] = &[
    Rarity::Common,
    Rarity::Uncommon,
    Rarity::Rare,
    Rarity::PrismRare,
    Rarity::DoubleRare,
    Rarity::TripleRare,
    Rarity::Shiny,
    Rarity::SuperRare,
    Rarity::ShinySuperRare,
    Rarity::CharacterSuperRare,
    Rarity::CharacterRare,
    Rarity::AmazingRare,
    Rarity::HyperRare,
    Rarity::UltraRare,
    Rarity::NoLabel,
];

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "C",
            Self::Uncommon => "U",
            Self::Rare => "R",
            Self::PrismRare => "PR",
            Self::DoubleRare => "RR",
            Self::TripleRare => "RRR",
            Self::Shiny => "S",
            Self::SuperRare => "SR",
            Self::ShinySuperRare => "SSR",
            Self::CharacterSuperRare => "CSR",
            Self::CharacterRare => "CHR",
            Self::AmazingRare => "A",
            Self::HyperRare => "HR",
            Self::UltraRare => "UR",
            Self::NoLabel => "",
        }
    }

    pub fn all() -> &'static [Rarity] {
        ALL_RARITIES
    }
}

// ── Energy ──────────────────────────────────────────────────────────────────

/// An energy type, used both as a Pokémon's attribute and as a cost unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Energy {
    #[serde(rename = "G")]
    Grass,
    #[serde(rename = "R")]
    Fire,
    #[serde(rename = "W")]
    Water,
    #[serde(rename = "L")]
    Lightning,
    #[serde(rename = "P")]
    Psychic,
    #[serde(rename = "F")]
    Fighting,
    #[serde(rename = "D")]
    Darkness,
    #[serde(rename = "M")]
    Metal,
    #[serde(rename = "Y")]
    Fairy,
    #[serde(rename = "N")]
    Dragon,
    #[serde(rename = "C")]
    Colorless,
    /// A free attack.
    #[serde(rename = "0")]
    Zero,
    /// The "+" marker on attacks whose cost can grow.
    #[serde(rename = "+")]
    Addition,
}

const ALL_ENERGIES: &[Energy] = &[
    Energy::Grass,
    Energy::Fire,
    Energy::Water,
    Energy::Lightning,
    Energy::Psychic,
    Energy::Fighting,
    Energy::Darkness,
    Energy::Metal,
    Energy::Fairy,
    Energy::Dragon,
    Energy::Colorless,
    Energy::Zero,
    Energy::Addition,
];

impl Energy {
    /// One-character code used in the published JSON.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Grass => "G",
            Self::Fire => "R",
            Self::Water => "W",
            Self::Lightning => "L",
            Self::Psychic => "P",
            Self::Fighting => "F",
            Self::Darkness => "D",
            Self::Metal => "M",
            Self::Fairy => "Y",
            Self::Dragon => "N",
            Self::Colorless => "C",
            Self::Zero => "0",
            Self::Addition => "+",
        }
    }

    pub fn all() -> &'static [Energy] {
        ALL_ENERGIES
    }
}

impl std::fmt::Display for Energy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ── Stage ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Basic,
    #[serde(rename = "Stage 1")]
    Stage1,
    #[serde(rename = "Stage 2")]
    Stage2,
    #[serde(rename = "VMAX")]
    Vmax,
    #[serde(rename = "VSTAR")]
    Vstar,
    #[serde(rename = "V-UNION")]
    VUnion,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Stage1 => "Stage 1",
            Self::Stage2 => "Stage 2",
            Self::Vmax => "VMAX",
            Self::Vstar => "VSTAR",
            Self::VUnion => "V-UNION",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[path = "tests/enums_tests.rs"]
mod tests;
