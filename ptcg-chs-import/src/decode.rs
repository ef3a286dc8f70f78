//! Vendor code decoders.
//!
//! Each decoder maps one vendor code to exactly one domain value. Unknown
//! codes are errors: a silently defaulted rarity or type would corrupt the
//! legality and display data downstream.

use ptcg_chs_core::{CardType, Energy, Label, Mechanic, Rarity, Series, Stage};
use thiserror::Error;

use crate::heuristics;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unknown {kind} code: {code:?}")]
    UnknownCode { kind: &'static str, code: String },
}

impl DecodeError {
    fn unknown(kind: &'static str, code: impl Into<String>) -> Self {
        Self::UnknownCode {
            kind,
            code: code.into(),
        }
    }
}

/// Sets whose `series` field is unreliable, keyed by display name.
const SERIES_OVERRIDES: &[(&str, Series)] = &[
    ("特典卡·太阳&月亮", Series::SunMoon),
    ("2023宝可梦卡牌大师赛·广州 特典", Series::SunMoon),
    ("宝可梦卡牌超级赛·太阳&月亮 特典", Series::SunMoon),
    ("特典卡·剑&盾", Series::SwordShield),
    ("宝可梦卡牌超级赛·剑&盾 特典", Series::SwordShield),
    ("2023宝可梦卡牌大师赛·北京 特典", Series::SwordShield),
    ("2023宝可梦卡牌大师赛·深圳 特典", Series::SwordShield),
    ("2023宝可梦卡牌大师赛·上海 特典", Series::SwordShield),
];

/// Series of a set: the display-name override table first, then the code.
pub fn decode_series(code: Option<&str>, set_name: &str) -> Result<Series, DecodeError> {
    if let Some(&(_, series)) = SERIES_OVERRIDES.iter().find(|(name, _)| *name == set_name) {
        return Ok(series);
    }
    match code {
        Some("1") => Ok(Series::SunMoon),
        Some("2") => Ok(Series::SwordShield),
        Some("3") => Ok(Series::ScarletViolet),
        Some(other) => Err(DecodeError::unknown("series", other)),
        None => Err(DecodeError::unknown("series", format!("<missing> for set {set_name}"))),
    }
}

/// Energy from an attribute/cost code or a basic-energy `yorenCode`.
pub fn decode_energy(code: &str) -> Result<Energy, DecodeError> {
    match code {
        "1" | "Y457" | "Y755" => Ok(Energy::Grass),
        "2" | "Y458" | "Y756" => Ok(Energy::Fire),
        "3" | "Y459" => Ok(Energy::Water),
        "4" | "Y460" | "Y757" => Ok(Energy::Lightning),
        "5" | "Y461" | "Y758" => Ok(Energy::Psychic),
        "6" | "Y462" | "Y759" => Ok(Energy::Fighting),
        "7" | "Y463" | "Y760" => Ok(Energy::Darkness),
        "8" | "Y464" => Ok(Energy::Metal),
        "9" | "Y465" => Ok(Energy::Fairy),
        "10" => Ok(Energy::Dragon),
        "11" => Ok(Energy::Colorless),
        "12" => Ok(Energy::Addition),
        "none" => Ok(Energy::Zero),
        other => Err(DecodeError::unknown("energy", other)),
    }
}

pub fn decode_stage(evolve_text: &str) -> Result<Stage, DecodeError> {
    match evolve_text {
        "基础" => Ok(Stage::Basic),
        "1阶进化" => Ok(Stage::Stage1),
        "2阶进化" => Ok(Stage::Stage2),
        "V进化" => Ok(Stage::Vmax),
        "V-UNION" => Ok(Stage::VUnion),
        other => Err(DecodeError::unknown("stage", other)),
    }
}

pub fn decode_rarity(rarity_text: &str) -> Result<Rarity, DecodeError> {
    let rarity = heuristics::strip_staff_marker(rarity_text);
    match rarity.as_str() {
        "C" => Ok(Rarity::Common),
        "U" => Ok(Rarity::Uncommon),
        "R" => Ok(Rarity::Rare),
        "PR" => Ok(Rarity::PrismRare),
        "RR" => Ok(Rarity::DoubleRare),
        "RRR" => Ok(Rarity::TripleRare),
        "S" => Ok(Rarity::Shiny),
        "SR" => Ok(Rarity::SuperRare),
        "SSR" => Ok(Rarity::ShinySuperRare),
        "CSR" => Ok(Rarity::CharacterSuperRare),
        "CHR" => Ok(Rarity::CharacterRare),
        "A" => Ok(Rarity::AmazingRare),
        "HR" => Ok(Rarity::HyperRare),
        "UR" => Ok(Rarity::UltraRare),
        "无标记" => Ok(Rarity::NoLabel),
        _ => Err(DecodeError::unknown("rarity", rarity_text)),
    }
}

/// Vendor fields that decide a card's type.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeCodes<'a> {
    pub card_type: &'a str,
    pub trainer_type: Option<&'a str>,
    pub energy_type: Option<&'a str>,
    pub rule_text: Option<&'a str>,
}

/// Refine the coarse Pokémon/Trainer/Energy code into a published type.
///
/// Item cards whose rule text opens with the tool reminder are tools.
pub fn decode_card_type(codes: TypeCodes<'_>) -> Result<CardType, DecodeError> {
    match codes.card_type {
        "1" => Ok(CardType::Pokemon),
        "2" => match codes.trainer_type {
            Some("1") => {
                if codes.rule_text.is_some_and(heuristics::is_tool_rule_text) {
                    Ok(CardType::Tool)
                } else {
                    Ok(CardType::Item)
                }
            }
            Some("2") => Ok(CardType::Supporter),
            Some("3") => Ok(CardType::Stadium),
            other => Err(DecodeError::unknown(
                "trainer type",
                other.unwrap_or("<missing>"),
            )),
        },
        "3" => match codes.energy_type {
            Some("1") => Ok(CardType::BasicEnergy),
            Some("2") => Ok(CardType::SpecialEnergy),
            other => Err(DecodeError::unknown(
                "energy type",
                other.unwrap_or("<missing>"),
            )),
        },
        other => Err(DecodeError::unknown("card type", other)),
    }
}

fn pokemon_type_codes(pokemon_type: Option<&str>) -> impl Iterator<Item = &str> {
    pokemon_type
        .unwrap_or_default()
        .split('|')
        .filter(|code| !code.is_empty())
}

/// V and GX come from the Pokémon type list; Prism Star from `specialCard`.
///
/// ex, Radiant and ACE SPEC have no vendor code yet.
pub fn decode_mechanic(pokemon_type: Option<&str>, special_card: Option<&str>) -> Option<Mechanic> {
    let codes: Vec<&str> = pokemon_type_codes(pokemon_type).collect();
    if codes.contains(&"1") {
        return Some(Mechanic::V);
    }
    if codes.contains(&"4") {
        return Some(Mechanic::Gx);
    }
    if special_card == Some("4") {
        return Some(Mechanic::PrismStar);
    }
    None
}

pub fn decode_label(pokemon_type: Option<&str>, special_card: Option<&str>) -> Option<Label> {
    if pokemon_type_codes(pokemon_type).any(|code| code == "5") {
        return Some(Label::UltraBeast);
    }
    match special_card {
        Some("5") => Some(Label::TagTeam),
        Some("1") => Some(Label::SingleStrike),
        Some("2") => Some(Label::RapidStrike),
        Some("3") => Some(Label::FusionStrike),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/decode_tests.rs"]
mod tests;
