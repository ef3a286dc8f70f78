//! Vendor document model.
//!
//! The dataset JSON is maintained upstream with no published schema and has
//! changed shape between revisions, so everything except the top-level
//! collection list is optional here. Required-ness is enforced by the
//! normalizer, which can name the card and field that is missing.

use serde::{Deserialize, Deserializer};

/// The whole `ptcg_chs_infos.json` document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    /// Set records, newest first.
    pub collections: Vec<RawCollection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCollection {
    pub name: String,
    pub commodity_code: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub sales_date: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub series: Option<String>,
    #[serde(default)]
    pub cards: Vec<RawCard>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCard {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub card_type: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub energy_type: Option<String>,
    /// `|`-separated Pokémon type codes.
    #[serde(default, deserialize_with = "loose_string")]
    pub pokemon_type: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub special_card: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub details: RawDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDetails {
    #[serde(default, deserialize_with = "loose_string")]
    pub trainer_type: Option<String>,
    #[serde(default)]
    pub rule_text: Option<String>,
    #[serde(default)]
    pub rarity_text: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub collection_number: Option<String>,
    #[serde(default)]
    pub illustrator_name: Option<Vec<String>>,
    #[serde(default)]
    pub commodity_list: Option<Vec<RawCommodity>>,
    #[serde(default)]
    pub regulation_mark_text: Option<String>,

    // Pokémon fields
    #[serde(default, deserialize_with = "loose_string")]
    pub attribute: Option<String>,
    #[serde(default)]
    pub evolve_text: Option<String>,
    #[serde(default, deserialize_with = "loose_u32")]
    pub hp: Option<u32>,
    /// Single-ability shape used by older revisions.
    #[serde(default)]
    pub feature_name: Option<String>,
    #[serde(default)]
    pub feature_text: Option<String>,
    /// Multi-ability shape used by newer revisions.
    #[serde(default)]
    pub card_feature_item_list: Option<Vec<RawFeature>>,
    #[serde(default, deserialize_with = "loose_string")]
    pub weakness_type: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub weakness_formula: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub resistance_type: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub resistance_formula: Option<String>,
    #[serde(default, deserialize_with = "loose_u32")]
    pub retreat_cost: Option<u32>,
    /// Pokédex number for Pokémon, energy code for basic energy.
    #[serde(default, deserialize_with = "loose_string")]
    pub yoren_code: Option<String>,
    #[serde(default)]
    pub ability_item_list: Option<Vec<RawAttack>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCommodity {
    #[serde(default)]
    pub commodity_code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFeature {
    #[serde(default)]
    pub feature_name: Option<String>,
    #[serde(default)]
    pub feature_desc: Option<String>,
}

/// One entry of `abilityItemList`; despite the name these are attacks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAttack {
    #[serde(default)]
    pub ability_name: Option<String>,
    #[serde(default)]
    pub ability_text: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub ability_damage: Option<String>,
    /// Comma-separated energy codes.
    #[serde(default, deserialize_with = "loose_string")]
    pub ability_cost: Option<String>,
}

/// A scalar that upstream writes sometimes as a string, sometimes as a number.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
        }
    }
}

fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_string))
}

fn loose_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Int(i)) => u32::try_from(i)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("integer out of range: {i}"))),
        Some(Scalar::Float(f)) => Err(D::Error::custom(format!("expected an integer, got {f}"))),
        Some(Scalar::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("expected an integer, got {s:?}")))
        }
    }
}

#[cfg(test)]
#[path = "tests/raw_tests.rs"]
mod tests;
