//! Effect fingerprints.
//!
//! Two prints share a fingerprint when they have the same name and game text,
//! whatever their artwork, rarity, or print run. Attack names are hashed as a
//! sequence, so the same attacks listed in a different order give a different
//! fingerprint; that is how the prints are commonly told apart and must stay.

use crate::card::{CardKind, PokemonAttr};

/// Hex MD5 digest of [`canonical_effect_string`].
pub fn effect_fingerprint(name: &str, kind: &CardKind) -> String {
    let canonical = canonical_effect_string(name, kind);
    format!("{:x}", md5::compute(canonical.as_bytes()))
}

/// The string the fingerprint is computed over.
///
/// Pokémon: `name|stage|hp|abilities|[attacks]|weak type|weak value|res type|res value|retreat`.
/// Everything else: the name alone.
pub fn canonical_effect_string(name: &str, kind: &CardKind) -> String {
    match kind {
        CardKind::Pokemon(attr) => pokemon_canonical(name, attr),
        _ => name.to_string(),
    }
}

fn pokemon_canonical(name: &str, attr: &PokemonAttr) -> String {
    let abilities: Vec<&str> = attr.abilities.iter().map(|a| a.name.as_str()).collect();
    let attacks: Vec<&str> = attr.attacks.iter().map(|a| a.name.as_str()).collect();
    let (weak_type, weak_value) = match &attr.weakness {
        Some(w) => (w.weakness_type.code(), w.weakness_value.as_str()),
        None => ("", ""),
    };
    let (res_type, res_value) = match &attr.resistance {
        Some(r) => (r.resistance_type.code(), r.resistance_value.as_str()),
        None => ("", ""),
    };

    format!(
        "{}|{}|{}|{}|[{}]|{}|{}|{}|{}|{}",
        name,
        attr.stage.as_str(),
        attr.hp,
        abilities.join(","),
        attacks.join(","),
        weak_type,
        weak_value,
        res_type,
        res_value,
        attr.retreat_cost,
    )
}

#[cfg(test)]
#[path = "tests/effect_tests.rs"]
mod tests;
