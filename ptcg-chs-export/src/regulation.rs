//! Banned-effects list.
//!
//! A banned card is named by where it is filed (`set_symbol`, `card_no`).
//! Its effect fingerprint bans every print with the same game text.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::json::{to_json_compact, write_json};
use crate::record::SetRecord;

pub const REGULATION_FILE: &str = "exp_banned.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannedCard {
    pub set: String,
    pub card_no: String,
}

impl BannedCard {
    pub fn new(set: &str, card_no: &str) -> Self {
        Self {
            set: set.to_string(),
            card_no: card_no.to_string(),
        }
    }
}

/// Effect fingerprints banned per format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regulation {
    pub standard: Vec<String>,
    pub expanded: Vec<String>,
}

/// The expanded-format ban list.
pub fn default_banned() -> Vec<BannedCard> {
    vec![
        BannedCard::new("CSM1aC", "060"),
        BannedCard::new("CSM1aC", "128"),
        BannedCard::new("CSM1cC", "137"),
    ]
}

/// Load a YAML sequence of `{set, card_no}` entries.
pub fn load_banned(path: &Path) -> Result<Vec<BannedCard>, ExportError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
    serde_yml::from_str(&contents).map_err(|e| ExportError::Yaml {
        path: path.display().to_string(),
        source: e,
    })
}

/// Look up each banned card's fingerprint in a published catalog.
///
/// The first matching card wins. Unmatched entries are logged and skipped.
pub fn derive_banned(sets: &[SetRecord], banned: &[BannedCard]) -> Regulation {
    let mut expanded = Vec::new();
    for ban in banned {
        let found = sets.iter().flat_map(|s| s.cards.iter()).find(|c| {
            c.collection_attr.set_symbol == ban.set
                && c.collection_attr.card_no.as_deref() == Some(ban.card_no.as_str())
        });
        match found {
            Some(card) => {
                log::debug!("Banned {}-{}: {}", ban.set, ban.card_no, card.name);
                expanded.push(card.effect_id.clone());
            }
            None => log::warn!("Banned card {}-{} not found in catalog", ban.set, ban.card_no),
        }
    }
    Regulation {
        standard: Vec::new(),
        expanded,
    }
}

/// Write `exp_banned.json` into `dir`.
pub fn write_regulation(dir: &Path, regulation: &Regulation) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|e| ExportError::io(dir, e))?;
    let path = dir.join(REGULATION_FILE);
    write_json(&path, to_json_compact(regulation))?;
    Ok(path)
}

#[cfg(test)]
#[path = "tests/regulation_tests.rs"]
mod tests;
