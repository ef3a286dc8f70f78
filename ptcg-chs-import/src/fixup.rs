//! Point corrections for known vendor data errors.
//!
//! A fix-up targets one card by catalog key and card number and patches one
//! field, on that card and on every merged copy of it. Fix-ups are
//! idempotent. The built-in list can be extended from a YAML file:
//!
//! ```yaml
//! - set: SSP
//!   card_no: "138"
//!   patch:
//!     kind: attack_cost
//!     attack: 0
//!     cost: [C]
//! ```

use std::fmt;
use std::path::Path;

use log::debug;
use ptcg_chs_core::{Card, Catalog, Energy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixupError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FixupPatch {
    /// Replace the energy cost of the attack at index `attack`.
    AttackCost { attack: usize, cost: Vec<Energy> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixup {
    /// Catalog key of the set holding the card.
    pub set: String,
    pub card_no: String,
    pub patch: FixupPatch,
}

/// Result of applying one [`Fixup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixupOutcome {
    Applied,
    SetNotFound,
    CardNotFound,
    /// The card exists but has no field the patch could change.
    NotApplicable,
}

impl fmt::Display for FixupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Applied => "applied",
            Self::SetNotFound => "set not found",
            Self::CardNotFound => "card not found",
            Self::NotApplicable => "patch does not apply to this card",
        };
        f.write_str(text)
    }
}

impl fmt::Display for Fixup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.set, self.card_no)
    }
}

impl Fixup {
    pub fn attack_cost(set: &str, card_no: &str, attack: usize, cost: Vec<Energy>) -> Self {
        Self {
            set: set.to_string(),
            card_no: card_no.to_string(),
            patch: FixupPatch::AttackCost { attack, cost },
        }
    }

    /// Patch the card in `set` numbered `card_no`, together with the copies
    /// merges left in other entries.
    ///
    /// A copy has the same filed symbol, number and effect id as the card
    /// found under `set`.
    pub fn apply(&self, catalog: &mut Catalog) -> FixupOutcome {
        let Some(set) = catalog.get_mut(&self.set) else {
            return FixupOutcome::SetNotFound;
        };
        let Some(card) = set.find_card_mut(&self.card_no) else {
            return FixupOutcome::CardNotFound;
        };
        if !self.patch.apply_to(card) {
            return FixupOutcome::NotApplicable;
        }
        let filed_under = card.collection.set_symbol.clone();
        let effect_id = card.effect_id().to_string();

        let copies = catalog
            .sets_mut()
            .flat_map(|s| s.cards.iter_mut())
            .filter(|c| {
                c.card_no() == Some(self.card_no.as_str())
                    && c.collection.set_symbol == filed_under
                    && c.effect_id() == effect_id
            });
        let mut patched = 0;
        for copy in copies {
            if self.patch.apply_to(copy) {
                patched += 1;
            }
        }
        debug!("Fix-up {self} patched {patched} copies");
        FixupOutcome::Applied
    }
}

impl FixupPatch {
    /// Returns `false` when the card has nothing this patch can change.
    fn apply_to(&self, card: &mut Card) -> bool {
        match self {
            Self::AttackCost { attack, cost } => {
                match card
                    .kind
                    .pokemon_mut()
                    .and_then(|attr| attr.attacks.get_mut(*attack))
                {
                    Some(target) => {
                        target.cost = cost.clone();
                        true
                    }
                    None => false,
                }
            }
        }
    }
}

/// Known vendor errors, always applied.
pub fn builtin_fixups() -> Vec<Fixup> {
    vec![Fixup::attack_cost("SSP", "138", 0, vec![Energy::Colorless])]
}

pub fn parse_fixups(yaml: &str, path: &str) -> Result<Vec<Fixup>, FixupError> {
    serde_yml::from_str(yaml).map_err(|e| FixupError::Parse {
        path: path.to_string(),
        source: e,
    })
}

/// Load a YAML sequence of fix-ups.
pub fn load_fixups(path: &Path) -> Result<Vec<Fixup>, FixupError> {
    let contents = std::fs::read_to_string(path).map_err(|e| FixupError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_fixups(&contents, &path.display().to_string())
}

#[cfg(test)]
#[path = "tests/fixup_tests.rs"]
mod tests;
