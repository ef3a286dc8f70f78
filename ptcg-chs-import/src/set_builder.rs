//! Per-set accumulation of normalized cards.

use std::collections::HashSet;

use ptcg_chs_core::{Card, PSet};

/// Outcome of offering a card to a [`SetBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pushed {
    Kept,
    /// A card with the same number was already kept.
    Duplicate,
}

/// Collects one set's cards in source order.
///
/// The first card seen for a number wins. Cards without a number are always
/// kept; they only get numbers during reconciliation.
#[derive(Debug)]
pub struct SetBuilder {
    set: PSet,
    seen: HashSet<String>,
}

impl SetBuilder {
    pub fn new(set: PSet) -> Self {
        Self {
            set,
            seen: HashSet::new(),
        }
    }

    pub fn push(&mut self, card: Card) -> Pushed {
        if let Some(no) = card.card_no() {
            if !self.seen.insert(no.to_string()) {
                return Pushed::Duplicate;
            }
        }
        self.set.cards.push(card);
        Pushed::Kept
    }

    pub fn len(&self) -> usize {
        self.set.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.cards.is_empty()
    }

    pub fn finish(mut self) -> PSet {
        self.set.refresh_count();
        self.set
    }
}

#[cfg(test)]
#[path = "tests/set_builder_tests.rs"]
mod tests;
