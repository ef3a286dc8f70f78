use crate::card::Card;
use crate::card_no::CardNoKey;
use crate::enums::{Series, SetType};

/// A released set of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PSet {
    pub name: String,
    /// Published symbol. During reconciliation this can differ from the
    /// catalog key the set is stored under.
    pub symbol: String,
    pub release_date: Option<String>,
    pub series: Series,
    pub set_type: SetType,
    pub cards: Vec<Card>,
    cards_num: usize,
}

impl PSet {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        release_date: Option<String>,
        series: Series,
    ) -> Self {
        let symbol = symbol.into();
        Self {
            name: name.into(),
            set_type: SetType::for_symbol(&symbol),
            symbol,
            release_date,
            series,
            cards: Vec::new(),
            cards_num: 0,
        }
    }

    pub fn is_main_expansion(&self) -> bool {
        self.set_type == SetType::MainExpansion
    }

    /// Cached card count as of the last [`refresh_count`](Self::refresh_count).
    pub fn cards_num(&self) -> usize {
        self.cards_num
    }

    pub fn refresh_count(&mut self) {
        self.cards_num = self.cards.len();
    }

    /// Stable sort by [`CardNoKey`].
    pub fn sort_cards(&mut self) {
        self.cards.sort_by_cached_key(|c| CardNoKey::of(c.card_no()));
    }

    pub fn find_card_mut(&mut self, card_no: &str) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.card_no() == Some(card_no))
    }
}

#[cfg(test)]
#[path = "tests/set_tests.rs"]
mod tests;
