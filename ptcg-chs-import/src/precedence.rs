//! Chronological set precedence.

use std::collections::HashMap;

use crate::raw::RawDocument;

/// Chronological index of every set symbol in a source document.
///
/// The document lists sets newest first; index 0 here is the oldest set. A
/// reprint listed under several symbols is filed under the earliest one.
#[derive(Debug, Clone, Default)]
pub struct SymbolPrecedence {
    index: HashMap<String, usize>,
}

impl SymbolPrecedence {
    pub fn from_document(doc: &RawDocument) -> Self {
        Self::from_chronological(doc.collections.iter().rev().map(|c| c.commodity_code.as_str()))
    }

    /// Build from symbols already in chronological order. A symbol seen twice
    /// keeps its first position.
    pub fn from_chronological<'a>(symbols: impl IntoIterator<Item = &'a str>) -> Self {
        let mut index = HashMap::new();
        for (i, symbol) in symbols.into_iter().enumerate() {
            index.entry(symbol.to_string()).or_insert(i);
        }
        Self { index }
    }

    pub fn position(&self, symbol: &str) -> Option<usize> {
        self.index.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The chronologically earliest of `symbols`.
    ///
    /// Returns `Err` with the first symbol this table does not know, and
    /// `Ok(None)` for an empty list.
    pub fn earliest<'a, S>(&self, symbols: &'a [S]) -> Result<Option<&'a str>, &'a str>
    where
        S: AsRef<str>,
    {
        let mut best: Option<(usize, &str)> = None;
        for symbol in symbols {
            let symbol = symbol.as_ref();
            let pos = self.position(symbol).ok_or(symbol)?;
            if best.is_none_or(|(p, _)| pos < p) {
                best = Some((pos, symbol));
            }
        }
        Ok(best.map(|(_, s)| s))
    }
}

#[cfg(test)]
#[path = "tests/precedence_tests.rs"]
mod tests;
