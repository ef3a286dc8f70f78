//! Insertion-ordered catalog of sets.
//!
//! The published `sets.json` array follows the order sets entered the
//! catalog: chronological for imported sets, with renamed entries moved to
//! the end. A plain `Vec` keeps that order explicit; catalogs hold a few
//! hundred sets, so linear lookups are fine.

use crate::set::PSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, PSet)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&PSet> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut PSet> {
        self.position(key).map(|i| &mut self.entries[i].1)
    }

    /// Insert a set under `key`.
    ///
    /// An existing entry is replaced in place and returned; a new key is
    /// appended at the end.
    pub fn insert(&mut self, key: impl Into<String>, set: PSet) -> Option<PSet> {
        let key = key.into();
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, set)),
            None => {
                self.entries.push((key, set));
                None
            }
        }
    }

    /// Remove the entry for `key`, keeping the order of the others.
    pub fn remove(&mut self, key: &str) -> Option<PSet> {
        self.position(key).map(|i| self.entries.remove(i).1)
    }

    /// Move the set stored under `from` to `to`.
    ///
    /// Returns `false` if `from` does not exist. Like [`insert`](Self::insert),
    /// the set lands at the end unless `to` already exists.
    pub fn rename(&mut self, from: &str, to: &str) -> bool {
        match self.remove(from) {
            Some(set) => {
                self.insert(to, set);
                true
            }
            None => false,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PSet)> {
        self.entries.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn sets(&self) -> impl Iterator<Item = &PSet> {
        self.entries.iter().map(|(_, s)| s)
    }

    pub fn sets_mut(&mut self) -> impl Iterator<Item = &mut PSet> {
        self.entries.iter_mut().map(|(_, s)| s)
    }

    pub fn card_count(&self) -> usize {
        self.sets().map(|s| s.cards.len()).sum()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
