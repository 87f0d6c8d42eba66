//! Insertion-ordered store of merged entries.

use std::cmp::Ordering;

use indexmap::{IndexMap, map::Entry};

use super::types::TranslationEntry;

/// At most one entry per key. Iteration follows first-seen order until
/// [`MergedCollection::sort_by`] is called.
#[derive(Debug, Default, Clone)]
pub struct MergedCollection {
    entries: IndexMap<String, TranslationEntry>,
}

impl MergedCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Slot for `key`: occupied by the first-seen entry, or vacant.
    pub fn entry(&mut self, key: String) -> Entry<'_, String, TranslationEntry> {
        self.entries.entry(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TranslationEntry> {
        self.entries.values()
    }

    /// Stable sort of entries by key.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&str, &str) -> Ordering,
    {
        self.entries.sort_by(|a, _, b, _| compare(a.as_str(), b.as_str()));
    }

    pub fn into_entries(self) -> Vec<TranslationEntry> {
        self.entries.into_values().collect()
    }
}
