//! Locale-aware ordering of translation keys.
//!
//! Keys are compared with the Unicode root collation (CLDR root, tertiary
//! strength, punctuation non-ignorable), the order `localeCompare` produces.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};

use crate::error::MergeError;

pub struct KeyCollator {
    collator: Collator,
}

impl KeyCollator {
    /// Collator for the root locale, backed by compiled CLDR data.
    pub fn root() -> Result<Self, MergeError> {
        let collator = Collator::try_new(&Default::default(), CollatorOptions::new())
            .map_err(|err| MergeError::Collation(err.to_string()))?;
        Ok(Self { collator })
    }

    /// Total order over keys: strings the collation treats as equal fall
    /// back to code-point order.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b).then_with(|| a.cmp(b))
    }
}
