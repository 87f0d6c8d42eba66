//! Folding translation documents into one deduplicated document.
//!
//! Documents are folded strictly in the order given, entries in list order.
//! Which value and which context survive depends on that order: the first
//! value seen for a key wins, and an empty context is filled by the first
//! later duplicate (same key, same value) that has one.

use indexmap::map::Entry;

use super::{
    collate::KeyCollator,
    collection::MergedCollection,
    hash::{content_hash, key_matches_value},
    types::{DEFAULT_OUTPUT_LANGUAGE, SourceDocument, TranslationDocument},
};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::MergeError;

/// Options controlling a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// Downgrade load failures and conflicts to warnings. Default: `false`.
    pub ignore_errors: bool,
    /// Sort output entries by key in root collation order. Default: `true`.
    pub sort: bool,
    /// Backfill an empty context from a later identical entry. Default: `true`.
    pub merge_context: bool,
    /// Warn when a key is not the MD5 digest of its value. Default: `true`.
    pub md5_check: bool,
    /// Language tag of the merged document. Default: `"EN"`.
    pub language: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            ignore_errors: false,
            sort: true,
            merge_context: true,
            md5_check: true,
            language: DEFAULT_OUTPUT_LANGUAGE.to_string(),
        }
    }
}

/// Merge `documents` into a single document.
///
/// # Errors
///
/// Returns [`MergeError::Conflict`] for the first key found with two
/// different values, unless `options.ignore_errors` is set, and
/// [`MergeError::Collation`] if sorting is requested but no collation data
/// can be loaded.
pub fn merge<I>(
    documents: I,
    options: &MergeOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<TranslationDocument, MergeError>
where
    I: IntoIterator<Item = SourceDocument>,
{
    let mut collection = MergedCollection::new();

    for source in documents {
        fold_document(&mut collection, source, options, sink)?;
    }

    if options.sort {
        let collator = KeyCollator::root()?;
        collection.sort_by(|a, b| collator.compare(a, b));
    }

    if options.md5_check {
        check_hashes(&collection, sink);
    }

    Ok(TranslationDocument::new(
        options.language.clone(),
        collection.into_entries(),
    ))
}

fn fold_document(
    collection: &mut MergedCollection,
    source: SourceDocument,
    options: &MergeOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), MergeError> {
    let SourceDocument { path, document } = source;

    for entry in document.translations {
        match collection.entry(entry.key.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(entry);
            }
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();

                if existing.value != entry.value {
                    if !options.ignore_errors {
                        return Err(MergeError::Conflict {
                            key: entry.key,
                            existing: existing.value.clone(),
                            incoming: entry.value,
                            file: path,
                        });
                    }
                    sink.emit(Diagnostic::conflict_ignored(
                        &entry.key,
                        &existing.value,
                        &entry.value,
                        &path,
                    ));
                } else if options.merge_context && !existing.has_context() && entry.has_context() {
                    sink.emit(Diagnostic::context_merged(&entry.key, &entry.context, &path));
                    existing.context = entry.context;
                } else {
                    sink.emit(Diagnostic::duplicate_skipped(&entry.key, &path));
                }
            }
        }
    }

    Ok(())
}

fn check_hashes(collection: &MergedCollection, sink: &mut dyn DiagnosticSink) {
    for entry in collection.iter() {
        if !key_matches_value(&entry.key, &entry.value) {
            sink.emit(Diagnostic::hash_mismatch(
                &entry.key,
                &entry.value,
                &content_hash(&entry.value),
            ));
        }
    }
}
