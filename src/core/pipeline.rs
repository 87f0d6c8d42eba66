//! End-to-end merge of files on disk.
//!
//! Loading runs in parallel; everything after it is sequential and follows
//! the order of the input paths.

use std::path::PathBuf;

use super::{
    merge::{MergeOptions, merge},
    parsers::json::load_documents,
    types::{SourceDocument, TranslationDocument},
};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::MergeError;

#[derive(Debug)]
pub struct MergeOutcome {
    pub document: TranslationDocument,
    pub files_merged: usize,
    pub files_skipped: usize,
}

/// Load `paths` and merge them.
///
/// # Errors
///
/// In strict mode, the first file (in input order) that fails to load, or the
/// first conflicting key, aborts the merge.
pub fn merge_files(
    paths: &[PathBuf],
    options: &MergeOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<MergeOutcome, MergeError> {
    let mut sources = Vec::with_capacity(paths.len());
    let mut files_skipped = 0;

    for (path, result) in load_documents(paths) {
        match result {
            Ok(document) => sources.push(SourceDocument::new(path, document)),
            Err(err) if options.ignore_errors => {
                sink.emit(Diagnostic::file_skipped(path, &err));
                files_skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    let files_merged = sources.len();
    let document = merge(sources, options, sink)?;

    Ok(MergeOutcome {
        document,
        files_merged,
        files_skipped,
    })
}
