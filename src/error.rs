//! Fatal merge errors.
//!
//! In lenient mode the same conditions are downgraded to diagnostics, see
//! [`crate::diagnostics`].

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeError {
    /// The input path could not be read (missing, unreadable, a directory).
    #[error("Failed to read translation file {}: {source}", path.display())]
    FileLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input file is not a valid translation document.
    #[error("Failed to parse translation file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two entries share a key but carry different values.
    #[error(
        "Conflicting values for key \"{key}\": \"{existing}\" vs \"{incoming}\" (found in {})",
        file.display()
    )]
    Conflict {
        key: String,
        existing: String,
        incoming: String,
        file: PathBuf,
    },

    /// Root collation data for sorting keys is unavailable.
    #[error("Failed to load collation data for sorting: {0}")]
    Collation(String),
}
