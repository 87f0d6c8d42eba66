//! Transmerge - merge JSON translation files
//!
//! Transmerge is a CLI tool and library that merges translation files, each a
//! list of `{ key, value, context }` entries, into one deduplicated document.
//! Duplicate keys with identical values collapse into one entry, empty
//! contexts are filled from later duplicates, and conflicting values either
//! abort the merge or are reported and skipped.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Merge engine (resolve, load, fold)
//! - `diagnostics`: Non-fatal findings and the sink they are reported to
//! - `error`: Fatal merge errors

pub mod cli;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod error;
