//! Core merge engine.
//!
//! Input paths flow through three steps:
//!
//! 1. **Resolve** (`sources`): glob patterns to a deduplicated path list
//! 2. **Load** (`parsers`): read and parse every file in parallel
//! 3. **Fold** (`merge`): sequentially merge entries in file order, then
//!    sort and validate
//!
//! `pipeline::merge_files` ties loading and folding together.

pub mod collate;
pub mod collection;
pub mod hash;
pub mod merge;
pub mod parsers;
pub mod pipeline;
pub mod sources;
pub mod types;

pub use collection::MergedCollection;
pub use merge::{MergeOptions, merge};
pub use pipeline::{MergeOutcome, merge_files};
pub use sources::expand_patterns;
pub use types::{DEFAULT_OUTPUT_LANGUAGE, SourceDocument, TranslationDocument, TranslationEntry};
