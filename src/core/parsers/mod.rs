//! Translation file parsers.
//!
//! - `json`: `{ language, translations: [{ key, value, context }] }` documents

pub mod json;
