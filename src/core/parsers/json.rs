use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use crate::core::types::TranslationDocument;
use crate::error::MergeError;

/// Outcome of loading one input path.
pub type LoadResult = (PathBuf, Result<TranslationDocument, MergeError>);

pub fn load_document(path: &Path) -> Result<TranslationDocument, MergeError> {
    let content = fs::read_to_string(path).map_err(|source| MergeError::FileLoad {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&content, path)
}

pub fn parse_document(content: &str, path: &Path) -> Result<TranslationDocument, MergeError> {
    let content = strip_trailing_commas(content);
    serde_json::from_str(&content).map_err(|source| MergeError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every path in parallel.
///
/// Results come back in the order of `paths`, one per path.
pub fn load_documents(paths: &[PathBuf]) -> Vec<LoadResult> {
    paths
        .par_iter()
        .map(|path| (path.clone(), load_document(path)))
        .collect()
}

/// Remove commas that directly precede a closing `]` or `}`.
///
/// Commas inside string literals are left alone.
fn strip_trailing_commas(content: &str) -> Cow<'_, str> {
    if !content.contains(',') {
        return Cow::Borrowed(content);
    }

    let bytes = content.as_bytes();
    let mut out = String::with_capacity(content.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut last = 0;

    for (i, &b) in bytes.iter().enumerate() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b',' => {
                let next = bytes[i + 1..]
                    .iter()
                    .find(|c| !c.is_ascii_whitespace())
                    .copied();
                if matches!(next, Some(b']') | Some(b'}')) {
                    out.push_str(&content[last..i]);
                    last = i + 1;
                }
            }
            _ => {}
        }
    }

    if last == 0 {
        return Cow::Borrowed(content);
    }
    out.push_str(&content[last..]);
    Cow::Owned(out)
}
