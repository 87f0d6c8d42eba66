//! Resolving input patterns to translation file paths.

use std::{
    collections::HashSet,
    path::{Component, PathBuf},
};

use anyhow::{Context, Result};
use glob::glob;

/// Expand glob patterns into a deduplicated list of file paths.
///
/// Matches of each pattern are sorted; patterns keep their command-line order
/// and a path matched twice keeps its first position. A pattern that matches
/// nothing is passed through as a literal path so that loading it reports
/// the missing file.
///
/// Paths are compared without a leading `./`, so `a.json` and `./a.json`
/// name the same file.
pub fn expand_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let entries =
            glob(pattern).with_context(|| format!("Invalid glob pattern: \"{}\"", pattern))?;
        let mut matches = collect_matches(pattern, entries)?;

        if matches.is_empty() {
            matches.push(normalize(PathBuf::from(pattern)));
        }
        matches.sort();

        for path in matches {
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

fn collect_matches<I, E>(pattern: &str, entries: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = Result<PathBuf, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    let mut matches = Vec::new();
    for entry in entries {
        let path =
            entry.with_context(|| format!("Failed to read a match of pattern \"{}\"", pattern))?;
        if !path.is_dir() {
            matches.push(normalize(path));
        }
    }
    Ok(matches)
}

fn normalize(path: PathBuf) -> PathBuf {
    let stripped: PathBuf = path
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();
    if stripped.as_os_str().is_empty() {
        path
    } else {
        stripped
    }
}
