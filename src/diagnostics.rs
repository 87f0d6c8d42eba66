//! Non-fatal diagnostics produced while merging.
//!
//! The merge never prints. Everything worth reporting is handed to a
//! [`DiagnosticSink`] supplied by the caller; the CLI collects them in a
//! [`DiagnosticLog`] and prints them to stderr after the merge.

use std::{fmt, path::PathBuf};

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Same key and value seen again; the later entry was dropped.
    DuplicateSkipped { key: String, file: PathBuf },
    /// Empty context on the kept entry was filled from a later duplicate.
    ContextMerged {
        key: String,
        context: String,
        file: PathBuf,
    },
    /// Same key with a different value in lenient mode; first value kept.
    ConflictIgnored {
        key: String,
        kept: String,
        discarded: String,
        file: PathBuf,
    },
    /// An input file could not be loaded in lenient mode.
    FileSkipped { file: PathBuf, error: String },
    /// Key is not the MD5 digest of its value.
    HashMismatch {
        key: String,
        value: String,
        expected: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn duplicate_skipped(key: &str, file: impl Into<PathBuf>) -> Self {
        Self {
            severity: Severity::Info,
            kind: DiagnosticKind::DuplicateSkipped {
                key: key.to_string(),
                file: file.into(),
            },
        }
    }

    pub fn context_merged(key: &str, context: &str, file: impl Into<PathBuf>) -> Self {
        Self {
            severity: Severity::Info,
            kind: DiagnosticKind::ContextMerged {
                key: key.to_string(),
                context: context.to_string(),
                file: file.into(),
            },
        }
    }

    pub fn conflict_ignored(
        key: &str,
        kept: &str,
        discarded: &str,
        file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            kind: DiagnosticKind::ConflictIgnored {
                key: key.to_string(),
                kept: kept.to_string(),
                discarded: discarded.to_string(),
                file: file.into(),
            },
        }
    }

    pub fn file_skipped(file: impl Into<PathBuf>, error: impl fmt::Display) -> Self {
        Self {
            severity: Severity::Warning,
            kind: DiagnosticKind::FileSkipped {
                file: file.into(),
                error: error.to_string(),
            },
        }
    }

    pub fn hash_mismatch(key: &str, value: &str, expected: &str) -> Self {
        Self {
            severity: Severity::Warning,
            kind: DiagnosticKind::HashMismatch {
                key: key.to_string(),
                value: value.to_string(),
                expected: expected.to_string(),
            },
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::DuplicateSkipped { key, file } => {
                write!(f, "skipped duplicate key \"{}\" in {}", key, file.display())
            }
            DiagnosticKind::ContextMerged { key, context, file } => write!(
                f,
                "merged context \"{}\" into key \"{}\" from {}",
                context,
                key,
                file.display()
            ),
            DiagnosticKind::ConflictIgnored {
                key,
                kept,
                discarded,
                file,
            } => write!(
                f,
                "conflicting values for key \"{}\": kept \"{}\", discarded \"{}\" from {}",
                key,
                kept,
                discarded,
                file.display()
            ),
            DiagnosticKind::FileSkipped { file, error } => {
                write!(f, "skipped {}: {}", file.display(), error)
            }
            DiagnosticKind::HashMismatch {
                key,
                value,
                expected,
            } => write!(
                f,
                "key \"{}\" does not match md5 of \"{}\" (expected {})",
                key, value, expected
            ),
        }
    }
}

/// Receiver for diagnostics emitted during a merge.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Collects diagnostics in emission order.
#[derive(Debug, Default)]
pub struct DiagnosticLog {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }
}

impl DiagnosticSink for DiagnosticLog {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
