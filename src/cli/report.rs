//! Diagnostic and summary printing.
//!
//! Everything here goes to stderr; stdout carries only the merged document.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::MergeOutcome;
use crate::diagnostics::{Diagnostic, DiagnosticLog, Severity};
use crate::error::MergeError;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_diagnostics(log: &DiagnosticLog, verbose: bool) {
    print_diagnostics_to(log, verbose, &mut io::stderr().lock());
}

/// Warnings are always printed, info only when `verbose`.
pub fn print_diagnostics_to<W: Write>(log: &DiagnosticLog, verbose: bool, writer: &mut W) {
    for diagnostic in log.iter() {
        if diagnostic.is_warning() || verbose {
            print_diagnostic(diagnostic, writer);
        }
    }
}

pub fn print_summary(outcome: &MergeOutcome, log: &DiagnosticLog) {
    print_summary_to(outcome, log, &mut io::stderr().lock());
}

pub fn print_summary_to<W: Write>(outcome: &MergeOutcome, log: &DiagnosticLog, writer: &mut W) {
    let translations = outcome.document.len();
    let mut msg = format!(
        "Merged {} {} from {} {}",
        translations,
        plural(translations, "translation", "translations"),
        outcome.files_merged,
        plural(outcome.files_merged, "file", "files"),
    );
    if outcome.files_skipped > 0 {
        msg.push_str(&format!(
            ", skipped {} {}",
            outcome.files_skipped,
            plural(outcome.files_skipped, "file", "files")
        ));
    }

    let warnings = log.warning_count();
    if warnings > 0 {
        let _ = writeln!(
            writer,
            "{} {} ({} {})",
            SUCCESS_MARK.green(),
            msg.green(),
            warnings,
            plural(warnings, "warning", "warnings").yellow()
        );
    } else {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
    }
}

pub fn print_failure(err: &MergeError) {
    print_failure_to(err, &mut io::stderr().lock());
}

pub fn print_failure_to<W: Write>(err: &MergeError, writer: &mut W) {
    let _ = writeln!(writer, "{}: {}", "error".bold().red(), err);
    // Lenient mode only skips bad files and conflicts.
    if matches!(err, MergeError::Collation(_)) {
        return;
    }
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        "use --ignore-errors to skip and continue".dimmed()
    );
}

fn print_diagnostic<W: Write>(diagnostic: &Diagnostic, writer: &mut W) {
    let severity = match diagnostic.severity {
        Severity::Warning => diagnostic.severity.to_string().bold().yellow(),
        Severity::Info => diagnostic.severity.to_string().bold().cyan(),
    };
    let _ = writeln!(writer, "{}: {}", severity, diagnostic);
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
