//! Command dispatch.
//!
//! Data problems in the inputs are reported and turned into
//! `ExitStatus::Failure`; everything returned as `Err` is an internal error.

use std::{
    env, fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command, MergeCommand},
    exit_status::ExitStatus,
    report,
};
use crate::config::{CONFIG_FILE_NAME, default_config_json, load_config, validate_language};
use crate::core::{TranslationDocument, expand_patterns, merge_files};
use crate::diagnostics::DiagnosticLog;

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Merge(cmd)) => merge(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(ExitStatus::Success)
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn merge(cmd: MergeCommand) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&cwd)?;
    if cmd.verbose
        && let Some(path) = &loaded.path
    {
        eprintln!("Using config {}", path.display());
    }

    let mut options = loaded.config.merge_options();
    cmd.apply_to(&mut options);
    validate_language(&options.language).context("Invalid output language")?;

    let paths = expand_patterns(&cmd.patterns)?;
    let mut log = DiagnosticLog::new();

    match merge_files(&paths, &options, &mut log) {
        Ok(outcome) => {
            report::print_diagnostics(&log, cmd.verbose);
            write_document(&outcome.document, cmd.output.as_deref())?;
            report::print_summary(&outcome, &log);
            Ok(ExitStatus::Success)
        }
        Err(err) => {
            report::print_diagnostics(&log, cmd.verbose);
            report::print_failure(&err);
            Ok(ExitStatus::Failure)
        }
    }
}

/// Pretty-print with two-space indentation and a trailing newline.
fn render_document(document: &TranslationDocument) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(document).context("Failed to serialize merged document")?;
    json.push('\n');
    Ok(json)
}

fn write_document(document: &TranslationDocument, output: Option<&Path>) -> Result<()> {
    let json = render_document(document)?;
    match output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write to stdout")
        }
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    eprintln!("{} Created {}", report::SUCCESS_MARK, CONFIG_FILE_NAME);
    Ok(())
}
