//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `merge`: Merge translation files into one document
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::MergeOptions;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    /// Translation files or glob patterns, merged in the order given
    #[arg(required = true, value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Write the merged document to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip unreadable files and keep the first value on conflicts
    #[arg(long)]
    pub ignore_errors: bool,

    /// Keep first-seen order instead of sorting by key
    #[arg(long)]
    pub no_sort: bool,

    /// Do not fill empty contexts from later duplicates
    #[arg(long)]
    pub no_merge_context: bool,

    /// Do not check that keys are MD5 digests of their values
    #[arg(long)]
    pub no_md5_check: bool,

    /// Language tag of the merged document (overrides config file)
    #[arg(long, value_name = "TAG", env = "TRANSMERGE_LANGUAGE")]
    pub language: Option<String>,

    /// Also print informational diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

impl MergeCommand {
    /// Apply command-line overrides on top of configured options.
    pub fn apply_to(&self, options: &mut MergeOptions) {
        if self.ignore_errors {
            options.ignore_errors = true;
        }
        if self.no_sort {
            options.sort = false;
        }
        if self.no_merge_context {
            options.merge_context = false;
        }
        if self.no_md5_check {
            options.md5_check = false;
        }
        if let Some(language) = &self.language {
            options.language = language.clone();
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge translation files into one deduplicated JSON document
    Merge(MergeCommand),
    /// Initialize a new .transmergerc.json configuration file
    Init,
}
