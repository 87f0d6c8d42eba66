use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_OUTPUT_LANGUAGE, MergeOptions};

pub const CONFIG_FILE_NAME: &str = ".transmergerc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub ignore_errors: bool,
    #[serde(default = "default_true")]
    pub sort: bool,
    #[serde(default = "default_true")]
    pub merge_context: bool,
    #[serde(default = "default_true", alias = "md5check")]
    pub md5_check: bool,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_true() -> bool {
    true
}

fn default_language() -> String {
    DEFAULT_OUTPUT_LANGUAGE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore_errors: false,
            sort: default_true(),
            merge_context: default_true(),
            md5_check: default_true(),
            language: default_language(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        validate_language(&self.language)
    }

    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            ignore_errors: self.ignore_errors,
            sort: self.sort,
            merge_context: self.merge_context,
            md5_check: self.md5_check,
            language: self.language.clone(),
        }
    }
}

/// The output language tag must contain something other than whitespace.
pub fn validate_language(language: &str) -> Result<()> {
    if language.trim().is_empty() {
        anyhow::bail!("'language' must not be empty");
    }
    Ok(())
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Walk up from `start_dir` looking for the config file, stopping at the
/// repository root.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
