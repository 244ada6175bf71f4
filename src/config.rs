//! Configuration file support for issue-notifier.
//!
//! Provides YAML-based configuration through `issue-notifier.config.yml`
//! files, and the merge of file values with command-line flags.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use issue_notifier::application::dto::OutputFormat;
use issue_notifier::shared::error::NotifierError;
use issue_notifier::shared::Result;

pub const CONFIG_FILENAME: &str = "issue-notifier.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub quiet: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Options in effect for one run, after merging config and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

/// Loads the config named by `-c`, or the one next to the fixture.
pub fn load_for(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => load_config_from_path(path).map(Some),
        None => {
            let dir = args
                .fixture
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            discover_config(dir)
        }
    }
}

/// Merges file values under command-line flags.
pub fn merge(args: &Args, config: Option<&ConfigFile>) -> Result<RunOptions> {
    let config_format = config
        .and_then(|c| c.format.as_deref())
        .map(parse_format)
        .transpose()?;

    Ok(RunOptions {
        format: args
            .format
            .or(config_format)
            .unwrap_or(OutputFormat::Json),
        output: args
            .output
            .clone()
            .or_else(|| config.and_then(|c| c.output.clone())),
        quiet: args.quiet || config.and_then(|c| c.quiet).unwrap_or(false),
    })
}

fn parse_format(value: &str) -> Result<OutputFormat> {
    value.parse::<OutputFormat>().map_err(|e| {
        NotifierError::Validation {
            message: format!("Invalid config: {}", e),
        }
        .into()
    })
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = config.format.as_deref() {
        parse_format(format)?;
    }
    if let Some(output) = &config.output {
        if output.as_os_str().is_empty() {
            return Err(NotifierError::Validation {
                message: "Invalid config: output must not be empty.".to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
