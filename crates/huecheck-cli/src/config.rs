//! YAML configuration for the CLI.
//!
//! Searched at `--config`, then `$XDG_CONFIG_HOME/huecheck/config.yaml`,
//! then `~/.config/huecheck/config.yaml`. A missing file means defaults.
//!
//! ```yaml
//! format: json
//! level: aaa
//! text_size: large
//! min_ratio: 7.0
//! color: false
//! log_level: debug
//! ```

use crate::error::CliError;
use clap::ValueEnum;
use huecheck_core::{TextSize, WcagLevel, DEFAULT_MIN_RATIO};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "huecheck/config.yaml";

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// CLI defaults, overridable per invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Output format when `--format` is not given.
    pub(crate) format: OutputFormat,
    /// Level a pair must meet for `check` to exit 0.
    pub(crate) level: WcagLevel,
    /// Text size the level is evaluated for.
    pub(crate) text_size: TextSize,
    /// Target ratio for `suggest`.
    pub(crate) min_ratio: f64,
    /// ANSI styling in text output.
    pub(crate) color: bool,
    /// Default log filter when neither `-v` nor `RUST_LOG` is set.
    pub(crate) log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            level: WcagLevel::Aa,
            text_size: TextSize::Normal,
            min_ratio: DEFAULT_MIN_RATIO,
            color: true,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// XDG-compliant paths to search, in order.
    pub(crate) fn config_paths() -> Vec<PathBuf> {
        Self::config_paths_from(
            std::env::var("XDG_CONFIG_HOME").ok(),
            std::env::var("HOME").ok(),
        )
    }

    /// Search paths for the given environment values.
    #[allow(clippy::needless_pass_by_value)]
    pub(crate) fn config_paths_from(xdg_config_home: Option<String>, home: Option<String>) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(xdg) = xdg_config_home.filter(|s| !s.is_empty()) {
            paths.push(PathBuf::from(xdg).join(CONFIG_FILE));
        }
        if let Some(home) = home.filter(|s| !s.is_empty()) {
            paths.push(PathBuf::from(home).join(".config").join(CONFIG_FILE));
        }

        paths
    }

    /// Load the config.
    ///
    /// An explicit path must exist. Otherwise the first existing search path
    /// is used, falling back to defaults.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match Self::config_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub(crate) fn load_from_file(path: &Path) -> Result<Self, CliError> {
        let contents = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_yaml(&contents).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse YAML; an empty document yields the defaults.
    pub(crate) fn parse_yaml(contents: &str) -> Result<Self, serde_yaml_ng::Error> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(contents)
    }
}
