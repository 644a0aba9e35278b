//! Error types for the huecheck CLI.

use huecheck_core::{ColorError, ExplainError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a CLI run with exit code 2.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Malformed color argument.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Unknown `--context` value.
    #[error(transparent)]
    Explain(#[from] ExplainError),

    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid YAML for [`crate::config::Config`].
    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Minimum ratio outside `[1, 21]`.
    #[error("minimum ratio must be between 1 and 21, got {0}")]
    InvalidMinRatio(f64),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing to the terminal failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_error_is_transparent() {
        let err: CliError = huecheck_core::Color::from_hex("#12").unwrap_err().into();
        assert_eq!(
            err.to_string(),
            huecheck_core::Color::from_hex("#12").unwrap_err().to_string()
        );
    }

    #[test]
    fn test_config_read_mentions_path() {
        let err = CliError::ConfigRead {
            path: PathBuf::from("/nowhere/config.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nowhere/config.yaml"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_min_ratio_message() {
        assert_eq!(
            CliError::InvalidMinRatio(30.0).to_string(),
            "minimum ratio must be between 1 and 21, got 30"
        );
    }
}
