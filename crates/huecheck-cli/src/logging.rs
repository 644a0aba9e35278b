//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Log output goes to stderr so reports on stdout stay machine-readable.
//!
//! - 0 (no `-v`): the configured `log_level` (default `warn`)
//! - 1 (`-v`): debug
//! - 2+ (`-vv`): trace
//!
//! `RUST_LOG` overrides all of the above.

use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CRATES: [&str; 2] = ["huecheck", "huecheck_core"];

/// Configuration for logging behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LogConfig {
    /// Level for huecheck crates, e.g. `warn` or `debug`.
    pub(crate) level: String,
    /// Whether to use ANSI colors in output.
    pub(crate) with_ansi: bool,
}

impl LogConfig {
    /// Level from the `-v` count, falling back to the configured level.
    pub(crate) fn from_verbosity(verbosity: u8, configured: &str) -> Self {
        let level = match verbosity {
            0 => configured.to_lowercase(),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        };
        Self {
            level,
            with_ansi: true,
        }
    }

    /// Enable or disable ANSI colors.
    #[must_use]
    pub(crate) fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    /// Filter directive used when `RUST_LOG` is unset.
    ///
    /// External crates stay at `warn`.
    pub(crate) fn directive(&self) -> String {
        let mut directive = String::from("warn");
        for krate in CRATES {
            directive.push(',');
            directive.push_str(krate);
            directive.push('=');
            directive.push_str(&self.level);
        }
        directive
    }
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.directive()))
}

/// Install the global subscriber. Later calls are ignored.
pub(crate) fn init_logging(config: &LogConfig) {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time();

    if tracing_subscriber::registry()
        .with(build_env_filter(config))
        .with(layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
