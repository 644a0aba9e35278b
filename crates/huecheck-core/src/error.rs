//! Error types for the contrast engine.

use thiserror::Error;

/// Errors raised while parsing color input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input is not `#RRGGBB` or `RRGGBB` hex.
    #[error("invalid color format: {0:?} (expected #RRGGBB)")]
    InvalidColorFormat(String),
}

impl ColorError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidColorFormat(input) => input,
        }
    }
}
