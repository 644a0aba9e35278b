//! User preferences injected into the UI layer.
//!
//! The UI never touches browser storage directly: it receives a
//! [`Preferences`] built over any [`KeyValueStore`] and uses its typed
//! get/set methods.

use super::storage::{KeyValueStore, StorageError};
use huecheck_core::{CheckerState, Command, CHECKER_STATE_KEY};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Key for the color theme.
pub const THEME_KEY: &str = "theme";

/// How long a remembered color pair is kept.
pub const PAIR_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// UI color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme
    Light,
    /// Dark theme
    #[default]
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Typed preferences over a key/value store.
#[derive(Debug)]
pub struct Preferences<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    /// Wrap a store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Saved theme, or the default when unset or unreadable.
    pub fn theme(&self) -> Theme {
        self.store
            .get_json(THEME_KEY)
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Save the theme.
    pub fn set_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.store.set_json(THEME_KEY, &theme)
    }

    /// Last saved color pair, if it is still fresh and parses.
    pub fn last_pair(&self) -> Option<CheckerState> {
        let json = self.store.get_with_expiry(CHECKER_STATE_KEY)?;
        match serde_json::from_str(&json) {
            Ok(state) => Some(state),
            Err(err) => {
                tracing::debug!(error = %err, "discarding unreadable color pair");
                None
            }
        }
    }

    /// Save the color pair.
    pub fn save_pair(&self, state: &CheckerState) -> Result<(), StorageError> {
        let json = serde_json::to_string(state)?;
        self.store
            .set_with_expiry(CHECKER_STATE_KEY, &json, PAIR_TTL)
    }

    /// Run the storage side of a state update's command.
    pub fn apply(&self, command: &Command, state: &CheckerState) -> Result<(), StorageError> {
        match command {
            Command::None => Ok(()),
            Command::Batch(commands) => commands.iter().try_for_each(|c| self.apply(c, state)),
            Command::SaveState { key } if key == CHECKER_STATE_KEY => self.save_pair(state),
            Command::SaveState { key } => {
                tracing::debug!(key, "no preference stored under key");
                Ok(())
            }
        }
    }

    /// Restore the saved pair, or the default pair.
    pub fn initial_state(&self) -> CheckerState {
        self.last_pair().unwrap_or_default()
    }
}
