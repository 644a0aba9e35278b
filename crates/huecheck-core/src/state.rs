//! Checker state for interactive front ends.
//!
//! This module follows the Elm Architecture: `State + Message → (State, Command)`.
//! [`CheckerState`] holds the two colors being compared; every edit a color
//! control can make is a [`CheckerMessage`], and the contrast result is
//! derived from the current pair on demand.
//!
//! # Examples
//!
//! ```
//! use huecheck_core::{CheckerMessage, CheckerState, ColorTarget, State};
//!
//! let mut state = CheckerState::default();
//! state.update(CheckerMessage::SetHex(ColorTarget::Text, "#777777".into()));
//! state.update(CheckerMessage::SetHex(ColorTarget::Background, "#808080".into()));
//! assert!(!state.result().aa_large);
//! ```

use crate::color::{Color, Hsl};
use crate::compliance::{evaluate_compliance, ContrastResult};
use serde::{Deserialize, Serialize};

/// Application state trait.
///
/// Implements the Elm Architecture: State + Message → (State, Command)
pub trait State: Clone + Serialize + for<'de> Deserialize<'de> + Send + Sync {
    /// Message type for state updates
    type Message: Send;

    /// Update state in response to a message.
    ///
    /// Returns a command describing side effects for the host to run.
    fn update(&mut self, msg: Self::Message) -> Command;
}

/// Side effects requested by a state update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// No command
    #[default]
    None,
    /// Execute multiple commands
    Batch(Vec<Command>),
    /// Save state to storage
    SaveState {
        /// Storage key
        key: String,
    },
}

impl Command {
    /// Create a batch of commands.
    pub fn batch(commands: impl IntoIterator<Item = Self>) -> Self {
        Self::Batch(commands.into_iter().collect())
    }

    /// Check if this is the none command.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Storage key under which hosts persist the checker pair.
pub const CHECKER_STATE_KEY: &str = "checker-colors";

/// Which of the two colors a message edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTarget {
    /// Foreground / text color
    Text,
    /// Background color
    Background,
}

/// RGB channel selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RgbChannel {
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
}

/// HSL component selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HslComponent {
    /// Hue, degrees
    Hue,
    /// Saturation, percent
    Saturation,
    /// Lightness, percent
    Lightness,
}

/// The color pair being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerState {
    /// Text color
    pub text: Color,
    /// Background color
    pub background: Color,
}

impl Default for CheckerState {
    fn default() -> Self {
        Self {
            text: Color::rgb(0x22, 0xc5, 0x5e),
            background: Color::rgb(0x0a, 0x0a, 0x0a),
        }
    }
}

/// Messages for the checker state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerMessage {
    /// Hex entry; incomplete or invalid input is ignored
    SetHex(ColorTarget, String),
    /// Color picker
    SetColor(ColorTarget, Color),
    /// RGB slider
    SetRgbChannel(ColorTarget, RgbChannel, u8),
    /// HSL slider
    SetHslComponent(ColorTarget, HslComponent, u16),
    /// Exchange text and background
    Swap,
    /// Restore the default pair
    Reset,
}

impl CheckerState {
    /// Create a state for a pair.
    #[must_use]
    pub const fn new(text: Color, background: Color) -> Self {
        Self { text, background }
    }

    /// Current color for a target.
    #[must_use]
    pub const fn color(&self, target: ColorTarget) -> Color {
        match target {
            ColorTarget::Text => self.text,
            ColorTarget::Background => self.background,
        }
    }

    /// Contrast result for the current pair.
    #[must_use]
    pub fn result(&self) -> ContrastResult {
        evaluate_compliance(self.text.contrast_ratio(&self.background))
    }

    fn slot(&mut self, target: ColorTarget) -> &mut Color {
        match target {
            ColorTarget::Text => &mut self.text,
            ColorTarget::Background => &mut self.background,
        }
    }

    fn edited(&self, msg: CheckerMessage) -> Option<Self> {
        let mut next = *self;
        match msg {
            CheckerMessage::SetHex(target, input) => match Color::from_hex(&input) {
                Ok(color) => *next.slot(target) = color,
                Err(err) => {
                    tracing::debug!(error = %err, "ignoring hex input");
                    return None;
                }
            },
            CheckerMessage::SetColor(target, color) => *next.slot(target) = color,
            CheckerMessage::SetRgbChannel(target, channel, value) => {
                let color = next.slot(target);
                match channel {
                    RgbChannel::Red => color.r = value,
                    RgbChannel::Green => color.g = value,
                    RgbChannel::Blue => color.b = value,
                }
            }
            CheckerMessage::SetHslComponent(target, component, value) => {
                let color = next.slot(target);
                let hsl = color.to_hsl();
                let clamp = |v: u16| v.min(100) as u8;
                let edited = match component {
                    HslComponent::Hue => Hsl::new(value, hsl.s, hsl.l),
                    HslComponent::Saturation => Hsl::new(hsl.h, clamp(value), hsl.l),
                    HslComponent::Lightness => Hsl::new(hsl.h, hsl.s, clamp(value)),
                };
                *color = edited.to_color();
            }
            CheckerMessage::Swap => std::mem::swap(&mut next.text, &mut next.background),
            CheckerMessage::Reset => next = Self::default(),
        }
        Some(next)
    }
}

impl State for CheckerState {
    type Message = CheckerMessage;

    fn update(&mut self, msg: Self::Message) -> Command {
        match self.edited(msg) {
            Some(next) if next != *self => {
                *self = next;
                Command::SaveState {
                    key: CHECKER_STATE_KEY.to_string(),
                }
            }
            _ => Command::None,
        }
    }
}
