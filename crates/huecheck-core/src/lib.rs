//! Contrast engine for the huecheck color accessibility checker.
//!
//! This crate provides the pure, deterministic core used by every front end:
//! - Color representation: [`Color`] (24-bit RGB, hex) and [`Hsl`]
//! - WCAG 2.x relative luminance and contrast ratio: [`contrast`]
//! - The AA/AAA threshold table: [`ContrastResult`], [`evaluate_compliance`]
//! - Accessible replacement colors: [`suggest_pair`]
//! - Plain-language explanations with a pluggable backend: [`Explainer`]
//! - Checker state for interactive UIs: [`CheckerState`]
//!
//! ```
//! use huecheck_core::check_contrast;
//!
//! let result = check_contrast("#000000", "#FFFFFF").unwrap();
//! assert!((result.ratio - 21.0).abs() < 1e-6);
//! assert!(result.aaa_normal);
//! ```

mod color;
mod compliance;
pub mod contrast;
mod error;
pub mod explain;
mod state;
pub mod suggest;

pub use color::{Color, Hsl};
pub use compliance::{
    evaluate_compliance, threshold, ContrastResult, Rating, Recommendation, TextSize, WcagLevel,
    AAA_LARGE, AAA_NORMAL, AA_LARGE, AA_NORMAL,
};
pub use contrast::{check_contrast, contrast_ratio, contrast_ratio_hex, relative_luminance};
pub use error::ColorError;
pub use explain::{
    Explainer, ExplainError, Explanation, ExplanationRequest, ExplanationStrategy,
    HeuristicExplainer, UsageContext,
};
pub use state::{
    CheckerMessage, CheckerState, ColorTarget, Command, HslComponent, RgbChannel, State,
    CHECKER_STATE_KEY,
};
pub use suggest::{suggest_pair, suggest_text_color, Suggestion, DEFAULT_MIN_RATIO};

/// Parse a hex color string.
///
/// Equivalent to [`Color::from_hex`].
pub fn parse_hex_color(input: &str) -> Result<Color, ColorError> {
    Color::from_hex(input)
}

/// Format a color as lowercase `#rrggbb`.
#[must_use]
pub fn rgb_to_hex(color: Color) -> String {
    color.to_hex()
}

/// Convert RGB to HSL.
#[must_use]
pub fn rgb_to_hsl(color: Color) -> Hsl {
    color.to_hsl()
}

/// Convert HSL to RGB.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Color {
    hsl.to_color()
}
