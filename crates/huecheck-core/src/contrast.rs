//! WCAG 2.x relative luminance and contrast ratio.
//!
//! The formulas follow the WCAG 2.x definitions exactly, including the
//! `0.03928` linearization threshold.
//!
//! - Relative luminance: <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
//! - Contrast ratio: <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>

use crate::color::Color;
use crate::compliance::{evaluate_compliance, ContrastResult};
use crate::error::ColorError;

/// Normalized channel values at or below this are linear.
pub const LINEAR_THRESHOLD: f64 = 0.03928;

/// Luminance weights for linear R, G and B.
pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Flare offset added to both luminances before dividing.
const FLARE: f64 = 0.05;

/// Linearize an 8-bit sRGB channel.
#[must_use]
pub fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color.
///
/// Returns a value in `[0.0, 1.0]` where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let [wr, wg, wb] = LUMINANCE_WEIGHTS;
    wr * linearize(color.r) + wg * linearize(color.g) + wb * linearize(color.b)
}

/// Compute the contrast ratio between two colors.
///
/// Returns a value in `[1.0, 21.0]` regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + FLARE) / (darker + FLARE)
}

/// Parse two hex strings and compute their contrast ratio.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64, ColorError> {
    Ok(contrast_ratio(Color::from_hex(a)?, Color::from_hex(b)?))
}

/// Parse a text and background color and evaluate WCAG compliance.
pub fn check_contrast(text: &str, background: &str) -> Result<ContrastResult, ColorError> {
    let text = Color::from_hex(text)?;
    let background = Color::from_hex(background)?;
    let result = evaluate_compliance(contrast_ratio(text, background));
    tracing::debug!(
        %text,
        %background,
        ratio = result.ratio,
        aa_normal = result.aa_normal,
        "evaluated contrast"
    );
    Ok(result)
}
