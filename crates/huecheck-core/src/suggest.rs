//! Accessible replacement colors for failing pairs.
//!
//! Adjustments keep the text color's hue and saturation and move only its
//! HSL lightness. For a fixed hue and saturation every RGB channel is
//! non-decreasing in lightness, so luminance is too, and the search can
//! bisect over the integer lightness range.

use crate::color::{Color, Hsl};
use crate::compliance::{evaluate_compliance, ContrastResult, AA_NORMAL};
use crate::contrast::contrast_ratio;
use serde::{Deserialize, Serialize};

/// Target used when none is given: AA for normal text.
pub const DEFAULT_MIN_RATIO: f64 = AA_NORMAL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Lighter,
    Darker,
}

/// A proposed text/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Suggested text color
    pub text: Color,
    /// Background color (kept as given)
    pub background: Color,
    /// Compliance of the suggested pair
    pub result: ContrastResult,
    /// Whether the text color differs from the input
    pub adjusted: bool,
}

/// Find the text color closest in lightness to `text` that reaches
/// `min_ratio` against `background`.
///
/// Darkens on light backgrounds and lightens on dark ones, falling back to
/// the other direction when the preferred one cannot reach the target.
/// Returns `None` when neither direction can.
#[must_use]
pub fn suggest_text_color(text: Color, background: Color, min_ratio: f64) -> Option<Color> {
    if contrast_ratio(text, background) >= min_ratio {
        return Some(text);
    }

    let base = text.to_hsl();
    let order = if background.is_light() {
        [Direction::Darker, Direction::Lighter]
    } else {
        [Direction::Lighter, Direction::Darker]
    };

    order
        .into_iter()
        .find_map(|direction| search_lightness(base, background, min_ratio, direction))
}

/// Suggest a pair that reaches `min_ratio`.
///
/// Passing pairs come back unchanged. Otherwise the text lightness is
/// adjusted; if that cannot reach the target, black or white text is used,
/// whichever contrasts more with the background.
#[must_use]
pub fn suggest_pair(text: Color, background: Color, min_ratio: f64) -> Suggestion {
    let suggested = suggest_text_color(text, background, min_ratio)
        .unwrap_or_else(|| best_black_or_white(background));

    if suggested != text {
        tracing::debug!(
            from = %text,
            to = %suggested,
            %background,
            min_ratio,
            "suggested text color"
        );
    }

    Suggestion {
        text: suggested,
        background,
        result: evaluate_compliance(contrast_ratio(suggested, background)),
        adjusted: suggested != text,
    }
}

/// Black or white, whichever contrasts more with `background`.
#[must_use]
pub fn best_black_or_white(background: Color) -> Color {
    if contrast_ratio(Color::BLACK, background) >= contrast_ratio(Color::WHITE, background) {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

fn search_lightness(
    base: Hsl,
    background: Color,
    min_ratio: f64,
    direction: Direction,
) -> Option<Color> {
    let bg_luminance = background.relative_luminance();
    let at = |l: u8| Hsl::new(base.h, base.s, l).to_color();

    // Monotone in l: stays on one side of the background and reaches the ratio.
    let passes = |l: u8| {
        let candidate = at(l);
        let luminance = candidate.relative_luminance();
        let on_side = match direction {
            Direction::Lighter => luminance >= bg_luminance,
            Direction::Darker => luminance <= bg_luminance,
        };
        on_side && contrast_ratio(candidate, background) >= min_ratio
    };

    match direction {
        Direction::Lighter => {
            let (mut lo, mut hi) = (base.l, 100);
            if !passes(hi) {
                return None;
            }
            while lo < hi {
                let mid = lo + (hi - lo) / 2;
                if passes(mid) {
                    hi = mid;
                } else {
                    lo = mid + 1;
                }
            }
            Some(at(lo))
        }
        Direction::Darker => {
            let (mut lo, mut hi) = (0, base.l);
            if !passes(lo) {
                return None;
            }
            while lo < hi {
                let mid = lo + (hi - lo + 1) / 2;
                if passes(mid) {
                    lo = mid;
                } else {
                    hi = mid - 1;
                }
            }
            Some(at(lo))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    #[test]
    fn test_passing_pair_is_unchanged() {
        let text = hex("#22c55e");
        let bg = hex("#0a0a0a");
        assert_eq!(suggest_text_color(text, bg, DEFAULT_MIN_RATIO), Some(text));

        let s = suggest_pair(text, bg, DEFAULT_MIN_RATIO);
        assert!(!s.adjusted);
        assert_eq!(s.text, text);
        assert_eq!(s.background, bg);
    }

    #[test]
    fn test_darkens_on_light_background() {
        let text = hex("#777777");
        let bg = hex("#808080");
        let suggested = suggest_text_color(text, bg, DEFAULT_MIN_RATIO).unwrap();

        assert!(suggested.relative_luminance() < text.relative_luminance());
        assert!(contrast_ratio(suggested, bg) >= DEFAULT_MIN_RATIO);
        // Grays stay gray.
        assert_eq!(suggested.r, suggested.g);
        assert_eq!(suggested.g, suggested.b);
    }

    #[test]
    fn test_lightens_on_dark_background() {
        let text = hex("#333333");
        let bg = hex("#0a0a0a");
        let suggested = suggest_text_color(text, bg, DEFAULT_MIN_RATIO).unwrap();

        assert!(suggested.relative_luminance() > text.relative_luminance());
        assert!(contrast_ratio(suggested, bg) >= DEFAULT_MIN_RATIO);
    }

    #[test]
    fn test_closest_lightness_is_chosen() {
        let text = hex("#333333");
        let bg = hex("#0a0a0a");
        let suggested = suggest_text_color(text, bg, DEFAULT_MIN_RATIO).unwrap();
        let hsl = suggested.to_hsl();

        // One step darker no longer passes.
        let darker = Hsl::new(hsl.h, hsl.s, hsl.l - 1).to_color();
        assert!(contrast_ratio(darker, bg) < DEFAULT_MIN_RATIO);
    }

    #[test]
    fn test_keeps_hue() {
        let text = hex("#4ade80");
        let bg = hex("#ffffff");
        let suggested = suggest_text_color(text, bg, DEFAULT_MIN_RATIO).unwrap();
        let before = text.to_hsl();
        let after = suggested.to_hsl();
        assert!(before.h.abs_diff(after.h) <= 2, "{before} -> {after}");
    }

    #[test]
    fn test_unreachable_target() {
        assert_eq!(suggest_text_color(hex("#777777"), hex("#808080"), 22.0), None);

        let s = suggest_pair(hex("#777777"), hex("#808080"), 22.0);
        assert!(s.adjusted);
        assert_eq!(s.text, Color::BLACK);
    }

    #[test]
    fn test_best_black_or_white() {
        assert_eq!(best_black_or_white(Color::WHITE), Color::BLACK);
        assert_eq!(best_black_or_white(Color::BLACK), Color::WHITE);
        assert_eq!(best_black_or_white(hex("#0a0a0a")), Color::WHITE);
        assert_eq!(best_black_or_white(hex("#f5f5f5")), Color::BLACK);
    }

    proptest! {
        #[test]
        fn prop_pair_meets_aa(r1: u8, g1: u8, b1: u8, r2: u8, g2: u8, b2: u8) {
            let s = suggest_pair(Color::rgb(r1, g1, b1), Color::rgb(r2, g2, b2), DEFAULT_MIN_RATIO);
            prop_assert!(s.result.aa_normal, "ratio {}", s.result.ratio);
        }

        #[test]
        fn prop_suggested_text_meets_target(
            r1: u8, g1: u8, b1: u8, r2: u8, g2: u8, b2: u8, target in 1.0f64..=7.0
        ) {
            let bg = Color::rgb(r2, g2, b2);
            if let Some(text) = suggest_text_color(Color::rgb(r1, g1, b1), bg, target) {
                prop_assert!(contrast_ratio(text, bg) >= target);
            }
        }
    }
}
