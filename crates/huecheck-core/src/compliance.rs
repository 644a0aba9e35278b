//! WCAG conformance thresholds and the derived [`ContrastResult`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WcagLevel {
    /// Level AA
    #[default]
    Aa,
    /// Level AAA
    Aaa,
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aa => write!(f, "AA"),
            Self::Aaa => write!(f, "AAA"),
        }
    }
}

/// WCAG text size category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    /// Body text
    #[default]
    Normal,
    /// At least 18pt, or 14pt bold
    Large,
}

impl TextSize {
    /// Human-readable label used in reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal Text",
            Self::Large => "Large Text (18pt+ or 14pt bold)",
        }
    }
}

/// AA, large text.
pub const AA_LARGE: f64 = 3.0;
/// AA, normal text.
pub const AA_NORMAL: f64 = 4.5;
/// AAA, large text.
pub const AAA_LARGE: f64 = 4.5;
/// AAA, normal text.
pub const AAA_NORMAL: f64 = 7.0;

/// Minimum contrast ratio for a level and text size.
#[must_use]
pub const fn threshold(level: WcagLevel, size: TextSize) -> f64 {
    match (level, size) {
        (WcagLevel::Aa, TextSize::Large) => AA_LARGE,
        (WcagLevel::Aa, TextSize::Normal) => AA_NORMAL,
        (WcagLevel::Aaa, TextSize::Large) => AAA_LARGE,
        (WcagLevel::Aaa, TextSize::Normal) => AAA_NORMAL,
    }
}

/// Contrast ratio plus pass/fail for every level and text size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    /// Contrast ratio in `[1, 21]`
    pub ratio: f64,
    /// Passes AA for large text
    pub aa_large: bool,
    /// Passes AA for normal text
    pub aa_normal: bool,
    /// Passes AAA for large text
    pub aaa_large: bool,
    /// Passes AAA for normal text
    pub aaa_normal: bool,
}

impl ContrastResult {
    /// Evaluate every threshold against `ratio`. Boundaries are inclusive.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            aa_large: ratio >= AA_LARGE,
            aa_normal: ratio >= AA_NORMAL,
            aaa_large: ratio >= AAA_LARGE,
            aaa_normal: ratio >= AAA_NORMAL,
        }
    }

    /// Whether the ratio meets `level` for `size`.
    #[must_use]
    pub const fn passes(&self, level: WcagLevel, size: TextSize) -> bool {
        match (level, size) {
            (WcagLevel::Aa, TextSize::Large) => self.aa_large,
            (WcagLevel::Aa, TextSize::Normal) => self.aa_normal,
            (WcagLevel::Aaa, TextSize::Large) => self.aaa_large,
            (WcagLevel::Aaa, TextSize::Normal) => self.aaa_normal,
        }
    }

    /// Quality tier of the ratio.
    #[must_use]
    pub fn rating(&self) -> Rating {
        Rating::from_ratio(self.ratio)
    }

    /// Guidance for the current pair.
    #[must_use]
    pub const fn recommendation(&self) -> Recommendation {
        if self.aa_normal {
            Recommendation::MeetsAa
        } else if self.aa_large {
            Recommendation::LargeTextOnly
        } else {
            Recommendation::Fails
        }
    }

    /// Ratio formatted as `8.69:1`.
    #[must_use]
    pub fn ratio_label(&self) -> String {
        format!("{:.2}:1", self.ratio)
    }
}

/// Evaluate the WCAG threshold table for a contrast ratio.
#[must_use]
pub fn evaluate_compliance(ratio: f64) -> ContrastResult {
    ContrastResult::from_ratio(ratio)
}

/// Quality tier of a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    /// Below 3:1
    Poor,
    /// At least 3:1, large text only
    LargeTextOnly,
    /// At least 4.5:1
    Good,
    /// At least 7:1
    Excellent,
}

impl Rating {
    /// Tier for a ratio.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AAA_NORMAL {
            Self::Excellent
        } else if ratio >= AA_NORMAL {
            Self::Good
        } else if ratio >= AA_LARGE {
            Self::LargeTextOnly
        } else {
            Self::Poor
        }
    }
}

/// Three-way recommendation shown next to a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    /// Meets AA for normal text
    MeetsAa,
    /// Only meets AA for large text
    LargeTextOnly,
    /// Fails every threshold
    Fails,
}

impl Recommendation {
    /// Message text.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MeetsAa => "Your color combination meets WCAG AA standards for normal text.",
            Self::LargeTextOnly => {
                "Your colors work for large text but need improvement for normal text. \
                 Consider increasing contrast."
            }
            Self::Fails => {
                "Your color combination doesn't meet WCAG standards. \
                 Please choose colors with higher contrast."
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_threshold_table() {
        assert_eq!(threshold(WcagLevel::Aa, TextSize::Large), 3.0);
        assert_eq!(threshold(WcagLevel::Aa, TextSize::Normal), 4.5);
        assert_eq!(threshold(WcagLevel::Aaa, TextSize::Large), 4.5);
        assert_eq!(threshold(WcagLevel::Aaa, TextSize::Normal), 7.0);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let r = evaluate_compliance(3.0);
        assert!(r.aa_large);
        assert!(!r.aa_normal);

        let r = evaluate_compliance(4.5);
        assert!(r.aa_normal);
        assert!(r.aaa_large);
        assert!(!r.aaa_normal);

        let r = evaluate_compliance(7.0);
        assert!(r.aaa_normal);
    }

    #[test]
    fn test_just_below_boundaries() {
        let r = evaluate_compliance(2.999_999);
        assert!(!r.aa_large);
        let r = evaluate_compliance(4.499_999);
        assert!(r.aa_large);
        assert!(!r.aa_normal);
        assert!(!r.aaa_large);
        let r = evaluate_compliance(6.999_999);
        assert!(!r.aaa_normal);
    }

    #[test]
    fn test_passes_matches_flags() {
        let r = evaluate_compliance(5.0);
        assert!(r.passes(WcagLevel::Aa, TextSize::Normal));
        assert!(r.passes(WcagLevel::Aa, TextSize::Large));
        assert!(r.passes(WcagLevel::Aaa, TextSize::Large));
        assert!(!r.passes(WcagLevel::Aaa, TextSize::Normal));
    }

    #[test]
    fn test_rating_tiers() {
        assert_eq!(Rating::from_ratio(21.0), Rating::Excellent);
        assert_eq!(Rating::from_ratio(7.0), Rating::Excellent);
        assert_eq!(Rating::from_ratio(5.0), Rating::Good);
        assert_eq!(Rating::from_ratio(3.5), Rating::LargeTextOnly);
        assert_eq!(Rating::from_ratio(1.0), Rating::Poor);
        assert!(Rating::Excellent > Rating::Poor);
    }

    #[test]
    fn test_recommendation() {
        assert_eq!(
            evaluate_compliance(8.0).recommendation(),
            Recommendation::MeetsAa
        );
        assert_eq!(
            evaluate_compliance(3.2).recommendation(),
            Recommendation::LargeTextOnly
        );
        assert_eq!(evaluate_compliance(1.2).recommendation(), Recommendation::Fails);
        assert!(Recommendation::Fails.to_string().contains("higher contrast"));
    }

    #[test]
    fn test_ratio_label() {
        assert_eq!(evaluate_compliance(8.688_7).ratio_label(), "8.69:1");
        assert_eq!(evaluate_compliance(21.0).ratio_label(), "21.00:1");
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let json = serde_json::to_value(evaluate_compliance(4.5)).unwrap();
        assert_eq!(json["ratio"], 4.5);
        assert_eq!(json["aaLarge"], true);
        assert_eq!(json["aaNormal"], true);
        assert_eq!(json["aaaLarge"], true);
        assert_eq!(json["aaaNormal"], false);
    }

    #[test]
    fn test_level_and_size_serde() {
        assert_eq!(serde_json::to_string(&WcagLevel::Aaa).unwrap(), "\"aaa\"");
        assert_eq!(
            serde_json::from_str::<TextSize>("\"large\"").unwrap(),
            TextSize::Large
        );
        assert_eq!(WcagLevel::Aa.to_string(), "AA");
    }

    proptest! {
        #[test]
        fn prop_aaa_normal_implies_all(ratio in 1.0f64..=21.0) {
            let r = evaluate_compliance(ratio);
            if r.aaa_normal {
                prop_assert!(r.aa_normal && r.aa_large && r.aaa_large);
            }
            if r.aa_normal {
                prop_assert!(r.aa_large);
                prop_assert!(r.aaa_large);
            }
        }

        #[test]
        fn prop_flags_monotonic_in_ratio(a in 1.0f64..=21.0, b in 1.0f64..=21.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo = evaluate_compliance(lo);
            let hi = evaluate_compliance(hi);
            prop_assert!(!lo.aa_large || hi.aa_large);
            prop_assert!(!lo.aa_normal || hi.aa_normal);
            prop_assert!(!lo.aaa_large || hi.aaa_large);
            prop_assert!(!lo.aaa_normal || hi.aaa_normal);
        }
    }
}
