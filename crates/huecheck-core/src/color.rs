//! Color representation: 24-bit RGB, hex strings and HSL.

use crate::contrast;
use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque 24-bit sRGB color.
///
/// Channels are `u8`, so every value is in `[0, 255]` by construction.
/// Serializes as an uppercase `#RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Black color
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// White color
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string (e.g., "#22c55e" or "22C55E").
    ///
    /// Accepts one optional leading `#` followed by exactly six hex digits,
    /// in any case. Shorthand (`#fff`), alpha (`#rrggbbaa`) and surrounding
    /// whitespace are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] if the string does not match.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidColorFormat(input.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ColorError::InvalidColorFormat(input.to_string()))
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Convert to a lowercase hex string, e.g. `#22c55e`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to the uppercase display form, e.g. `#22C55E`.
    #[must_use]
    pub fn to_hex_upper(&self) -> String {
        self.to_hex().to_uppercase()
    }

    /// Convert to HSL, rounding each component to the nearest integer.
    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0, 0, (l * 100.0).round() as u8);
        }

        let chroma = max - min;
        let s = if l > 0.5 {
            chroma / (2.0 - max - min)
        } else {
            chroma / (max + min)
        };

        let sector = if max == r {
            (g - b) / chroma + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };

        Hsl::new(
            (sector * 60.0).round() as u16,
            (s * 100.0).round() as u8,
            (l * 100.0).round() as u8,
        )
    }

    /// Calculate relative luminance per WCAG 2.x.
    ///
    /// See: <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
    #[must_use]
    pub fn relative_luminance(&self) -> f64 {
        contrast::relative_luminance(*self)
    }

    /// Calculate contrast ratio between two colors per WCAG 2.x.
    ///
    /// Returns a value between 1.0 (no contrast) and 21.0 (maximum contrast).
    #[must_use]
    pub fn contrast_ratio(&self, other: &Self) -> f64 {
        contrast::contrast_ratio(*self, *other)
    }

    /// Whether black text contrasts better than white text on this color.
    #[must_use]
    pub fn is_light(&self) -> bool {
        self.relative_luminance() > light_dark_crossover()
    }
}

/// Luminance at which black and white give the same contrast ratio.
fn light_dark_crossover() -> f64 {
    (1.05_f64 * 0.05).sqrt() - 0.05
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        hsl.to_color()
    }
}

/// HSL color with integer components.
///
/// Hue is in degrees `[0, 360)`, saturation and lightness in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees
    pub h: u16,
    /// Saturation in percent
    pub s: u8,
    /// Lightness in percent
    pub l: u8,
}

impl Hsl {
    /// Create an HSL color, wrapping hue into `[0, 360)` and clamping
    /// saturation and lightness to 100.
    #[must_use]
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h % 360,
            s: s.min(100),
            l: l.min(100),
        }
    }

    /// Convert to RGB, rounding each channel to the nearest integer.
    #[must_use]
    pub fn to_color(&self) -> Color {
        let h = f64::from(self.h % 360) / 360.0;
        let s = f64::from(self.s.min(100)) / 100.0;
        let l = f64::from(self.l.min(100)) / 100.0;

        if self.s == 0 {
            let v = to_channel(l);
            return Color::rgb(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Color::rgb(
            to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
            to_channel(hue_to_channel(p, q, h)),
            to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        color.to_hsl()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hue_distance(a: u16, b: u16) -> u16 {
        let d = a.abs_diff(b) % 360;
        d.min(360 - d)
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#ff0000").unwrap();
        assert_eq!(c, Color::rgb(255, 0, 0));

        let c2 = Color::from_hex("#00FF00").unwrap();
        assert_eq!(c2, Color::rgb(0, 255, 0));

        let c3 = Color::from_hex("0000ff").unwrap();
        assert_eq!(c3, Color::rgb(0, 0, 255));

        let c4 = Color::from_hex("#22C55e").unwrap();
        assert_eq!(c4, Color::rgb(0x22, 0xc5, 0x5e));
    }

    #[test]
    fn test_color_from_hex_invalid() {
        for input in [
            "not-a-color",
            "#ZZZZZZ",
            "#FFF",
            "FFF",
            "#ff000080",
            "",
            "#",
            "##ff0000",
            " #ff0000",
            "#ff0000 ",
            "#ff00 0",
            "+fffff",
        ] {
            assert_eq!(
                Color::from_hex(input),
                Err(ColorError::InvalidColorFormat(input.to_string())),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_color_from_hex_rejects_multibyte_of_right_length() {
        // Six bytes, but not six hex digits.
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_color_to_hex() {
        assert_eq!(Color::rgb(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(Color::rgb(0x0a, 0x0a, 0x0a).to_hex(), "#0a0a0a");
        assert_eq!(Color::rgb(0x22, 0xc5, 0x5e).to_hex_upper(), "#22C55E");
    }

    #[test]
    fn test_color_display_is_uppercase() {
        assert_eq!(Color::rgb(0xab, 0xcd, 0xef).to_string(), "#ABCDEF");
    }

    #[test]
    fn test_color_from_str() {
        let c: Color = "#0A0A0A".parse().unwrap();
        assert_eq!(c, Color::rgb(10, 10, 10));
        assert!("#0A0A0".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_serde_as_hex_string() {
        let c = Color::rgb(0x22, 0xc5, 0x5e);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#22C55E\"");

        let back: Color = serde_json::from_str("\"#22c55e\"").unwrap();
        assert_eq!(back, c);

        assert!(serde_json::from_str::<Color>("\"#22c\"").is_err());
    }

    #[test]
    fn test_color_constants() {
        assert_eq!(Color::BLACK.to_hex(), "#000000");
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn test_color_to_hsl_primaries() {
        assert_eq!(Color::rgb(255, 0, 0).to_hsl(), Hsl::new(0, 100, 50));
        assert_eq!(Color::rgb(0, 255, 0).to_hsl(), Hsl::new(120, 100, 50));
        assert_eq!(Color::rgb(0, 0, 255).to_hsl(), Hsl::new(240, 100, 50));
        assert_eq!(Color::WHITE.to_hsl(), Hsl::new(0, 0, 100));
        assert_eq!(Color::BLACK.to_hsl(), Hsl::new(0, 0, 0));
    }

    #[test]
    fn test_color_to_hsl_green() {
        let hsl = Color::rgb(0x22, 0xc5, 0x5e).to_hsl();
        assert_eq!(hsl, Hsl::new(142, 71, 45));
    }

    #[test]
    fn test_color_to_hsl_hue_wraps_at_360() {
        // Hue just below 360 rounds up and must wrap to 0.
        let hsl = Color::rgb(255, 0, 1).to_hsl();
        assert!(hsl.h < 360);
        assert_eq!(hsl.h, 0);
    }

    #[test]
    fn test_hsl_to_color() {
        assert_eq!(Hsl::new(0, 100, 50).to_color(), Color::rgb(255, 0, 0));
        assert_eq!(Hsl::new(120, 100, 50).to_color(), Color::rgb(0, 255, 0));
        assert_eq!(Hsl::new(240, 100, 50).to_color(), Color::rgb(0, 0, 255));
        assert_eq!(Hsl::new(142, 71, 45).to_color(), Color::rgb(33, 196, 93));
        assert_eq!(Hsl::new(200, 0, 50).to_color(), Color::rgb(128, 128, 128));
    }

    #[test]
    fn test_hsl_new_normalizes() {
        let hsl = Hsl::new(400, 150, 120);
        assert_eq!(hsl, Hsl { h: 40, s: 100, l: 100 });
    }

    #[test]
    fn test_hsl_display() {
        assert_eq!(Hsl::new(142, 71, 45).to_string(), "hsl(142, 71%, 45%)");
    }

    #[test]
    fn test_color_is_light() {
        assert!(Color::WHITE.is_light());
        assert!(Color::rgb(0xf5, 0xf5, 0xf5).is_light());
        assert!(!Color::BLACK.is_light());
        assert!(!Color::rgb(0x0a, 0x0a, 0x0a).is_light());
        // Mid gray sits above the crossover: black text wins.
        assert!(Color::rgb(0x80, 0x80, 0x80).is_light());
    }

    proptest! {
        #[test]
        fn prop_hex_roundtrip(r: u8, g: u8, b: u8) {
            let c = Color::rgb(r, g, b);
            prop_assert_eq!(Color::from_hex(&c.to_hex()).unwrap(), c);
            prop_assert_eq!(Color::from_hex(&c.to_string()).unwrap(), c);
        }

        #[test]
        fn prop_hsl_roundtrip_within_one(h in 0u16..360, s in 50u8..=100, l in 30u8..=70) {
            let back = Hsl::new(h, s, l).to_color().to_hsl();
            prop_assert!(hue_distance(back.h, h) <= 1, "hue {} -> {}", h, back.h);
            prop_assert!(back.s.abs_diff(s) <= 1, "saturation {} -> {}", s, back.s);
            prop_assert!(back.l.abs_diff(l) <= 1, "lightness {} -> {}", l, back.l);
        }

        #[test]
        fn prop_hsl_lightness_roundtrip(h in 0u16..360, s in 0u8..=100, l in 0u8..=100) {
            let back = Hsl::new(h, s, l).to_color().to_hsl();
            prop_assert!(back.l.abs_diff(l) <= 1);
        }

        #[test]
        fn prop_to_hsl_in_range(r: u8, g: u8, b: u8) {
            let hsl = Color::rgb(r, g, b).to_hsl();
            prop_assert!(hsl.h < 360);
            prop_assert!(hsl.s <= 100);
            prop_assert!(hsl.l <= 100);
        }
    }
}
