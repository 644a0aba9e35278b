//! Text and JSON reports written to any `Write`.

use crossterm::queue;
use crossterm::style::{Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetForegroundColor};
use huecheck_core::{
    Color, ContrastResult, Explanation, Hsl, Rating, Suggestion, TextSize, WcagLevel,
};
use serde::Serialize;
use std::io::{self, Write};

/// Output of `check`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckReport {
    pub(crate) text: Color,
    pub(crate) background: Color,
    #[serde(flatten)]
    pub(crate) result: ContrastResult,
    pub(crate) level: WcagLevel,
    pub(crate) text_size: TextSize,
    pub(crate) passes: bool,
    pub(crate) rating: Rating,
    pub(crate) recommendation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) explanation: Option<Explanation>,
}

impl CheckReport {
    /// Report for a pair evaluated at `level` for `text_size`.
    pub(crate) fn new(
        text: Color,
        background: Color,
        result: ContrastResult,
        level: WcagLevel,
        text_size: TextSize,
    ) -> Self {
        Self {
            text,
            background,
            passes: result.passes(level, text_size),
            rating: result.rating(),
            recommendation: result.recommendation().message(),
            result,
            level,
            text_size,
            explanation: None,
        }
    }

    /// Attach an explanation.
    #[must_use]
    pub(crate) fn with_explanation(mut self, explanation: Explanation) -> Self {
        self.explanation = Some(explanation);
        self
    }
}

/// Output of `convert`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ConvertReport {
    pub(crate) hex: Color,
    pub(crate) rgb: [u8; 3],
    pub(crate) hsl: Hsl,
    pub(crate) luminance: f64,
}

impl From<Color> for ConvertReport {
    fn from(color: Color) -> Self {
        Self {
            hex: color,
            rgb: [color.r, color.g, color.b],
            hsl: color.to_hsl(),
            luminance: color.relative_luminance(),
        }
    }
}

/// Pretty-printed JSON followed by a newline.
pub(crate) fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w).map_err(serde_json::Error::io)
}

fn write_badge<W: Write>(w: &mut W, pass: bool, styled: bool) -> io::Result<()> {
    let (label, color) = if pass {
        ("PASS", TermColor::Green)
    } else {
        ("FAIL", TermColor::Red)
    };
    if styled {
        queue!(
            w,
            SetAttribute(Attribute::Bold),
            SetForegroundColor(color),
            Print(label),
            ResetColor,
            SetAttribute(Attribute::Reset)
        )
    } else {
        write!(w, "{label}")
    }
}

fn write_heading<W: Write>(w: &mut W, heading: &str, styled: bool) -> io::Result<()> {
    if styled {
        queue!(
            w,
            SetAttribute(Attribute::Bold),
            Print(heading),
            SetAttribute(Attribute::Reset),
            Print("\n")
        )
    } else {
        writeln!(w, "{heading}")
    }
}

/// Human-readable `check` report.
pub(crate) fn write_check_text<W: Write>(w: &mut W, report: &CheckReport, styled: bool) -> io::Result<()> {
    let result = &report.result;
    writeln!(w, "{} on {}", report.text, report.background)?;
    writeln!(w, "Contrast ratio: {}", result.ratio_label())?;
    writeln!(w)?;

    let rows = [
        ("AA", TextSize::Normal, result.aa_normal),
        ("AA", TextSize::Large, result.aa_large),
        ("AAA", TextSize::Normal, result.aaa_normal),
        ("AAA", TextSize::Large, result.aaa_large),
    ];
    for (level, size, pass) in rows {
        write!(w, "  {level:<3}  {:<32} ", size.label())?;
        write_badge(w, pass, styled)?;
        writeln!(w)?;
    }
    writeln!(w)?;

    write!(w, "{} ({}): ", report.level, report.text_size.label())?;
    write_badge(w, report.passes, styled)?;
    writeln!(w)?;
    writeln!(w, "{}", report.recommendation)?;

    if let Some(explanation) = &report.explanation {
        writeln!(w)?;
        write_explanation_text(w, explanation, styled)?;
    }
    w.flush()
}

fn write_explanation_text<W: Write>(w: &mut W, explanation: &Explanation, styled: bool) -> io::Result<()> {
    write_heading(w, &explanation.summary, styled)?;
    writeln!(w, "{}", explanation.technical_details)?;
    writeln!(w, "{}", explanation.user_impact)?;
    for step in &explanation.actionable_steps {
        writeln!(w, "  - {step}")?;
    }
    if let Some(error) = &explanation.error {
        writeln!(w, "({error})")?;
    }
    Ok(())
}

/// Human-readable `convert` report.
pub(crate) fn write_convert_text<W: Write>(w: &mut W, report: &ConvertReport) -> io::Result<()> {
    let [r, g, b] = report.rgb;
    writeln!(w, "hex        {}", report.hex.to_hex())?;
    writeln!(w, "rgb        rgb({r}, {g}, {b})")?;
    writeln!(w, "hsl        {}", report.hsl)?;
    writeln!(w, "luminance  {:.4}", report.luminance)?;
    w.flush()
}

/// Human-readable `suggest` report.
pub(crate) fn write_suggestion_text<W: Write>(
    w: &mut W,
    suggestion: &Suggestion,
    min_ratio: f64,
    styled: bool,
) -> io::Result<()> {
    let met = suggestion.result.ratio >= min_ratio;
    if suggestion.adjusted {
        writeln!(
            w,
            "Suggested text: {} ({})",
            suggestion.text,
            suggestion.text.to_hsl()
        )?;
    } else {
        writeln!(w, "Text color already works: {}", suggestion.text)?;
    }
    writeln!(w, "Background:     {}", suggestion.background)?;
    write!(
        w,
        "Contrast ratio: {} (target {min_ratio:.2}:1) ",
        suggestion.result.ratio_label()
    )?;
    write_badge(w, met, styled)?;
    writeln!(w)?;
    w.flush()
}
