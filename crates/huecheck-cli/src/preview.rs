//! Truecolor terminal mock-up of a color pair.

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use huecheck_core::Color;
use std::io::{self, Write};

/// Width of the preview panel in columns.
pub(crate) const PANEL_WIDTH: usize = 48;

const HEADING: &str = "Heading sample";
const BODY: &str = "The quick brown fox jumps over the lazy dog.";
const BUTTON: &str = "[ Button ]";
const INVERTED: &str = "Inverted sample";

#[derive(Clone, Copy)]
struct Line<'a> {
    label: &'a str,
    fg: Color,
    bg: Color,
    bold: bool,
}

const fn to_term(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

fn write_line<W: Write>(w: &mut W, line: Line<'_>) -> io::Result<()> {
    queue!(
        w,
        SetBackgroundColor(to_term(line.bg)),
        SetForegroundColor(to_term(line.fg))
    )?;
    if line.bold {
        queue!(w, SetAttribute(Attribute::Bold))?;
    }
    queue!(
        w,
        Print(format!("  {:<width$}", line.label, width = PANEL_WIDTH - 2)),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print("\n")
    )
}

/// Render heading, body, button and inverted samples.
pub(crate) fn write_preview<W: Write>(w: &mut W, text: Color, background: Color) -> io::Result<()> {
    let normal = |label: &'static str, bold: bool| Line {
        label,
        fg: text,
        bg: background,
        bold,
    };
    let lines = [
        normal("", false),
        normal(HEADING, true),
        normal(BODY, false),
        normal("", false),
        normal(BUTTON, true),
        normal("", false),
        Line {
            label: INVERTED,
            fg: background,
            bg: text,
            bold: false,
        },
    ];

    for line in lines {
        write_line(w, line)?;
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: Color, bg: Color) -> String {
        let mut out = Vec::new();
        write_preview(&mut out, text, bg).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_preview_contains_samples() {
        let out = render(Color::BLACK, Color::WHITE);
        for sample in [HEADING, BODY, BUTTON, INVERTED] {
            assert!(out.contains(sample), "missing {sample}");
        }
        assert_eq!(out.lines().count(), 7);
    }

    #[test]
    fn test_preview_uses_truecolor_sequences() {
        let out = render(Color::rgb(0x22, 0xc5, 0x5e), Color::rgb(0x0a, 0x0a, 0x0a));
        assert!(out.contains("38;2;34;197;94"));
        assert!(out.contains("48;2;10;10;10"));
        // inverted line swaps the roles
        assert!(out.contains("48;2;34;197;94"));
        assert!(out.contains("38;2;10;10;10"));
    }

    #[test]
    fn test_preview_lines_are_padded() {
        let out = render(Color::BLACK, Color::WHITE);
        let padded = format!("  {BODY:<width$}", width = PANEL_WIDTH - 2);
        assert!(out.contains(&padded));
    }

    #[test]
    fn test_to_term() {
        assert_eq!(
            to_term(Color::rgb(1, 2, 3)),
            TermColor::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
