//! huecheck CLI - check text/background color pairs against WCAG contrast levels.

#![allow(
    clippy::needless_pass_by_value,
    clippy::uninlined_format_args,
    clippy::unwrap_used,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::doc_markdown
)]

mod config;
mod error;
mod logging;
mod preview;
mod render;

use clap::{ArgAction, Parser, Subcommand};
use config::{Config, OutputFormat};
use error::CliError;
use huecheck_core::{
    check_contrast, suggest_pair, Color, Explainer, ExplanationRequest, TextSize, UsageContext,
    WcagLevel,
};
use logging::{init_logging, LogConfig};
use render::{CheckReport, ConvertReport};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "huecheck")]
#[command(about = "Check text/background color pairs against WCAG 2.x contrast levels")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: $XDG_CONFIG_HOME/huecheck/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable ANSI styling
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a text color against a background color
    Check {
        /// Text color (#RRGGBB)
        text: String,

        /// Background color (#RRGGBB)
        background: String,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Level the pair must meet for exit code 0 (aa, aaa)
        #[arg(short, long, value_parser = parse_level)]
        level: Option<WcagLevel>,

        /// Text size the level applies to (normal, large)
        #[arg(short, long, value_parser = parse_text_size)]
        size: Option<TextSize>,

        /// Include a plain-language explanation
        #[arg(short, long)]
        explain: bool,

        /// Where the pair is used (button, text, heading, general)
        #[arg(long, default_value = "general")]
        context: UsageContext,

        /// Render a terminal preview after the report
        #[arg(short, long)]
        preview: bool,
    },

    /// Show a color as hex, RGB, HSL and relative luminance
    Convert {
        /// Color (#RRGGBB)
        color: String,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Suggest a text color that reaches a minimum contrast ratio
    Suggest {
        /// Text color (#RRGGBB)
        text: String,

        /// Background color (#RRGGBB)
        background: String,

        /// Target contrast ratio (default: 4.5, or min_ratio from config)
        #[arg(short, long)]
        min_ratio: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Render the pair as a truecolor terminal mock-up
    Preview {
        /// Text color (#RRGGBB)
        text: String,

        /// Background color (#RRGGBB)
        background: String,
    },
}

fn parse_level(s: &str) -> Result<WcagLevel, String> {
    match s.to_ascii_lowercase().as_str() {
        "aa" => Ok(WcagLevel::Aa),
        "aaa" => Ok(WcagLevel::Aaa),
        _ => Err(format!("unknown level '{s}' (expected aa or aaa)")),
    }
}

fn parse_text_size(s: &str) -> Result<TextSize, String> {
    match s.to_ascii_lowercase().as_str() {
        "normal" => Ok(TextSize::Normal),
        "large" => Ok(TextSize::Large),
        _ => Err(format!("unknown text size '{s}' (expected normal or large)")),
    }
}

/// Result of a successful run, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Pass,
    Fail,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Pass => Self::SUCCESS,
            Outcome::Fail => Self::from(1),
        }
    }
}

const fn outcome(pass: bool) -> Outcome {
    if pass {
        Outcome::Pass
    } else {
        Outcome::Fail
    }
}

fn execute<W: Write>(
    command: &Commands,
    config: &Config,
    out: &mut W,
    styled: bool,
) -> Result<Outcome, CliError> {
    match command {
        Commands::Check {
            text,
            background,
            format,
            level,
            size,
            explain,
            context,
            preview,
        } => {
            let text_color = Color::from_hex(text)?;
            let bg_color = Color::from_hex(background)?;
            let result = check_contrast(text, background)?;

            let mut report = CheckReport::new(
                text_color,
                bg_color,
                result,
                level.unwrap_or(config.level),
                size.unwrap_or(config.text_size),
            );
            if *explain {
                let request = ExplanationRequest::new(text_color, bg_color, *context);
                report = report.with_explanation(Explainer::new().explain(&request));
            }

            match format.unwrap_or(config.format) {
                OutputFormat::Json => render::write_json(out, &report)?,
                OutputFormat::Text => {
                    render::write_check_text(out, &report, styled)?;
                    if *preview {
                        writeln!(out)?;
                        preview::write_preview(out, text_color, bg_color)?;
                    }
                }
            }
            tracing::info!(
                ratio = report.result.ratio,
                wcag_level = %report.level,
                passes = report.passes,
                "checked pair"
            );
            Ok(outcome(report.passes))
        }

        Commands::Convert { color, format } => {
            let report = ConvertReport::from(Color::from_hex(color)?);
            match format.unwrap_or(config.format) {
                OutputFormat::Json => render::write_json(out, &report)?,
                OutputFormat::Text => render::write_convert_text(out, &report)?,
            }
            Ok(Outcome::Pass)
        }

        Commands::Suggest {
            text,
            background,
            min_ratio,
            format,
        } => {
            let min_ratio = min_ratio.unwrap_or(config.min_ratio);
            if !(1.0..=21.0).contains(&min_ratio) {
                return Err(CliError::InvalidMinRatio(min_ratio));
            }
            let suggestion =
                suggest_pair(Color::from_hex(text)?, Color::from_hex(background)?, min_ratio);

            match format.unwrap_or(config.format) {
                OutputFormat::Json => render::write_json(out, &suggestion)?,
                OutputFormat::Text => {
                    render::write_suggestion_text(out, &suggestion, min_ratio, styled)?;
                }
            }
            Ok(outcome(suggestion.result.ratio >= min_ratio))
        }

        Commands::Preview { text, background } => {
            let text_color = Color::from_hex(text)?;
            let bg_color = Color::from_hex(background)?;
            preview::write_preview(out, text_color, bg_color)?;
            writeln!(
                out,
                "Contrast ratio: {:.2}:1",
                text_color.contrast_ratio(&bg_color)
            )?;
            Ok(Outcome::Pass)
        }
    }
}

fn run(cli: &Cli) -> Result<Outcome, CliError> {
    let config = Config::load(cli.config.as_deref())?;
    let stdout = io::stdout();
    let styled = config.color && !cli.no_color && stdout.is_terminal();

    init_logging(
        &LogConfig::from_verbosity(cli.verbose, &config.log_level)
            .with_ansi(!cli.no_color && io::stderr().is_terminal()),
    );
    tracing::debug!(?config, "configuration loaded");

    let mut out = stdout.lock();
    execute(&cli.command, &config, &mut out, styled)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
