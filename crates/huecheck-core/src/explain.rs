//! Plain-language explanations of a contrast result.
//!
//! An [`Explainer`] holds an optional [`ExplanationStrategy`] (for example a
//! language-model backend provided by the embedding application) and always
//! has the deterministic [`HeuristicExplainer`] to fall back on. Explanations
//! are text only: the numeric [`ContrastResult`](crate::ContrastResult) is
//! computed before any strategy runs and is never touched by one.

use crate::color::Color;
use crate::compliance::{Rating, AAA_NORMAL, AA_LARGE, AA_NORMAL};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error text attached when a strategy fails and the fallback is used.
pub const FALLBACK_NOTICE: &str = "AI generation failed, showing standard explanation";

/// Where the color pair is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageContext {
    /// Button label on a button fill
    Button,
    /// Body text
    Text,
    /// Heading text
    Heading,
    /// Unspecified
    #[default]
    General,
}

impl UsageContext {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Text => "text",
            Self::Heading => "heading",
            Self::General => "general",
        }
    }
}

impl fmt::Display for UsageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UsageContext {
    type Err = ExplainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "button" => Ok(Self::Button),
            "text" => Ok(Self::Text),
            "heading" => Ok(Self::Heading),
            "general" => Ok(Self::General),
            other => Err(ExplainError::UnknownContext(other.to_string())),
        }
    }
}

/// Input to an explanation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExplanationRequest {
    /// Contrast ratio of the pair
    pub ratio: f64,
    /// Text color
    pub text: Color,
    /// Background color
    pub background: Color,
    /// Usage context
    pub context: UsageContext,
}

impl ExplanationRequest {
    /// Build a request for a pair, computing its ratio.
    #[must_use]
    pub fn new(text: Color, background: Color, context: UsageContext) -> Self {
        Self {
            ratio: text.contrast_ratio(&background),
            text,
            background,
            context,
        }
    }
}

/// Human-readable explanation of a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    /// One-sentence status
    pub summary: String,
    /// Why it passes or fails
    pub technical_details: String,
    /// Effect on readers
    pub user_impact: String,
    /// What to do next
    pub actionable_steps: Vec<String>,
    /// Set when a strategy failed and this is the fallback text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Explanation {
    /// Split free-form model output into an explanation.
    ///
    /// Non-empty lines are taken in order as summary, technical details and
    /// user impact; remaining lines become the steps. Missing parts come
    /// from `fallback`.
    #[must_use]
    pub fn from_generated_text(text: &str, fallback: &Self) -> Self {
        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
        let mut next = |fallback: &str| lines.next().map_or_else(|| fallback.to_string(), str::to_string);

        let summary = next(&fallback.summary);
        let technical_details = next(&fallback.technical_details);
        let user_impact = next(&fallback.user_impact);
        let steps: Vec<String> = lines.map(str::to_string).collect();

        Self {
            summary,
            technical_details,
            user_impact,
            actionable_steps: if steps.is_empty() {
                fallback.actionable_steps.clone()
            } else {
                steps
            },
            error: None,
        }
    }
}

/// Errors from explanation strategies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplainError {
    /// Backend is not loaded or reachable.
    #[error("explanation backend unavailable: {0}")]
    Unavailable(String),

    /// Backend ran but produced nothing usable.
    #[error("explanation generation failed: {0}")]
    Generation(String),

    /// Unrecognized usage context name.
    #[error("unknown usage context: {0:?} (expected button, text, heading or general)")]
    UnknownContext(String),
}

/// A source of explanations.
pub trait ExplanationStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Explain a result.
    fn explain(&self, request: &ExplanationRequest) -> Result<Explanation, ExplainError>;
}

/// Deterministic explanation text keyed on the rating tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicExplainer;

impl HeuristicExplainer {
    /// Produce the explanation. Never fails.
    #[must_use]
    pub fn generate(&self, request: &ExplanationRequest) -> Explanation {
        let rating = Rating::from_ratio(request.ratio);
        Explanation {
            summary: summary(rating).to_string(),
            technical_details: technical_details(rating, request.ratio),
            user_impact: user_impact(rating).to_string(),
            actionable_steps: actionable_steps(rating, request.text, request.background),
            error: None,
        }
    }
}

impl ExplanationStrategy for HeuristicExplainer {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn explain(&self, request: &ExplanationRequest) -> Result<Explanation, ExplainError> {
        Ok(self.generate(request))
    }
}

const fn summary(rating: Rating) -> &'static str {
    match rating {
        Rating::Excellent => "Excellent contrast - exceeds all WCAG standards",
        Rating::Good => "Good contrast - meets WCAG AA standards",
        Rating::LargeTextOnly => "Minimal contrast - only passes for large text",
        Rating::Poor => "Poor contrast - fails accessibility standards",
    }
}

fn technical_details(rating: Rating, ratio: f64) -> String {
    match rating {
        Rating::Excellent => format!(
            "Contrast ratio of {ratio:.2}:1 exceeds AAA level requirements \
             ({AAA_NORMAL}:1 for normal text, {AA_NORMAL}:1 for large text)."
        ),
        Rating::Good => format!(
            "Contrast ratio of {ratio:.2}:1 meets AA level requirements \
             ({AA_NORMAL}:1 for normal text) and AAA for large text."
        ),
        Rating::LargeTextOnly => format!(
            "Contrast ratio of {ratio:.2}:1 only meets AA for large text \
             ({AA_LARGE}:1 minimum), but fails for normal text."
        ),
        Rating::Poor => format!(
            "Contrast ratio of {ratio:.2}:1 fails all WCAG requirements. Minimum standards \
             are {AA_LARGE}:1 for large text and {AA_NORMAL}:1 for normal text."
        ),
    }
}

const fn user_impact(rating: Rating) -> &'static str {
    match rating {
        Rating::Excellent => {
            "Users with visual impairments, color blindness, or viewing in bright sunlight \
             will have excellent readability."
        }
        Rating::Good => {
            "Most users will have good readability, though users with severe visual \
             impairments may still face challenges."
        }
        Rating::LargeTextOnly => {
            "Users with low vision or viewing in poor lighting will struggle with \
             normal-sized text."
        }
        Rating::Poor => {
            "Many users, especially those with visual impairments, will be unable to read \
             this text."
        }
    }
}

fn actionable_steps(rating: Rating, text: Color, background: Color) -> Vec<String> {
    match rating {
        Rating::Excellent => {
            vec!["Your colors are already highly accessible - no changes needed!".to_string()]
        }
        Rating::Good => vec![
            format!("Consider increasing contrast to {AAA_NORMAL}:1 for AAA compliance"),
            "Test with actual users who have visual impairments".to_string(),
            "Ensure consistency across all similar components".to_string(),
        ],
        Rating::LargeTextOnly | Rating::Poor => {
            let hint = match (background.is_light(), text.is_light()) {
                (true, false) => "Try using a darker text color like #000000 or #1A1A1A",
                (false, true) => "Try using a lighter text color like #FFFFFF or #F5F5F5",
                (true, true) => "Use dark text (#000000) on this light background",
                (false, false) => "Use light text (#FFFFFF) on this dark background",
            };
            vec![
                format!("Increase contrast to at least {AA_NORMAL}:1 (AA standard)"),
                hint.to_string(),
                "Test in different lighting conditions and devices".to_string(),
            ]
        }
    }
}

/// Prompt text for model-backed strategies.
#[must_use]
pub fn build_prompt(request: &ExplanationRequest) -> String {
    format!(
        "You are an accessibility expert. Analyze this color contrast:\n\
         \n\
         Contrast Ratio: {ratio:.2}:1\n\
         Text Color: {text}\n\
         Background Color: {background}\n\
         Context: {context}\n\
         \n\
         WCAG Standards:\n\
         - AA Normal Text: {AA_NORMAL}:1\n\
         - AA Large Text: {AA_LARGE}:1\n\
         - AAA Normal Text: {AAA_NORMAL}:1\n\
         - AAA Large Text: {AA_NORMAL}:1\n\
         \n\
         Provide a brief, actionable explanation in this format:\n\
         1. One sentence summary of the accessibility status\n\
         2. Technical reason why it passes/fails\n\
         3. Impact on users (one sentence)\n\
         4. One specific action to improve or maintain accessibility\n\
         \n\
         Keep it under 100 words total.",
        ratio = request.ratio,
        text = request.text,
        background = request.background,
        context = request.context,
    )
}

/// Explanation front end with a guaranteed fallback.
#[derive(Default)]
pub struct Explainer {
    strategy: Option<Box<dyn ExplanationStrategy>>,
    fallback: HeuristicExplainer,
}

impl fmt::Debug for Explainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Explainer")
            .field("strategy", &self.strategy.as_ref().map(|s| s.name()))
            .finish()
    }
}

impl Explainer {
    /// Explainer that only uses the heuristic text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `strategy` first, falling back to the heuristic text.
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl ExplanationStrategy + 'static) -> Self {
        self.strategy = Some(Box::new(strategy));
        self
    }

    /// Name of the active strategy.
    #[must_use]
    pub fn strategy_name(&self) -> &str {
        self.strategy
            .as_ref()
            .map_or_else(|| self.fallback.name(), |s| s.name())
    }

    /// Explain a result. Never fails.
    #[must_use]
    pub fn explain(&self, request: &ExplanationRequest) -> Explanation {
        let Some(strategy) = &self.strategy else {
            return self.fallback.generate(request);
        };

        match strategy.explain(request) {
            Ok(explanation) => explanation,
            Err(err) => {
                tracing::warn!(
                    strategy = strategy.name(),
                    error = %err,
                    "explanation strategy failed; using heuristic text"
                );
                Explanation {
                    error: Some(FALLBACK_NOTICE.to_string()),
                    ..self.fallback.generate(request)
                }
            }
        }
    }
}
