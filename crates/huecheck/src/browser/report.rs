//! JSON payloads handed to the browser UI.
//!
//! Kept platform-independent so the WASM exports stay thin and the payloads
//! can be tested natively.

use huecheck_core::{
    check_contrast, suggest_pair, Color, ColorError, ExplainError, Explainer, ExplanationRequest,
    UsageContext, DEFAULT_MIN_RATIO,
};
use thiserror::Error;

/// Errors surfaced to the browser.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Bad color input
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Bad usage context
    #[error(transparent)]
    Explain(#[from] ExplainError),

    /// Serialization failure
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// `ContrastResult` JSON for a pair.
pub fn contrast_json(text: &str, background: &str) -> Result<String, ReportError> {
    Ok(serde_json::to_string(&check_contrast(text, background)?)?)
}

/// `Suggestion` JSON for a pair at the AA normal-text target.
pub fn suggestion_json(text: &str, background: &str) -> Result<String, ReportError> {
    let suggestion = suggest_pair(
        Color::from_hex(text)?,
        Color::from_hex(background)?,
        DEFAULT_MIN_RATIO,
    );
    Ok(serde_json::to_string(&suggestion)?)
}

/// `Explanation` JSON for a pair, using the heuristic explainer.
pub fn explanation_json(text: &str, background: &str, context: &str) -> Result<String, ReportError> {
    let context: UsageContext = if context.is_empty() {
        UsageContext::default()
    } else {
        context.parse()?
    };
    let request = ExplanationRequest::new(Color::from_hex(text)?, Color::from_hex(background)?, context);
    Ok(serde_json::to_string(&Explainer::new().explain(&request))?)
}
