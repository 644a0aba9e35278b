//! Integration tests for huecheck-core.
//!
//! These tests verify the public API works correctly end-to-end.

use huecheck_core::{
    check_contrast, contrast_ratio_hex, evaluate_compliance, suggest_pair, CheckerMessage,
    CheckerState, Color, ColorError, ColorTarget, Command, Explainer, ExplanationRequest, Hsl,
    State, TextSize, UsageContext, WcagLevel, DEFAULT_MIN_RATIO,
};

// =============================================================================
// Contrast Engine
// =============================================================================

#[test]
fn test_green_on_near_black_passes_everything() {
    let result = check_contrast("#22C55E", "#0A0A0A").expect("valid colors");
    assert!((result.ratio - 8.69).abs() < 0.01, "ratio {}", result.ratio);
    assert!(result.aa_normal && result.aaa_normal && result.aa_large && result.aaa_large);
}

#[test]
fn test_close_grays_fail_everything() {
    let result = check_contrast("#777777", "#808080").expect("valid colors");
    assert!(result.ratio < 1.5);
    for level in [WcagLevel::Aa, WcagLevel::Aaa] {
        for size in [TextSize::Normal, TextSize::Large] {
            assert!(!result.passes(level, size));
        }
    }
}

#[test]
fn test_black_white_is_maximum() {
    let ratio = contrast_ratio_hex("#000000", "#FFFFFF").expect("valid colors");
    assert!((ratio - 21.0).abs() < 1e-6);
    let swapped = contrast_ratio_hex("ffffff", "000000").expect("valid colors");
    assert_eq!(ratio, swapped);
}

#[test]
fn test_invalid_inputs_are_distinguishable() {
    for input in ["not-a-color", "#ZZZZZZ", "#FFF"] {
        let err = check_contrast(input, "#000000").expect_err("must reject");
        assert_eq!(err, ColorError::InvalidColorFormat(input.to_string()));
    }
}

#[test]
fn test_result_json_contract() {
    let result = check_contrast("#000000", "#FFFFFF").expect("valid colors");
    let json = serde_json::to_string(&result).expect("serializable");
    assert!(json.contains("\"aaLarge\":true"));
    assert!(json.contains("\"aaaNormal\":true"));
}

#[test]
fn test_hsl_path_through_hex() {
    let color = Color::from_hex("#22c55e").expect("valid");
    let hsl = color.to_hsl();
    let back = Hsl::new(hsl.h, hsl.s, hsl.l).to_color();
    assert!(back.r.abs_diff(color.r) <= 1);
    assert!(back.g.abs_diff(color.g) <= 1);
    assert!(back.b.abs_diff(color.b) <= 1);
}

// =============================================================================
// Checker workflow
// =============================================================================

#[test]
fn test_checker_workflow_fix_with_suggestion() {
    let mut state = CheckerState::default();
    state.update(CheckerMessage::SetHex(ColorTarget::Text, "#777777".into()));
    state.update(CheckerMessage::SetHex(ColorTarget::Background, "#808080".into()));
    assert!(!state.result().aa_normal);

    let suggestion = suggest_pair(state.text, state.background, DEFAULT_MIN_RATIO);
    assert!(suggestion.adjusted);

    let cmd = state.update(CheckerMessage::SetColor(ColorTarget::Text, suggestion.text));
    assert!(matches!(cmd, Command::SaveState { .. }));
    assert!(state.result().aa_normal);
    assert_eq!(state.result(), suggestion.result);
}

#[test]
fn test_explanation_never_changes_numbers() {
    let state = CheckerState::default();
    let before = state.result();
    let request = ExplanationRequest::new(state.text, state.background, UsageContext::Heading);
    let explanation = Explainer::new().explain(&request);

    assert_eq!(request.ratio, before.ratio);
    assert_eq!(state.result(), before);
    assert!(explanation.technical_details.contains(&before.ratio_label()));
}

#[test]
fn test_evaluate_compliance_matches_check_contrast() {
    let result = check_contrast("#595959", "#ffffff").expect("valid colors");
    assert_eq!(evaluate_compliance(result.ratio), result);
}
