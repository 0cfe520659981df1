//! Math input helper integration tests
//!
//! Exercises the public conversions the way the math input field uses them:
//! typed text, LaTeX from the editor, preview rendering and hints.

use math_quest::math::{
    derive_simple_model, get_hint, has_balanced_delimiters, is_likely_math, latex_to_plain,
    normalize, plain_to_latex, InputHint, MathOperator,
};

// ============================================================================
// normalize
// ============================================================================

#[test]
fn test_normalize_replaces_unicode_operators() {
    assert_eq!(normalize("5 × 4 − 2"), "5 * 4 - 2");
}

#[test]
fn test_normalize_is_idempotent_over_ascii_and_symbols() {
    let mut samples: Vec<String> = (0x20u8..0x7f).map(|b| (b as char).to_string()).collect();
    samples.extend(
        [
            "5 × 4 − 2",
            "12 ÷ 4 – 1",
            "a\u{00A0}\u{00A0}✕ b — c",
            "   lots    of   space  ",
            "(3 + 4) * [2 - {1}]",
            "",
        ]
        .iter()
        .map(|s| s.to_string()),
    );

    for sample in &samples {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
    }
}

// ============================================================================
// LaTeX conversions
// ============================================================================

#[test]
fn test_latex_to_plain_fraction_expression() {
    assert_eq!(latex_to_plain("\\frac{12}{3}+4\\times2"), "(12)/(3)+4*2");
}

#[test]
fn test_latex_to_plain_deeply_nested_fractions() {
    assert_eq!(
        latex_to_plain("\\frac{1}{\\frac{2}{\\frac{3}{4}}}"),
        "(1)/((2)/((3)/(4)))"
    );
}

#[test]
fn test_plain_to_latex_multiplication() {
    assert_eq!(plain_to_latex("5*5"), "5\\times 5");
}

#[test]
fn test_plain_to_latex_passes_latex_through() {
    assert_eq!(plain_to_latex("\\frac{1}{2}"), "\\frac{1}{2}");
    assert_eq!(plain_to_latex(""), "");
}

#[test]
fn test_preview_then_back_is_semantically_stable() {
    let preview = plain_to_latex("12 ÷ 4 * 3");
    assert_eq!(latex_to_plain(&preview), "12 / 4 * 3");
}

// ============================================================================
// Hints
// ============================================================================

#[test]
fn test_balanced_delimiters() {
    assert!(has_balanced_delimiters("(5+4)"));
    assert!(!has_balanced_delimiters("(5+4"));
    assert!(!has_balanced_delimiters("(5+4]"));
    assert!(has_balanced_delimiters(""));
}

#[test]
fn test_hint_priority_messages() {
    assert_eq!(get_hint("(5+4"), InputHint::MissingParenthesis.message());
    assert!(get_hint("(5+4").contains("missing parenthesis"));
    assert!(get_hint("5+").contains("operator"));
    assert!(get_hint("5++4").contains("two operators"));
    assert!(get_hint("5/0").contains("Division by zero"));
    assert_eq!(get_hint(""), "");
}

#[test]
fn test_hint_ignores_plain_words() {
    assert!(!is_likely_math("hello there"));
    assert_eq!(get_hint("hello there"), "");
}

#[test]
fn test_hint_division_by_ten_is_fine() {
    assert_eq!(get_hint("5/10"), "");
}

// ============================================================================
// Simple model
// ============================================================================

#[test]
fn test_simple_model_multiplication() {
    let model = derive_simple_model("6*7").expect("6*7 is a simple model");
    assert_eq!(model.left, 6.0);
    assert_eq!(model.right, 7.0);
    assert_eq!(model.operator, MathOperator::Multiply);
    assert_eq!(model.result, 42.0);
}

#[test]
fn test_simple_model_rejections() {
    assert!(derive_simple_model("5/0").is_none());
    assert!(derive_simple_model("1+2+3").is_none());
    assert!(derive_simple_model("(1+2)").is_none());
    assert!(derive_simple_model("").is_none());
}

#[test]
fn test_simple_model_from_typed_symbols() {
    let model = derive_simple_model("8 × 3").expect("unicode times is normalized");
    assert_eq!(model.result, 24.0);

    let model = derive_simple_model("9 x 3").expect("x reads as multiplication");
    assert_eq!(model.operator, MathOperator::Multiply);
}
