//! Lightweight syntax hints for the math input field.

use super::expression::normalize;

const OPERATORS: &[char] = &['+', '-', '*', '/', '^'];

/// A likely problem with what the player typed, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputHint {
    MissingParenthesis,
    TrailingOperator,
    DoubleOperator,
    DivisionByZero,
}

impl InputHint {
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingParenthesis => {
                "It looks like there's a missing parenthesis. Try closing each opening bracket."
            }
            Self::TrailingOperator => {
                "This ends with an operator. Add the next number or term to complete it."
            }
            Self::DoubleOperator => "I noticed two operators together. Removing one should fix it.",
            Self::DivisionByZero => "Division by zero is undefined. Try a non-zero denominator.",
        }
    }
}

/// Check that every `(`, `[` and `{` is closed by its own kind, in order.
pub fn has_balanced_delimiters(text: &str) -> bool {
    let expression = normalize(text);
    let mut expected: Vec<char> = Vec::new();

    for c in expression.chars() {
        match c {
            '(' => expected.push(')'),
            '[' => expected.push(']'),
            '{' => expected.push('}'),
            ')' | ']' | '}' => {
                if expected.pop() != Some(c) {
                    return false;
                }
            }
            _ => {}
        }
    }

    expected.is_empty()
}

/// Whether the text contains anything math-shaped at all.
pub fn is_likely_math(text: &str) -> bool {
    text.chars()
        .any(|c| c.is_ascii_digit() || "=+-*/^()[]{}\\".contains(c))
}

/// Find the highest-priority problem in the input, if any.
pub fn detect_hint(text: &str) -> Option<InputHint> {
    let expression = normalize(text);
    if expression.is_empty() || !is_likely_math(&expression) {
        return None;
    }

    if !has_balanced_delimiters(&expression) {
        return Some(InputHint::MissingParenthesis);
    }
    if expression.ends_with(OPERATORS) {
        return Some(InputHint::TrailingOperator);
    }

    let chars: Vec<char> = expression.chars().collect();
    if has_adjacent_operators(&chars) {
        return Some(InputHint::DoubleOperator);
    }
    if divides_by_literal_zero(&chars) {
        return Some(InputHint::DivisionByZero);
    }
    None
}

/// Hint text for the input, or an empty string when nothing looks wrong.
pub fn get_hint(text: &str) -> String {
    detect_hint(text)
        .map(|hint| hint.message().to_string())
        .unwrap_or_default()
}

/// Two operators separated only by whitespace. Operators touching a letter
/// on the outside are skipped so names like `a-b` never trigger it.
fn has_adjacent_operators(chars: &[char]) -> bool {
    for (i, c) in chars.iter().enumerate() {
        if !OPERATORS.contains(c) {
            continue;
        }
        if i > 0 && chars[i - 1].is_ascii_alphabetic() {
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && chars[j].is_whitespace() {
            j += 1;
        }
        let Some(second) = chars.get(j) else {
            continue;
        };
        if !OPERATORS.contains(second) {
            continue;
        }
        if chars.get(j + 1).is_some_and(|next| next.is_ascii_alphabetic()) {
            continue;
        }
        return true;
    }
    false
}

/// `/` then a bare `0` that is not the start of a longer number.
fn divides_by_literal_zero(chars: &[char]) -> bool {
    for (i, c) in chars.iter().enumerate() {
        if *c != '/' {
            continue;
        }
        let mut j = i + 1;
        while j < chars.len() && chars[j].is_whitespace() {
            j += 1;
        }
        if chars.get(j) != Some(&'0') {
            continue;
        }
        match chars.get(j + 1) {
            None => return true,
            Some(next) if !next.is_ascii_digit() => return true,
            _ => {}
        }
    }
    false
}
