//! Two-operand arithmetic model used by the visual aid.

use super::expression::normalize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operator supported by the simple model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MathOperator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl MathOperator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Spoken form, e.g. "multiplied by".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "multiplied by",
            Self::Divide => "divided by",
        }
    }

    /// Apply the operator. Division by zero has no answer.
    pub fn apply(&self, left: f64, right: f64) -> Option<f64> {
        let result = match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => {
                if right == 0.0 {
                    return None;
                }
                left / right
            }
        };
        result.is_finite().then_some(result)
    }
}

/// `left operator right = result`, with `result` always finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleMathModel {
    pub left: f64,
    pub right: f64,
    pub operator: MathOperator,
    pub result: f64,
}

impl SimpleMathModel {
    /// Sentence read out by the visual aid: "6 multiplied by 7 equals 42".
    pub fn describe(&self) -> String {
        format!(
            "{} {} {} equals {}",
            self.left,
            self.operator.label(),
            self.right,
            self.result
        )
    }
}

impl fmt::Display for SimpleMathModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left,
            self.operator.symbol(),
            self.right,
            self.result
        )
    }
}

/// Build a model for expressions of the exact shape `<number> <op> <number>`.
///
/// Numbers may carry a leading minus and a decimal part. Any other shape
/// (extra operators, parentheses, variables) yields `None`. The letter `x`
/// is read as multiplication, which is only safe because variables can never
/// match the strict shape anyway.
pub fn derive_simple_model(text: &str) -> Option<SimpleMathModel> {
    let expression: String = normalize(text)
        .chars()
        .map(|c| if c == 'x' || c == 'X' { '*' } else { c })
        .collect();

    let mut scanner = Scanner::new(&expression);
    scanner.skip_whitespace();
    let left = scanner.number()?;
    scanner.skip_whitespace();
    let operator = MathOperator::from_char(scanner.next_char()?)?;
    scanner.skip_whitespace();
    let right = scanner.number()?;
    scanner.skip_whitespace();
    if !scanner.at_end() {
        return None;
    }

    let result = operator.apply(left, right)?;
    Some(SimpleMathModel {
        left,
        right,
        operator,
        result: round_to_micros(result),
    })
}

fn round_to_micros(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.chars.get(self.pos).is_some_and(|c| c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while self.chars.get(self.pos).is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// `-?\d+(\.\d+)?`
    fn number(&mut self) -> Option<f64> {
        let start = self.pos;
        if self.chars.get(self.pos) == Some(&'-') {
            self.pos += 1;
        }
        if self.digits() == 0 {
            return None;
        }
        if self.chars.get(self.pos) == Some(&'.') {
            let dot = self.pos;
            self.pos += 1;
            if self.digits() == 0 {
                // Fraction part is optional; leave the dot for the caller
                self.pos = dot;
            }
        }
        let literal: String = self.chars[start..self.pos].iter().collect();
        literal.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplication_model() {
        let model = derive_simple_model("6*7").unwrap();
        assert_eq!(model.left, 6.0);
        assert_eq!(model.right, 7.0);
        assert_eq!(model.operator, MathOperator::Multiply);
        assert_eq!(model.result, 42.0);
    }

    #[test]
    fn test_x_and_unicode_as_multiplication() {
        assert_eq!(derive_simple_model("6 x 7").unwrap().result, 42.0);
        assert_eq!(derive_simple_model("6 × 7").unwrap().result, 42.0);
    }

    #[test]
    fn test_negative_and_decimal_operands() {
        let model = derive_simple_model("-2.5 - -1.5").unwrap();
        assert_eq!(model.left, -2.5);
        assert_eq!(model.right, -1.5);
        assert_eq!(model.operator, MathOperator::Subtract);
        assert_eq!(model.result, -1.0);
    }

    #[test]
    fn test_division_rounds_to_six_places() {
        let model = derive_simple_model("1/3").unwrap();
        assert_eq!(model.result, 0.333333);
    }

    #[test]
    fn test_rejected_shapes() {
        assert!(derive_simple_model("5/0").is_none());
        assert!(derive_simple_model("1+2+3").is_none());
        assert!(derive_simple_model("(1+2)").is_none());
        assert!(derive_simple_model("y+2").is_none());
        assert!(derive_simple_model("3.").is_none());
        assert!(derive_simple_model("").is_none());
    }

    #[test]
    fn test_describe() {
        let model = derive_simple_model("6*7").unwrap();
        assert_eq!(model.describe(), "6 multiplied by 7 equals 42");
        assert_eq!(model.to_string(), "6 * 7 = 42");
    }
}
