//! Math input helpers: plain text, LaTeX and hint conversions used by the
//! expression field and its preview, plus the two-operand model behind the
//! visual aid.
//!
//! Everything here is a pure function over strings. Nothing fails: absent or
//! unparseable input degrades to an empty string or `None`.

pub mod expression;
pub mod hint;
pub mod model;

pub use expression::{latex_to_plain, normalize, plain_to_latex};
pub use hint::{get_hint, has_balanced_delimiters, is_likely_math, InputHint};
pub use model::{derive_simple_model, MathOperator, SimpleMathModel};
