//! Conversions between plain-text math and LaTeX.

/// Canonicalize typed math: Unicode operators become ASCII, whitespace runs
/// collapse to a single space, and the result is trimmed.
///
/// `normalize(&normalize(s)) == normalize(s)` for every input.
pub fn normalize(text: &str) -> String {
    let substituted: String = text
        .chars()
        .map(|c| match c {
            '\u{2212}' | '\u{2013}' | '\u{2014}' => '-',
            '×' | '✕' => '*',
            '÷' => '/',
            '\u{00A0}' => ' ',
            other => other,
        })
        .collect();

    substituted.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Convert LaTeX from the math widget into a plain expression.
///
/// Fractions, roots, `\mathrm`/`\text` wrappers and braced super/subscripts
/// are expanded by a brace-aware scan, so nested groups such as
/// `\frac{x^{2}}{\frac{1}{2}}` come out fully parenthesized.
pub fn latex_to_plain(latex: &str) -> String {
    let trimmed = latex.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let unwrapped = trimmed.trim_start_matches('$').trim_end_matches('$');
    let expanded = expand_groups(unwrapped);

    let text = expanded
        .replace("\\left", "")
        .replace("\\right", "")
        .replace("\\times", "*")
        .replace("\\cdot", "*")
        .replace("\\div", "/")
        .replace("\\pm", "+/-");

    let text = strip_command_backslashes(&text);
    let text: String = text.chars().filter(|c| *c != '{' && *c != '}').collect();

    normalize(&text)
}

/// Render a plain expression as LaTeX for the preview pane.
///
/// Input that already contains a backslash is assumed to be LaTeX and is
/// returned normalized but otherwise untouched. This is not an inverse of
/// [`latex_to_plain`]; only the supported operators survive a round trip.
pub fn plain_to_latex(plain: &str) -> String {
    let expression = normalize(plain);
    if expression.is_empty() {
        return String::new();
    }
    if expression.contains('\\') {
        return expression;
    }

    let text = expression
        .replace("<=", "\\le ")
        .replace(">=", "\\ge ")
        .replace("!=", "\\ne ");
    let text = digit_x_digit_to_times(&text);
    let text = text.replace('*', "\\times ");
    sqrt_calls_to_latex(&text)
}

/// Expand the LaTeX constructs that carry braced arguments.
fn expand_groups(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\\' => {
                let name_end = scan_letters(&chars, i + 1);
                let name: String = chars[i + 1..name_end].iter().collect();
                if let Some((rendered, next)) = expand_command(&name, &chars, name_end) {
                    out.push_str(&rendered);
                    i = next;
                } else {
                    out.push('\\');
                    out.push_str(&name);
                    i = name_end.max(i + 1);
                }
            }
            marker @ ('^' | '_') => match braced_group(&chars, i + 1, false) {
                Some((inner, next)) => {
                    out.push(marker);
                    out.push('(');
                    out.push_str(&expand_groups(&inner));
                    out.push(')');
                    i = next;
                }
                None => {
                    out.push(marker);
                    i += 1;
                }
            },
            c => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

/// Expand one braced command starting right after its name. Returns the
/// rendered text and the index following the last consumed group.
fn expand_command(name: &str, chars: &[char], pos: usize) -> Option<(String, usize)> {
    match name {
        "frac" => {
            let (numerator, after_numerator) = braced_group(chars, pos, true)?;
            let (denominator, next) = braced_group(chars, after_numerator, true)?;
            Some((
                format!(
                    "({})/({})",
                    expand_groups(&numerator),
                    expand_groups(&denominator)
                ),
                next,
            ))
        }
        "sqrt" => {
            let (radicand, next) = braced_group(chars, pos, true)?;
            Some((format!("sqrt({})", expand_groups(&radicand)), next))
        }
        "mathrm" | "text" => {
            let (inner, next) = braced_group(chars, pos, false)?;
            Some((expand_groups(&inner), next))
        }
        _ => None,
    }
}

/// Read a non-empty `{...}` group with balanced inner braces.
fn braced_group(chars: &[char], mut pos: usize, skip_space: bool) -> Option<(String, usize)> {
    if skip_space {
        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }
    }
    if chars.get(pos) != Some(&'{') {
        return None;
    }

    let mut depth = 0usize;
    for (offset, &c) in chars[pos..].iter().enumerate() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = pos + offset;
                    if end == pos + 1 {
                        return None;
                    }
                    let inner: String = chars[pos + 1..end].iter().collect();
                    return Some((inner, end + 1));
                }
            }
            _ => {}
        }
    }
    None
}

fn scan_letters(chars: &[char], start: usize) -> usize {
    let mut end = start;
    while end < chars.len() && chars[end].is_ascii_alphabetic() {
        end += 1;
    }
    end
}

/// `\foo` becomes `foo`; backslashes not followed by a letter stay.
fn strip_command_backslashes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' && chars.peek().is_some_and(|next| next.is_ascii_alphabetic()) {
            continue;
        }
        out.push(c);
    }
    out
}

/// `3x4` / `3 X 4` become `3\times 4`. A letter x anywhere else is a variable.
fn digit_x_digit_to_times(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() {
            if let Some((right, next)) = times_operand(&chars, i + 1) {
                out.push(c);
                out.push_str("\\times ");
                out.push(right);
                i = next;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }

    out
}

/// Match `\s*[xX]\s*\d` at `pos`, returning the digit and the index after it.
fn times_operand(chars: &[char], mut pos: usize) -> Option<(char, usize)> {
    while pos < chars.len() && chars[pos].is_whitespace() {
        pos += 1;
    }
    if !matches!(chars.get(pos), Some('x' | 'X')) {
        return None;
    }
    pos += 1;
    while pos < chars.len() && chars[pos].is_whitespace() {
        pos += 1;
    }
    match chars.get(pos) {
        Some(d) if d.is_ascii_digit() => Some((*d, pos + 1)),
        _ => None,
    }
}

/// `sqrt(X)` (any case, X without parentheses) becomes `\sqrt{X}`.
fn sqrt_calls_to_latex(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if let Some((radicand, next)) = sqrt_call_at(&chars, i) {
            out.push_str("\\sqrt{");
            out.push_str(&radicand);
            out.push('}');
            i = next;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    out
}

fn sqrt_call_at(chars: &[char], start: usize) -> Option<(String, usize)> {
    let keyword = ['s', 'q', 'r', 't'];
    if chars.len() < start + keyword.len() {
        return None;
    }
    let matches_keyword = chars[start..start + keyword.len()]
        .iter()
        .zip(keyword.iter())
        .all(|(c, k)| c.to_ascii_lowercase() == *k);
    if !matches_keyword {
        return None;
    }

    let mut pos = start + keyword.len();
    while pos < chars.len() && chars[pos].is_whitespace() {
        pos += 1;
    }
    if chars.get(pos) != Some(&'(') {
        return None;
    }

    let body_start = pos + 1;
    let mut end = body_start;
    while end < chars.len() && chars[end] != ')' {
        if chars[end] == '(' {
            return None;
        }
        end += 1;
    }
    if end >= chars.len() || end == body_start {
        return None;
    }

    let radicand: String = chars[body_start..end].iter().collect();
    Some((radicand, end + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_unicode_operators() {
        assert_eq!(normalize("5 × 4 − 2"), "5 * 4 - 2");
        assert_eq!(normalize("8 ÷ 2"), "8 / 2");
        assert_eq!(normalize("3 ✕ 3 – 1 — 1"), "3 * 3 - 1 - 1");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize("  1 +\t\t2\n"), "1 + 2");
        assert_eq!(normalize("4\u{00A0}\u{00A0}+ 4"), "4 + 4");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        let samples = [
            "5 × 4 − 2",
            "  a\u{00A0}÷ b  ",
            "(1+2)*[3-4]",
            "x ✕ y — z",
            "\t\n",
            "~!@#$%^&*()_+{}|:\"<>?",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_latex_fraction_and_times() {
        assert_eq!(latex_to_plain("\\frac{12}{3}+4\\times2"), "(12)/(3)+4*2");
    }

    #[test]
    fn test_latex_nested_fraction() {
        assert_eq!(
            latex_to_plain("\\frac{\\frac{1}{2}}{3}"),
            "((1)/(2))/(3)"
        );
        assert_eq!(latex_to_plain("\\frac{x^{2}}{4}"), "(x^(2))/(4)");
    }

    #[test]
    fn test_latex_dollar_delimiters() {
        assert_eq!(latex_to_plain("$$1 \\cdot 2$$"), "1 * 2");
        assert_eq!(latex_to_plain("$9 \\div 3$"), "9 / 3");
    }

    #[test]
    fn test_latex_misc_commands() {
        assert_eq!(latex_to_plain("\\sqrt{16}"), "sqrt(16)");
        assert_eq!(latex_to_plain("\\left(2+3\\right)"), "(2+3)");
        assert_eq!(latex_to_plain("x \\pm 1"), "x +/- 1");
        assert_eq!(latex_to_plain("\\text{cm}"), "cm");
        assert_eq!(latex_to_plain("\\mathrm{kg}"), "kg");
        // Text wrappers need the brace right after the command
        assert_eq!(latex_to_plain("\\text {cm}"), "text cm");
        assert_eq!(latex_to_plain("\\sqrt {9}"), "sqrt(9)");
        assert_eq!(latex_to_plain("a_{1}"), "a_(1)");
        assert_eq!(latex_to_plain("\\pi r^2"), "pi r^2");
    }

    #[test]
    fn test_latex_leftover_braces_dropped() {
        assert_eq!(latex_to_plain("{1}+{2}"), "1+2");
        assert_eq!(latex_to_plain("\\frac{}{}"), "frac");
    }

    #[test]
    fn test_latex_empty() {
        assert_eq!(latex_to_plain(""), "");
        assert_eq!(latex_to_plain("   "), "");
    }

    #[test]
    fn test_plain_to_latex_times() {
        assert_eq!(plain_to_latex("5*5"), "5\\times 5");
        assert_eq!(plain_to_latex("3x4"), "3\\times 4");
        assert_eq!(plain_to_latex("3 X 4"), "3\\times 4");
    }

    #[test]
    fn test_plain_to_latex_keeps_variable_x() {
        assert_eq!(plain_to_latex("2x + 1"), "2x + 1");
    }

    #[test]
    fn test_plain_to_latex_comparisons() {
        assert_eq!(plain_to_latex("a <= b"), "a \\le  b");
        assert_eq!(plain_to_latex("a>=b"), "a\\ge b");
        assert_eq!(plain_to_latex("a != b"), "a \\ne  b");
    }

    #[test]
    fn test_plain_to_latex_sqrt() {
        assert_eq!(plain_to_latex("sqrt(9)"), "\\sqrt{9}");
        assert_eq!(plain_to_latex("SQRT (9)+1"), "\\sqrt{9}+1");
        assert_eq!(plain_to_latex("sqrt((9))"), "sqrt((9))");
    }

    #[test]
    fn test_plain_to_latex_passthrough() {
        assert_eq!(plain_to_latex("\\frac{1}{2}"), "\\frac{1}{2}");
        assert_eq!(plain_to_latex(""), "");
        assert_eq!(plain_to_latex("  "), "");
    }
}
