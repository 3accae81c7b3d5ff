//! Locale-aware numeric tokenization and digit grouping
//!
//! All numeric parsing converges on the canonical token
//! `[+-]?digits(.digits*)?([eE][+-]?digits)?` before the final conversion.

use crate::{ConvertError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static CANONICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+(?:\.\d*)?(?:[eE][+-]?\d+)?$").unwrap());

/// Whether `token` is a canonical numeric token.
pub fn is_canonical(token: &str) -> bool {
    CANONICAL.is_match(token)
}

/// Drop grouping delimiters and map the decimal separator to `.`.
///
/// Whitespace is kept; callers decide how much of it to strip.
pub fn normalize_numerals(text: &str, separator: char, delimiter: Option<char>) -> String {
    text.chars()
        .filter(|&c| Some(c) != delimiter)
        .map(|c| if c == separator { '.' } else { c })
        .collect()
}

/// Turn locale-formatted numeric text into a canonical token.
///
/// All whitespace is stripped first.
///
/// # Examples
///
/// ```
/// use hform_core::tokenizer::tokenize;
///
/// assert_eq!(tokenize("1.234,5", ',', Some('.')).unwrap(), "1234.5");
/// assert!(tokenize("12x34", '.', None).is_err());
/// ```
pub fn tokenize(text: &str, separator: char, delimiter: Option<char>) -> Result<String> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let token = normalize_numerals(&compact, separator, delimiter);

    if !is_canonical(&token) {
        return Err(ConvertError::invalid("number", text));
    }
    Ok(token)
}

/// Insert `delimiter` every `group` digits of `text[start..end]`, counting
/// back from `end`.
///
/// `start` and `end` are byte offsets delimiting a run of ASCII digits.
pub fn group_digits(
    text: &str,
    group: usize,
    delimiter: Option<char>,
    start: usize,
    end: usize,
) -> String {
    let Some(delimiter) = delimiter else {
        return text.to_string();
    };
    if group == 0 || start >= end || end > text.len() {
        return text.to_string();
    }

    let digits = &text[start..end];
    let count = digits.chars().count();
    let mut out = String::with_capacity(text.len() + count / group * delimiter.len_utf8());
    out.push_str(&text[..start]);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (count - i) % group == 0 {
            out.push(delimiter);
        }
        out.push(c);
    }
    out.push_str(&text[end..]);
    out
}

/// Group the integer digits of a canonical token (`-1234.5` → `-1,234.5`).
pub(crate) fn group_integer_part(token: &str, delimiter: Option<char>) -> String {
    let start = token.find(|c: char| c.is_ascii_digit()).unwrap_or(0);
    let end = token
        .find(|c: char| c == '.' || c == 'e' || c == 'E')
        .unwrap_or(token.len());
    group_digits(token, 3, delimiter, start, end)
}
