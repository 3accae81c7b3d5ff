//! Number and integer conversion

use crate::options::{NumberOptions, NumberType, ResolvedNumber};
use crate::tokenizer::{self, group_integer_part};
use crate::{ConvertError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([+-]?\d+)(?:\.0*)?$").unwrap());

/// A numeric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Float(f64),
    Integer(i64),
    /// Exact decimal, rounded exactly
    Decimal(Decimal),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Float(v) => *v,
            Number::Integer(v) => *v as f64,
            Number::Decimal(v) => v.to_f64().unwrap_or(f64::NAN),
        }
    }

    /// Integer value, truncating any fraction. `None` when out of range or not finite.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Float(v) => float_to_i64(*v),
            Number::Integer(v) => Some(*v),
            Number::Decimal(v) => v.trunc().to_i64(),
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Number::Decimal(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Float(v) => write!(f, "{v}"),
            Number::Integer(v) => write!(f, "{v}"),
            Number::Decimal(v) => write!(f, "{v}"),
        }
    }
}

fn float_to_i64(v: f64) -> Option<i64> {
    let t = v.trunc();
    if t.is_finite() && t >= i64::MIN as f64 && t < i64::MAX as f64 {
        Some(t as i64)
    } else {
        None
    }
}

/// Round half away from zero on the scaled value. A result of zero is
/// always positive zero.
fn round_float(v: f64, precision: u32) -> f64 {
    let k = 10f64.powi(precision as i32);
    let scaled = (v * k).round();
    if scaled == 0.0 {
        0.0
    } else if scaled.is_finite() {
        scaled / k
    } else {
        v
    }
}

/// Pad the fraction with zeros to exactly `precision` digits.
fn pad_fraction(token: &mut String, precision: u32) {
    let point = match token.find('.') {
        Some(p) => p,
        None => {
            token.push('.');
            token.len() - 1
        }
    };
    let digits = token.len() - point - 1;
    for _ in digits..precision as usize {
        token.push('0');
    }
}

/// Canonical text of a finite value after rounding.
fn canonical_text(value: Number, precision: Option<u32>) -> String {
    match (value, precision) {
        (Number::Float(v), Some(0)) => format!("{:.0}", round_float(v, 0)),
        (Number::Float(v), Some(p)) => {
            let mut text = format!("{}", round_float(v, p));
            pad_fraction(&mut text, p);
            text
        }
        (Number::Float(v), None) => format!("{v}"),
        (Number::Integer(v), Some(p)) if p > 0 => {
            let mut text = v.to_string();
            pad_fraction(&mut text, p);
            text
        }
        (Number::Integer(v), _) => v.to_string(),
        (Number::Decimal(d), Some(p)) => {
            let mut rounded = d.round_dp_with_strategy(p, RoundingStrategy::MidpointAwayFromZero);
            if rounded.is_zero() {
                rounded.set_sign_positive(true);
            }
            let mut text = rounded.to_string();
            if p > 0 {
                pad_fraction(&mut text, p);
            }
            text
        }
        (Number::Decimal(d), None) => d.to_string(),
    }
}

/// Render a canonical token with the locale's separator and grouping.
pub(crate) fn localize_token(token: &str, number: &ResolvedNumber) -> String {
    let (whole, fraction) = match token.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (token, None),
    };

    let mut text = group_integer_part(whole, number.delimiter);
    if let Some(fraction) = fraction {
        text.push(number.separator);
        text.push_str(fraction);
    }
    text
}

/// Format a number for display.
///
/// `None` gives the blank text, NaN gives `nan` (`--`) and infinities give
/// `inf` (`∞`) with a leading `-` when negative.
///
/// # Examples
///
/// ```
/// use hform_core::{Number, NumberOptions, number_to};
///
/// let options = NumberOptions::new().precision(0).delimiter(',').separator('.');
/// assert_eq!(number_to(Some(Number::from(1234567)), &options), "1,234,567");
/// assert_eq!(number_to(Some(Number::from(3.1)), &NumberOptions::new().precision(3)), "3.100");
/// ```
pub fn number_to(value: Option<Number>, options: &NumberOptions) -> String {
    format_number(value, &options.resolve())
}

pub(crate) fn format_number(value: Option<Number>, number: &ResolvedNumber) -> String {
    let Some(value) = value else {
        return number.blank.clone();
    };

    if let Number::Float(v) = value {
        if v.is_nan() {
            return number.nan.clone();
        }
        if v.is_infinite() {
            return if v < 0.0 {
                format!("-{}", number.inf)
            } else {
                number.inf.clone()
            };
        }
    }

    let token = canonical_text(value, number.precision);
    debug_assert!(tokenizer::is_canonical(&token), "{token}");
    localize_token(&token, number)
}

/// Parse locale-formatted text into a number.
///
/// Blank text (or text equal to the blank token) gives `Ok(None)`. The result
/// type is `Float` unless precision is 0 (`Integer`) or a type is requested.
/// Integer targets truncate any fraction.
pub fn number_from(text: &str, options: &NumberOptions) -> Result<Option<Number>> {
    parse_number(text, &options.resolve())
}

pub(crate) fn parse_number(text: &str, number: &ResolvedNumber) -> Result<Option<Number>> {
    if text.trim().is_empty() || text == number.blank {
        return Ok(None);
    }

    let token = tokenizer::tokenize(text, number.separator, number.delimiter)?;
    let invalid = || ConvertError::invalid("number", text);

    let value = match number.target_type() {
        NumberType::Float => Number::Float(token.parse::<f64>().map_err(|_| invalid())?),
        NumberType::Integer => {
            let integral = match INTEGER.captures(&token) {
                Some(caps) => caps[1].trim_start_matches('+').parse::<i64>().ok(),
                None => token.parse::<f64>().ok().and_then(float_to_i64),
            };
            Number::Integer(integral.ok_or_else(invalid)?)
        }
        NumberType::Decimal => Number::Decimal(parse_decimal(&token).ok_or_else(invalid)?),
    };

    hform_log::trace!("parsed {:?} as {:?}", text, value);
    Ok(Some(value))
}

fn parse_decimal(token: &str) -> Option<Decimal> {
    let token = token.trim_start_matches('+');
    if token.contains(['e', 'E']) {
        return Decimal::from_scientific(token).ok();
    }
    Decimal::from_str(token.trim_end_matches('.')).ok()
}

/// Format an integer with digit grouping.
pub fn integer_to(value: Option<i64>, options: &NumberOptions) -> String {
    let number = options.resolve();
    match value {
        Some(v) => localize_token(&v.to_string(), &number),
        None => number.blank,
    }
}

/// Parse a whole number. A fraction made only of zeros is accepted.
///
/// Surrounding whitespace is ignored; inner whitespace is not, unless it is
/// the locale's grouping delimiter.
pub fn integer_from(text: &str, options: &NumberOptions) -> Result<Option<i64>> {
    let number = options.resolve();
    if text.trim().is_empty() || text == number.blank {
        return Ok(None);
    }

    let token = tokenizer::normalize_numerals(text.trim(), number.separator, number.delimiter);
    let caps = INTEGER
        .captures(&token)
        .ok_or_else(|| ConvertError::invalid("integer", text))?;

    caps[1]
        .trim_start_matches('+')
        .parse::<i64>()
        .map(Some)
        .map_err(|_| ConvertError::invalid("integer", text))
}
