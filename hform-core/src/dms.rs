//! Degrees-minutes-seconds conversion for angles and geographic coordinates

use crate::number::format_number;
use crate::options::{DmsMode, DmsOptions, ResolvedDms, ResolvedNumber};
use crate::tokenizer::normalize_numerals;
use crate::{ConvertError, Number, Result};
use regex::Regex;

/// Seconds are rounded to this many decimals to hide float accumulation error.
const SEC_PRECISION: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component {
    Degrees,
    Minutes,
    Seconds,
}

impl Component {
    fn factor(self) -> f64 {
        match self {
            Component::Degrees => 1.0,
            Component::Minutes => 1.0 / 60.0,
            Component::Seconds => 1.0 / 3600.0,
        }
    }

    fn next(self) -> Option<Component> {
        match self {
            Component::Degrees => Some(Component::Minutes),
            Component::Minutes => Some(Component::Seconds),
            Component::Seconds => None,
        }
    }
}

fn round_to(v: f64, decimals: u32) -> f64 {
    let k = 10f64.powi(decimals as i32);
    (v * k).round() / k
}

/// Format signed degrees as `40° 45' 28.8" N`.
///
/// Minutes and seconds are omitted when zero. Latitude and longitude modes
/// mark the sign with a compass letter, plain mode with a leading `-`.
pub fn dms_to(value: Option<f64>, options: &DmsOptions) -> String {
    format_dms(value, &options.resolve())
}

fn format_dms(value: Option<f64>, dms: &ResolvedDms) -> String {
    let number = &dms.number;
    let Some(value) = value else {
        return number.blank.clone();
    };
    if value.is_nan() {
        return number.nan.clone();
    }
    if value.is_infinite() {
        return if value < 0.0 {
            format!("-{}", number.inf)
        } else {
            number.inf.clone()
        };
    }

    // sign bit, so that -0.0 keeps its sign
    let negative = value.is_sign_negative();
    let value = value.abs();

    let mut deg = value.floor();
    let rest = (value - deg) * 60.0;
    let mut min = rest.floor();
    let digits = number.precision.map_or(SEC_PRECISION, |p| p.min(SEC_PRECISION));
    let mut sec = round_to((rest - min) * 60.0, digits);
    if sec >= 60.0 {
        sec -= 60.0;
        min += 1.0;
    }
    if min >= 60.0 {
        min -= 60.0;
        deg += 1.0;
    }

    let format = &dms.format;
    let first = |seps: &[String]| seps.first().cloned().unwrap_or_default();
    // angles are never grouped
    let integral = ResolvedNumber {
        precision: Some(0),
        delimiter: None,
        ..number.clone()
    };
    let whole = |v: f64| format_number(Some(Number::Float(v)), &integral);

    let mut parts = vec![whole(deg) + &first(&format.deg_seps)];
    if min > 0.0 || sec > 0.0 {
        parts.push(whole(min) + &first(&format.min_seps));
        if sec > 0.0 {
            parts.push(format_number(Some(Number::Float(sec)), number) + &first(&format.sec_seps));
        }
    }
    let text = parts.join(" ");

    let letter = match dms.mode {
        DmsMode::Plain => {
            return if negative { format!("-{text}") } else { text };
        }
        DmsMode::Latitude if negative => &format.south,
        DmsMode::Latitude => &format.north,
        DmsMode::Longitude if negative => &format.west,
        DmsMode::Longitude => &format.east,
    };

    if format.prefix {
        format!("{letter} {text}")
    } else {
        format!("{text} {letter}")
    }
}

/// Format as a longitude (`E`/`W`).
pub fn longitude_to(value: Option<f64>, options: &DmsOptions) -> String {
    dms_to(value, &options.clone().longitude())
}

/// Format as a latitude (`N`/`S`).
pub fn latitude_to(value: Option<f64>, options: &DmsOptions) -> String {
    dms_to(value, &options.clone().latitude())
}

/// Strip one sign token from either end of `text`.
fn strip_sign<'a>(text: &'a str, signs: &[String]) -> Option<&'a str> {
    signs.iter().find_map(|sign| {
        text.strip_prefix(sign.as_str())
            .or_else(|| text.strip_suffix(sign.as_str()))
    })
}

fn with_cases(tokens: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for token in tokens.iter().filter(|t| !t.is_empty()) {
        for variant in [token.to_uppercase(), token.to_lowercase()] {
            if !out.contains(&variant) {
                out.push(variant);
            }
        }
    }
    out
}

/// Parse a degrees-minutes-seconds text into signed degrees.
///
/// Components are numbers followed by a degree, minute or second separator,
/// or by whitespace; a component without a separator is one unit finer than
/// the one before it. A compass letter or sign may lead or trail the text;
/// negative markers (`S`, `W`, `-`) are checked before positive ones.
///
/// # Examples
///
/// ```
/// use hform_core::{DmsOptions, dms_from};
///
/// let options = DmsOptions::new().latitude();
/// let south = dms_from("40°45'30\"S", &options).unwrap().unwrap();
/// assert!((south + 40.758_333_333).abs() < 1e-6);
///
/// let north = dms_from("40 45 30 N", &options).unwrap().unwrap();
/// assert!(north > 0.0);
/// ```
pub fn dms_from(text: &str, options: &DmsOptions) -> Result<Option<f64>> {
    parse_dms(text, &options.resolve())
}

fn parse_dms(original: &str, dms: &ResolvedDms) -> Result<Option<f64>> {
    let number = &dms.number;
    if original.trim().is_empty() || original == number.blank {
        return Ok(None);
    }
    let invalid = || ConvertError::invalid("degrees-minutes-seconds value", original);
    let format = &dms.format;

    let negative_signs = with_cases(&[format.south.as_str(), format.west.as_str(), "-"]);
    let positive_signs = with_cases(&[format.north.as_str(), format.east.as_str(), "+"]);

    let text = original.trim();
    let (text, negative) = match strip_sign(text, &negative_signs) {
        Some(rest) => (rest, true),
        None => (strip_sign(text, &positive_signs).unwrap_or(text), false),
    };

    let mut separators: Vec<&String> = format
        .deg_seps
        .iter()
        .chain(&format.min_seps)
        .chain(&format.sec_seps)
        .collect();

    // whitespace and separator characters keep their meaning as component marks
    let delimiter = number.delimiter.filter(|d| {
        !d.is_whitespace() && !separators.iter().any(|s| s.contains(*d))
    });
    let text = normalize_numerals(text.trim(), number.separator, delimiter);

    separators.sort_by_key(|s| std::cmp::Reverse(s.len()));
    let alternation: Vec<String> = separators
        .iter()
        .map(|s| regex::escape(s))
        .chain([r"\s+".to_string()])
        .collect();
    let component = Regex::new(&format!(
        r"^(\d+(?:\.\d*)?(?:[eE][+-]?\d+)?)({})?\s*",
        alternation.join("|")
    ))
    .map_err(|_| invalid())?;

    let mut rest = text.as_str();
    let mut expected = Some(Component::Degrees);
    let mut total = 0.0;
    let mut found = false;

    while !rest.is_empty() {
        let caps = component.captures(rest).ok_or_else(invalid)?;
        let sep = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        let kind = if format.deg_seps.iter().any(|s| s == sep) {
            Component::Degrees
        } else if format.min_seps.iter().any(|s| s == sep) {
            Component::Minutes
        } else if format.sec_seps.iter().any(|s| s == sep) {
            Component::Seconds
        } else {
            expected.ok_or_else(invalid)?
        };

        let value: f64 = caps[1].parse().map_err(|_| invalid())?;
        total += value * kind.factor();
        expected = kind.next();
        found = true;
        rest = &rest[caps[0].len()..];
    }

    if !found {
        return Err(invalid());
    }

    hform_log::trace!("parsed {:?} as {} degrees", original, total);
    Ok(Some(if negative { -total } else { total }))
}

/// Parse a longitude. Sign letters of either axis are recognised.
pub fn longitude_from(text: &str, options: &DmsOptions) -> Result<Option<f64>> {
    dms_from(text, &options.clone().longitude())
}

/// Parse a latitude. Sign letters of either axis are recognised.
pub fn latitude_from(text: &str, options: &DmsOptions) -> Result<Option<f64>> {
    dms_from(text, &options.clone().latitude())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hform_locale::Locale;

    fn en() -> DmsOptions {
        DmsOptions::new().locale(Locale::en())
    }

    #[test]
    fn test_dms_to_components() {
        assert_eq!(dms_to(Some(40.0), &en()), "40°");
        assert_eq!(dms_to(Some(40.5), &en()), "40° 30'");
        assert_eq!(dms_to(Some(40.758), &en()), "40° 45' 28.8\"");
        assert_eq!(dms_to(Some(-3.25), &en()), "-3° 15'");
        assert_eq!(dms_to(None, &en().blank("-")), "-");
        assert_eq!(dms_to(Some(f64::NAN), &en()), "--");
    }

    #[test]
    fn test_dms_to_compass() {
        assert_eq!(latitude_to(Some(40.758), &en()), "40° 45' 28.8\" N");
        assert_eq!(latitude_to(Some(-40.5), &en()), "40° 30' S");
        assert_eq!(longitude_to(Some(-3.5), &en()), "3° 30' W");
        assert_eq!(longitude_to(Some(-3.5), &en().prefix(true)), "W 3° 30'");
        assert_eq!(
            longitude_to(Some(-3.5), &DmsOptions::new().locale(Locale::es())),
            "3° 30' O"
        );
    }

    #[test]
    fn test_dms_to_carries_rounded_seconds() {
        let almost = 10.0 + 59.0 / 60.0 + 59.999_999_999_99 / 3600.0;
        assert_eq!(dms_to(Some(almost), &en()), "11°");
        assert_eq!(dms_to(Some(10.0 + 29.9999 / 3600.0), &en().precision(0)), "10° 0' 30\"");
    }

    #[test]
    fn test_dms_to_localized_seconds() {
        let es = DmsOptions::new().locale(Locale::es());
        assert_eq!(dms_to(Some(40.758), &es), "40° 45' 28,8\"");
    }

    #[test]
    fn test_dms_to_never_groups_degrees() {
        let fr = DmsOptions::new().locale(Locale::fr());
        let text = dms_to(Some(1234.5), &fr);
        assert_eq!(text, "1234° 30'");
        assert!((dms_from(&text, &fr).unwrap().unwrap() - 1234.5).abs() < 1e-9);

        let de = DmsOptions::new().locale(Locale::de());
        assert_eq!(dms_to(Some(-1500.25), &de), "-1500° 15'");
    }

    #[test]
    fn test_dms_from_separators() {
        let v = dms_from("40°45'30\"", &en()).unwrap().unwrap();
        assert!((v - (40.0 + 45.0 / 60.0 + 30.0 / 3600.0)).abs() < 1e-12);

        let v = dms_from("40º 30'", &en()).unwrap().unwrap();
        assert!((v - 40.5).abs() < 1e-12);

        let v = dms_from("12.5", &en()).unwrap().unwrap();
        assert_eq!(v, 12.5);

        let v = dms_from("30'", &en()).unwrap().unwrap();
        assert!((v - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_dms_from_signs() {
        let options = en().latitude();
        assert!(dms_from("40°45'30\"S", &options).unwrap().unwrap() < 0.0);
        assert!(dms_from("s 40 45", &options).unwrap().unwrap() < 0.0);
        assert!(dms_from("40 45 30 N", &options).unwrap().unwrap() > 0.0);
        assert!(dms_from("-10", &en()).unwrap().unwrap() < 0.0);
        assert!(dms_from("+10", &en()).unwrap().unwrap() > 0.0);
        assert!(longitude_from("3 30 W", &en()).unwrap().unwrap() < 0.0);
        assert!(latitude_from("3 30 W", &en()).unwrap().unwrap() < 0.0);
    }

    #[test]
    fn test_dms_from_locale_numbers() {
        let es = DmsOptions::new().locale(Locale::es());
        let v = dms_from("40° 45' 28,8\" O", &es).unwrap().unwrap();
        assert!((v + 40.758).abs() < 1e-9);
    }

    #[test]
    fn test_dms_from_blank() {
        assert_eq!(dms_from("  ", &en()).unwrap(), None);
        assert_eq!(dms_from("n/a", &en().blank("n/a")).unwrap(), None);
    }

    #[test]
    fn test_dms_from_invalid() {
        for text in ["40° 45' 30\" 12", "40°x", "abc", "N", "40 45 30 15"] {
            let err = dms_from(text, &en()).unwrap_err();
            assert_eq!(err.text(), Some(text), "{text}");
        }
    }

    #[test]
    fn test_round_trip() {
        let options = en().latitude();
        for value in [40.758, -12.345_678, 0.001, 89.999_999] {
            let text = dms_to(Some(value), &options);
            let back = dms_from(&text, &options).unwrap().unwrap();
            assert!((back - value).abs() < 1e-9, "{value} -> {text} -> {back}");
        }
    }
}
