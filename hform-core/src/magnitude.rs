//! Numbers with physical units

use crate::{ConvertError, Result};
use crate::number::{Number, format_number, parse_number};
use crate::options::MagnitudeOptions;
use crate::units::{default_precision, denormalize, normalize};
use hform_units::{Quantity, Unit};
use once_cell::sync::Lazy;
use regex::Regex;

/// A number followed by a unit expression.
static WITH_UNITS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^\s*([0-9.,+\-]+(?:[ \u{a0}][0-9]{3}[0-9.,]*)*)\s*([a-zA-Zµ"'(][a-zA-Z0-9_/*^"'µ() ]*?)\s*$"#,
    )
    .unwrap()
});

fn declared_units(options: &MagnitudeOptions) -> Result<Option<String>> {
    match options.units.as_deref() {
        None => Ok(None),
        Some(units) if units.trim().is_empty() => Ok(None),
        Some(units) => normalize(units)
            .map(Some)
            .ok_or_else(|| ConvertError::InvalidUnits(units.to_string())),
    }
}

/// Format a value in the declared units, followed by the units.
///
/// Without an explicit precision, common length units get their usual
/// number of decimals (`m` → 1, `km` → 3).
///
/// # Examples
///
/// ```
/// use hform_core::{MagnitudeOptions, Number, magnitude_to};
/// use hform_locale::Locale;
///
/// let options = MagnitudeOptions::new().units("km").locale(Locale::en());
/// assert_eq!(magnitude_to(Some(Number::from(12.5)), &options), "12.500 km");
/// ```
pub fn magnitude_to(value: Option<Number>, options: &MagnitudeOptions) -> String {
    let mut number = options.number.resolve();
    let Some(value) = value else {
        return number.blank;
    };

    let units = options.units.as_deref().filter(|u| !u.trim().is_empty());
    let normalized = units.and_then(normalize);
    if number.precision.is_none() {
        number.precision = normalized.as_deref().and_then(default_precision);
    }

    let mut text = format_number(Some(value), &number);
    if let Some(display) = normalized.as_deref().or(units).and_then(denormalize) {
        text.push(' ');
        text.push_str(&display);
    }
    text
}

/// Parse a value, with optional units, and express it in the declared units.
///
/// Text without units is taken to be in the declared units. Without declared
/// units the number is returned in whatever units the text names.
///
/// # Errors
///
/// [`ConvertError::InvalidFormat`] for a malformed number and
/// [`ConvertError::InvalidUnits`] when the units do not parse, cannot be
/// converted to the declared units, or are missing altogether.
pub fn magnitude_from(text: &str, options: &MagnitudeOptions) -> Result<Option<f64>> {
    let number = options.number.resolve();
    if text.trim().is_empty() || text == number.blank {
        return Ok(None);
    }

    let declared = declared_units(options)?;
    let (digits, found) = match WITH_UNITS.captures(text) {
        Some(caps) => {
            let digits = caps.get(1).map_or("", |m| m.as_str());
            let units = caps.get(2).map(|m| m.as_str().to_string());
            (digits, units)
        }
        None => (text, None),
    };

    let source = match (&found, &declared) {
        (Some(found), _) => {
            normalize(found).ok_or_else(|| ConvertError::InvalidUnits(found.clone()))?
        }
        (None, Some(declared)) => declared.clone(),
        (None, None) => return Err(ConvertError::InvalidUnits(format!("no units in {text:?}"))),
    };

    let Some(value) = parse_number(digits, &number)? else {
        return Ok(None);
    };
    let value = value.as_f64();

    let Some(target) = declared else {
        return Ok(Some(value));
    };
    if source == target {
        return Ok(Some(value));
    }

    let unit_error = |e: hform_units::UnitError| ConvertError::InvalidUnits(e.to_string());
    let target = Unit::parse(&target).map_err(unit_error)?;
    let converted = Quantity::parse(value, &source)
        .and_then(|q| q.convert_to(&target))
        .map_err(unit_error)?;
    hform_log::trace!("{:?} is {} {}", text, converted.value(), target);
    Ok(Some(converted.value()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hform_locale::Locale;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    fn meters() -> MagnitudeOptions {
        MagnitudeOptions::new().units("m").locale(Locale::en())
    }

    #[test]
    fn test_magnitude_to() {
        assert_eq!(magnitude_to(Some(Number::from(5000)), &meters()), "5000.0 m");
        assert_eq!(
            magnitude_to(Some(Number::from(9.81)), &MagnitudeOptions::new().units("m/s**2").precision(2)),
            "9.81 m/s^2"
        );
        assert_eq!(magnitude_to(None, &meters().blank("-")), "-");
        assert_eq!(
            magnitude_to(Some(Number::from(3)), &MagnitudeOptions::new().locale(Locale::en())),
            "3"
        );
    }

    #[test]
    fn test_magnitude_from_converts() {
        assert!(close(magnitude_from("5 km", &meters()).unwrap().unwrap(), 5000.0));
        assert!(close(magnitude_from("250cm", &meters()).unwrap().unwrap(), 2.5));
        assert!(close(magnitude_from("12", &meters()).unwrap().unwrap(), 12.0));
        assert!(close(magnitude_from("2 m", &meters()).unwrap().unwrap(), 2.0));

        let cm = MagnitudeOptions::new().units("cm").locale(Locale::en());
        assert!(close(magnitude_from("10\"", &cm).unwrap().unwrap(), 25.4));
    }

    #[test]
    fn test_magnitude_from_locale_numbers() {
        let fr = MagnitudeOptions::new().units("m").locale(Locale::fr());
        assert!(close(magnitude_from("1 234,5 m", &fr).unwrap().unwrap(), 1234.5));

        let de = MagnitudeOptions::new().units("kg").locale(Locale::de());
        assert!(close(magnitude_from("1.500 g", &de).unwrap().unwrap(), 1.5));
    }

    #[test]
    fn test_magnitude_from_without_declared_units() {
        let options = MagnitudeOptions::new().locale(Locale::en());
        assert!(close(magnitude_from("5 km", &options).unwrap().unwrap(), 5.0));
        assert!(matches!(
            magnitude_from("5", &options),
            Err(ConvertError::InvalidUnits(_))
        ));
    }

    #[test]
    fn test_magnitude_from_errors() {
        assert!(matches!(
            magnitude_from("5 parsecs", &meters()),
            Err(ConvertError::InvalidUnits(_))
        ));
        assert!(matches!(
            magnitude_from("5 kg", &meters()),
            Err(ConvertError::InvalidUnits(_))
        ));
        assert!(matches!(
            magnitude_from("five m", &meters()),
            Err(ConvertError::InvalidFormat { .. })
        ));
        assert_eq!(magnitude_from("  ", &meters()).unwrap(), None);
    }

    #[test]
    fn test_magnitude_from_rejects_out_of_range_exponents() {
        assert!(matches!(
            magnitude_from("5 m^100 m^100", &meters()),
            Err(ConvertError::InvalidUnits(_))
        ));

        let radians = MagnitudeOptions::new().units("rad").locale(Locale::en());
        assert!(matches!(
            magnitude_from("5 m^256", &radians),
            Err(ConvertError::InvalidUnits(_))
        ));
        assert!(matches!(
            magnitude_from("5 m^128", &MagnitudeOptions::new().locale(Locale::en())),
            Err(ConvertError::InvalidUnits(_))
        ));
    }
}
