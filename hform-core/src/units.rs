//! Unit expressions as typed by users versus as understood by `hform-units`
//!
//! Users write `kg m/s^2`; the unit algebra wants `kg*m/s**2`. A handful of
//! common shorthands (`"`, `'`, `m2`) are mapped to their full spelling.

use hform_units::Unit;

const SYNONYMS: [(&str, &str); 6] = [
    ("m2", "m**2"),
    ("kp/m2", "kp/m**2"),
    ("\"", "inch"),
    ("'", "ft"),
    ("''", "inch"),
    ("in", "inch"),
];

/// Convert a user-facing unit expression to the unit algebra's syntax.
///
/// Returns `None` for blank input or an expression that does not parse;
/// callers turn that into their own error.
///
/// # Examples
///
/// ```
/// use hform_core::units::normalize;
///
/// assert_eq!(normalize("kg m/s^2").as_deref(), Some("kg*m/s**2"));
/// assert_eq!(normalize("\"").as_deref(), Some("inch"));
/// assert_eq!(normalize("bogus"), None);
/// ```
pub fn normalize(expr: &str) -> Option<String> {
    let expr = expr.trim();
    if expr.is_empty() {
        return None;
    }

    let expr = SYNONYMS
        .iter()
        .find(|(short, _)| *short == expr)
        .map_or(expr, |(_, full)| *full);
    let expr = expr.replace('^', "**");
    let mut normalized = String::with_capacity(expr.len());
    for word in expr.split_whitespace() {
        let joins = normalized.ends_with(['*', '/', '(']) || word.starts_with(['*', '/', ')']);
        if !normalized.is_empty() && !joins {
            normalized.push('*');
        }
        normalized.push_str(word);
    }

    match Unit::parse(&normalized) {
        Ok(_) => Some(normalized),
        Err(err) => {
            hform_log::trace!("unit expression {:?} rejected: {}", normalized, err);
            None
        }
    }
}

/// Convert a normalized expression back to its display form. Not validated.
pub fn denormalize(expr: &str) -> Option<String> {
    if expr.trim().is_empty() {
        return None;
    }
    Some(expr.replace("**", "^").replace('*', " "))
}

/// Whether `expr` is a unit expression, in either form.
pub fn is_valid(expr: &str) -> bool {
    normalize(expr).is_some()
}

/// Units named by the last `_`-separated segment of a field name
/// (`distance_km` gives `km`), if that segment is a unit expression.
pub fn units_from_field_name(name: &str) -> Option<String> {
    name.rsplit('_').next().and_then(normalize)
}

/// Display precision for common length units.
pub fn default_precision(units: &str) -> Option<u32> {
    match units {
        "m" => Some(1),
        "mm" | "cm" => Some(0),
        "km" => Some(3),
        _ => None,
    }
}
