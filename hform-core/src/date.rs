//! Date, time and datetime conversion
//!
//! Text is matched against the locale's input templates in order; the first
//! template whose pattern matches the whole text is parsed strictly. Text
//! that fits no template goes through the lenient parser in [`crate::lenient`].

use crate::{ConvertError, Result};
use crate::lenient;
use crate::options::DateOptions;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use hform_locale::{LocalizedNames, Temporal, TemporalKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Input to the `*_from` date converters: text to parse, or a value that is
/// passed through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput<'a> {
    Text(&'a str),
    Value(Temporal),
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(text)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(text: &'a String) -> Self {
        DateInput::Text(text.as_str())
    }
}

impl From<Temporal> for DateInput<'_> {
    fn from(value: Temporal) -> Self {
        DateInput::Value(value)
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(value: NaiveDate) -> Self {
        DateInput::Value(value.into())
    }
}

impl From<NaiveTime> for DateInput<'_> {
    fn from(value: NaiveTime) -> Self {
        DateInput::Value(value.into())
    }
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::Value(value.into())
    }
}

fn alternation(lists: &[&Vec<String>]) -> String {
    let mut names: Vec<&String> = lists.iter().flat_map(|l| l.iter()).collect();
    names.sort_by_key(|n| std::cmp::Reverse(n.len()));
    let names: Vec<String> = names.iter().map(|n| regex::escape(n)).collect();
    format!("(?:{})", names.join("|"))
}

/// Pattern fragment for each strftime directive recognised in input templates.
static DIRECTIVES: Lazy<HashMap<char, String>> = Lazy::new(|| {
    let english = LocalizedNames::english();
    let months = alternation(&[&english.month_names, &english.abbr_month_names]);
    let days = alternation(&[&english.day_names, &english.abbr_day_names]);
    HashMap::from([
        ('B', months.clone()),
        ('b', months),
        ('A', days.clone()),
        ('a', days),
        ('Y', r"\d{4}".to_string()),
        ('y', r"\d{2}".to_string()),
        ('m', r"\d{1,2}".to_string()),
        ('d', r"\d{1,2}".to_string()),
        ('e', r"(?:\s\d|\d{2})".to_string()),
        ('H', r"\d{2}".to_string()),
        ('M', r"\d{2}".to_string()),
        ('S', r"\d{2}".to_string()),
        ('%', "%".to_string()),
    ])
});

/// Build an anchored, case-insensitive pattern matching text written with
/// `template`. Unknown directives are matched literally.
pub(crate) fn template_regex(template: &str) -> Option<Regex> {
    let mut pattern = String::from("(?i)^");
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
            continue;
        }
        match chars.next() {
            Some(d) => match DIRECTIVES.get(&d) {
                Some(fragment) => pattern.push_str(fragment),
                None => pattern.push_str(&regex::escape(&format!("%{d}"))),
            },
            None => pattern.push('%'),
        }
    }
    pattern.push('$');
    Regex::new(&pattern).ok()
}

/// Replace localized month and weekday names with their English equivalents.
///
/// Longer names are replaced before shorter ones; when two localized names
/// are spelled alike the first listed mapping wins.
pub(crate) fn translate_names(text: &str, names: &LocalizedNames) -> String {
    let english = LocalizedNames::english();
    if *names == english {
        return text.to_string();
    }

    let mut mapping: HashMap<String, &str> = HashMap::new();
    for (local, canonical) in names.pairs_with(&english) {
        if local.is_empty() {
            continue;
        }
        mapping.entry(local.to_lowercase()).or_insert(canonical);
    }
    if mapping.is_empty() {
        return text.to_string();
    }

    let mut keys: Vec<&String> = mapping.keys().collect();
    keys.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    let keys: Vec<String> = keys.iter().map(|k| regex::escape(k)).collect();
    let Ok(pattern) = Regex::new(&format!(r"(?i)\b(?:{})\b", keys.join("|"))) else {
        return text.to_string();
    };

    pattern
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let found = &caps[0];
            mapping
                .get(&found.to_lowercase())
                .map_or_else(|| found.to_string(), |c| (*c).to_string())
        })
        .into_owned()
}

fn parse_with(text: &str, template: &str, kind: TemporalKind) -> Option<Temporal> {
    match kind {
        TemporalKind::Date => NaiveDate::parse_from_str(text, template).ok().map(Temporal::Date),
        TemporalKind::Time => NaiveTime::parse_from_str(text, template).ok().map(Temporal::Time),
        TemporalKind::DateTime => NaiveDateTime::parse_from_str(text, template)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(text, template)
                    .ok()
                    .map(|d| d.and_time(NaiveTime::MIN))
            })
            .map(Temporal::DateTime),
    }
}

/// Whether the day comes before the month in `template`.
fn day_first(template: &str) -> bool {
    let position = |directives: &[&str]| directives.iter().filter_map(|d| template.find(d)).min();
    match (position(&["%d", "%e"]), position(&["%m", "%b", "%B"])) {
        (Some(day), Some(month)) => day < month,
        _ => false,
    }
}

fn format_kind(
    value: Option<Temporal>,
    options: &DateOptions,
    default_kind: TemporalKind,
) -> String {
    let options = options.with_default_kind(default_kind);
    let Some(value) = value else {
        return options.blank.clone().unwrap_or_default();
    };
    let (locale, provider) = options.locale_and_provider();
    let kind = options.kind.unwrap_or(default_kind);
    provider.render_localized(&value, kind, options.format.as_deref(), &locale)
}

fn parse_kind(
    input: DateInput<'_>,
    options: &DateOptions,
    default_kind: TemporalKind,
) -> Result<Option<Temporal>> {
    let text = match input {
        DateInput::Value(value) => return Ok(Some(value)),
        DateInput::Text(text) => text,
    };
    let trimmed = text.trim();
    if trimmed.is_empty() || options.blank.as_deref().is_some_and(|b| b.trim() == trimmed) {
        return Ok(None);
    }

    let kind = options.kind.unwrap_or(default_kind);
    let (locale, provider) = options.locale_and_provider();
    let translated = translate_names(trimmed, &provider.localized_names(&locale));

    let mut templates = provider.date_input_formats(kind, &locale);
    if kind == TemporalKind::DateTime {
        templates.extend(provider.date_input_formats(TemporalKind::Date, &locale));
    }

    for template in &templates {
        let Some(pattern) = template_regex(template) else {
            continue;
        };
        if !pattern.is_match(&translated) {
            continue;
        }
        if let Some(value) = parse_with(&translated, template, kind) {
            hform_log::trace!("{:?} parsed with template {:?}", trimmed, template);
            return Ok(Some(value));
        }
        hform_log::trace!("{:?} matched template {:?} but did not parse", trimmed, template);
    }

    let reference = options.reference_date.unwrap_or_else(|| Local::now().date_naive());
    let order = day_first(&provider.date_formats(&locale).date.output);
    hform_log::debug!("no template matched {:?}, trying lenient parse", trimmed);
    lenient::parse(&translated, kind, reference, order)
        .map(Some)
        .ok_or_else(|| ConvertError::invalid(kind_name(kind), text))
}

fn kind_name(kind: TemporalKind) -> &'static str {
    match kind {
        TemporalKind::Date => "date",
        TemporalKind::Time => "time",
        TemporalKind::DateTime => "datetime",
    }
}

/// Render a date with the locale's date template. `None` gives the blank text.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hform_core::{DateOptions, date_to};
/// use hform_locale::Locale;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// let options = DateOptions::new().locale(Locale::de());
/// assert_eq!(date_to(Some(date.into()), &options), "05.03.2024");
/// ```
pub fn date_to(value: Option<Temporal>, options: &DateOptions) -> String {
    format_kind(value, options, TemporalKind::Date)
}

pub fn time_to(value: Option<Temporal>, options: &DateOptions) -> String {
    format_kind(value, options, TemporalKind::Time)
}

pub fn datetime_to(value: Option<Temporal>, options: &DateOptions) -> String {
    format_kind(value, options, TemporalKind::DateTime)
}

/// Parse a date. Localized month and weekday names are understood.
///
/// # Errors
///
/// [`ConvertError::InvalidFormat`] when neither a template nor the lenient
/// parser makes sense of the text.
pub fn date_from<'a>(
    input: impl Into<DateInput<'a>>,
    options: &DateOptions,
) -> Result<Option<Temporal>> {
    parse_kind(input.into(), options, TemporalKind::Date)
}

pub fn time_from<'a>(
    input: impl Into<DateInput<'a>>,
    options: &DateOptions,
) -> Result<Option<Temporal>> {
    parse_kind(input.into(), options, TemporalKind::Time)
}

/// Parse a date and time; a bare date is read as midnight.
pub fn datetime_from<'a>(
    input: impl Into<DateInput<'a>>,
    options: &DateOptions,
) -> Result<Option<Temporal>> {
    parse_kind(input.into(), options, TemporalKind::DateTime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hform_locale::Locale;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_template_regex() {
        let pattern = template_regex("%d/%m/%Y").unwrap();
        assert!(pattern.is_match("5/3/2024"));
        assert!(pattern.is_match("05/03/2024"));
        assert!(!pattern.is_match("05/03/24"));
        assert!(!pattern.is_match("05/03/2024 10:00"));

        let named = template_regex("%B %d, %Y").unwrap();
        assert!(named.is_match("march 5, 2024"));
        assert!(named.is_match("Sep 5, 2024"));
        assert!(!named.is_match("Marchy 5, 2024"));
    }

    #[test]
    fn test_translate_names() {
        let es = hform_locale::BuiltinProvider;
        let names = hform_locale::LocaleFormatProvider::localized_names(&es, &Locale::es());
        assert_eq!(translate_names("5 de marzo de 2024", &names), "5 de March de 2024");
        assert_eq!(translate_names("Martes, 5 MAR 2024", &names), "Tuesday, 5 Mar 2024");
        assert_eq!(translate_names("2024-03-05", &names), "2024-03-05");
    }

    #[test]
    fn test_day_first() {
        assert!(day_first("%d/%m/%Y"));
        assert!(day_first("%d. %B %Y"));
        assert!(!day_first("%m/%d/%Y"));
        assert!(!day_first("%Y"));
    }

    #[test]
    fn test_date_to_locales() {
        let date = Some(Temporal::Date(ymd(2024, 3, 5)));
        assert_eq!(date_to(date.clone(), &DateOptions::new().locale(Locale::en())), "03/05/2024");
        assert_eq!(date_to(date.clone(), &DateOptions::new().locale(Locale::es())), "05/03/2024");
        assert_eq!(
            date_to(date, &DateOptions::new().locale(Locale::es()).format("%A %d de %B")),
            "martes 05 de marzo"
        );
        assert_eq!(date_to(None, &DateOptions::new().blank("-")), "-");
    }

    #[test]
    fn test_time_and_datetime_to() {
        let at = ymd(2024, 3, 5).and_hms_opt(14, 7, 9).unwrap();
        let en = DateOptions::new().locale(Locale::en());
        assert_eq!(datetime_to(Some(at.into()), &en), "03/05/2024 14:07:09");
        assert_eq!(time_to(Some(at.time().into()), &en), "14:07:09");
        assert_eq!(date_to(Some(at.into()), &en), "03/05/2024");
    }

    #[test]
    fn test_date_from_templates() {
        let en = DateOptions::new().locale(Locale::en());
        assert_eq!(date_from("03/05/2024", &en).unwrap(), Some(ymd(2024, 3, 5).into()));
        assert_eq!(date_from("March 5, 2024", &en).unwrap(), Some(ymd(2024, 3, 5).into()));
        assert_eq!(date_from("2024-03-05", &en).unwrap(), Some(ymd(2024, 3, 5).into()));

        let es = DateOptions::new().locale(Locale::es());
        assert_eq!(date_from("05/03/2024", &es).unwrap(), Some(ymd(2024, 3, 5).into()));
        assert_eq!(date_from("5 de marzo de 2024", &es).unwrap(), Some(ymd(2024, 3, 5).into()));

        let de = DateOptions::new().locale(Locale::de());
        assert_eq!(date_from("5. März 2024", &de).unwrap(), Some(ymd(2024, 3, 5).into()));
    }

    #[test]
    fn test_blank_and_passthrough() {
        let options = DateOptions::new().locale(Locale::en()).blank("n/a");
        assert_eq!(date_from("", &options).unwrap(), None);
        assert_eq!(date_from("  n/a ", &options).unwrap(), None);

        let value = Temporal::DateTime(ymd(2024, 1, 2).and_hms_opt(3, 4, 5).unwrap());
        assert_eq!(date_from(value.clone(), &options).unwrap(), Some(value));
    }

    #[test]
    fn test_datetime_from_accepts_bare_date() {
        let en = DateOptions::new().locale(Locale::en());
        assert_eq!(
            datetime_from("2024-03-05 10:30", &en).unwrap(),
            Some(ymd(2024, 3, 5).and_hms_opt(10, 30, 0).unwrap().into())
        );
        assert_eq!(
            datetime_from("03/05/2024", &en).unwrap(),
            Some(ymd(2024, 3, 5).and_time(NaiveTime::MIN).into())
        );
    }

    #[test]
    fn test_time_from() {
        let en = DateOptions::new().locale(Locale::en());
        assert_eq!(
            time_from("07:45", &en).unwrap(),
            Some(NaiveTime::from_hms_opt(7, 45, 0).unwrap().into())
        );
    }

    #[test]
    fn test_lenient_fallback_uses_reference_date() {
        let options = DateOptions::new()
            .locale(Locale::es())
            .reference_date(ymd(2023, 8, 20));
        assert_eq!(date_from("3/4", &options).unwrap(), Some(ymd(2023, 4, 3).into()));
        assert_eq!(date_from("marzo", &options).unwrap(), Some(ymd(2023, 3, 20).into()));
    }

    #[test]
    fn test_unparseable_date_is_an_error() {
        let en = DateOptions::new().locale(Locale::en());
        let err = date_from("not a date", &en).unwrap_err();
        assert_eq!(err.text(), Some("not a date"));
        assert!(date_from("13/45/2024", &en).is_err());
    }
}
