//! Per-locale format tables
//!
//! Every table deserializes with serde and fills missing fields with the
//! English defaults, so a format file only needs to list what differs.

use crate::TemporalKind;
use serde::{Deserialize, Serialize};

// ============================================================================
// Numbers
// ============================================================================

/// Number formatting configuration for a locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    /// Decimal separator
    pub separator: char,
    /// Digit grouping delimiter (thousands separator)
    pub delimiter: Option<char>,
    /// Suggested display precision
    pub precision: Option<u32>,
    /// Text for a missing value
    pub blank: Option<String>,
    /// Text for NaN
    pub nan: Option<String>,
    /// Text for infinity (a `-` is prefixed for negative infinity)
    pub inf: Option<String>,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            separator: '.',
            delimiter: None,
            precision: None,
            blank: None,
            nan: None,
            inf: None,
        }
    }
}

// ============================================================================
// Logical values
// ============================================================================

/// Boolean formatting configuration for a locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogicalFormat {
    /// Text produced for `true`
    #[serde(rename = "true")]
    pub true_text: String,
    /// Text produced for `false`
    #[serde(rename = "false")]
    pub false_text: String,
    /// Texts accepted as `true` (defaults to `true_text` alone)
    pub trues: Option<Vec<String>>,
    /// Texts accepted as `false` (defaults to `false_text` alone)
    pub falses: Option<Vec<String>>,
    /// Text for a missing value
    pub blank: Option<String>,
}

impl Default for LogicalFormat {
    fn default() -> Self {
        Self {
            true_text: "true".to_string(),
            false_text: "false".to_string(),
            trues: None,
            falses: None,
            blank: None,
        }
    }
}

// ============================================================================
// Degrees, minutes, seconds
// ============================================================================

/// Angular coordinate formatting configuration for a locale.
///
/// The first separator of each list is used for output; all are accepted
/// on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DmsFormat {
    pub deg_seps: Vec<String>,
    pub min_seps: Vec<String>,
    pub sec_seps: Vec<String>,
    pub north: String,
    pub south: String,
    pub east: String,
    pub west: String,
    /// Put the compass letter before the value instead of after it
    pub prefix: bool,
}

impl Default for DmsFormat {
    fn default() -> Self {
        Self {
            deg_seps: vec!["°".to_string(), "º".to_string()],
            min_seps: vec!["'".to_string()],
            sec_seps: vec!["\"".to_string()],
            north: "N".to_string(),
            south: "S".to_string(),
            east: "E".to_string(),
            west: "W".to_string(),
            prefix: false,
        }
    }
}

// ============================================================================
// Dates
// ============================================================================

/// strftime-style templates for one temporal kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTemplates {
    /// Template used to render values
    pub output: String,
    /// Templates tried, in order, when parsing text
    pub input: Vec<String>,
}

/// Date and time templates for a locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormats {
    pub date: DateTemplates,
    pub time: DateTemplates,
    pub datetime: DateTemplates,
}

impl DateFormats {
    /// Templates for the given kind.
    pub fn templates(&self, kind: TemporalKind) -> &DateTemplates {
        match kind {
            TemporalKind::Date => &self.date,
            TemporalKind::Time => &self.time,
            TemporalKind::DateTime => &self.datetime,
        }
    }
}

fn templates(output: &str, input: &[&str]) -> DateTemplates {
    DateTemplates {
        output: output.to_string(),
        input: input.iter().map(|s| s.to_string()).collect(),
    }
}

impl Default for DateFormats {
    fn default() -> Self {
        Self {
            date: templates("%Y-%m-%d", &["%Y-%m-%d", "%d %B %Y", "%d %b %Y"]),
            time: templates("%H:%M:%S", &["%H:%M:%S", "%H:%M"]),
            datetime: templates(
                "%Y-%m-%d %H:%M:%S",
                &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%d"],
            ),
        }
    }
}

impl DateFormats {
    pub(crate) fn new(
        date: (&str, &[&str]),
        time: (&str, &[&str]),
        datetime: (&str, &[&str]),
    ) -> Self {
        Self {
            date: templates(date.0, date.1),
            time: templates(time.0, time.1),
            datetime: templates(datetime.0, datetime.1),
        }
    }
}

/// Localized month and weekday names.
///
/// Months are January first; weekdays are Sunday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedNames {
    pub month_names: Vec<String>,
    pub abbr_month_names: Vec<String>,
    pub day_names: Vec<String>,
    pub abbr_day_names: Vec<String>,
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl LocalizedNames {
    /// The canonical (English) names that parsing translates into.
    pub fn english() -> Self {
        Self::new(
            &[
                "January", "February", "March", "April", "May", "June", "July", "August",
                "September", "October", "November", "December",
            ],
            &[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            &[
                "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
            ],
            &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        )
    }

    pub(crate) fn new(months: &[&str], abbr_months: &[&str], days: &[&str], abbr_days: &[&str]) -> Self {
        Self {
            month_names: owned(months),
            abbr_month_names: owned(abbr_months),
            day_names: owned(days),
            abbr_day_names: owned(abbr_days),
        }
    }

    /// All names paired with their canonical counterpart, full names first.
    pub fn pairs_with<'a>(&'a self, canonical: &'a LocalizedNames) -> Vec<(&'a str, &'a str)> {
        let lists = [
            (&self.month_names, &canonical.month_names),
            (&self.abbr_month_names, &canonical.abbr_month_names),
            (&self.day_names, &canonical.day_names),
            (&self.abbr_day_names, &canonical.abbr_day_names),
        ];
        lists
            .into_iter()
            .flat_map(|(local, english)| {
                local
                    .iter()
                    .zip(english.iter())
                    .map(|(l, e)| (l.as_str(), e.as_str()))
            })
            .collect()
    }
}

impl Default for LocalizedNames {
    fn default() -> Self {
        Self::english()
    }
}

// ============================================================================
// Everything for one locale
// ============================================================================

/// The complete format table of one locale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleFormats {
    pub number: NumberFormat,
    pub logical: LogicalFormat,
    pub dms: DmsFormat,
    pub dates: DateFormats,
    pub names: LocalizedNames,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_tables_fill_defaults() {
        let formats: LocaleFormats = serde_json::from_str(
            r#"{ "number": { "separator": ",", "delimiter": "." }, "logical": { "true": "Sí" } }"#,
        )
        .unwrap();

        assert_eq!(formats.number.separator, ',');
        assert_eq!(formats.number.delimiter, Some('.'));
        assert_eq!(formats.logical.true_text, "Sí");
        assert_eq!(formats.logical.false_text, "false");
        assert_eq!(formats.dms, DmsFormat::default());
    }

    #[test]
    fn test_name_pairs() {
        let english = LocalizedNames::english();
        let pairs = english.pairs_with(&english);
        assert_eq!(pairs.len(), 12 + 12 + 7 + 7);
        assert_eq!(pairs[0], ("January", "January"));
        assert_eq!(pairs[12], ("Jan", "Jan"));
    }

    #[test]
    fn test_templates_by_kind() {
        let formats = DateFormats::default();
        assert_eq!(formats.templates(TemporalKind::Time).output, "%H:%M:%S");
        assert_eq!(formats.templates(TemporalKind::Date).input[0], "%Y-%m-%d");
    }
}
