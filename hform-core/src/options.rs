//! Per-call conversion options
//!
//! Each converter takes its own options struct. Fields left unset are filled
//! from the locale's format table when the call is made; nothing is cached
//! between calls, so a change of default locale or provider applies at once.

use hform_locale::{
    DmsFormat, Locale, LocaleFormatProvider, TemporalKind, current_provider, resolve_locale,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// Numbers
// ============================================================================

/// Target type for parsed numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberType {
    Float,
    Integer,
    Decimal,
}

/// Options for [`number_to`](crate::number_to), [`number_from`](crate::number_from)
/// and the integer converters.
///
/// # Examples
///
/// ```
/// use hform_core::{NumberOptions, Number, number_to};
///
/// let options = NumberOptions::new().precision(2).separator(',').delimiter('.');
/// assert_eq!(number_to(Some(Number::from(1234.5)), &options), "1.234,50");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberOptions {
    pub locale: Option<Locale>,
    /// Fractional digits; `Some(0)` displays integers and parses to integers
    pub precision: Option<u32>,
    pub separator: Option<char>,
    /// `Some(None)` disables grouping even if the locale groups digits
    pub delimiter: Option<Option<char>>,
    pub blank: Option<String>,
    pub nan: Option<String>,
    pub inf: Option<String>,
    pub number_type: Option<NumberType>,
}

impl NumberOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(Some(delimiter));
        self
    }

    /// Turn digit grouping off.
    pub fn no_delimiter(mut self) -> Self {
        self.delimiter = Some(None);
        self
    }

    pub fn blank(mut self, blank: impl Into<String>) -> Self {
        self.blank = Some(blank.into());
        self
    }

    pub fn nan(mut self, nan: impl Into<String>) -> Self {
        self.nan = Some(nan.into());
        self
    }

    pub fn inf(mut self, inf: impl Into<String>) -> Self {
        self.inf = Some(inf.into());
        self
    }

    pub fn number_type(mut self, number_type: NumberType) -> Self {
        self.number_type = Some(number_type);
        self
    }

    /// Fill unset fields from the current provider.
    pub fn resolve(&self) -> ResolvedNumber {
        self.resolve_with(current_provider().as_ref())
    }

    /// Fill unset fields from `provider`.
    ///
    /// The locale's suggested precision is not applied; only an explicit
    /// precision affects rounding and padding.
    pub fn resolve_with(&self, provider: &dyn LocaleFormatProvider) -> ResolvedNumber {
        let locale = resolve_locale(self.locale.as_ref());
        let format = provider.number_format(&locale);

        let separator = self.separator.unwrap_or(format.separator);
        let mut delimiter = self.delimiter.unwrap_or(format.delimiter);
        if delimiter == Some(separator) {
            hform_log::debug!(
                "delimiter {:?} equals separator for {}, grouping disabled",
                separator,
                locale
            );
            delimiter = None;
        }

        ResolvedNumber {
            locale,
            separator,
            delimiter,
            precision: self.precision,
            blank: self.blank.clone().or(format.blank).unwrap_or_default(),
            nan: self.nan.clone().or(format.nan).unwrap_or_else(|| "--".to_string()),
            inf: self.inf.clone().or(format.inf).unwrap_or_else(|| "∞".to_string()),
            number_type: self.number_type,
        }
    }
}

/// Number options after merging with the locale table.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedNumber {
    pub locale: Locale,
    pub separator: char,
    /// Never equal to `separator`
    pub delimiter: Option<char>,
    pub precision: Option<u32>,
    pub blank: String,
    pub nan: String,
    pub inf: String,
    pub number_type: Option<NumberType>,
}

impl ResolvedNumber {
    /// Explicit type, else integer for precision 0, else float.
    pub fn target_type(&self) -> NumberType {
        match (self.number_type, self.precision) {
            (Some(t), _) => t,
            (None, Some(0)) => NumberType::Integer,
            (None, _) => NumberType::Float,
        }
    }
}

// ============================================================================
// Logical values
// ============================================================================

/// Options for [`logical_to`](crate::logical_to) and [`logical_from`](crate::logical_from).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogicalOptions {
    pub locale: Option<Locale>,
    pub true_text: Option<String>,
    pub false_text: Option<String>,
    pub trues: Option<Vec<String>>,
    pub falses: Option<Vec<String>>,
    pub blank: Option<String>,
}

impl LogicalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn true_text(mut self, text: impl Into<String>) -> Self {
        self.true_text = Some(text.into());
        self
    }

    pub fn false_text(mut self, text: impl Into<String>) -> Self {
        self.false_text = Some(text.into());
        self
    }

    pub fn trues<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trues = Some(tokens.into_iter().map(Into::into).collect());
        self
    }

    pub fn falses<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.falses = Some(tokens.into_iter().map(Into::into).collect());
        self
    }

    pub fn blank(mut self, blank: impl Into<String>) -> Self {
        self.blank = Some(blank.into());
        self
    }

    pub fn resolve(&self) -> ResolvedLogical {
        self.resolve_with(current_provider().as_ref())
    }

    /// Fill unset fields from `provider`.
    ///
    /// Accepted token sets always include the display text. A display text
    /// given here replaces the locale's token set unless a set is also given.
    pub fn resolve_with(&self, provider: &dyn LocaleFormatProvider) -> ResolvedLogical {
        let locale = resolve_locale(self.locale.as_ref());
        let format = provider.logical_format(&locale);

        let tokens = |explicit: &Option<Vec<String>>,
                      text_overridden: bool,
                      table: Option<Vec<String>>,
                      text: &str| {
            let mut set = match (explicit, text_overridden) {
                (Some(list), _) => list.clone(),
                (None, true) => Vec::new(),
                (None, false) => table.unwrap_or_default(),
            };
            set.push(text.to_string());
            set
        };

        let true_text = self.true_text.clone().unwrap_or(format.true_text);
        let false_text = self.false_text.clone().unwrap_or(format.false_text);

        ResolvedLogical {
            trues: tokens(&self.trues, self.true_text.is_some(), format.trues, &true_text),
            falses: tokens(&self.falses, self.false_text.is_some(), format.falses, &false_text),
            blank: self.blank.clone().or(format.blank).unwrap_or_default(),
            true_text,
            false_text,
        }
    }
}

/// Logical options after merging with the locale table.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLogical {
    pub true_text: String,
    pub false_text: String,
    pub trues: Vec<String>,
    pub falses: Vec<String>,
    pub blank: String,
}

// ============================================================================
// Degrees, minutes, seconds
// ============================================================================

/// How a signed angle is marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DmsMode {
    /// Leading `-` for negative values
    #[default]
    Plain,
    /// North/south letter
    Latitude,
    /// East/west letter
    Longitude,
}

/// Options for the degrees-minutes-seconds converters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DmsOptions {
    /// Formatting of the seconds component and number parsing
    pub number: NumberOptions,
    pub mode: DmsMode,
    pub deg_seps: Option<Vec<String>>,
    pub min_seps: Option<Vec<String>>,
    pub sec_seps: Option<Vec<String>>,
    pub north: Option<String>,
    pub south: Option<String>,
    pub east: Option<String>,
    pub west: Option<String>,
    pub prefix: Option<bool>,
}

impl DmsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.number.locale = Some(locale);
        self
    }

    pub fn mode(mut self, mode: DmsMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn latitude(self) -> Self {
        self.mode(DmsMode::Latitude)
    }

    pub fn longitude(self) -> Self {
        self.mode(DmsMode::Longitude)
    }

    /// Fractional digits of the seconds component.
    pub fn precision(mut self, precision: u32) -> Self {
        self.number.precision = Some(precision);
        self
    }

    pub fn blank(mut self, blank: impl Into<String>) -> Self {
        self.number.blank = Some(blank.into());
        self
    }

    pub fn prefix(mut self, prefix: bool) -> Self {
        self.prefix = Some(prefix);
        self
    }

    pub fn compass(
        mut self,
        north: impl Into<String>,
        south: impl Into<String>,
        east: impl Into<String>,
        west: impl Into<String>,
    ) -> Self {
        self.north = Some(north.into());
        self.south = Some(south.into());
        self.east = Some(east.into());
        self.west = Some(west.into());
        self
    }

    pub fn separators(
        mut self,
        deg: impl Into<String>,
        min: impl Into<String>,
        sec: impl Into<String>,
    ) -> Self {
        self.deg_seps = Some(vec![deg.into()]);
        self.min_seps = Some(vec![min.into()]);
        self.sec_seps = Some(vec![sec.into()]);
        self
    }

    pub fn resolve(&self) -> ResolvedDms {
        self.resolve_with(current_provider().as_ref())
    }

    pub fn resolve_with(&self, provider: &dyn LocaleFormatProvider) -> ResolvedDms {
        let number = self.number.resolve_with(provider);
        let table = provider.dms_format(&number.locale);
        let pick = |own: &Option<String>, fallback: String| own.clone().unwrap_or(fallback);
        let seps = |own: &Option<Vec<String>>, fallback: Vec<String>| -> Vec<String> {
            own.clone()
                .unwrap_or(fallback)
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect()
        };

        ResolvedDms {
            mode: self.mode,
            format: DmsFormat {
                deg_seps: seps(&self.deg_seps, table.deg_seps),
                min_seps: seps(&self.min_seps, table.min_seps),
                sec_seps: seps(&self.sec_seps, table.sec_seps),
                north: pick(&self.north, table.north),
                south: pick(&self.south, table.south),
                east: pick(&self.east, table.east),
                west: pick(&self.west, table.west),
                prefix: self.prefix.unwrap_or(table.prefix),
            },
            number,
        }
    }
}

/// DMS options after merging with the locale table.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDms {
    pub mode: DmsMode,
    pub format: DmsFormat,
    pub number: ResolvedNumber,
}

// ============================================================================
// Dates
// ============================================================================

/// Options for the date, time and datetime converters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateOptions {
    pub locale: Option<Locale>,
    /// Kind to render or parse; each converter has its own default
    pub kind: Option<TemporalKind>,
    /// Output template replacing the locale's
    pub format: Option<String>,
    pub blank: Option<String>,
    /// Date used to fill missing fields when lenient parsing kicks in
    /// (defaults to today)
    pub reference_date: Option<NaiveDate>,
}

impl DateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn kind(mut self, kind: TemporalKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn format(mut self, template: impl Into<String>) -> Self {
        self.format = Some(template.into());
        self
    }

    pub fn blank(mut self, blank: impl Into<String>) -> Self {
        self.blank = Some(blank.into());
        self
    }

    pub fn reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub(crate) fn with_default_kind(&self, kind: TemporalKind) -> DateOptions {
        let mut options = self.clone();
        options.kind.get_or_insert(kind);
        options
    }

    pub(crate) fn locale_and_provider(&self) -> (Locale, Arc<dyn LocaleFormatProvider>) {
        (resolve_locale(self.locale.as_ref()), current_provider())
    }
}

// ============================================================================
// Magnitudes
// ============================================================================

/// Options for [`magnitude_to`](crate::magnitude_to) and
/// [`magnitude_from`](crate::magnitude_from).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagnitudeOptions {
    pub number: NumberOptions,
    /// Declared units, in either user-facing or normalized form
    pub units: Option<String>,
}

impl MagnitudeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.number.locale = Some(locale);
        self
    }

    pub fn precision(mut self, precision: u32) -> Self {
        self.number.precision = Some(precision);
        self
    }

    pub fn blank(mut self, blank: impl Into<String>) -> Self {
        self.number.blank = Some(blank.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hform_locale::BuiltinProvider;

    #[test]
    fn test_number_resolution_overlays_locale() {
        let options = NumberOptions::new().locale(Locale::de()).precision(2);
        let resolved = options.resolve_with(&BuiltinProvider);
        assert_eq!(resolved.separator, ',');
        assert_eq!(resolved.delimiter, Some('.'));
        assert_eq!(resolved.precision, Some(2));
        assert_eq!(resolved.nan, "--");
        assert_eq!(resolved.inf, "∞");

        let plain = options.no_delimiter().resolve_with(&BuiltinProvider);
        assert_eq!(plain.delimiter, None);
    }

    #[test]
    fn test_equal_separator_and_delimiter_drop_grouping() {
        let resolved = NumberOptions::new()
            .locale(Locale::de())
            .separator('.')
            .resolve_with(&BuiltinProvider);
        assert_eq!(resolved.separator, '.');
        assert_eq!(resolved.delimiter, None);
    }

    #[test]
    fn test_target_type() {
        let resolve = |o: NumberOptions| o.locale(Locale::en()).resolve_with(&BuiltinProvider);
        assert_eq!(resolve(NumberOptions::new()).target_type(), NumberType::Float);
        assert_eq!(resolve(NumberOptions::new().precision(0)).target_type(), NumberType::Integer);
        assert_eq!(
            resolve(NumberOptions::new().precision(0).number_type(NumberType::Decimal))
                .target_type(),
            NumberType::Decimal
        );
    }

    #[test]
    fn test_logical_token_sets() {
        let locale_only = LogicalOptions::new().locale(Locale::es()).resolve_with(&BuiltinProvider);
        assert_eq!(locale_only.true_text, "Sí");
        assert!(locale_only.trues.contains(&"si".to_string()));
        assert!(locale_only.trues.contains(&"Sí".to_string()));

        let overridden = LogicalOptions::new()
            .locale(Locale::es())
            .true_text("Yes")
            .resolve_with(&BuiltinProvider);
        assert_eq!(overridden.trues, vec!["Yes".to_string()]);
        assert!(overridden.falses.contains(&"falso".to_string()));
    }

    #[test]
    fn test_dms_resolution() {
        let resolved = DmsOptions::new()
            .locale(Locale::es())
            .latitude()
            .prefix(true)
            .resolve_with(&BuiltinProvider);
        assert_eq!(resolved.mode, DmsMode::Latitude);
        assert_eq!(resolved.format.west, "O");
        assert!(resolved.format.prefix);
        assert_eq!(resolved.number.separator, ',');
    }

    #[test]
    fn test_options_deserialize() {
        let options: NumberOptions =
            serde_json::from_str(r#"{ "locale": "fr", "precision": 1, "number_type": "decimal" }"#)
                .unwrap();
        assert_eq!(options.locale, Some(Locale::fr()));
        assert_eq!(options.number_type, Some(NumberType::Decimal));
    }
}
