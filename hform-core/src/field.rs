//! Binding of a stored value to its localized text
//!
//! An [`HField`] keeps a raw value together with the text a user sees and
//! edits. Text that fails to parse is kept as typed so it can be shown back,
//! and the field is flagged invalid until a good value arrives.

use crate::date::{date_from, date_to};
use crate::dispatch::Value;
use crate::dms::{dms_from, dms_to};
use crate::{ConvertError, Result};
use crate::logical::{logical_from, logical_to};
use crate::magnitude::{magnitude_from, magnitude_to};
use crate::number::{Number, integer_from, integer_to, number_from, number_to};
use crate::options::{
    DateOptions, DmsMode, DmsOptions, LogicalOptions, MagnitudeOptions, NumberOptions,
};
use crate::units::{default_precision, normalize, units_from_field_name};
use hform_locale::{Locale, TemporalKind, resolve_locale};
use serde::{Deserialize, Serialize};

/// A two-way conversion between values and text.
pub trait Converter {
    type Value: Clone + PartialEq + std::fmt::Debug;

    /// Name used in errors for text that gives no value.
    const KIND: &'static str;

    fn format(&self, value: Option<&Self::Value>) -> String;

    fn parse(&self, text: &str) -> Result<Option<Self::Value>>;

    /// Locale the text is rendered for, as of now.
    fn locale(&self) -> Locale;
}

impl Converter for NumberOptions {
    type Value = Number;
    const KIND: &'static str = "number";

    fn format(&self, value: Option<&Number>) -> String {
        number_to(value.cloned(), self)
    }

    fn parse(&self, text: &str) -> Result<Option<Number>> {
        number_from(text, self)
    }

    fn locale(&self) -> Locale {
        resolve_locale(self.locale.as_ref())
    }
}

/// Whole-number conversion with the options of a number field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegerConverter(pub NumberOptions);

impl Converter for IntegerConverter {
    type Value = i64;
    const KIND: &'static str = "integer";

    fn format(&self, value: Option<&i64>) -> String {
        integer_to(value.copied(), &self.0)
    }

    fn parse(&self, text: &str) -> Result<Option<i64>> {
        integer_from(text, &self.0)
    }

    fn locale(&self) -> Locale {
        Converter::locale(&self.0)
    }
}

impl Converter for DateOptions {
    type Value = hform_locale::Temporal;
    const KIND: &'static str = "date";

    fn format(&self, value: Option<&Self::Value>) -> String {
        date_to(value.cloned(), self)
    }

    fn parse(&self, text: &str) -> Result<Option<Self::Value>> {
        date_from(text, self)
    }

    fn locale(&self) -> Locale {
        resolve_locale(self.locale.as_ref())
    }
}

impl Converter for LogicalOptions {
    type Value = bool;
    const KIND: &'static str = "logical value";

    fn format(&self, value: Option<&bool>) -> String {
        logical_to(value.copied(), self)
    }

    fn parse(&self, text: &str) -> Result<Option<bool>> {
        Ok(logical_from(text, self))
    }

    fn locale(&self) -> Locale {
        resolve_locale(self.locale.as_ref())
    }
}

impl Converter for DmsOptions {
    type Value = f64;
    const KIND: &'static str = "degrees-minutes-seconds value";

    fn format(&self, value: Option<&f64>) -> String {
        dms_to(value.copied(), self)
    }

    fn parse(&self, text: &str) -> Result<Option<f64>> {
        dms_from(text, self)
    }

    fn locale(&self) -> Locale {
        Converter::locale(&self.number)
    }
}

impl Converter for MagnitudeOptions {
    type Value = f64;
    const KIND: &'static str = "magnitude";

    fn format(&self, value: Option<&f64>) -> String {
        magnitude_to(value.map(|v| Number::Float(*v)), self)
    }

    fn parse(&self, text: &str) -> Result<Option<f64>> {
        magnitude_from(text, self)
    }

    fn locale(&self) -> Locale {
        Converter::locale(&self.number)
    }
}

/// A raw value paired with its display text.
///
/// # Examples
///
/// ```
/// use hform_core::{HField, NumberOptions, Number};
/// use hform_locale::Locale;
///
/// let mut speed = HField::new(NumberOptions::new().locale(Locale::es()).precision(1));
/// speed.set_value(Some(Number::from(12.25)));
/// assert_eq!(speed.text(), "12,3");
///
/// assert!(speed.set_text("doce").is_err());
/// assert!(!speed.is_valid());
/// assert_eq!(speed.text(), "doce");
/// assert_eq!(speed.value(), None);
/// ```
#[derive(Debug, Clone)]
pub struct HField<C: Converter> {
    converter: C,
    value: Option<C::Value>,
    invalid: bool,
    error: Option<String>,
    /// Last text shown or typed, with the locale it belongs to
    text: Option<(Locale, String)>,
}

impl<C: Converter> HField<C> {
    pub fn new(converter: C) -> Self {
        Self {
            converter,
            value: None,
            invalid: false,
            error: None,
            text: None,
        }
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Change the conversion options; the display text is rendered afresh.
    pub fn converter_mut(&mut self) -> &mut C {
        if !self.invalid {
            self.text = None;
        }
        &mut self.converter
    }

    pub fn value(&self) -> Option<&C::Value> {
        self.value.as_ref()
    }

    /// Assign a raw value, clearing any invalid state.
    pub fn set_value(&mut self, value: Option<C::Value>) {
        self.value = value;
        self.invalid = false;
        self.error = None;
        self.text = None;
    }

    /// Display text: the rejected input while invalid, otherwise the value
    /// rendered for the current locale.
    pub fn text(&mut self) -> String {
        let locale = self.converter.locale();
        match &self.text {
            Some((cached, text)) if self.invalid || *cached == locale => text.clone(),
            _ => {
                let text = self.converter.format(self.value.as_ref());
                self.text = Some((locale, text.clone()));
                text
            }
        }
    }

    /// Assign text typed by a user.
    ///
    /// Blank text clears the value. Text that does not convert leaves the
    /// value empty and the field invalid, and the error is returned.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        let locale = self.converter.locale();

        let outcome = if text.trim().is_empty() {
            Ok(None)
        } else {
            match self.converter.parse(&text) {
                Ok(Some(value)) => Ok(Some(value)),
                Ok(None) => Err(ConvertError::InvalidFormat {
                    kind: C::KIND,
                    text: text.clone(),
                }),
                Err(err) => Err(err),
            }
        };

        self.text = Some((locale, text));
        match outcome {
            Ok(value) => {
                self.value = value;
                self.invalid = false;
                self.error = None;
                Ok(())
            }
            Err(err) => {
                hform_log::debug!("rejected field text: {}", err);
                self.value = None;
                self.invalid = true;
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.invalid
    }

    /// Valid and holding a value.
    pub fn is_present(&self) -> bool {
        !self.invalid && self.value.is_some()
    }

    /// Message of the error that made the field invalid.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

// ============================================================================
// Field kinds
// ============================================================================

/// Storage type of the column a field is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Integer,
    Float,
    Decimal,
    Date,
    Time,
    DateTime,
    Boolean,
    Text,
}

/// Converter kinds a field can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Number,
    Integer,
    Date,
    Time,
    DateTime,
    Logical,
    Dms,
    Latitude,
    Longitude,
    Magnitude,
}

/// How a field converts: its kind plus the options that vary per field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub kind: FieldKind,
    pub units: Option<String>,
    pub precision: Option<u32>,
    #[serde(default)]
    pub locale: Option<Locale>,
}

impl FieldSpec {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            units: None,
            precision: None,
            locale: None,
        }
    }

    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Pick the field kind for a column.
    ///
    /// Numeric columns become magnitudes when `units` is given or the last
    /// `_` segment of `name` is a unit (`length_mm`); other numeric columns
    /// become numbers or integers. Text columns get no field.
    ///
    /// # Errors
    ///
    /// [`ConvertError::InvalidUnits`] when `units` is given and invalid.
    pub fn declare(
        name: &str,
        column: ColumnType,
        units: Option<&str>,
        precision: Option<u32>,
    ) -> Result<Option<FieldSpec>> {
        let kind = match column {
            ColumnType::Date => FieldKind::Date,
            ColumnType::Time => FieldKind::Time,
            ColumnType::DateTime => FieldKind::DateTime,
            ColumnType::Boolean => FieldKind::Logical,
            ColumnType::Text => return Ok(None),
            ColumnType::Integer | ColumnType::Float | ColumnType::Decimal => {
                let units = match units {
                    Some(u) => {
                        Some(normalize(u).ok_or_else(|| ConvertError::InvalidUnits(u.to_string()))?)
                    }
                    None => units_from_field_name(name),
                };
                if let Some(units) = units {
                    let precision = precision.or_else(|| default_precision(&units));
                    return Ok(Some(FieldSpec {
                        kind: FieldKind::Magnitude,
                        units: Some(units),
                        precision,
                        locale: None,
                    }));
                }
                if column == ColumnType::Integer {
                    FieldKind::Integer
                } else {
                    FieldKind::Number
                }
            }
        };

        let mut spec = FieldSpec::new(kind);
        spec.precision = precision;
        Ok(Some(spec))
    }

    /// [`declare`](Self::declare) with units taken from the name only.
    pub fn infer(name: &str, column: ColumnType) -> Option<FieldSpec> {
        Self::declare(name, column, None, None).ok().flatten()
    }

    fn number_options(&self) -> NumberOptions {
        NumberOptions {
            locale: self.locale.clone(),
            precision: self.precision,
            ..NumberOptions::default()
        }
    }

    fn date_options(&self, kind: TemporalKind) -> DateOptions {
        DateOptions {
            locale: self.locale.clone(),
            kind: Some(kind),
            ..DateOptions::default()
        }
    }

    fn logical_options(&self) -> LogicalOptions {
        LogicalOptions {
            locale: self.locale.clone(),
            ..LogicalOptions::default()
        }
    }

    fn dms_options(&self, mode: DmsMode) -> DmsOptions {
        DmsOptions {
            number: self.number_options(),
            mode,
            ..DmsOptions::default()
        }
    }

    fn parse_temporal(&self, text: &str, kind: TemporalKind) -> Result<Option<Value>> {
        Ok(date_from(text, &self.date_options(kind))?.map(Value::Date))
    }

    fn magnitude_options(&self) -> MagnitudeOptions {
        MagnitudeOptions {
            number: self.number_options(),
            units: self.units.clone(),
        }
    }
}

fn as_f64(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => Some(n.as_f64()),
        _ => None,
    }
}

impl Converter for FieldSpec {
    type Value = Value;
    const KIND: &'static str = "value";

    fn format(&self, value: Option<&Value>) -> String {
        let temporal = match value {
            Some(Value::Date(t)) => Some(t.clone()),
            _ => None,
        };
        match self.kind {
            FieldKind::Number => match value {
                Some(Value::Number(n)) => number_to(Some(n.clone()), &self.number_options()),
                _ => number_to(None, &self.number_options()),
            },
            FieldKind::Integer => {
                let integer = match value {
                    Some(Value::Number(n)) => n.as_i64(),
                    _ => None,
                };
                integer_to(integer, &self.number_options())
            }
            FieldKind::Date => date_to(temporal, &self.date_options(TemporalKind::Date)),
            FieldKind::Time => date_to(temporal, &self.date_options(TemporalKind::Time)),
            FieldKind::DateTime => date_to(temporal, &self.date_options(TemporalKind::DateTime)),
            FieldKind::Logical => {
                let logical = match value {
                    Some(Value::Boolean(b)) => Some(*b),
                    _ => None,
                };
                logical_to(logical, &self.logical_options())
            }
            FieldKind::Dms => dms_to(as_f64(value), &self.dms_options(DmsMode::Plain)),
            FieldKind::Latitude => dms_to(as_f64(value), &self.dms_options(DmsMode::Latitude)),
            FieldKind::Longitude => dms_to(as_f64(value), &self.dms_options(DmsMode::Longitude)),
            FieldKind::Magnitude => {
                magnitude_to(as_f64(value).map(Number::Float), &self.magnitude_options())
            }
        }
    }

    fn parse(&self, text: &str) -> Result<Option<Value>> {
        let number = |v: Option<f64>| v.map(|v| Value::Number(Number::Float(v)));
        Ok(match self.kind {
            FieldKind::Number => number_from(text, &self.number_options())?.map(Value::Number),
            FieldKind::Integer => {
                integer_from(text, &self.number_options())?.map(|i| Value::Number(i.into()))
            }
            FieldKind::Date => self.parse_temporal(text, TemporalKind::Date)?,
            FieldKind::Time => self.parse_temporal(text, TemporalKind::Time)?,
            FieldKind::DateTime => self.parse_temporal(text, TemporalKind::DateTime)?,
            FieldKind::Logical => {
                logical_from(text, &self.logical_options()).map(Value::Boolean)
            }
            FieldKind::Dms => number(dms_from(text, &self.dms_options(DmsMode::Plain))?),
            FieldKind::Latitude => number(dms_from(text, &self.dms_options(DmsMode::Latitude))?),
            FieldKind::Longitude => number(dms_from(text, &self.dms_options(DmsMode::Longitude))?),
            FieldKind::Magnitude => number(magnitude_from(text, &self.magnitude_options())?),
        })
    }

    fn locale(&self) -> Locale {
        resolve_locale(self.locale.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_follows_value() {
        let mut field = HField::new(NumberOptions::new().locale(Locale::de()).precision(2));
        assert_eq!(field.text(), "");
        field.set_value(Some(Number::from(1234.5)));
        assert_eq!(field.text(), "1.234,50");
        assert!(field.is_present());
    }

    #[test]
    fn test_invalid_text_is_kept() {
        let mut field = HField::new(IntegerConverter(NumberOptions::new().locale(Locale::en())));
        field.set_value(Some(7));

        let err = field.set_text("seven").unwrap_err();
        assert_eq!(err.text(), Some("seven"));
        assert!(!field.is_valid());
        assert_eq!(field.value(), None);
        assert_eq!(field.text(), "seven");
        assert!(field.error_message().is_some());

        field.set_value(Some(8));
        assert!(field.is_valid());
        assert_eq!(field.error_message(), None);
        assert_eq!(field.text(), "8");
    }

    #[test]
    fn test_typed_text_is_shown_as_typed() {
        let mut field = HField::new(NumberOptions::new().locale(Locale::en()));
        field.set_text(" 3.50 ").unwrap();
        assert_eq!(field.value(), Some(&Number::Float(3.5)));
        assert_eq!(field.text(), " 3.50 ");
    }

    #[test]
    fn test_blank_text_clears_value() {
        let mut field = HField::new(LogicalOptions::new().locale(Locale::en()));
        field.set_value(Some(true));
        field.set_text("  ").unwrap();
        assert_eq!(field.value(), None);
        assert!(field.is_valid());
        assert!(!field.is_present());
    }

    #[test]
    fn test_unrecognised_logical_text_is_invalid() {
        let mut field = HField::new(LogicalOptions::new().locale(Locale::en()));
        let err = field.set_text("maybe").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidFormat { kind: "logical value", .. }));
        assert!(!field.is_valid());
    }

    #[test]
    fn test_text_rerenders_on_locale_change() {
        let mut field = HField::new(DateOptions::new().locale(Locale::en()));
        field.set_value(Some(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().into()));
        assert_eq!(field.text(), "03/05/2024");

        field.converter_mut().locale = Some(Locale::de());
        assert_eq!(field.text(), "05.03.2024");
    }

    #[test]
    fn test_declare_kinds() {
        let spec = FieldSpec::declare("length_mm", ColumnType::Float, None, None).unwrap().unwrap();
        assert_eq!(spec.kind, FieldKind::Magnitude);
        assert_eq!(spec.units.as_deref(), Some("mm"));
        assert_eq!(spec.precision, Some(0));

        let spec = FieldSpec::infer("count", ColumnType::Integer).unwrap();
        assert_eq!(spec.kind, FieldKind::Integer);

        let spec = FieldSpec::declare("ratio", ColumnType::Decimal, None, Some(3)).unwrap().unwrap();
        assert_eq!((spec.kind, spec.precision), (FieldKind::Number, Some(3)));

        assert_eq!(FieldSpec::infer("born_on", ColumnType::Date).unwrap().kind, FieldKind::Date);
        assert_eq!(FieldSpec::infer("active", ColumnType::Boolean).unwrap().kind, FieldKind::Logical);
        assert_eq!(FieldSpec::infer("title", ColumnType::Text), None);

        assert!(matches!(
            FieldSpec::declare("weight", ColumnType::Float, Some("stones"), None),
            Err(ConvertError::InvalidUnits(_))
        ));
    }

    #[test]
    fn test_spec_field_round_trip() {
        let spec = FieldSpec::new(FieldKind::Latitude).locale(Locale::en()).precision(1);
        let mut field = HField::new(spec);
        field.set_text("40°45'30\"S").unwrap();
        let value = field.value().and_then(|v| match v {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        });
        assert!((value.unwrap() + 40.758_333_333).abs() < 1e-6);

        let mut distance = HField::new(FieldSpec::infer("distance_km", ColumnType::Float).unwrap());
        distance.set_value(Some(Value::from(1.5_f64)));
        assert!(distance.text().ends_with(" km"));
    }
}
