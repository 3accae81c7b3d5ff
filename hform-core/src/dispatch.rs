//! Kind-directed entry points
//!
//! [`to`] picks a converter from the kind of value it is given; [`from`]
//! picks one from the requested target kind.

use crate::date::{date_from, date_to, datetime_from, datetime_to, time_from, time_to};
use crate::{ConvertError, Result};
use crate::logical::{logical_from, logical_to};
use crate::number::{Number, integer_from, number_from, number_to};
use crate::options::{DateOptions, LogicalOptions, NumberOptions, NumberType};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use hform_locale::{Locale, Temporal, TemporalKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A value the engine knows how to display.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(Number),
    Date(Temporal),
    Boolean(bool),
    /// Anything else, including a missing value; displayed as blank
    Other,
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

value_from! {
    f64 => Number,
    f32 => Number,
    i64 => Number,
    i32 => Number,
    u32 => Number,
    Decimal => Number,
    Number => Number,
    NaiveDate => Date,
    NaiveTime => Date,
    NaiveDateTime => Date,
    Temporal => Date,
    bool => Boolean,
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Other, Into::into)
    }
}

/// Target kinds for [`from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Float,
    Integer,
    Decimal,
    Date,
    Time,
    DateTime,
    Logical,
}

impl TargetKind {
    /// Plain numbers parse as floats.
    pub const NUMBER: TargetKind = TargetKind::Float;
}

impl Default for TargetKind {
    fn default() -> Self {
        TargetKind::NUMBER
    }
}

impl FromStr for TargetKind {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "number" | "float" => Ok(TargetKind::Float),
            "integer" | "int" => Ok(TargetKind::Integer),
            "decimal" => Ok(TargetKind::Decimal),
            "date" => Ok(TargetKind::Date),
            "time" => Ok(TargetKind::Time),
            "datetime" => Ok(TargetKind::DateTime),
            "logical" | "boolean" | "bool" => Ok(TargetKind::Logical),
            _ => Err(ConvertError::InvalidType(s.to_string())),
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetKind::Float => "float",
            TargetKind::Integer => "integer",
            TargetKind::Decimal => "decimal",
            TargetKind::Date => "date",
            TargetKind::Time => "time",
            TargetKind::DateTime => "datetime",
            TargetKind::Logical => "logical",
        };
        f.write_str(name)
    }
}

/// Options for the kind-directed converters.
///
/// `locale` applies to every converter whose own options leave it unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub locale: Option<Locale>,
    pub number: NumberOptions,
    pub logical: LogicalOptions,
    pub date: DateOptions,
    /// Text for values of no supported kind
    pub blank: Option<String>,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn number(mut self, number: NumberOptions) -> Self {
        self.number = number;
        self
    }

    pub fn logical(mut self, logical: LogicalOptions) -> Self {
        self.logical = logical;
        self
    }

    pub fn date(mut self, date: DateOptions) -> Self {
        self.date = date;
        self
    }

    pub fn blank(mut self, blank: impl Into<String>) -> Self {
        self.blank = Some(blank.into());
        self
    }

    fn number_options(&self) -> NumberOptions {
        let mut number = self.number.clone();
        if number.locale.is_none() {
            number.locale = self.locale.clone();
        }
        number
    }

    fn logical_options(&self) -> LogicalOptions {
        let mut logical = self.logical.clone();
        if logical.locale.is_none() {
            logical.locale = self.locale.clone();
        }
        logical
    }

    fn date_options(&self) -> DateOptions {
        let mut date = self.date.clone();
        if date.locale.is_none() {
            date.locale = self.locale.clone();
        }
        date
    }
}

/// Display any supported value.
///
/// # Examples
///
/// ```
/// use hform_core::{ConvertOptions, LogicalOptions, Number, NumberOptions, logical_to, number_to, to};
///
/// let options = ConvertOptions::new();
/// assert_eq!(to(3.5_f64, &options), number_to(Some(Number::from(3.5)), &NumberOptions::new()));
/// assert_eq!(to(true, &options), logical_to(Some(true), &LogicalOptions::new()));
/// assert_eq!(to(None::<f64>, &options.blank("-")), "-");
/// ```
pub fn to(value: impl Into<Value>, options: &ConvertOptions) -> String {
    match value.into() {
        Value::Number(n) => number_to(Some(n), &options.number_options()),
        Value::Date(t) => {
            let date = options.date_options();
            match t.kind() {
                TemporalKind::Date => date_to(Some(t), &date),
                TemporalKind::Time => time_to(Some(t), &date),
                TemporalKind::DateTime => datetime_to(Some(t), &date),
            }
        }
        Value::Boolean(b) => logical_to(Some(b), &options.logical_options()),
        Value::Other => options.blank.clone().unwrap_or_default(),
    }
}

/// Parse text as a value of `kind`.
///
/// # Errors
///
/// Whatever the selected converter raises; unrecognised logical text is not
/// an error and gives `Ok(None)`.
pub fn from(text: &str, kind: TargetKind, options: &ConvertOptions) -> Result<Option<Value>> {
    let numeric = |number_type: NumberType| -> Result<Option<Value>> {
        let number = options.number_options().number_type(number_type);
        Ok(number_from(text, &number)?.map(Value::Number))
    };
    let temporal = |value: Result<Option<Temporal>>| -> Result<Option<Value>> {
        Ok(value?.map(Value::Date))
    };

    match kind {
        TargetKind::Float => numeric(NumberType::Float),
        TargetKind::Decimal => numeric(NumberType::Decimal),
        TargetKind::Integer => {
            Ok(integer_from(text, &options.number_options())?.map(|i| Value::Number(i.into())))
        }
        TargetKind::Date => temporal(date_from(text, &options.date_options())),
        TargetKind::Time => temporal(time_from(text, &options.date_options())),
        TargetKind::DateTime => temporal(datetime_from(text, &options.date_options())),
        TargetKind::Logical => {
            Ok(logical_from(text, &options.logical_options()).map(Value::Boolean))
        }
    }
}
