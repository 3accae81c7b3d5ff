//! Locale-aware conversion between typed values and text
//!
//! Every converter comes as a `*_to` / `*_from` pair taking the value (or the
//! text) and an options struct:
//!
//! - **Numbers**: [`number_to`], [`number_from`], [`integer_to`], [`integer_from`]
//! - **Dates**: [`date_to`], [`time_to`], [`datetime_to`] and their `_from` twins
//! - **Logical values**: [`logical_to`], [`logical_from`]
//! - **Coordinates**: [`dms_to`], [`latitude_to`], [`longitude_to`] and their `_from` twins
//! - **Magnitudes**: [`magnitude_to`], [`magnitude_from`]
//! - **Any kind**: [`to`], [`from`]
//!
//! Option fields left unset are filled from the locale's format table at call
//! time, so a change of default locale applies to the next call.
//!
//! # Quick Start
//!
//! ```
//! use hform_core::{Number, NumberOptions, number_from, number_to};
//! use hform_locale::Locale;
//!
//! let de = NumberOptions::new().locale(Locale::de()).precision(2);
//! assert_eq!(number_to(Some(Number::from(1234.5)), &de), "1.234,50");
//! assert_eq!(number_from("1.234,5", &de)?, Some(Number::Float(1234.5)));
//! # Ok::<(), hform_core::ConvertError>(())
//! ```
//!
//! # Errors
//!
//! Formatting never fails. Parsing returns [`ConvertError::InvalidFormat`]
//! with the offending text, [`ConvertError::InvalidUnits`] for magnitudes, or
//! [`ConvertError::InvalidType`] for an unknown target kind name.

mod date;
mod dispatch;
mod dms;
mod error;
mod field;
mod lenient;
mod logical;
mod magnitude;
mod number;
mod options;
pub mod tokenizer;
pub mod units;

pub use date::{DateInput, date_from, date_to, datetime_from, datetime_to, time_from, time_to};
pub use dispatch::{ConvertOptions, TargetKind, Value, from, to};
pub use dms::{dms_from, dms_to, latitude_from, latitude_to, longitude_from, longitude_to};
pub use error::ConvertError;
pub use field::{ColumnType, Converter, FieldKind, FieldSpec, HField, IntegerConverter};
pub use logical::{logical_from, logical_to};
pub use magnitude::{magnitude_from, magnitude_to};
pub use number::{Number, integer_from, integer_to, number_from, number_to};
pub use options::{
    DateOptions, DmsMode, DmsOptions, LogicalOptions, MagnitudeOptions, NumberOptions,
    NumberType, ResolvedDms, ResolvedLogical, ResolvedNumber,
};

/// Result type for conversions
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ConvertError, ConvertOptions, DateOptions, DmsOptions, HField, LogicalOptions,
        MagnitudeOptions, Number, NumberOptions, Result, TargetKind, Value, date_from, date_to,
        dms_from, dms_to, from, integer_from, integer_to, logical_from, logical_to,
        magnitude_from, magnitude_to, number_from, number_to, to,
    };
    pub use hform_locale::{Locale, Temporal, TemporalKind};
}
