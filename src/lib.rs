// hform - locale-aware conversion between typed values and text
//
// Numbers, dates, booleans, coordinates and physical magnitudes are turned
// into the text a user reads and edits, and parsed back, following the
// conventions of the active locale.

// Re-export the conversion engine
pub use hform_core::*;

// Re-export locale support
pub use hform_locale;
pub use hform_locale::{
    BuiltinProvider, Locale, LocaleError, LocaleFormatProvider, LocaleFormats, MemoryProvider,
    Temporal, TemporalKind, current_provider, default_locale, reset_provider, set_default_locale,
    set_provider,
};

// Re-export value types used in the public API
pub use chrono;
pub use rust_decimal::Decimal;

// Re-export optional crates
#[cfg(feature = "units")]
pub use hform_units;

#[cfg(feature = "log")]
pub use hform_log;

pub mod prelude {
    pub use hform_core::prelude::*;
    pub use hform_locale::{LocaleFormatProvider, MemoryProvider, set_default_locale};

    #[cfg(feature = "units")]
    pub use hform_units::{Quantity, Unit};
}
