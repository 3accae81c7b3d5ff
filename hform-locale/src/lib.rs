//! Locale format tables for hform
//!
//! Supplies, per locale, everything the hform converters need to turn values
//! into text and back:
//!
//! - **Numbers**: decimal separator, grouping delimiter, NaN/infinity tokens
//! - **Logical values**: true/false texts and accepted token sets
//! - **Coordinates**: degree/minute/second separators and compass letters
//! - **Dates**: strftime templates and localized month/day names
//!
//! # Quick Start
//!
//! ```
//! use hform_locale::{BuiltinProvider, Locale, LocaleFormatProvider};
//!
//! let provider = BuiltinProvider;
//! let es = Locale::es();
//!
//! assert_eq!(provider.number_format(&es).separator, ',');
//! assert_eq!(provider.logical_format(&es).true_text, "Sí");
//! ```
//!
//! # Custom Tables
//!
//! ```rust,ignore
//! use hform_locale::{MemoryProvider, set_provider};
//! use std::sync::Arc;
//!
//! let provider = MemoryProvider::new();
//! provider.load_dir("formats/")?;
//! set_provider(Arc::new(provider));
//! ```

mod builtin;
mod context;
mod error;
mod formats;
mod loader;
mod locale;
mod provider;
mod temporal;

pub use builtin::builtin_tags;
pub use context::{
    current_provider, default_locale, reset_provider, resolve_locale, set_default_locale,
    set_provider,
};
pub use error::LocaleError;
pub use formats::{
    DateFormats, DateTemplates, DmsFormat, LocaleFormats, LocalizedNames, LogicalFormat,
    NumberFormat,
};
pub use loader::{FileFormat, FormatLoader, MemoryProvider};
pub use locale::Locale;
pub use provider::{BuiltinProvider, LocaleFormatProvider, render};
pub use temporal::{Temporal, TemporalKind};

/// Result type for locale operations
pub type Result<T> = std::result::Result<T, LocaleError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        BuiltinProvider, Locale, LocaleError, LocaleFormatProvider, LocaleFormats, MemoryProvider,
        Result, Temporal, TemporalKind, default_locale, set_default_locale,
    };
}
