//! Conversion errors

use hform_locale::LocaleError;
use thiserror::Error;

/// Errors raised while parsing text into values.
///
/// Formatting never fails; only the `*_from` functions return these.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Text does not match the expected grammar for the configured locale
    #[error("Invalid {kind}: {text:?}")]
    InvalidFormat { kind: &'static str, text: String },

    /// Unit expression does not parse, or the units are not convertible
    #[error("Invalid units: {0}")]
    InvalidUnits(String),

    /// Unsupported target type
    #[error("Invalid type: {0}")]
    InvalidType(String),

    /// Locale table could not be resolved
    #[error(transparent)]
    Locale(#[from] LocaleError),
}

impl ConvertError {
    pub(crate) fn invalid(kind: &'static str, text: impl Into<String>) -> Self {
        ConvertError::InvalidFormat {
            kind,
            text: text.into(),
        }
    }

    /// The offending input, for errors raised by unparseable text.
    pub fn text(&self) -> Option<&str> {
        match self {
            ConvertError::InvalidFormat { text, .. } => Some(text),
            _ => None,
        }
    }
}
