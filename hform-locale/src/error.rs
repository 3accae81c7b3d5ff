//! Error types for locale format lookup and loading

use thiserror::Error;

/// Errors that can occur while resolving or loading locale formats.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// Invalid locale tag
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// No format table registered for a locale
    #[error("No format table for locale: {0}")]
    FormatsNotFound(String),

    /// Format file could not be interpreted
    #[error("Failed to parse format file: {0}")]
    ParseError(String),

    /// File extension is not a supported format
    #[error("Unsupported format file: {0}")]
    UnsupportedFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parse error
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}
