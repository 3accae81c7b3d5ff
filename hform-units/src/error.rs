//! Error types for unit parsing and conversion

use thiserror::Error;

/// Errors raised by unit expressions and quantities.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// Symbol is not a registered unit, with or without a prefix
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Expression is not well formed
    #[error("Invalid unit expression {expr:?}: {message}")]
    Syntax { expr: String, message: String },

    /// Conversion between units of different dimensions
    #[error("Cannot convert {from} to {to}: incompatible dimensions")]
    Incompatible { from: String, to: String },
}
