//! Unit algebra for hform
//!
//! Parses unit expressions into a scale factor over SI dimensions and
//! converts quantities between compatible units.
//!
//! Expressions use `*` for products, `/` for quotients, `**` for integer
//! powers and parentheses for grouping: `kp/m**2`, `(m/s)**2`, `kg*m/s**2`.
//! Symbols take SI prefixes (`km`, `mg`, `µs`) unless they name a whole unit
//! themselves (`min`, `ft`, `cd`).
//!
//! # Quick Start
//!
//! ```
//! use hform_units::{Quantity, Unit};
//!
//! let q = Quantity::parse(5.0, "km")?;
//! assert_eq!(q.convert_to(&Unit::parse("m")?)?.value(), 5000.0);
//! # Ok::<(), hform_units::UnitError>(())
//! ```

mod dimension;
mod error;
mod parser;
mod quantity;
mod registry;
mod unit;

pub use dimension::Dimension;
pub use error::UnitError;
pub use quantity::Quantity;
pub use registry::{UnitDef, is_known, lookup};
pub use unit::Unit;

/// Result type for unit operations
pub type Result<T> = std::result::Result<T, UnitError>;

/// Whether `expr` parses as a unit expression.
pub fn is_valid(expr: &str) -> bool {
    Unit::parse(expr).is_ok()
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::{Dimension, Quantity, Result, Unit, UnitError};
}
