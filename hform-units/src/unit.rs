//! Units as a scale factor over a dimension

use crate::parser;
use crate::{Dimension, Result, UnitError};
use std::fmt;
use std::str::FromStr;

/// A parsed unit expression.
///
/// # Examples
///
/// ```
/// use hform_units::Unit;
///
/// let kmh = Unit::parse("km/h").unwrap();
/// let ms = Unit::parse("m/s").unwrap();
/// assert!(kmh.is_compatible(&ms));
/// assert_eq!(kmh.symbol(), "km/h");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    symbol: String,
    factor: f64,
    dimension: Dimension,
}

impl Unit {
    /// Parse a unit expression such as `kp/m**2` or `(m/s)**2`.
    pub fn parse(expr: &str) -> Result<Self> {
        let parsed = parser::parse(expr)?;
        Ok(Self {
            symbol: expr.trim().to_string(),
            factor: parsed.factor,
            dimension: parsed.dimension,
        })
    }

    /// The expression this unit was built from.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Size of one unit in coherent SI units.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Factor converting values in `self` to values in `target`.
    pub fn conversion_factor(&self, target: &Unit) -> Result<f64> {
        if !self.is_compatible(target) {
            return Err(UnitError::Incompatible {
                from: self.symbol.clone(),
                to: target.symbol.clone(),
            });
        }
        Ok(self.factor / target.factor)
    }

    /// Raise to an integer power. Fails when an exponent leaves the
    /// supported range.
    pub fn powi(&self, n: i32) -> Result<Unit> {
        let symbol = format!("({})**{}", self.symbol, n);
        let dimension = self.dimension.checked_powi(n).ok_or_else(|| overflow(&symbol))?;
        Ok(Unit {
            factor: self.factor.powi(n),
            dimension,
            symbol,
        })
    }

    pub fn checked_mul(&self, rhs: &Unit) -> Result<Unit> {
        let symbol = format!("{}*{}", self.symbol, rhs.symbol);
        let dimension = self
            .dimension
            .checked_mul(rhs.dimension)
            .ok_or_else(|| overflow(&symbol))?;
        Ok(Unit {
            factor: self.factor * rhs.factor,
            dimension,
            symbol,
        })
    }

    pub fn checked_div(&self, rhs: &Unit) -> Result<Unit> {
        let symbol = format!("{}/({})", self.symbol, rhs.symbol);
        let dimension = self
            .dimension
            .checked_div(rhs.dimension)
            .ok_or_else(|| overflow(&symbol))?;
        Ok(Unit {
            factor: self.factor / rhs.factor,
            dimension,
            symbol,
        })
    }
}

fn overflow(symbol: &str) -> UnitError {
    UnitError::Syntax {
        expr: symbol.to_string(),
        message: "exponent out of range".to_string(),
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self> {
        Unit::parse(s)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}
