//! Values carrying a unit

use crate::{Result, Unit};
use std::fmt;

/// A number in a given unit.
///
/// # Examples
///
/// ```
/// use hform_units::{Quantity, Unit};
///
/// let distance = Quantity::new(5.0, Unit::parse("km").unwrap());
/// let meters = distance.convert_to(&Unit::parse("m").unwrap()).unwrap();
/// assert_eq!(meters.value(), 5000.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Parse the unit and build the quantity in one step.
    pub fn parse(value: f64, unit: &str) -> Result<Self> {
        Ok(Self::new(value, Unit::parse(unit)?))
    }

    /// The same amount expressed in `target`.
    pub fn convert_to(&self, target: &Unit) -> Result<Quantity> {
        let factor = self.unit.conversion_factor(target)?;
        Ok(Quantity {
            value: self.value * factor,
            unit: target.clone(),
        })
    }

    /// The bare number, in this quantity's unit.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// The bare number in coherent SI units.
    pub fn si_value(&self) -> f64 {
        self.value * self.unit.factor()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_imperial() {
        let q = Quantity::parse(12.0, "inch").unwrap();
        let ft = q.convert_to(&Unit::parse("ft").unwrap()).unwrap();
        assert!((ft.value() - 1.0).abs() < 1e-12);
        assert_eq!(ft.unit().symbol(), "ft");
    }

    #[test]
    fn test_convert_compound() {
        let q = Quantity::parse(36.0, "km/h").unwrap();
        let ms = q.convert_to(&Unit::parse("m/s").unwrap()).unwrap();
        assert!((ms.value() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_convert_incompatible() {
        let q = Quantity::parse(1.0, "kg").unwrap();
        assert!(q.convert_to(&Unit::parse("m").unwrap()).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Quantity::parse(2.5, "m**2").unwrap().to_string(), "2.5 m**2");
    }
}
