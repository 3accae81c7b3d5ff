//! Physical dimensions as exponent vectors over the SI base quantities

use std::fmt;

const SYMBOLS: [&str; 7] = ["M", "L", "T", "I", "Θ", "N", "J"];

/// Exponents of mass, length, time, current, temperature, amount and
/// luminous intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimension([i8; 7]);

impl Dimension {
    pub const NONE: Dimension = Dimension([0; 7]);
    pub const MASS: Dimension = Dimension([1, 0, 0, 0, 0, 0, 0]);
    pub const LENGTH: Dimension = Dimension([0, 1, 0, 0, 0, 0, 0]);
    pub const TIME: Dimension = Dimension([0, 0, 1, 0, 0, 0, 0]);
    pub const CURRENT: Dimension = Dimension([0, 0, 0, 1, 0, 0, 0]);
    pub const TEMPERATURE: Dimension = Dimension([0, 0, 0, 0, 1, 0, 0]);
    pub const AMOUNT: Dimension = Dimension([0, 0, 0, 0, 0, 1, 0]);
    pub const LUMINOSITY: Dimension = Dimension([0, 0, 0, 0, 0, 0, 1]);

    pub const fn new(exponents: [i8; 7]) -> Self {
        Dimension(exponents)
    }

    pub fn exponents(&self) -> [i8; 7] {
        self.0
    }

    pub fn is_dimensionless(&self) -> bool {
        *self == Self::NONE
    }

    /// Sum of exponents, or `None` when one leaves the `i8` range.
    pub fn checked_mul(self, rhs: Dimension) -> Option<Self> {
        let mut out = self.0;
        for (e, r) in out.iter_mut().zip(rhs.0) {
            *e = e.checked_add(r)?;
        }
        Some(Dimension(out))
    }

    pub fn checked_div(self, rhs: Dimension) -> Option<Self> {
        self.checked_mul(rhs.checked_powi(-1)?)
    }

    /// Raise to an integer power, or `None` when an exponent leaves the
    /// `i8` range.
    pub fn checked_powi(self, n: i32) -> Option<Self> {
        let mut out = self.0;
        for e in out.iter_mut() {
            *e = i32::from(*e)
                .checked_mul(n)
                .and_then(|v| i8::try_from(v).ok())?;
        }
        Some(Dimension(out))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let parts: Vec<String> = SYMBOLS
            .iter()
            .zip(self.0)
            .filter(|(_, e)| *e != 0)
            .map(|(s, e)| if e == 1 { s.to_string() } else { format!("{s}^{e}") })
            .collect();
        f.write_str(&parts.join("·"))
    }
}
