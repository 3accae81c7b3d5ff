//! Unit symbol registry
//!
//! Symbols are looked up exactly first, then as an SI prefix followed by a
//! prefixable unit, so whole symbols such as `min`, `cd`, `ft` and `kp` are
//! never split into a prefix and a shorter unit.

use crate::Dimension;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A registered unit: scale relative to the coherent SI unit of its dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    pub factor: f64,
    pub dimension: Dimension,
    /// Whether SI prefixes may be applied
    pub prefixable: bool,
}

const STANDARD_GRAVITY: f64 = 9.80665;
const INCH: f64 = 0.0254;
const POUND: f64 = 0.453_592_37;

fn dim(m: i8, l: i8, t: i8) -> Dimension {
    Dimension::new([m, l, t, 0, 0, 0, 0])
}

static UNITS: Lazy<HashMap<&'static str, UnitDef>> = Lazy::new(|| {
    let si = |factor: f64, dimension: Dimension| UnitDef {
        factor,
        dimension,
        prefixable: true,
    };
    let fixed = |factor: f64, dimension: Dimension| UnitDef {
        factor,
        dimension,
        prefixable: false,
    };

    let entries = [
        // Base units (the kilogram is reached through the gram)
        ("m", si(1.0, Dimension::LENGTH)),
        ("g", si(1e-3, Dimension::MASS)),
        ("s", si(1.0, Dimension::TIME)),
        ("A", si(1.0, Dimension::CURRENT)),
        ("K", si(1.0, Dimension::TEMPERATURE)),
        ("mol", si(1.0, Dimension::AMOUNT)),
        ("cd", si(1.0, Dimension::LUMINOSITY)),
        // Derived
        ("N", si(1.0, dim(1, 1, -2))),
        ("Pa", si(1.0, dim(1, -1, -2))),
        ("J", si(1.0, dim(1, 2, -2))),
        ("W", si(1.0, dim(1, 2, -3))),
        ("Hz", si(1.0, dim(0, 0, -1))),
        ("l", si(1e-3, dim(0, 3, 0))),
        ("L", si(1e-3, dim(0, 3, 0))),
        ("t", si(1e3, Dimension::MASS)),
        ("bar", si(1e5, dim(1, -1, -2))),
        ("rad", si(1.0, Dimension::NONE)),
        // Time
        ("min", fixed(60.0, Dimension::TIME)),
        ("h", fixed(3600.0, Dimension::TIME)),
        ("d", fixed(86400.0, Dimension::TIME)),
        // Angles
        ("deg", fixed(std::f64::consts::PI / 180.0, Dimension::NONE)),
        // Area
        ("a", fixed(100.0, dim(0, 2, 0))),
        ("ha", fixed(1e4, dim(0, 2, 0))),
        // Gravitational
        ("kp", fixed(STANDARD_GRAVITY, dim(1, 1, -2))),
        ("kgf", fixed(STANDARD_GRAVITY, dim(1, 1, -2))),
        ("atm", fixed(101_325.0, dim(1, -1, -2))),
        // Imperial
        ("inch", fixed(INCH, Dimension::LENGTH)),
        ("ft", fixed(12.0 * INCH, Dimension::LENGTH)),
        ("foot", fixed(12.0 * INCH, Dimension::LENGTH)),
        ("yd", fixed(36.0 * INCH, Dimension::LENGTH)),
        ("mi", fixed(63_360.0 * INCH, Dimension::LENGTH)),
        ("nmi", fixed(1852.0, Dimension::LENGTH)),
        ("lb", fixed(POUND, Dimension::MASS)),
        ("oz", fixed(POUND / 16.0, Dimension::MASS)),
    ];

    entries.into_iter().collect()
});

/// Longest prefixes first so `da` wins over `d`.
const PREFIXES: [(&str, f64); 21] = [
    ("da", 1e1),
    ("Y", 1e24),
    ("Z", 1e21),
    ("E", 1e18),
    ("P", 1e15),
    ("T", 1e12),
    ("G", 1e9),
    ("M", 1e6),
    ("k", 1e3),
    ("h", 1e2),
    ("d", 1e-1),
    ("c", 1e-2),
    ("m", 1e-3),
    ("u", 1e-6),
    ("µ", 1e-6),
    ("μ", 1e-6),
    ("n", 1e-9),
    ("p", 1e-12),
    ("f", 1e-15),
    ("a", 1e-18),
    ("z", 1e-21),
];

/// Resolve a unit symbol, applying an SI prefix when needed.
pub fn lookup(symbol: &str) -> Option<UnitDef> {
    if let Some(def) = UNITS.get(symbol) {
        return Some(*def);
    }

    PREFIXES.iter().find_map(|(prefix, scale)| {
        let rest = symbol.strip_prefix(prefix)?;
        let def = UNITS.get(rest).filter(|d| d.prefixable)?;
        Some(UnitDef {
            factor: def.factor * scale,
            ..*def
        })
    })
}

/// Whether `symbol` names a unit.
pub fn is_known(symbol: &str) -> bool {
    lookup(symbol).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_symbols_win_over_prefixes() {
        assert_eq!(lookup("min").unwrap().factor, 60.0);
        assert_eq!(lookup("cd").unwrap().dimension, Dimension::LUMINOSITY);
        assert_eq!(lookup("ft").unwrap().dimension, Dimension::LENGTH);
        assert_eq!(lookup("h").unwrap().factor, 3600.0);
    }

    #[test]
    fn test_prefixed_symbols() {
        assert_eq!(lookup("km").unwrap().factor, 1000.0);
        assert_eq!(lookup("mm").unwrap().factor, 1e-3);
        assert!((lookup("kg").unwrap().factor - 1.0).abs() < 1e-15);
        assert_eq!(lookup("dam").unwrap().factor, 10.0);
        assert!((lookup("cm").unwrap().factor - 0.01).abs() < 1e-15);
    }

    #[test]
    fn test_fixed_units_take_no_prefix() {
        assert!(lookup("kft").is_none());
        assert!(lookup("kmin").is_none());
        assert!(!is_known("parsec"));
    }
}
