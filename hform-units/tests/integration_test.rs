//! Integration tests for hform-units

use hform_units::prelude::*;
use hform_units::is_valid;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_common_engineering_units() {
    let cases = [
        ("5 km in m", 5.0, "km", "m", 5000.0),
        ("1 kp in N", 1.0, "kp", "N", 9.80665),
        ("1 ha in m2", 1.0, "ha", "m2", 10_000.0),
        ("1 mi in km", 1.0, "mi", "km", 1.609_344),
        ("2 h in min", 2.0, "h", "min", 120.0),
        ("1 bar in kPa", 1.0, "bar", "kPa", 100.0),
        ("1 l in cm**3", 1.0, "l", "cm**3", 1000.0),
    ];

    for (name, value, from, to, expected) in cases {
        let q = Quantity::parse(value, from).unwrap();
        let converted = q.convert_to(&Unit::parse(to).unwrap()).unwrap();
        assert!(
            (converted.value() - expected).abs() <= 1e-9 * expected.abs(),
            "{name}: got {}",
            converted.value()
        );
    }
}

#[test]
fn test_validity() {
    assert!(is_valid("kp/m**2"));
    assert!(is_valid("inch"));
    assert!(is_valid("m*s"));
    assert!(!is_valid("m^2"));
    assert!(!is_valid("\""));
    assert!(!is_valid(""));
}

#[test]
fn test_error_messages() {
    let err = Unit::parse("kg*bogus").unwrap_err();
    assert_eq!(err, UnitError::UnknownUnit("bogus".to_string()));
    assert_eq!(err.to_string(), "Unknown unit: bogus");
}

#[test]
fn test_stacked_products() {
    let n = Unit::parse("kg*m*s**-2").unwrap();
    assert!(n.is_compatible(&Unit::parse("N").unwrap()));

    let tall = Unit::parse("m*m*m*m*m*m*m*m*m*m").unwrap();
    assert_eq!(tall.dimension(), Unit::parse("m**10").unwrap().dimension());

    let near_limit = Unit::parse("m**120*m**7").unwrap();
    assert_eq!(near_limit.dimension().exponents()[1], 127);
}

#[test]
fn test_out_of_range_exponents_are_errors() {
    for expr in [
        "m**100*m**100",
        "m**256",
        "m**128",
        "(m**64)**2",
        "s**-100/s**100",
        "m**2147483647",
        "m**99999999999",
    ] {
        assert!(
            matches!(Unit::parse(expr), Err(UnitError::Syntax { .. })),
            "{expr}"
        );
        assert!(!is_valid(expr), "{expr}");
    }

    let hundred = Unit::parse("m**100").unwrap();
    assert!(hundred.checked_mul(&hundred).is_err());
    assert!(hundred.powi(2).is_err());
}

proptest! {
    #[test]
    fn prop_conversion_round_trips(value in -1.0e9f64..1.0e9, pair in 0usize..4) {
        let (a, b) = [("km", "m"), ("ft", "inch"), ("kp/m**2", "Pa"), ("h", "s")][pair];
        let q = Quantity::parse(value, a).unwrap();
        let back = q
            .convert_to(&Unit::parse(b).unwrap())
            .unwrap()
            .convert_to(&Unit::parse(a).unwrap())
            .unwrap();
        prop_assert!((back.value() - value).abs() <= 1e-9 * value.abs().max(1.0));
    }

    #[test]
    fn prop_exponents_parse_or_fail_cleanly(a in -300i32..300, b in -300i32..300) {
        let expr = format!("m**({a})*m**({b})");
        let sum = a + b;
        let in_range = [a, b, sum].iter().all(|n| i8::try_from(*n).is_ok());
        match Unit::parse(&expr) {
            Ok(unit) => {
                prop_assert!(in_range, "{}", expr);
                prop_assert_eq!(i32::from(unit.dimension().exponents()[1]), sum);
            }
            Err(err) => {
                prop_assert!(!in_range, "{}", expr);
                let is_syntax = matches!(err, UnitError::Syntax { .. });
                prop_assert!(is_syntax);
            }
        }
    }
}
