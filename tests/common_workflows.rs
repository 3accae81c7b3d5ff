//! Integration tests for common hform workflows.
//!
//! These tests go through the facade crate the way an application would.

use hform::prelude::*;
use hform::{ColumnType, FieldKind, FieldSpec, reset_provider, set_provider};
use std::sync::{Arc, Mutex};

/// Serializes tests that swap the process-wide provider or default locale.
static AMBIENT: Mutex<()> = Mutex::new(());

// =============================================================================
// Form round trips
// =============================================================================

#[test]
fn test_form_round_trip_in_spanish() {
    let es = Locale::es();

    let price = NumberOptions::new().locale(es.clone()).precision(2);
    let text = number_to(Some(Number::from(1999.5)), &price);
    assert_eq!(text, "1.999,50");
    assert_eq!(number_from(&text, &price).unwrap(), Some(Number::Float(1999.5)));

    let paid = LogicalOptions::new().locale(es.clone());
    assert_eq!(logical_to(Some(true), &paid), "Sí");
    assert_eq!(logical_from("si", &paid), Some(true));

    let due = DateOptions::new().locale(es);
    let date = hform::chrono::NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
    let text = date_to(Some(date.into()), &due);
    assert_eq!(text, "31/01/2025");
    assert_eq!(date_from(&text, &due).unwrap(), Some(date.into()));
}

#[test]
fn test_record_fields_from_column_declarations() {
    let columns = [
        ("height_cm", ColumnType::Float),
        ("floors", ColumnType::Integer),
        ("opened_on", ColumnType::Date),
        ("listed", ColumnType::Boolean),
        ("notes", ColumnType::Text),
    ];
    let specs: Vec<Option<FieldKind>> = columns
        .iter()
        .map(|(name, column)| FieldSpec::infer(name, *column).map(|s| s.kind))
        .collect();
    assert_eq!(
        specs,
        vec![
            Some(FieldKind::Magnitude),
            Some(FieldKind::Integer),
            Some(FieldKind::Date),
            Some(FieldKind::Logical),
            None,
        ]
    );

    let spec = FieldSpec::infer("height_cm", ColumnType::Float)
        .unwrap()
        .locale(Locale::en());
    let mut height = HField::new(spec);
    height.set_text("2 m").unwrap();
    assert_eq!(height.value(), Some(&Value::Number(Number::Float(200.0))));
    assert_eq!(height.text(), "2 m");

    assert!(height.set_text("2 kg").is_err());
    assert!(!height.is_valid());
    assert_eq!(height.text(), "2 kg");
}

#[test]
fn test_dispatch_by_name() {
    let options = ConvertOptions::new().locale(Locale::de());
    let kind: TargetKind = "number".parse().unwrap();
    assert_eq!(
        from("1.234,5", kind, &options).unwrap(),
        Some(Value::Number(Number::Float(1234.5)))
    );
    assert!(matches!("money".parse::<TargetKind>(), Err(ConvertError::InvalidType(_))));
}

#[cfg(feature = "units")]
#[test]
fn test_magnitude_with_unit_algebra() {
    let options = MagnitudeOptions::new().units("km/h").locale(Locale::en());
    let speed = magnitude_from("10 m/s", &options).unwrap().unwrap();
    assert!((speed - 36.0).abs() < 1e-9);

    let q = Quantity::new(speed, Unit::parse("km/h").unwrap());
    assert!((q.si_value() - 10.0).abs() < 1e-9);
}

// =============================================================================
// Ambient configuration
// =============================================================================

#[test]
fn test_custom_locale_table() {
    let _guard = AMBIENT.lock().unwrap_or_else(|e| e.into_inner());

    let provider = MemoryProvider::new();
    provider
        .insert_toml(
            "pt-BR",
            r#"
[number]
separator = ","
delimiter = "."

[logical]
true = "Sim"
false = "Não"
trues = ["sim", "s"]
falses = ["nao", "n"]
"#,
        )
        .unwrap();
    set_provider(Arc::new(provider));

    let pt = Locale::parse("pt-BR").unwrap();
    let number = NumberOptions::new().locale(pt.clone()).precision(1);
    assert_eq!(number_to(Some(Number::from(1234.5)), &number), "1.234,5");

    let logical = LogicalOptions::new().locale(pt.clone());
    assert_eq!(logical_from("não", &logical), Some(false));
    assert_eq!(logical_to(Some(true), &logical), "Sim");

    // tables missing from the file take their defaults
    let date = hform::chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    assert_eq!(date_to(Some(date.into()), &DateOptions::new().locale(pt)), "2024-02-29");

    reset_provider();
}

#[test]
fn test_default_locale_switch() {
    let _guard = AMBIENT.lock().unwrap_or_else(|e| e.into_inner());
    let previous = hform::default_locale();

    let options = ConvertOptions::new();
    set_default_locale(Locale::fr());
    assert_eq!(to(0.5_f64, &options), "0,5");
    assert_eq!(to(false, &options), "Non");

    set_default_locale(Locale::en());
    assert_eq!(to(0.5_f64, &options), "0.5");

    set_default_locale(previous);
}
