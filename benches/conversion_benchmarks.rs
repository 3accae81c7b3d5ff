use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use hform::prelude::*;
use std::hint::black_box;

fn bench_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("number");
    let de = NumberOptions::new().locale(Locale::de()).precision(2);

    group.bench_function("number_to", |b| {
        b.iter(|| number_to(black_box(Some(Number::Float(1234567.891))), &de))
    });

    group.bench_function("number_from", |b| {
        b.iter(|| number_from(black_box("1.234.567,89"), &de))
    });

    group.bench_function("integer_from", |b| {
        b.iter(|| integer_from(black_box("1.234.567"), &de))
    });

    group.finish();
}

fn bench_dms(c: &mut Criterion) {
    let mut group = c.benchmark_group("dms");
    let latitude = DmsOptions::new().locale(Locale::en()).latitude();

    group.bench_function("dms_to", |b| {
        b.iter(|| dms_to(black_box(Some(40.758_333)), &latitude))
    });

    group.bench_function("dms_from", |b| {
        b.iter(|| dms_from(black_box("40° 45' 30\" N"), &latitude))
    });

    group.finish();
}

fn bench_dates(c: &mut Criterion) {
    let mut group = c.benchmark_group("date");
    let es = DateOptions::new().locale(Locale::es());
    let date = NaiveDate::from_ymd_opt(2024, 3, 5).map(Temporal::Date);

    group.bench_function("date_to", |b| b.iter(|| date_to(black_box(date), &es)));

    group.bench_function("date_from_template", |b| {
        b.iter(|| date_from(black_box("05/03/2024"), &es))
    });

    group.bench_function("date_from_names", |b| {
        b.iter(|| date_from(black_box("5 de marzo de 2024"), &es))
    });

    group.bench_function("date_from_lenient", |b| {
        b.iter(|| date_from(black_box("martes 5/3"), &es))
    });

    group.finish();
}

fn bench_magnitudes(c: &mut Criterion) {
    let meters = MagnitudeOptions::new().units("m").locale(Locale::en());

    c.bench_function("magnitude_from", |b| {
        b.iter(|| magnitude_from(black_box("12.5 km"), &meters))
    });
}

criterion_group!(benches, bench_numbers, bench_dms, bench_dates, bench_magnitudes);
criterion_main!(benches);
