use std::hint::black_box;

use bikeshare_stats::pager::Pages;
use bikeshare_stats::pipeline::compute_reports;
use bikeshare_stats::selectors::{Month, UserDay};
use bikeshare_stats::trips::{TripSet, columns, derive_time_fields};
use bikeshare_stats::types::{DataSet, DataType, Field, Schema, Value};
use chrono::{Duration, NaiveDate};
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const STATIONS: &[&str] = &[
    "Clark St & Elm St",
    "Canal St & Adams St",
    "Michigan Ave & Oak St",
    "Lake Shore Dr & Monroe St",
    "Streeter Dr & Grand Ave",
    "Theater on the Lake",
];

fn synthetic_trips(n: usize) -> TripSet {
    let schema = Schema::new(vec![
        Field::new(columns::START_TIME, DataType::Timestamp),
        Field::new(columns::TRIP_DURATION, DataType::Float64),
        Field::new(columns::START_STATION, DataType::Utf8),
        Field::new(columns::END_STATION, DataType::Utf8),
        Field::new(columns::USER_TYPE, DataType::Utf8),
        Field::optional(columns::GENDER, DataType::Utf8),
        Field::optional(columns::BIRTH_YEAR, DataType::Int64),
    ]);
    let base = NaiveDate::from_ymd_opt(2017, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap();
    // Spread trips evenly over January through June.
    let step = Duration::minutes((181 * 24 * 60 / n.max(1)) as i64);

    let rows = (0..n)
        .map(|i| {
            let start = base + step * i as i32;
            vec![
                Value::Timestamp(start),
                Value::Float64(60.0 + (i % 1_800) as f64),
                Value::Utf8(STATIONS[i % STATIONS.len()].to_string()),
                Value::Utf8(STATIONS[(i * 7 + 3) % STATIONS.len()].to_string()),
                Value::Utf8(if i % 4 == 0 { "Customer" } else { "Subscriber" }.to_string()),
                match i % 5 {
                    0 => Value::Null,
                    1 | 3 => Value::Utf8("Female".to_string()),
                    _ => Value::Utf8("Male".to_string()),
                },
                if i % 5 == 0 {
                    Value::Null
                } else {
                    Value::Int64(1950 + (i % 50) as i64)
                },
            ]
        })
        .collect();

    derive_time_fields(&DataSet::new(schema, rows)).unwrap()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let monday = UserDay::new(2).unwrap();

    for &n in &[1_000usize, 50_000] {
        let trips = synthetic_trips(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("filter_month_day", n), &trips, |b, trips| {
            b.iter(|| {
                black_box(bikeshare_stats::trips::filter_trips(
                    black_box(trips),
                    Some(Month::March),
                    Some(monday),
                ))
            })
        });

        group.bench_with_input(BenchmarkId::new("compute_reports", n), &trips, |b, trips| {
            b.iter(|| black_box(compute_reports(black_box(trips)).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("page_through", n), &trips, |b, trips| {
            b.iter_batched(
                || trips.clone(),
                |trips| black_box(Pages::new(trips).map(|p| p.len()).sum::<usize>()),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
