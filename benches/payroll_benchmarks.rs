//! Performance benchmarks for the payroll engine.
//!
//! Covers the pure withholding arithmetic and a full monthly run against an
//! in-memory SQLite store.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::str::FromStr;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};

use records_console::calculation::{compute_withholding, hourly_gross};
use records_console::config::{Capabilities, DatabaseConfig};
use records_console::db;
use records_console::entities::{employee, employee_title};
use records_console::services;

/// Benchmark: withholding split of a single gross amount.
fn bench_withholding(c: &mut Criterion) {
    let gross = Decimal::from_str("937.50").unwrap();

    c.bench_function("compute_withholding", |b| {
        b.iter(|| compute_withholding(black_box(gross)))
    });
}

/// Benchmark: hourly gross followed by withholding.
fn bench_hourly_pipeline(c: &mut Criterion) {
    let hours = Decimal::from_str("37.50").unwrap();
    let rate = Decimal::from_str("18.375").unwrap();

    c.bench_function("hourly_gross_and_withholding", |b| {
        b.iter(|| compute_withholding(hourly_gross(black_box(hours), black_box(rate))))
    });
}

async fn seed_salaried(headcount: i32) -> DatabaseConnection {
    let connection = db::connect(&DatabaseConfig::default()).await.unwrap();
    db::create_schema(&connection, &Capabilities::all())
        .await
        .unwrap();

    employee_title::Entity::insert(employee_title::ActiveModel {
        title: Set("Analyst".to_string()),
        salary: Set(Some(Decimal::from_str("5123.45").unwrap())),
    })
    .exec_without_returning(&connection)
    .await
    .unwrap();

    for employee_no in 1..=headcount {
        employee::Entity::insert(employee::ActiveModel {
            employee_no: Set(employee_no),
            employee_name: Set(format!("Employee {:04}", employee_no)),
            phone_number: Set(None),
            starting_date: Set(None),
            title: Set(Some("Analyst".to_string())),
            department_name: Set(None),
            division_name: Set(None),
        })
        .exec_without_returning(&connection)
        .await
        .unwrap();
    }

    connection
}

/// Benchmark: monthly run over a salaried workforce.
///
/// Each iteration pays a fresh month so every run inserts `headcount` rows.
fn bench_payroll_run(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("payroll_run");

    for headcount in [10, 100] {
        let connection = rt.block_on(seed_salaried(headcount));
        let mut year = 2000;

        group.throughput(Throughput::Elements(headcount as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(headcount),
            &headcount,
            |b, _| {
                b.to_async(&rt).iter(|| {
                    year += 1;
                    let connection = connection.clone();
                    let year = year;
                    async move {
                        let run = services::run_payroll(&connection, &Capabilities::all(), year, 1)
                            .await
                            .unwrap();
                        black_box(run)
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_withholding,
    bench_hourly_pipeline,
    bench_payroll_run,
);

criterion_main!(benches);
