//! Benchmarks for building and rendering rosters.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use employee_roster::config::RosterLoader;
use employee_roster::models::{Employee, ProductionWorker, TeamLeader};
use employee_roster::roster::{Roster, RosterEntry, sample_roster};

/// Builds a roster of `count` team leaders, every third one with corrections.
fn create_roster(count: usize) -> Roster {
    let entries = (0..count)
        .map(|i| {
            let number = i as i32;
            let shift = if i % 3 == 0 { 9 } else { 1 + number % 2 };
            let worker = ProductionWorker::new(
                Employee::new(format!("Employee {}", i), number, "01/01/2020"),
                shift,
                Decimal::new(2500 + number as i64, 2),
            )
            .into_inner();
            let leader = TeamLeader::new(worker, Decimal::new(1000, 0), 40, number % 50).into_inner();
            RosterEntry::new(format!("Team Leader {}", i + 1), leader)
        })
        .collect();
    Roster::new(entries)
}

fn bench_sample_roster(c: &mut Criterion) {
    c.bench_function("sample_roster_build_and_render", |b| {
        b.iter(|| black_box(sample_roster().into_inner().render()))
    });
}

fn bench_validation(c: &mut Criterion) {
    c.bench_function("production_worker_with_corrections", |b| {
        b.iter(|| {
            black_box(ProductionWorker::new(
                Employee::new("Alice Johnson", 101, "01/15/2020"),
                black_box(3),
                black_box(Decimal::new(-2550, 2)),
            ))
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("roster_render");
    for count in [10usize, 100, 1000] {
        let roster = create_roster(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &roster, |b, roster| {
            b.iter(|| black_box(roster.render()))
        });
    }
    group.finish();
}

fn bench_load_sample_file(c: &mut Criterion) {
    c.bench_function("load_sample_roster_file", |b| {
        b.iter(|| {
            let loader = RosterLoader::load("./config/sample_roster.yaml")
                .expect("Failed to load sample roster");
            black_box(loader.build())
        })
    });
}

criterion_group!(
    benches,
    bench_sample_roster,
    bench_validation,
    bench_render,
    bench_load_sample_file
);
criterion_main!(benches);
