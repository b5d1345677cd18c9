// Criterion benchmarks for the candidate eligibility filter

use amora_match::core::{age_in_years, build_exclusions, BirthDateWindow};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn bench_age_in_years(c: &mut Criterion) {
    let birth = date(1999, 3, 1);
    let today = date(2024, 6, 15);

    c.bench_function("age_in_years", |b| {
        b.iter(|| age_in_years(black_box(birth), black_box(today)));
    });
}

fn bench_window_resolve(c: &mut Criterion) {
    let birth = date(1999, 3, 1);
    let today = date(2024, 6, 15);

    c.bench_function("birth_date_window_resolve", |b| {
        b.iter(|| {
            BirthDateWindow::resolve(
                black_box(birth),
                black_box(Some(20)),
                black_box(Some(30)),
                black_box(today),
            )
        });
    });

    c.bench_function("birth_date_window_resolve_defaults", |b| {
        b.iter(|| {
            BirthDateWindow::resolve(black_box(birth), black_box(None), black_box(None), black_box(today))
        });
    });
}

fn bench_window_contains(c: &mut Criterion) {
    let window = BirthDateWindow::resolve(date(1999, 3, 1), Some(20), Some(30), date(2024, 6, 15));
    let candidates: Vec<NaiveDate> = (0..1000)
        .map(|i| date(1990 + (i % 20) as i32, 1 + (i % 12) as u32, 1 + (i % 28) as u32))
        .collect();

    c.bench_function("window_contains_1000_candidates", |b| {
        b.iter(|| {
            let eligible: Vec<_> = candidates
                .iter()
                .filter(|d| window.contains(**d))
                .collect();
            black_box(eligible)
        });
    });
}

fn bench_build_exclusions(c: &mut Criterion) {
    let mut group = c.benchmark_group("exclusions");

    for history_size in [10, 100, 1000, 5000].iter() {
        let interacted: Vec<i32> = (2..2 + *history_size).collect();
        let queued: Vec<i32> = (*history_size..*history_size + 50).collect();

        group.bench_with_input(
            BenchmarkId::new("build_exclusions", history_size),
            history_size,
            |b, _| {
                b.iter(|| {
                    build_exclusions(black_box(1), black_box(&interacted), black_box(&queued))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_age_in_years,
    bench_window_resolve,
    bench_window_contains,
    bench_build_exclusions
);

criterion_main!(benches);
