//! Insertion and traversal costs for both indexes.
//!
//! The "sorted" inputs show the unbalanced tree degrading to a list.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roster::{AverageIndex, LinkedRoster, Record, StudentId};

fn students(n: u32, sorted: bool) -> Vec<Record> {
    (0..n)
        .map(|i| {
            // Multiplicative hash spreads keys when unsorted.
            let k = if sorted { i } else { i.wrapping_mul(2_654_435_761) % n };
            let score = f64::from(k) * 100.0 / f64::from(n);
            Record::new(i, format!("student{i}"), "Region", score, score)
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[100u32, 1_000] {
        for sorted in [false, true] {
            let input = students(n, sorted);
            let label = if sorted { "sorted" } else { "shuffled" };

            group.bench_with_input(BenchmarkId::new(format!("index/{label}"), n), &input, |b, input| {
                b.iter(|| input.iter().cloned().collect::<AverageIndex>())
            });
            group.bench_with_input(BenchmarkId::new(format!("list/{label}"), n), &input, |b, input| {
                b.iter(|| input.iter().cloned().collect::<LinkedRoster>())
            });
        }
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let input = students(1_000, false);
    let index: AverageIndex = input.iter().cloned().collect();
    let list: LinkedRoster = input.iter().cloned().collect();

    c.bench_function("index/in_order", |b| b.iter(|| index.in_order().count()));
    c.bench_function("index/filter_above_85", |b| {
        b.iter(|| index.filter_average_above(black_box(85.0)).len())
    });
    c.bench_function("list/filter_above_85", |b| {
        b.iter(|| list.filter_average_above(black_box(85.0)).len())
    });
    c.bench_function("list/sort_by_name", |b| {
        b.iter_batched(
            || list.iter().cloned().collect::<LinkedRoster>(),
            |mut l| l.sort_by_name(),
            criterion::BatchSize::SmallInput,
        )
    });
    c.bench_function("index/remove_by_id", |b| {
        b.iter_batched(
            || input.iter().cloned().collect::<AverageIndex>(),
            |mut idx| idx.remove_by_id(StudentId::new(black_box(500))),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_insert, bench_queries);
criterion_main!(benches);
