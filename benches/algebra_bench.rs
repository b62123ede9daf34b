//! Keyed set algebra benchmark.
//!
//! Measures `difference`, `intersection` and `intersection_all` over
//! overlapping integer ranges, and `difference_by` against a keyed record
//! type to show the cost of the key closure.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use slicekit::algebra::{difference, difference_by_key, intersection, intersection_all};
use std::hint::black_box;

const SIZES: [i32; 4] = [100, 1000, 10000, 100000];

#[derive(Clone)]
struct Record {
    id: i32,
    #[allow(dead_code)]
    payload: [u8; 32],
}

/// `a` is `0..size`, `b` is the upper half shifted by a quarter.
fn generate_pair(size: i32) -> (Vec<i32>, Vec<i32>) {
    let a = (0..size).collect();
    let b = (size / 4..size + size / 4).collect();
    (a, b)
}

fn benchmark_difference(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("algebra_difference");

    for size in SIZES {
        let (a, b) = generate_pair(size);
        group.bench_with_input(BenchmarkId::new("difference", size), &size, |bencher, _| {
            bencher.iter(|| black_box(difference(black_box(&a), black_box(&b))));
        });
    }

    group.finish();
}

fn benchmark_difference_by_key(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("algebra_difference_by_key");

    for size in SIZES {
        let (a, b) = generate_pair(size);
        let to_records = |ids: &[i32]| -> Vec<Record> {
            ids.iter()
                .map(|&id| Record {
                    id,
                    payload: [0; 32],
                })
                .collect()
        };
        let a = to_records(&a);
        let b = to_records(&b);
        group.bench_with_input(
            BenchmarkId::new("difference_by_key", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(difference_by_key(black_box(&a), black_box(&b), |record| record.id)));
            },
        );
    }

    group.finish();
}

fn benchmark_intersection(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("algebra_intersection");

    for size in SIZES {
        let (a, b) = generate_pair(size);
        group.bench_with_input(BenchmarkId::new("intersection", size), &size, |bencher, _| {
            bencher.iter(|| black_box(intersection(black_box(&a), black_box(&b))));
        });
    }

    group.finish();
}

fn benchmark_intersection_all(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("algebra_intersection_all");

    for size in SIZES {
        let sets: Vec<Vec<i32>> = (0..4).map(|shift| (shift * size / 8..size + shift * size / 8).collect()).collect();
        group.bench_with_input(BenchmarkId::new("intersection_all", size), &size, |bencher, _| {
            bencher.iter(|| black_box(intersection_all(black_box(&sets))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_difference,
    benchmark_difference_by_key,
    benchmark_intersection,
    benchmark_intersection_all
);
criterion_main!(benches);
