//! Performance benchmarks for the statistics kernel

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fetch_comparator::stats::SummaryStatistics;
use std::hint::black_box;

fn sample_data(n: usize) -> Vec<f64> {
    // Deterministic pseudo-random durations in the 0..10s range
    let mut state = 0x2545f4914f6cdd1d_u64;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 10_000) as f64 / 1000.0
        })
        .collect()
}

fn bench_summary_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary_statistics");
    for size in [5_usize, 100, 10_000] {
        let samples = sample_data(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &samples, |b, samples| {
            b.iter(|| SummaryStatistics::from_samples(black_box(samples)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_summary_statistics);
criterion_main!(benches);
