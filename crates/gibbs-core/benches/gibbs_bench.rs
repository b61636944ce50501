//! Benchmarks for partial-sum synthesis and the Gibbs analyzers
//!
//! Run with: cargo bench -p gibbs-core --bench gibbs_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gibbs_core::energy_concentration::{energy_concentration_fraction, ZoneConfig};
use gibbs_core::grid::periodic_grid;
use gibbs_core::overshoot::overshoot;
use gibbs_core::partial_sum::partial_sum;
use gibbs_core::radius_budget::{doubling_deltas, radii};
use gibbs_core::signal::SquareWave;

// ============================================================================
// Partial-Sum Synthesis Benchmarks
// ============================================================================

fn bench_partial_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("partial_sum");
    let square = SquareWave::new(1.0);
    let grid = periodic_grid(4096);

    for n in [64u32, 256, 1024].iter() {
        group.throughput(Throughput::Elements(grid.len() as u64));
        group.bench_with_input(BenchmarkId::new("square_4096pt", n), n, |b, &n| {
            b.iter(|| partial_sum(&square, black_box(n), &grid))
        });
    }

    group.finish();
}

// ============================================================================
// Analyzer Benchmarks
// ============================================================================

fn bench_overshoot(c: &mut Criterion) {
    let mut group = c.benchmark_group("overshoot");

    for n in [100u32, 500, 2000].iter() {
        group.bench_with_input(BenchmarkId::new("square", n), n, |b, &n| {
            b.iter(|| overshoot(black_box(n), 1.0))
        });
    }

    group.finish();
}

fn bench_energy_concentration(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy_concentration");
    let square = SquareWave::new(1.0);
    let grid = periodic_grid(16384);
    let config = ZoneConfig::default();

    group.bench_function("square_n256_16384pt", |b| {
        b.iter(|| energy_concentration_fraction(&square, black_box(256), &grid, &config))
    });

    group.finish();
}

fn bench_radius_budget(c: &mut Criterion) {
    let mut group = c.benchmark_group("radius_budget");
    let square = SquareWave::new(1.0);

    group.bench_function("deltas_n4096", |b| {
        let r = radii(&square, 4096);
        b.iter(|| doubling_deltas(black_box(&r), 8))
    });

    group.finish();
}

criterion_group!(
    name = synthesis_benches;
    config = Criterion::default();
    targets = bench_partial_sum
);

criterion_group!(
    name = analyzer_benches;
    config = Criterion::default();
    targets = bench_overshoot, bench_energy_concentration, bench_radius_budget
);

criterion_main!(synthesis_benches, analyzer_benches);
