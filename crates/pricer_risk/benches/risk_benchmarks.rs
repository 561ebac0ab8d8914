//! Criterion benchmarks for pricer_risk sweeps.
//!
//! Benchmarks cover:
//! - Sequential sweeps at dashboard resolution (1000 points) and beyond
//! - Rayon sweeps against the sequential baseline
//! - Logarithmic versus linear spacing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::math::grid::GridSpacing;
use pricer_models::analytical::OutputMetric;
use pricer_models::instruments::{OptionParams, OptionType};
use pricer_risk::parallel::par_sweep;
use pricer_risk::scenarios::{SweepRange, SweepSpec, SweepVariable};

fn base() -> OptionParams {
    OptionParams::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap()
}

fn bench_sequential_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_sequential");
    let base = base();

    for samples in [100, 1_000, 10_000] {
        let spec = SweepSpec::new(SweepVariable::Spot, SweepRange::new(50.0, 150.0), samples)
            .with_metric(OutputMetric::Gamma);
        group.bench_with_input(BenchmarkId::new("spot", samples), &spec, |b, spec| {
            b.iter(|| spec.run(black_box(&base)))
        });
    }

    group.finish();
}

fn bench_parallel_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_parallel");
    let base = base();

    for samples in [10_000, 100_000] {
        let spec = SweepSpec::new(SweepVariable::Strike, SweepRange::new(5.0, 500.0), samples);
        group.bench_with_input(BenchmarkId::new("sequential", samples), &spec, |b, spec| {
            b.iter(|| spec.run(black_box(&base)))
        });
        group.bench_with_input(BenchmarkId::new("rayon", samples), &spec, |b, spec| {
            b.iter(|| par_sweep(spec, black_box(&base)))
        });
    }

    group.finish();
}

fn bench_spacing(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_spacing");
    let base = base();

    for spacing in [GridSpacing::Linear, GridSpacing::Logarithmic] {
        let spec = SweepSpec::new(SweepVariable::Volatility, SweepRange::new(0.01, 2.0), 1_000)
            .with_spacing(spacing)
            .with_metric(OutputMetric::Vega);
        group.bench_with_input(BenchmarkId::new("volatility", spacing.name()), &spec, |b, spec| {
            b.iter(|| spec.run(black_box(&base)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_sweep,
    bench_parallel_sweep,
    bench_spacing
);
criterion_main!(benches);
