//! Criterion benchmarks for the Black-Scholes engine.
//!
//! Measures a single valuation, the individual Greeks, and implied
//! volatility inversion at a few moneyness levels.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::analytical::{evaluate, implied_volatility, BlackScholes, ImpliedVolConfig};
use pricer_models::instruments::{OptionParams, OptionType};

fn contract(strike: f64) -> OptionParams {
    OptionParams {
        spot: 100.0,
        strike,
        rate: 0.05,
        volatility: 0.2,
        expiry: 1.0,
        option_type: OptionType::Call,
    }
}

/// Benchmark a full valuation (price plus five Greeks).
fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for strike in [80.0, 100.0, 120.0] {
        let params = contract(strike);
        group.bench_with_input(BenchmarkId::new("call", strike), &params, |b, p| {
            b.iter(|| evaluate(black_box(p)).unwrap());
        });
    }

    let degenerate = OptionParams {
        volatility: 0.0,
        ..contract(100.0)
    };
    group.bench_function("zero_volatility", |b| {
        b.iter(|| evaluate(black_box(&degenerate)).unwrap());
    });

    group.finish();
}

/// Benchmark the per-Greek methods on a fixed model.
fn bench_greeks(c: &mut Criterion) {
    let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    let mut group = c.benchmark_group("greeks");

    group.bench_function("price", |b| {
        b.iter(|| bs.price(black_box(100.0), black_box(1.0), OptionType::Call))
    });
    group.bench_function("delta", |b| {
        b.iter(|| bs.delta(black_box(100.0), black_box(1.0), OptionType::Call))
    });
    group.bench_function("gamma", |b| {
        b.iter(|| bs.gamma(black_box(100.0), black_box(1.0)))
    });
    group.bench_function("theta", |b| {
        b.iter(|| bs.theta(black_box(100.0), black_box(1.0), OptionType::Put))
    });

    group.finish();
}

/// Benchmark implied volatility inversion.
fn bench_implied_vol(c: &mut Criterion) {
    let mut group = c.benchmark_group("implied_volatility");
    let config = ImpliedVolConfig::default();

    for strike in [80.0, 100.0, 120.0] {
        let params = contract(strike);
        let price = evaluate(&params).unwrap().price;
        group.bench_with_input(BenchmarkId::new("newton", strike), &params, |b, p| {
            b.iter(|| implied_volatility(black_box(price), p, &config).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_greeks, bench_implied_vol);
criterion_main!(benches);
