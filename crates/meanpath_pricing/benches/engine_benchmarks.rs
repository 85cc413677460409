//! Criterion benchmarks for the Monte Carlo pricing engine.
//!
//! Measures trial-loop throughput for both variance-reduction modes across
//! path counts to characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use meanpath_models::{AsianOption, OptionParams};
use meanpath_pricing::{MonteCarloEngine, SimulationConfig, VarianceReduction};

fn reference_option() -> AsianOption<f64> {
    let params = OptionParams::new(20.0 / 365.0, 100.0, 100.0, 0.25, 0.1).unwrap();
    AsianOption::new(params, None).unwrap()
}

/// Benchmark the full simulate call for both estimator modes.
fn bench_simulate(c: &mut Criterion) {
    let option = reference_option();
    let mut group = c.benchmark_group("simulate");

    for n_paths in [1_000, 10_000, 100_000] {
        for (label, mode) in [
            ("plain", VarianceReduction::None),
            ("antithetic", VarianceReduction::Antithetic),
        ] {
            let config = SimulationConfig::builder()
                .n_paths(n_paths)
                .n_observations(20)
                .variance_reduction(mode)
                .seed(42)
                .build()
                .unwrap();
            let engine = MonteCarloEngine::new(config).unwrap();

            group.bench_with_input(
                BenchmarkId::new(label, n_paths),
                &engine,
                |b, engine| {
                    b.iter(|| black_box(engine.simulate(&option)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_simulate);
criterion_main!(benches);
