//! Price command implementation.
//!
//! Prices one average-price contract with both estimator modes and prints
//! the analytic reference values next to the simulated estimates.

use tracing::info;

use meanpath_models::{AnalyticPrice, AsianOption, OptionParams};
use meanpath_pricing::{MonteCarloEngine, SimulationConfig, VarianceReduction};

/// Run the price command.
#[allow(clippy::too_many_arguments)]
pub fn run(
    maturity: f64,
    strike: f64,
    spot: f64,
    volatility: f64,
    rate: f64,
    averaging_period: Option<f64>,
    n_paths: usize,
    n_observations: usize,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let params = OptionParams::new(maturity, strike, spot, volatility, rate)?;
    let option = AsianOption::new(params, averaging_period)?;

    info!("Pricing contract: {}", option);
    info!("  Paths: {}, observations per path: {}", n_paths, n_observations);

    println!("{}\n", option);

    let mut results = Vec::new();
    for (label, mode) in [
        ("Standard Monte Carlo", VarianceReduction::None),
        ("Antithetic variate", VarianceReduction::Antithetic),
    ] {
        let mut builder = SimulationConfig::builder()
            .n_paths(n_paths)
            .n_observations(n_observations)
            .variance_reduction(mode);
        if let Some(seed) = seed {
            builder = builder.seed(seed);
        }

        let engine = MonteCarloEngine::new(builder.build()?)?;
        results.push((label, engine.simulate(&option)));
    }

    println!(
        "Simulation for {} paths, {} observations in each.",
        n_paths, n_observations
    );
    for (label, result) in &results {
        println!(
            "{:<22} estimated value: {:>8.3}, standard error: {:>8.3}",
            label, result.mean, result.std_error
        );
    }

    let closed_form = option.closed_form()?;
    let approximation = option.approximation()?;
    println!("\nPseudo-closed-form solution:  {:>8.3}", closed_form);
    println!("Normal-spread approximation:  {:>8.3}", approximation);

    info!("Pricing complete");
    Ok(())
}
