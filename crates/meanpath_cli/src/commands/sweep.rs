//! Sweep command implementation.
//!
//! Re-prices the same contract across a volatility grid, mutating the
//! volatility between simulate calls and printing the antithetic estimate
//! next to the pseudo-closed-form value for each grid point.

use tracing::info;

use meanpath_models::{AnalyticPrice, AsianOption, OptionParams};
use meanpath_pricing::{MonteCarloEngine, SimulationConfig, VarianceReduction};

/// Run the sweep command.
#[allow(clippy::too_many_arguments)]
pub fn run(
    maturity: f64,
    strike: f64,
    spot: f64,
    rate: f64,
    volatilities: &[f64],
    n_paths: usize,
    n_observations: usize,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    anyhow::ensure!(!volatilities.is_empty(), "volatility grid is empty");

    let params = OptionParams::new(maturity, strike, spot, volatilities[0], rate)?;
    let mut option = AsianOption::new(params, None)?;

    let mut builder = SimulationConfig::builder()
        .n_paths(n_paths)
        .n_observations(n_observations)
        .variance_reduction(VarianceReduction::Antithetic);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let engine = MonteCarloEngine::new(builder.build()?)?;

    info!(
        "Sweeping {} volatilities with {} antithetic paths each",
        volatilities.len(),
        n_paths
    );

    println!(
        "Value of asian option for different volatilities \
         (simulation of {} paths, antithetic variate)",
        n_paths
    );
    println!("{:<14}{:<18}{:<18}{}", "Volatility", "Estimated value", "Standard error", "Pseudo-closed-form");

    for &volatility in volatilities {
        option.set_volatility(volatility)?;

        let result = engine.simulate(&option);
        let closed_form = option.closed_form()?;

        println!(
            "{:<14.3}{:<18.3}{:<18.3}{:.3}",
            volatility, result.mean, result.std_error, closed_form
        );
    }

    info!("Sweep complete");
    Ok(())
}
