//! Monte Carlo pricing engine.
//!
//! The [`MonteCarloEngine`] orchestrates repeated path generation and
//! discounted payoff evaluation into a mean and standard error. Trials are
//! statistically independent and run on a rayon worker pool; each trial
//! derives its own random sub-stream from the configured seed, so results
//! are reproducible regardless of worker count and antithetic pairs never
//! straddle workers. Aggregation happens only after every trial has
//! completed.

use rayon::prelude::*;

use meanpath_models::PathPayoff;

use super::config::{SimulationConfig, VarianceReduction};
use super::error::SimulationError;
use super::paths::{generate_antithetic_pair, generate_path, StepFactors};
use crate::rng::SimRng;

/// Result of a Monte Carlo simulation.
///
/// Immutable value object echoing the request sizes alongside the estimate.
/// In antithetic mode each mirrored pair contributes a single averaged
/// value, so `trial_count` equals the requested path count, never twice it.
///
/// # Standard Error
///
/// `std_error` is the sample standard deviation of the discounted trial
/// values divided by `sqrt(trial_count)`. For `trial_count == 1` the sample
/// standard deviation is undefined and `std_error` is `NaN`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// Discounted mean payoff (present value estimate).
    pub mean: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
    /// Number of independent trials.
    pub trial_count: usize,
    /// Price observations per path.
    pub path_length: usize,
}

impl SimulationResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Monte Carlo pricing engine.
///
/// Owns a validated [`SimulationConfig`]; [`simulate`](Self::simulate)
/// prices any [`PathPayoff`] implementor against it. The engine holds no
/// mutable state, so one instance can price several contracts in sequence
/// (re-invocation with mutated parameters between calls is supported; the
/// borrow of the option for the duration of the call keeps parameters
/// frozen while a simulation is in flight).
///
/// # Examples
///
/// ```rust
/// use meanpath_models::{AsianOption, OptionParams};
/// use meanpath_pricing::mc::{MonteCarloEngine, SimulationConfig};
///
/// let params = OptionParams::new(20.0 / 365.0, 100.0, 100.0, 0.25, 0.1).unwrap();
/// let option = AsianOption::new(params, None).unwrap();
///
/// let config = SimulationConfig::builder()
///     .n_paths(1_500)
///     .n_observations(20)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let result = MonteCarloEngine::new(config).unwrap().simulate(&option);
/// assert_eq!(result.trial_count, 1_500);
/// assert!(result.mean >= 0.0);
/// ```
pub struct MonteCarloEngine {
    config: SimulationConfig,
}

impl MonteCarloEngine {
    /// Creates a new engine with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] if the configuration is invalid. The
    /// check runs here so that no random draw ever happens for a degenerate
    /// request.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Prices an option by Monte Carlo simulation.
    ///
    /// Precomputes the per-step drift and volatility factors and the
    /// discount factor once, then runs `n_paths` independent trials:
    ///
    /// - plain mode: one path, one discounted payoff per trial;
    /// - antithetic mode: one mirrored pair per trial, contributing the
    ///   discounted average of the two payoffs.
    ///
    /// # Arguments
    ///
    /// * `option` - Any payoff implementor; the engine never inspects which
    ///   variant it is pricing.
    pub fn simulate<O: PathPayoff<f64>>(&self, option: &O) -> SimulationResult {
        let n_paths = self.config.n_paths();
        let n_observations = self.config.n_observations();
        let mode = self.config.variance_reduction();
        let base_seed = self.config.seed().unwrap_or(0);

        let params = option.params();
        let spot = params.underlying();
        let factors = StepFactors::from_params(params, n_observations);
        let discount_factor = params.discount_factor();

        let values: Vec<f64> = (0..n_paths)
            .into_par_iter()
            .map(|trial| {
                let mut rng = SimRng::from_seed(base_seed.wrapping_add(trial as u64));

                let payoff = match mode {
                    VarianceReduction::None => {
                        let path = generate_path(&mut rng, spot, &factors, n_observations);
                        option.payoff(&path)
                    }
                    VarianceReduction::Antithetic => {
                        let (path, mirror) =
                            generate_antithetic_pair(&mut rng, spot, &factors, n_observations);
                        0.5 * (option.payoff(&path) + option.payoff(&mirror))
                    }
                };

                discount_factor * payoff
            })
            .collect();

        let mean = values.iter().sum::<f64>() / n_paths as f64;
        let std_error = if n_paths > 1 {
            let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>()
                / (n_paths - 1) as f64;
            variance.sqrt() / (n_paths as f64).sqrt()
        } else {
            f64::NAN
        };

        SimulationResult {
            mean,
            std_error,
            trial_count: n_paths,
            path_length: n_observations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meanpath_models::{AsianOption, EuropeanOption, OptionParams};

    fn reference_option() -> AsianOption<f64> {
        let params = OptionParams::new(20.0 / 365.0, 100.0, 100.0, 0.25, 0.1).unwrap();
        AsianOption::new(params, None).unwrap()
    }

    fn seeded_config(n_paths: usize, mode: VarianceReduction) -> SimulationConfig {
        SimulationConfig::builder()
            .n_paths(n_paths)
            .n_observations(20)
            .variance_reduction(mode)
            .seed(42)
            .build()
            .unwrap()
    }

    #[test]
    fn test_engine_exposes_config() {
        let engine = MonteCarloEngine::new(seeded_config(100, VarianceReduction::None)).unwrap();
        assert_eq!(engine.config().n_paths(), 100);
        assert_eq!(engine.config().n_observations(), 20);
        assert_eq!(engine.config().seed(), Some(42));
    }

    #[test]
    fn test_reference_scenario_plain() {
        let engine = MonteCarloEngine::new(seeded_config(1_500, VarianceReduction::None)).unwrap();
        let result = engine.simulate(&reference_option());

        // Strike is at the money, so the estimate sits well below the spot
        assert!(result.mean >= 0.0);
        assert!(result.mean < 100.0);
        assert_eq!(result.trial_count, 1_500);
        assert_eq!(result.path_length, 20);
    }

    #[test]
    fn test_reference_scenario_antithetic_counts_pairs_once() {
        let engine =
            MonteCarloEngine::new(seeded_config(1_500, VarianceReduction::Antithetic)).unwrap();
        let result = engine.simulate(&reference_option());

        assert_eq!(result.trial_count, 1_500);
        assert_eq!(result.path_length, 20);
        assert!(result.mean >= 0.0);
    }

    #[test]
    fn test_same_seed_reproduces_result_exactly() {
        let option = reference_option();
        let engine1 = MonteCarloEngine::new(seeded_config(500, VarianceReduction::None)).unwrap();
        let engine2 = MonteCarloEngine::new(seeded_config(500, VarianceReduction::None)).unwrap();

        let result1 = engine1.simulate(&option);
        let result2 = engine2.simulate(&option);
        assert_eq!(result1, result2);
    }

    #[test]
    fn test_different_seeds_differ() {
        let option = reference_option();
        let base = SimulationConfig::builder()
            .n_paths(500)
            .n_observations(20)
            .seed(1)
            .build()
            .unwrap();
        let other = SimulationConfig::builder()
            .n_paths(500)
            .n_observations(20)
            .seed(2)
            .build()
            .unwrap();

        let result1 = MonteCarloEngine::new(base).unwrap().simulate(&option);
        let result2 = MonteCarloEngine::new(other).unwrap().simulate(&option);
        assert_ne!(result1.mean, result2.mean);
    }

    #[test]
    fn test_single_trial_std_error_is_nan() {
        let config = SimulationConfig::builder()
            .n_paths(1)
            .n_observations(20)
            .seed(42)
            .build()
            .unwrap();
        let result = MonteCarloEngine::new(config)
            .unwrap()
            .simulate(&reference_option());

        assert_eq!(result.trial_count, 1);
        assert!(result.mean.is_finite());
        assert!(result.std_error.is_nan());
    }

    #[test]
    fn test_two_trials_std_error_is_finite() {
        let config = SimulationConfig::builder()
            .n_paths(2)
            .n_observations(20)
            .seed(42)
            .build()
            .unwrap();
        let result = MonteCarloEngine::new(config)
            .unwrap()
            .simulate(&reference_option());

        assert!(result.std_error.is_finite());
        assert!(result.std_error >= 0.0);
    }

    #[test]
    fn test_european_option_through_same_engine() {
        let params = OptionParams::new(1.0, 100.0, 100.0, 0.2, 0.05).unwrap();
        let option = EuropeanOption::new(params);

        let config = SimulationConfig::builder()
            .n_paths(10_000)
            .n_observations(50)
            .seed(42)
            .build()
            .unwrap();
        let result = MonteCarloEngine::new(config).unwrap().simulate(&option);

        // ATM one-year call under 20% vol is worth roughly 10
        assert!(result.mean > 5.0 && result.mean < 16.0);
        assert!(result.std_error > 0.0);
    }

    #[test]
    fn test_repricing_after_volatility_mutation() {
        let mut option = reference_option();
        let engine =
            MonteCarloEngine::new(seeded_config(5_000, VarianceReduction::Antithetic)).unwrap();

        let low_vol = engine.simulate(&option);
        option.set_volatility(0.5).unwrap();
        let high_vol = engine.simulate(&option);

        assert!(high_vol.mean > low_vol.mean);
    }

    #[test]
    fn test_antithetic_shares_expectation_with_plain() {
        let option = reference_option();
        let plain = MonteCarloEngine::new(seeded_config(20_000, VarianceReduction::None))
            .unwrap()
            .simulate(&option);
        let antithetic = MonteCarloEngine::new(seeded_config(20_000, VarianceReduction::Antithetic))
            .unwrap()
            .simulate(&option);

        // Same estimand; allow a few standard errors of separation
        let tolerance = 5.0 * (plain.std_error + antithetic.std_error);
        assert!(
            (plain.mean - antithetic.mean).abs() < tolerance,
            "plain {} vs antithetic {} exceeds tolerance {}",
            plain.mean,
            antithetic.mean,
            tolerance
        );
    }

    #[test]
    fn test_confidence_interval_helpers() {
        let result = SimulationResult {
            mean: 10.0,
            std_error: 0.1,
            trial_count: 1000,
            path_length: 20,
        };
        assert!((result.confidence_95() - 0.196).abs() < 1e-12);
        assert!((result.confidence_99() - 0.2576).abs() < 1e-12);
    }
}
