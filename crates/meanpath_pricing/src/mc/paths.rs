//! Geometric Brownian Motion price path generation.
//!
//! Paths follow the exact log-space recurrence
//!
//! ```text
//! S[0] = spot
//! S[i] = S[i-1] * drift_factor * exp(volatility_factor * Z_i)
//! ```
//!
//! with `drift_factor = exp((r - 0.5 sigma^2) dt)` and
//! `volatility_factor = sigma sqrt(dt)` precomputed once per simulation.
//! The multiplicative recurrence can underflow or overflow for pathological
//! volatility and maturity combinations; no renormalisation is applied.
//!
//! Each trial owns its path vector; paths are not retained after payoff
//! evaluation.

use meanpath_models::OptionParams;

use crate::rng::SimRng;

/// Per-step multiplicative factors of the GBM recurrence.
///
/// Constant across all trials of a simulation; recomputing them per trial
/// would be wasteful but not incorrect.
///
/// # Examples
///
/// ```rust
/// use meanpath_models::OptionParams;
/// use meanpath_pricing::mc::StepFactors;
///
/// let params = OptionParams::new(1.0, 100.0, 100.0, 0.2, 0.05).unwrap();
/// let factors = StepFactors::from_params(&params, 20);
/// assert!(factors.drift_factor > 1.0);
/// assert!(factors.volatility_factor > 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepFactors {
    /// `exp((r - 0.5 sigma^2) dt)`
    pub drift_factor: f64,
    /// `sigma sqrt(dt)`
    pub volatility_factor: f64,
}

impl StepFactors {
    /// Creates step factors from raw rate, volatility, and time step.
    #[inline]
    pub fn new(rate: f64, volatility: f64, dt: f64) -> Self {
        Self {
            drift_factor: ((rate - 0.5 * volatility * volatility) * dt).exp(),
            volatility_factor: volatility * dt.sqrt(),
        }
    }

    /// Creates step factors for a contract observed `n_observations` times,
    /// using `dt = maturity / n_observations`.
    #[inline]
    pub fn from_params(params: &OptionParams<f64>, n_observations: usize) -> Self {
        let dt = params.maturity() / n_observations as f64;
        Self::new(params.rate(), params.volatility(), dt)
    }
}

/// Generates one GBM price path of `n_observations` entries.
///
/// Index 0 holds the spot price; each later entry applies the recurrence
/// with an independent standard normal draw.
pub fn generate_path(
    rng: &mut SimRng,
    spot: f64,
    factors: &StepFactors,
    n_observations: usize,
) -> Vec<f64> {
    let mut path = Vec::with_capacity(n_observations);
    path.push(spot);

    for i in 1..n_observations {
        let z = rng.gen_normal();
        let next = path[i - 1] * factors.drift_factor * (factors.volatility_factor * z).exp();
        path.push(next);
    }

    path
}

/// Generates a mirrored pair of GBM price paths for antithetic variates.
///
/// One standard normal draw is made per step; the first path uses `Z_i`,
/// the second uses `-Z_i` at every step. The pair is driven by mirrored
/// noise, not independently resampled, which is what induces the negative
/// payoff correlation the antithetic estimator relies on.
pub fn generate_antithetic_pair(
    rng: &mut SimRng,
    spot: f64,
    factors: &StepFactors,
    n_observations: usize,
) -> (Vec<f64>, Vec<f64>) {
    let mut path = Vec::with_capacity(n_observations);
    let mut mirror = Vec::with_capacity(n_observations);
    path.push(spot);
    mirror.push(spot);

    for i in 1..n_observations {
        let z = rng.gen_normal();
        path.push(path[i - 1] * factors.drift_factor * (factors.volatility_factor * z).exp());
        mirror.push(mirror[i - 1] * factors.drift_factor * (factors.volatility_factor * -z).exp());
    }

    (path, mirror)
}
