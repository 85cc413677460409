//! Monte Carlo simulation configuration.
//!
//! Configuration is validated before the engine draws a single random
//! number: a built [`SimulationConfig`] is always simulatable.

use super::error::SimulationError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of price observations allowed per path.
pub const MAX_OBSERVATIONS: usize = 10_000;

/// Variance-reduction mode for the trial loop.
///
/// A closed variant: there is no loosely-typed mode flag to mistype, and an
/// unsupported mode is unrepresentable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VarianceReduction {
    /// Plain Monte Carlo: one independent path per trial.
    #[default]
    None,

    /// Antithetic variates: each trial draws one noise sequence and prices
    /// a mirrored path pair, averaging the two payoffs. Induces negative
    /// correlation within the pair, reducing estimator variance without
    /// changing its expectation.
    Antithetic,
}

/// Monte Carlo simulation configuration.
///
/// Immutable once built. Use [`SimulationConfigBuilder`] to construct
/// instances.
///
/// # Examples
///
/// ```rust
/// use meanpath_pricing::mc::{SimulationConfig, VarianceReduction};
///
/// let config = SimulationConfig::builder()
///     .n_paths(10_000)
///     .n_observations(20)
///     .variance_reduction(VarianceReduction::Antithetic)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.n_observations(), 20);
/// ```
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Number of independent trials.
    n_paths: usize,
    /// Price observations per path, including the spot observation.
    n_observations: usize,
    /// Variance-reduction mode.
    variance_reduction: VarianceReduction,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of independent trials.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of price observations per path.
    #[inline]
    pub fn n_observations(&self) -> usize {
        self.n_observations
    }

    /// Returns the variance-reduction mode.
    #[inline]
    pub fn variance_reduction(&self) -> VarianceReduction {
        self.variance_reduction
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] if:
    /// - `n_paths` is 0 or greater than [`MAX_PATHS`]
    /// - `n_observations` is below 2 or greater than [`MAX_OBSERVATIONS`]
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(SimulationError::InvalidPathCount(self.n_paths));
        }
        if self.n_observations < 2 || self.n_observations > MAX_OBSERVATIONS {
            return Err(SimulationError::InvalidObservationCount(
                self.n_observations,
            ));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Validation happens at build time; `n_paths` and `n_observations` are
/// required, the variance-reduction mode defaults to plain Monte Carlo.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    n_observations: Option<usize>,
    variance_reduction: VarianceReduction,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of independent trials.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of price observations per path.
    #[inline]
    pub fn n_observations(mut self, n_observations: usize) -> Self {
        self.n_observations = Some(n_observations);
        self
    }

    /// Sets the variance-reduction mode.
    #[inline]
    pub fn variance_reduction(mut self, mode: VarianceReduction) -> Self {
        self.variance_reduction = mode;
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] if a required field is missing or a
    /// provided value is out of range.
    pub fn build(self) -> Result<SimulationConfig, SimulationError> {
        let n_paths = self
            .n_paths
            .ok_or(SimulationError::MissingParameter("n_paths"))?;
        let n_observations = self
            .n_observations
            .ok_or(SimulationError::MissingParameter("n_observations"))?;

        let config = SimulationConfig {
            n_paths,
            n_observations,
            variance_reduction: self.variance_reduction,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
