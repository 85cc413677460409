//! Monte Carlo simulation kernel.
//!
//! Submodules, leaf-first:
//! - [`paths`]: GBM price path generation from precomputed step factors
//! - [`config`]: validated simulation configuration and variance-reduction
//!   mode selection
//! - [`error`]: structured configuration errors
//! - [`engine`]: the estimator orchestrating trials into a
//!   [`SimulationResult`]

pub mod config;
pub mod engine;
pub mod error;
pub mod paths;

pub use config::{SimulationConfig, SimulationConfigBuilder, VarianceReduction};
pub use engine::{MonteCarloEngine, SimulationResult};
pub use error::SimulationError;
pub use paths::StepFactors;
