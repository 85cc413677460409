//! # Meanpath Pricing (Simulation Layer)
//!
//! Monte Carlo pricing kernel for the meanpath workspace:
//! - Seeded, reproducible random number generation ([`rng`])
//! - Geometric Brownian Motion path generation, single and
//!   antithetic-mirrored ([`mc::paths`])
//! - The [`MonteCarloEngine`] estimator producing a mean and standard error
//!   from repeated discounted payoff trials
//!
//! Contracts and payoffs come from `meanpath_models`; the engine drives them
//! through the `PathPayoff` abstraction without knowing the option variant.
//!
//! ## Usage Example
//!
//! ```rust
//! use meanpath_models::{AsianOption, OptionParams};
//! use meanpath_pricing::{MonteCarloEngine, SimulationConfig, VarianceReduction};
//!
//! let params = OptionParams::new(20.0 / 365.0, 100.0, 100.0, 0.25, 0.1).unwrap();
//! let option = AsianOption::new(params, None).unwrap();
//!
//! let config = SimulationConfig::builder()
//!     .n_paths(1_500)
//!     .n_observations(20)
//!     .variance_reduction(VarianceReduction::Antithetic)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let result = MonteCarloEngine::new(config).unwrap().simulate(&option);
//! println!("{:.3} +/- {:.3}", result.mean, result.std_error);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;

// Re-export commonly used items for convenience
pub use mc::{
    MonteCarloEngine, SimulationConfig, SimulationError, SimulationResult, VarianceReduction,
};
pub use rng::SimRng;
