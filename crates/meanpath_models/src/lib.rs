//! # Meanpath Models (Contracts Layer)
//!
//! Option contract definitions and analytic approximations for the meanpath
//! pricing workspace:
//! - Validated, immutable-after-construction contract parameters
//! - Payoff polymorphism over terminal-price and path-average variants
//! - Semi-analytic approximations for average-price calls, used as
//!   reference oracles for the Monte Carlo engine in `meanpath_pricing`
//!
//! ## Usage Example
//!
//! ```rust
//! use meanpath_models::{AnalyticPrice, AsianOption, OptionParams, PathPayoff};
//!
//! let params = OptionParams::new(20.0_f64 / 365.0, 100.0, 100.0, 0.25, 0.1).unwrap();
//! let option = AsianOption::new(params, None).unwrap();
//!
//! // Path-average payoff, floored at zero
//! let payoff = option.payoff(&[100.0, 104.0, 102.0]);
//! assert!((payoff - 2.0).abs() < 1e-12);
//!
//! // Analytic reference value
//! let reference = option.closed_form().unwrap();
//! assert!(reference > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;

// Re-export commonly used items for convenience
pub use analytical::{AnalyticError, AnalyticPrice};
pub use instruments::{AsianOption, EuropeanOption, InstrumentError, OptionParams, PathPayoff};
