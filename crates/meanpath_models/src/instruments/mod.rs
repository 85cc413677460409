//! Instrument layer: contract parameters and payoff definitions.
//!
//! This module provides the validated [`OptionParams`] value object shared by
//! the simulation and analytic layers, and the [`PathPayoff`] trait with its
//! two implementors: [`EuropeanOption`] (terminal-price payoff) and
//! [`AsianOption`] (path-average payoff).

mod asian;
mod error;
mod european;
mod params;
mod payoff;

pub use asian::AsianOption;
pub use error::InstrumentError;
pub use european::EuropeanOption;
pub use params::OptionParams;
pub use payoff::PathPayoff;
