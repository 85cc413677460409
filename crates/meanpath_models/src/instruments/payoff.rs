//! Payoff polymorphism over option variants.
//!
//! The Monte Carlo estimator evaluates payoffs through [`PathPayoff`]
//! without knowing which option variant it is pricing. This is the single
//! polymorphism point of the pricing core; there are exactly two
//! implementors, [`EuropeanOption`](super::EuropeanOption) and
//! [`AsianOption`](super::AsianOption).

use num_traits::Float;

use super::params::OptionParams;

/// Trait for payoffs evaluated on a realised price path.
///
/// # Contract
///
/// `payoff` is a pure function of the path: no randomness, no interior
/// mutation, and a non-negative result for every input (option payoffs are
/// floored at zero). The path is an ordered sequence of observations with
/// index 0 holding the spot price at t = 0.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so trials can be evaluated on
/// parallel workers.
pub trait PathPayoff<T: Float>: Send + Sync {
    /// Returns the contract and market parameters of this option.
    fn params(&self) -> &OptionParams<T>;

    /// Maps a realised price path to its exercise value.
    ///
    /// Returns zero for an empty path.
    fn payoff(&self, path: &[T]) -> T;
}
