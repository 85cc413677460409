//! Terminal-price option contract.

use std::fmt;

use num_traits::Float;

use super::params::OptionParams;
use super::payoff::PathPayoff;

/// European-style call: pays `max(S_T - K, 0)` on the terminal observation.
///
/// Only the last entry of the price path enters the payoff; the option is
/// priced by the same simulation engine as the path-average variant, through
/// the [`PathPayoff`] abstraction.
///
/// # Examples
/// ```
/// use meanpath_models::instruments::{EuropeanOption, OptionParams, PathPayoff};
///
/// let params = OptionParams::new(1.0_f64, 100.0, 100.0, 0.2, 0.05).unwrap();
/// let option = EuropeanOption::new(params);
///
/// assert_eq!(option.payoff(&[100.0, 95.0, 110.0]), 10.0);
/// assert_eq!(option.payoff(&[100.0, 110.0, 95.0]), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuropeanOption<T: Float> {
    params: OptionParams<T>,
}

impl<T: Float> EuropeanOption<T> {
    /// Creates a new terminal-price option from validated parameters.
    #[inline]
    pub fn new(params: OptionParams<T>) -> Self {
        Self { params }
    }
}

impl<T: Float + Send + Sync> PathPayoff<T> for EuropeanOption<T> {
    #[inline]
    fn params(&self) -> &OptionParams<T> {
        &self.params
    }

    #[inline]
    fn payoff(&self, path: &[T]) -> T {
        match path.last() {
            Some(&terminal) => (terminal - self.params.strike()).max(T::zero()),
            None => T::zero(),
        }
    }
}

impl<T: Float + fmt::Display> fmt::Display for EuropeanOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "European option: {}", self.params)
    }
}
