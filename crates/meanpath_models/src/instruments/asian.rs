//! Path-average (Asian) option contract.

use std::fmt;

use num_traits::Float;

use super::error::InstrumentError;
use super::params::OptionParams;
use super::payoff::PathPayoff;

/// Arithmetic-average Asian call: pays `max(mean(path) - K, 0)`.
///
/// The average runs over every observation of the simulated path, including
/// the spot price at index 0.
///
/// # Averaging Period
///
/// The contract carries an averaging period for forward-starting average
/// windows. A missing or zero period resolves to the full maturity. The
/// stored value does not restrict which path segment is averaged; the payoff
/// always averages the entire path, and a restricted window remains an
/// unimplemented extension.
///
/// # Examples
/// ```
/// use meanpath_models::instruments::{AsianOption, OptionParams, PathPayoff};
///
/// let params = OptionParams::new(20.0_f64 / 365.0, 100.0, 100.0, 0.25, 0.1).unwrap();
/// let option = AsianOption::new(params, None).unwrap();
///
/// // Unset averaging period resolves to maturity
/// assert_eq!(option.averaging_period(), 20.0 / 365.0);
///
/// let payoff = option.payoff(&[99.0, 101.0, 103.0]);
/// assert!((payoff - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsianOption<T: Float> {
    params: OptionParams<T>,
    averaging_period: T,
}

impl<T: Float> AsianOption<T> {
    /// Creates a new path-average option.
    ///
    /// # Arguments
    /// * `params` - Validated contract and market parameters
    /// * `averaging_period` - Average window in years; `None` or zero
    ///   resolves to the contract maturity
    ///
    /// # Errors
    ///
    /// Returns [`InstrumentError::InvalidAveragingPeriod`] for a negative
    /// averaging period.
    pub fn new(
        params: OptionParams<T>,
        averaging_period: Option<T>,
    ) -> Result<Self, InstrumentError> {
        let zero = T::zero();
        let averaging_period = match averaging_period {
            Some(period) if period < zero => {
                return Err(InstrumentError::InvalidAveragingPeriod {
                    period: period.to_f64().unwrap_or(f64::NAN),
                });
            }
            Some(period) if period > zero => period,
            _ => params.maturity(),
        };

        Ok(Self {
            params,
            averaging_period,
        })
    }

    /// Returns the effective averaging period in years.
    #[inline]
    pub fn averaging_period(&self) -> T {
        self.averaging_period
    }

    /// Replaces the volatility of the underlying parameters.
    ///
    /// Convenience forwarder for parameter sweeps; see
    /// [`OptionParams::set_volatility`].
    ///
    /// # Errors
    ///
    /// Returns [`InstrumentError::InvalidVolatility`] for non-positive input.
    #[inline]
    pub fn set_volatility(&mut self, volatility: T) -> Result<(), InstrumentError> {
        self.params.set_volatility(volatility)
    }
}

impl<T: Float + Send + Sync> PathPayoff<T> for AsianOption<T> {
    #[inline]
    fn params(&self) -> &OptionParams<T> {
        &self.params
    }

    fn payoff(&self, path: &[T]) -> T {
        if path.is_empty() {
            return T::zero();
        }

        let sum = path.iter().fold(T::zero(), |acc, &price| acc + price);
        let mean = sum / T::from(path.len()).unwrap_or_else(T::one);

        (mean - self.params.strike()).max(T::zero())
    }
}

impl<T: Float + fmt::Display> fmt::Display for AsianOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Asian option: {}, average period: {:.3} year",
            self.params, self.averaging_period
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn create_test_params() -> OptionParams<f64> {
        OptionParams::new(20.0 / 365.0, 100.0, 100.0, 0.25, 0.1).unwrap()
    }

    #[test]
    fn test_payoff_itm() {
        let option = AsianOption::new(create_test_params(), None).unwrap();
        let payoff = option.payoff(&[100.0, 102.0, 104.0]);
        assert_relative_eq!(payoff, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_payoff_otm_floored_at_zero() {
        let option = AsianOption::new(create_test_params(), None).unwrap();
        // Terminal above strike but average below
        let payoff = option.payoff(&[90.0, 92.0, 101.0]);
        assert_eq!(payoff, 0.0);
    }

    #[test]
    fn test_payoff_includes_spot_observation() {
        let option = AsianOption::new(create_test_params(), None).unwrap();
        // mean([100, 106]) = 103, not 106
        let payoff = option.payoff(&[100.0, 106.0]);
        assert_relative_eq!(payoff, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_payoff_empty_path() {
        let option = AsianOption::new(create_test_params(), None).unwrap();
        assert_eq!(option.payoff(&[]), 0.0);
    }

    #[test]
    fn test_averaging_period_defaults_to_maturity() {
        let params = create_test_params();
        let unset = AsianOption::new(params, None).unwrap();
        assert_eq!(unset.averaging_period(), params.maturity());

        let zero = AsianOption::new(params, Some(0.0)).unwrap();
        assert_eq!(zero.averaging_period(), params.maturity());
    }

    #[test]
    fn test_averaging_period_explicit_value() {
        let option = AsianOption::new(create_test_params(), Some(0.02)).unwrap();
        assert_eq!(option.averaging_period(), 0.02);
    }

    #[test]
    fn test_averaging_period_negative_rejected() {
        let result = AsianOption::new(create_test_params(), Some(-0.1));
        assert!(matches!(
            result,
            Err(InstrumentError::InvalidAveragingPeriod { .. })
        ));
    }

    #[test]
    fn test_set_volatility_forwards_to_params() {
        let mut option = AsianOption::new(create_test_params(), None).unwrap();
        option.set_volatility(0.5).unwrap();
        assert_eq!(option.params().volatility(), 0.5);
    }

    #[test]
    fn test_display_includes_average_period() {
        let option = AsianOption::new(create_test_params(), None).unwrap();
        let text = format!("{}", option);
        assert!(text.starts_with("Asian option"));
        assert!(text.contains("average period: 0.055 year"));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            /// Payoffs are non-negative for any positive finite path.
            #[test]
            fn prop_payoff_non_negative(path in prop::collection::vec(1e-6_f64..1e6, 1..64)) {
                let option = AsianOption::new(create_test_params(), None).unwrap();
                prop_assert!(option.payoff(&path) >= 0.0);
            }

            /// The payoff never exceeds the path average itself.
            #[test]
            fn prop_payoff_bounded_by_average(path in prop::collection::vec(1e-6_f64..1e6, 1..64)) {
                let option = AsianOption::new(create_test_params(), None).unwrap();
                let mean = path.iter().sum::<f64>() / path.len() as f64;
                prop_assert!(option.payoff(&path) <= mean);
            }
        }
    }
}
