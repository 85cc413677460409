//! Contract and market parameters.
//!
//! This module provides the parameter value object shared by the Monte Carlo
//! estimator and the analytic evaluators, with validation at construction.

use std::fmt;

use num_traits::Float;

use super::error::InstrumentError;

/// Contract and market parameters for a single option.
///
/// Validated at construction and immutable afterwards, with one sanctioned
/// exception: [`set_volatility`](OptionParams::set_volatility) supports
/// re-pricing across a volatility grid without rebuilding the contract.
/// Because mutation takes `&mut self`, a parameter set can never change
/// underneath an in-flight simulation borrowing it.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use meanpath_models::instruments::OptionParams;
///
/// let params = OptionParams::new(20.0_f64 / 365.0, 100.0, 100.0, 0.25, 0.1).unwrap();
/// assert_eq!(params.strike(), 100.0);
/// assert_eq!(params.underlying(), 100.0);
///
/// // Invalid volatility is rejected at construction
/// let invalid = OptionParams::new(1.0_f64, 100.0, 100.0, 0.0, 0.05);
/// assert!(invalid.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionParams<T: Float> {
    maturity: T,
    strike: T,
    underlying: T,
    volatility: T,
    rate: T,
}

impl<T: Float> OptionParams<T> {
    /// Creates new option parameters with validation.
    ///
    /// # Arguments
    /// * `maturity` - Time to expiry in years (must be positive)
    /// * `strike` - Strike price (must be non-negative)
    /// * `underlying` - Spot price of the underlying at t = 0 (must be positive)
    /// * `volatility` - Annualised volatility (must be positive)
    /// * `rate` - Annualised continuously-compounded risk-free rate
    ///
    /// # Errors
    ///
    /// Returns [`InstrumentError`] if any field violates its invariant.
    pub fn new(
        maturity: T,
        strike: T,
        underlying: T,
        volatility: T,
        rate: T,
    ) -> Result<Self, InstrumentError> {
        let zero = T::zero();

        if maturity <= zero {
            return Err(InstrumentError::InvalidMaturity {
                maturity: maturity.to_f64().unwrap_or(f64::NAN),
            });
        }

        if strike < zero {
            return Err(InstrumentError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if underlying <= zero {
            return Err(InstrumentError::InvalidUnderlying {
                underlying: underlying.to_f64().unwrap_or(f64::NAN),
            });
        }

        if volatility <= zero {
            return Err(InstrumentError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            maturity,
            strike,
            underlying,
            volatility,
            rate,
        })
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn maturity(&self) -> T {
        self.maturity
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the spot price of the underlying at t = 0.
    #[inline]
    pub fn underlying(&self) -> T {
        self.underlying
    }

    /// Returns the annualised volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the annualised risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Replaces the volatility, re-running validation.
    ///
    /// Supports parameter sweeps that re-price the same contract under a
    /// grid of volatilities. Callers must not mutate parameters while a
    /// simulation borrowing them is in flight; the `&mut self` receiver
    /// enforces this for same-thread use.
    ///
    /// # Errors
    ///
    /// Returns [`InstrumentError::InvalidVolatility`] for non-positive input;
    /// the stored value is left unchanged in that case.
    pub fn set_volatility(&mut self, volatility: T) -> Result<(), InstrumentError> {
        if volatility <= T::zero() {
            return Err(InstrumentError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }
        self.volatility = volatility;
        Ok(())
    }

    /// Returns the present-value discount factor `exp(-r * T)`.
    #[inline]
    pub fn discount_factor(&self) -> T {
        (-self.rate * self.maturity).exp()
    }
}

impl<T: Float + fmt::Display> fmt::Display for OptionParams<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "maturity: {:.3} year, strike price: {}, underlying price: {}, \
             volatility: {}, risk-free rate: {}",
            self.maturity, self.strike, self.underlying, self.volatility, self.rate
        )
    }
}
