//! Arithmetic-average Asian call approximations.
//!
//! Implements the Bouaziz-Briys-Crouhy pseudo-closed-form solution for
//! average-price calls together with the cruder two-CDF-term approximation
//! from the same treatment of forward-starting Asian options.
//!
//! # References
//!
//! - Bouaziz, L., Briys, E. and Crouhy, M. (1994). "The pricing of
//!   forward-starting asian options." Journal of Banking and Finance,
//!   18(5), 823-839.

use num_traits::Float;

use super::distributions::norm_cdf;
use super::error::AnalyticError;
use crate::instruments::{AsianOption, EuropeanOption, PathPayoff};

/// Deterministic analytic prices for an option variant.
///
/// Both methods are pure functions of the contract parameters: no
/// randomness, bit-for-bit reproducible in a fixed floating-point
/// environment. Variants without a defined formula return
/// [`AnalyticError::Unsupported`] rather than a placeholder value.
pub trait AnalyticPrice<T: Float> {
    /// Pseudo-closed-form price of the option.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticError::Unsupported`] if the variant defines no
    /// closed form.
    fn closed_form(&self) -> Result<T, AnalyticError>;

    /// Second, independent approximation of the option price.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticError::Unsupported`] if the variant defines no
    /// approximation.
    fn approximation(&self) -> Result<T, AnalyticError>;
}

/// Bouaziz-Briys-Crouhy pseudo-closed-form price of an average-price call.
///
/// With `rh = r - sigma^2 / 2`:
///
/// ```text
/// C = S e^(-rT) [ (rh T / 2) N(rh sqrt(3T) / (2 sigma))
///               + sqrt(sigma^2 T / (6 pi)) e^(-3 rh^2 T / (8 sigma^2)) ]
/// ```
///
/// The formula prices the at-the-money-forward average contract and does
/// not depend on the strike.
///
/// # Arguments
///
/// * `spot` - Underlying price at t = 0
/// * `rate` - Annualised risk-free rate
/// * `volatility` - Annualised volatility
/// * `maturity` - Time to expiry in years
///
/// # Example
///
/// ```rust
/// use meanpath_models::analytical::bouaziz_briys_crouhy;
///
/// let price = bouaziz_briys_crouhy(100.0, 0.1, 0.25, 20.0 / 365.0);
/// assert!(price > 0.0);
/// ```
pub fn bouaziz_briys_crouhy<T: Float>(spot: T, rate: T, volatility: T, maturity: T) -> T {
    let zero = T::zero();
    if spot <= zero || volatility <= zero || maturity <= zero {
        return zero;
    }

    let two = T::from(2.0).unwrap();
    let three = T::from(3.0).unwrap();
    let six_pi = T::from(6.0 * std::f64::consts::PI).unwrap();
    let eight = T::from(8.0).unwrap();

    let half = T::one() / two;
    let rh = rate - half * volatility * volatility;

    let cdf_term =
        (rh * maturity / two) * norm_cdf(rh * (three * maturity).sqrt() / (two * volatility));
    let correction = (volatility * volatility * maturity / six_pi).sqrt()
        * (-(three * rh * rh * maturity) / (eight * volatility * volatility)).exp();

    spot * (-rate * maturity).exp() * (cdf_term + correction)
}

/// Two-CDF-term approximation of an average-price call.
///
/// With `rh+- = r +- sigma^2 / 2`:
///
/// ```text
/// C = S / 2 [ N(rh+ sqrt(T) / sigma) - e^(-rT) N(rh- sqrt(T) / sigma) ]
/// ```
///
/// A coarser estimate than [`bouaziz_briys_crouhy`]; the discount factor
/// applies to the second CDF term only. Like the pseudo-closed form it does
/// not depend on the strike.
///
/// # Arguments
///
/// * `spot` - Underlying price at t = 0
/// * `rate` - Annualised risk-free rate
/// * `volatility` - Annualised volatility
/// * `maturity` - Time to expiry in years
pub fn normal_spread_approximation<T: Float>(spot: T, rate: T, volatility: T, maturity: T) -> T {
    let zero = T::zero();
    if spot <= zero || volatility <= zero || maturity <= zero {
        return zero;
    }

    let two = T::from(2.0).unwrap();
    let half = T::one() / two;

    let rh_plus = rate + half * volatility * volatility;
    let rh_minus = rate - half * volatility * volatility;
    let sqrt_t = maturity.sqrt();

    half * spot
        * (norm_cdf(rh_plus * sqrt_t / volatility)
            - (-rate * maturity).exp() * norm_cdf(rh_minus * sqrt_t / volatility))
}

impl<T: Float + Send + Sync> AnalyticPrice<T> for AsianOption<T> {
    fn closed_form(&self) -> Result<T, AnalyticError> {
        let params = self.params();
        Ok(bouaziz_briys_crouhy(
            params.underlying(),
            params.rate(),
            params.volatility(),
            params.maturity(),
        ))
    }

    fn approximation(&self) -> Result<T, AnalyticError> {
        let params = self.params();
        Ok(normal_spread_approximation(
            params.underlying(),
            params.rate(),
            params.volatility(),
            params.maturity(),
        ))
    }
}

impl<T: Float> AnalyticPrice<T> for EuropeanOption<T> {
    fn closed_form(&self) -> Result<T, AnalyticError> {
        Err(AnalyticError::Unsupported {
            variant: "European",
        })
    }

    fn approximation(&self) -> Result<T, AnalyticError> {
        Err(AnalyticError::Unsupported {
            variant: "European",
        })
    }
}
