//! Instrument error types.
//!
//! Structured error handling for contract construction. All validation
//! happens at construction time; a constructed instrument is always in a
//! priceable state.

use thiserror::Error;

/// Instrument-related errors.
///
/// Raised when contract or market parameters fail validation. Invalid
/// parameters are rejected eagerly rather than deferred to simulation time.
///
/// # Examples
/// ```
/// use meanpath_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid maturity (non-positive).
    #[error("Invalid maturity: T = {maturity}")]
    InvalidMaturity {
        /// The invalid maturity value
        maturity: f64,
    },

    /// Invalid strike price (negative).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid underlying spot price (non-positive).
    #[error("Invalid underlying price: S = {underlying}")]
    InvalidUnderlying {
        /// The invalid spot value
        underlying: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid averaging period (negative).
    #[error("Invalid averaging period: {period}")]
    InvalidAveragingPeriod {
        /// The invalid averaging period value
        period: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_maturity_display() {
        let err = InstrumentError::InvalidMaturity { maturity: -0.5 };
        assert_eq!(format!("{}", err), "Invalid maturity: T = -0.5");
    }

    #[test]
    fn test_invalid_strike_display() {
        let err = InstrumentError::InvalidStrike { strike: -100.0 };
        assert_eq!(format!("{}", err), "Invalid strike: K = -100");
    }

    #[test]
    fn test_invalid_volatility_display() {
        let err = InstrumentError::InvalidVolatility { volatility: 0.0 };
        assert_eq!(format!("{}", err), "Invalid volatility: sigma = 0");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = InstrumentError::InvalidUnderlying { underlying: 0.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = InstrumentError::InvalidAveragingPeriod { period: -1.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
