//! Analytic evaluator error types.

use thiserror::Error;

/// Errors raised by the analytic price evaluators.
///
/// # Examples
/// ```
/// use meanpath_models::analytical::AnalyticError;
///
/// let err = AnalyticError::Unsupported { variant: "European" };
/// assert!(format!("{}", err).contains("European"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticError {
    /// The option variant defines no closed-form or approximate price.
    #[error("No analytic price defined for {variant} options")]
    Unsupported {
        /// Name of the option variant
        variant: &'static str,
    },
}
