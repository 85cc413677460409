//! Error types for the Monte Carlo kernel.
//!
//! Invalid simulation requests are rejected here, before any random draw
//! occurs; numerical edge cases inside a running simulation are not errors.

use thiserror::Error;

use super::config::{MAX_OBSERVATIONS, MAX_PATHS};

/// Configuration error for the Monte Carlo engine.
///
/// These errors occur when a simulation request is constructed with
/// degenerate sizes, and are surfaced to the caller immediately.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Path count outside the valid range.
    #[error("Invalid path count {0}: must be in range [1, {MAX_PATHS}]")]
    InvalidPathCount(usize),

    /// Observation count outside the valid range. At least two observations
    /// are needed for a path to contain one simulated step.
    #[error("Invalid observation count {0}: must be in range [2, {MAX_OBSERVATIONS}]")]
    InvalidObservationCount(usize),

    /// A required builder field was never set.
    #[error("Invalid parameter '{0}': must be specified")]
    MissingParameter(&'static str),
}
