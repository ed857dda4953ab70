//! Error types for subgradient optimization.
//!
//! Failures are deliberately distinct from the normal
//! [`TerminationReason`](crate::optimizer::TerminationReason)s: a run that
//! stops because a tolerance fired returns `Ok`, a run that cannot proceed
//! returns one of the variants below. Failures are deterministic given the
//! same inputs, so the library never retries on its own.

use thiserror::Error;

/// Errors that can occur during optimization.
#[derive(Debug, Clone, Error)]
pub enum OptimizerError {
    /// Invalid optimizer configuration.
    ///
    /// This error occurs when the optimizer is configured with invalid
    /// parameters (e.g. an unrecognized step-type selector, a non-positive
    /// step size, a zero iteration budget).
    #[error("Invalid optimizer configuration: {reason} ({parameter} = {value})")]
    InvalidConfiguration {
        /// Description of the configuration error
        reason: String,
        /// Name of the invalid parameter
        parameter: String,
        /// Value that was invalid
        value: String,
    },

    /// Dimension mismatch between the iterate and an oracle output.
    ///
    /// This error occurs when the subgradient oracle returns a vector whose
    /// length differs from the dimension fixed by the starting point.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension
        actual: usize,
    },

    /// Numerical instability detected.
    ///
    /// This error occurs when the objective or the subgradient oracle
    /// produces a NaN or infinite value along the trajectory.
    #[error("Numerical instability detected: {reason}")]
    NumericalInstability {
        /// Description of the numerical issue
        reason: String,
    },
}

impl OptimizerError {
    /// Create an InvalidConfiguration error.
    pub fn invalid_configuration<S1, S2, S3>(reason: S1, parameter: S2, value: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self::InvalidConfiguration {
            reason: reason.into(),
            parameter: parameter.into(),
            value: value.into(),
        }
    }

    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create a NumericalInstability error with a custom reason.
    pub fn numerical_instability<S: Into<String>>(reason: S) -> Self {
        Self::NumericalInstability {
            reason: reason.into(),
        }
    }
}

/// Result type alias for optimizer operations.
pub type Result<T> = std::result::Result<T, OptimizerError>;
