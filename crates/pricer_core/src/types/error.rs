//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Top-level errors surfaced by pricing entry points
//! - `GridError`: Errors from sample grid construction
//! - `SolverError`: Errors from root-finding solvers

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// The coarse error type that model-specific errors convert into when they
/// cross a crate boundary.
///
/// # Variants
/// - `InvalidInput`: Option parameters outside their valid domain
/// - `NumericalInstability`: A computation produced a non-finite value
/// - `ModelFailure`: A search or solve did not produce a result
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Numerical instability during computation
    NumericalInstability(String),

    /// Model failed to produce a valid result
    ModelFailure(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
            PricingError::ModelFailure(msg) => write!(f, "Model failure: {}", msg),
        }
    }
}

impl std::error::Error for PricingError {}

impl From<GridError> for PricingError {
    fn from(err: GridError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::NumericalInstability(msg) => PricingError::NumericalInstability(msg),
            other => PricingError::ModelFailure(other.to_string()),
        }
    }
}

/// Sample grid construction errors.
///
/// # Examples
/// ```
/// use pricer_core::types::GridError;
///
/// let err = GridError::ReversedRange { start: 2.0, end: 1.0 };
/// assert_eq!(format!("{}", err), "Range start 2 exceeds end 1");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// A range bound is NaN or infinite.
    #[error("Range bounds must be finite: [{start}, {end}]")]
    NonFiniteBound {
        /// Lower bound
        start: f64,
        /// Upper bound
        end: f64,
    },

    /// Lower bound is above the upper bound.
    #[error("Range start {start} exceeds end {end}")]
    ReversedRange {
        /// Lower bound
        start: f64,
        /// Upper bound
        end: f64,
    },

    /// Not enough sample points for the range.
    #[error("Too few sample points: got {got}, need at least {need}")]
    TooFewPoints {
        /// Points requested
        got: usize,
        /// Minimum required
        need: usize,
    },

    /// Logarithmic spacing needs a strictly positive lower bound.
    #[error("Logarithmic spacing requires a positive start, got {start}")]
    NonPositiveLogBound {
        /// Offending lower bound
        start: f64,
    },
}

/// Root-finding solver errors.
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Derivative near zero (Newton step undefined).
    #[error("Derivative near zero at x = {x}")]
    DerivativeNearZero {
        /// The x value where the derivative vanished
        x: f64,
    },

    /// Function values at the bracket ends have the same sign.
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}
