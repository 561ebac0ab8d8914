//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors from the closed-form engine and the implied
//!   volatility search

use pricer_core::types::{PricingError, SolverError};
use thiserror::Error;

use crate::instruments::InstrumentError;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidParameters`: Contract parameters outside their domain
/// - `InvalidPrice`: Target price unusable for implied volatility
/// - `ExpiredContract`: Volatility is not identifiable at expiry
/// - `NumericalInstability`: A result came out non-finite
/// - `InvalidConfig`: Implied volatility settings unusable
/// - `Solver`: The implied volatility search failed
/// - `UnknownMetric`: Output name not recognised
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
/// use pricer_models::instruments::InstrumentError;
///
/// let err: AnalyticalError = InstrumentError::InvalidVolatility { volatility: -0.2 }.into();
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Contract parameters failed validation.
    #[error(transparent)]
    InvalidParameters(#[from] InstrumentError),

    /// Price is non-finite, non-positive or outside the no-arbitrage band.
    #[error("Invalid option price {price}: {reason}")]
    InvalidPrice {
        /// The rejected price
        price: f64,
        /// Why it was rejected
        reason: String,
    },

    /// Implied volatility requested for a contract at expiry.
    #[error("Volatility is not identifiable at expiry (T = 0)")]
    ExpiredContract,

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },

    /// Implied volatility search settings are unusable.
    #[error("Invalid solver configuration: {message}")]
    InvalidConfig {
        /// What is wrong
        message: String,
    },

    /// Root search failed.
    #[error("Implied volatility search failed: {0}")]
    Solver(#[from] SolverError),

    /// Output metric name not recognised.
    #[error("Unknown output metric '{name}' (expected value, delta, gamma, vega, theta or rho)")]
    UnknownMetric {
        /// The unrecognised input
        name: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidParameters(inner) => inner.into(),
            AnalyticalError::InvalidPrice { .. }
            | AnalyticalError::ExpiredContract
            | AnalyticalError::InvalidConfig { .. }
            | AnalyticalError::UnknownMetric { .. } => PricingError::InvalidInput(err.to_string()),
            AnalyticalError::NumericalInstability { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            AnalyticalError::Solver(inner) => inner.into(),
        }
    }
}
