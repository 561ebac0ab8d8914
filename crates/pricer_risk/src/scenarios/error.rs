//! Sweep error types.

use pricer_core::types::{GridError, PricingError};
use pricer_models::instruments::InstrumentError;
use thiserror::Error;

/// Errors that abort a whole sweep.
///
/// Individual sample points that cannot be priced (invalid contract or a
/// non-finite valuation) never raise an error; they are skipped and counted
/// in `SweepSeries::rejected`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    /// One of the fields held fixed during the sweep is invalid.
    #[error("Invalid base contract: {0}")]
    InvalidBase(InstrumentError),

    /// The sample grid could not be built.
    #[error("Invalid sweep range: {0}")]
    Grid(#[from] GridError),

    /// Sweep variable name not recognised.
    #[error("Unknown sweep variable '{name}' (expected one of s, k, r, sigma, t)")]
    UnknownVariable {
        /// The unrecognised input
        name: String,
    },
}

impl From<SweepError> for PricingError {
    fn from(err: SweepError) -> Self {
        match err {
            SweepError::InvalidBase(inner) => inner.into(),
            SweepError::Grid(inner) => inner.into(),
            other => PricingError::InvalidInput(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SweepError::InvalidBase(InstrumentError::InvalidStrike { strike: -1.0 });
        assert_eq!(err.to_string(), "Invalid base contract: Invalid strike: K = -1");

        let err = SweepError::from(GridError::ReversedRange { start: 2.0, end: 1.0 });
        assert_eq!(err.to_string(), "Invalid sweep range: Range start 2 exceeds end 1");
    }

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = SweepError::UnknownVariable {
            name: "x".to_string(),
        }
        .into();
        assert!(matches!(err, PricingError::InvalidInput(_)));

        let err: PricingError = SweepError::Grid(GridError::TooFewPoints { got: 0, need: 2 }).into();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }
}
