//! Instrument error types.
//!
//! Raised while validating option contract parameters.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Contract parameter validation errors.
///
/// Rejection is the only policy: values are never clamped into range.
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Spot is non-positive or non-finite.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The rejected spot
        spot: f64,
    },

    /// Strike is non-positive or non-finite.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The rejected strike
        strike: f64,
    },

    /// Volatility is negative or non-finite.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The rejected volatility
        volatility: f64,
    },

    /// Time to expiry is negative or non-finite.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The rejected expiry
        expiry: f64,
    },

    /// Interest rate is non-finite.
    #[error("Invalid interest rate: r = {rate}")]
    InvalidRate {
        /// The rejected rate
        rate: f64,
    },

    /// Option type string not recognised.
    #[error("Unknown option type '{name}' (expected call or put)")]
    UnknownOptionType {
        /// The unrecognised input
        name: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
