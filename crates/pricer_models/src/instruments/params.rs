//! Option contract parameters.
//!
//! A single value record holding everything the closed-form model needs,
//! with validation of each field's domain.

use super::error::InstrumentError;
use super::option_type::OptionType;

/// Parameters of a European option under Black-Scholes.
///
/// A plain `Copy` record. [`OptionParams::new`] validates on construction;
/// values assembled field-by-field (for example by a sweep varying one
/// field) are checked with [`OptionParams::validate`] before pricing.
///
/// | Field | Domain |
/// |---|---|
/// | `spot` | `> 0` |
/// | `strike` | `> 0` |
/// | `rate` | finite, may be negative |
/// | `volatility` | `>= 0` |
/// | `expiry` | `>= 0` (years) |
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionParams, OptionType};
///
/// let params = OptionParams::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap();
/// assert_eq!(params.with_spot(120.0).spot, 120.0);
///
/// assert!(OptionParams::new(0.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParams {
    /// Underlying price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Annualised volatility (σ)
    pub volatility: f64,
    /// Time to expiry in years (T)
    pub expiry: f64,
    /// Call or put
    pub option_type: OptionType,
}

impl OptionParams {
    /// Creates validated parameters.
    ///
    /// # Errors
    /// The first field found outside its domain, checked in the order
    /// spot, strike, rate, volatility, expiry.
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
        let params = Self {
            spot,
            strike,
            rate,
            volatility,
            expiry,
            option_type,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks every field against its domain.
    pub fn validate(&self) -> Result<(), InstrumentError> {
        if !(self.spot.is_finite() && self.spot > 0.0) {
            return Err(InstrumentError::InvalidSpot { spot: self.spot });
        }
        if !(self.strike.is_finite() && self.strike > 0.0) {
            return Err(InstrumentError::InvalidStrike {
                strike: self.strike,
            });
        }
        if !self.rate.is_finite() {
            return Err(InstrumentError::InvalidRate { rate: self.rate });
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(InstrumentError::InvalidVolatility {
                volatility: self.volatility,
            });
        }
        if !(self.expiry.is_finite() && self.expiry >= 0.0) {
            return Err(InstrumentError::InvalidExpiry {
                expiry: self.expiry,
            });
        }
        Ok(())
    }

    /// Returns `true` when [`validate`](Self::validate) passes.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Discount factor `e^(-rT)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Present value of the strike, `K·e^(-rT)`.
    #[inline]
    pub fn discounted_strike(&self) -> f64 {
        self.strike * self.discount_factor()
    }

    /// Exercise value at the current spot.
    #[inline]
    pub fn intrinsic(&self) -> f64 {
        self.option_type.intrinsic(self.spot, self.strike)
    }

    /// Copy with a different spot.
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Copy with a different strike.
    pub fn with_strike(self, strike: f64) -> Self {
        Self { strike, ..self }
    }

    /// Copy with a different rate.
    pub fn with_rate(self, rate: f64) -> Self {
        Self { rate, ..self }
    }

    /// Copy with a different volatility.
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Copy with a different expiry.
    pub fn with_expiry(self, expiry: f64) -> Self {
        Self { expiry, ..self }
    }

    /// Copy with a different option type.
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }
}

impl Default for OptionParams {
    /// The at-the-money one-year contract the dashboard opens with.
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            rate: 0.05,
            volatility: 0.1,
            expiry: 1.0,
            option_type: OptionType::Call,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base() -> OptionParams {
        OptionParams::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap()
    }

    #[test]
    fn test_new_valid_params() {
        let params = base();
        assert_eq!(params.spot, 100.0);
        assert_eq!(params.strike, 100.0);
        assert_eq!(params.option_type, OptionType::Call);
        assert!(params.is_valid());
    }

    #[test]
    fn test_zero_boundaries_accepted() {
        assert!(base().with_volatility(0.0).is_valid());
        assert!(base().with_expiry(0.0).is_valid());
        assert!(base().with_rate(-0.02).is_valid());
    }

    #[test]
    fn test_invalid_spot() {
        assert_eq!(
            base().with_spot(0.0).validate(),
            Err(InstrumentError::InvalidSpot { spot: 0.0 })
        );
        assert!(base().with_spot(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_invalid_strike() {
        match base().with_strike(-1.0).validate() {
            Err(InstrumentError::InvalidStrike { strike }) => assert_eq!(strike, -1.0),
            other => panic!("Expected InvalidStrike, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_volatility_and_expiry() {
        assert!(matches!(
            base().with_volatility(-0.1).validate(),
            Err(InstrumentError::InvalidVolatility { .. })
        ));
        assert!(matches!(
            base().with_expiry(-0.5).validate(),
            Err(InstrumentError::InvalidExpiry { .. })
        ));
    }

    #[test]
    fn test_nan_rate_rejected() {
        assert!(matches!(
            base().with_rate(f64::NAN).validate(),
            Err(InstrumentError::InvalidRate { .. })
        ));
    }

    #[test]
    fn test_check_order_reports_spot_first() {
        let params = OptionParams {
            spot: -1.0,
            strike: -1.0,
            ..base()
        };
        assert!(matches!(
            params.validate(),
            Err(InstrumentError::InvalidSpot { .. })
        ));
    }

    #[test]
    fn test_discounting() {
        let params = base();
        assert_relative_eq!(params.discount_factor(), (-0.05_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(
            params.discounted_strike(),
            100.0 * (-0.05_f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_builders_leave_other_fields() {
        let params = base().with_option_type(OptionType::Put).with_expiry(2.0);
        assert_eq!(params.option_type, OptionType::Put);
        assert_eq!(params.expiry, 2.0);
        assert_eq!(params.spot, 100.0);
        assert_eq!(params.volatility, 0.2);
    }

    #[test]
    fn test_default_matches_dashboard_start() {
        let params = OptionParams::default();
        assert_eq!(
            (params.spot, params.strike, params.rate, params.volatility, params.expiry),
            (100.0, 100.0, 0.05, 0.1, 1.0)
        );
    }
}
