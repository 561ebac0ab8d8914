//! Implied volatility: the σ at which the Black-Scholes price matches a quote.
//!
//! Newton-Raphson on vega from a fixed seed, falling back to Brent's method over
//! the admissible volatility range when Newton stalls or leaves it.

use pricer_core::math::solvers::{BrentSolver, NewtonRaphsonSolver, SolverConfig};

use super::black_scholes::BlackScholes;
use super::error::AnalyticalError;
use crate::instruments::{OptionParams, OptionType};

/// Settings for [`implied_volatility`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVolConfig {
    /// Accepted absolute pricing error.
    pub tolerance: f64,
    /// Newton iteration cap.
    pub max_iterations: usize,
    /// Newton seed.
    pub initial_guess: f64,
    /// Lowest volatility searched.
    pub lower_bound: f64,
    /// Highest volatility searched.
    pub upper_bound: f64,
}

impl ImpliedVolConfig {
    /// Checks that the settings describe a usable search.
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(AnalyticalError::InvalidConfig {
                message: format!("tolerance must be positive, got {}", self.tolerance),
            });
        }
        if self.max_iterations == 0 {
            return Err(AnalyticalError::InvalidConfig {
                message: "max_iterations must be > 0".to_string(),
            });
        }
        let bounds_ok = self.lower_bound.is_finite()
            && self.upper_bound.is_finite()
            && self.lower_bound > 0.0
            && self.lower_bound < self.upper_bound;
        if !bounds_ok {
            return Err(AnalyticalError::InvalidConfig {
                message: format!(
                    "volatility bounds must satisfy 0 < lower < upper, got [{}, {}]",
                    self.lower_bound, self.upper_bound
                ),
            });
        }
        if !(self.lower_bound..=self.upper_bound).contains(&self.initial_guess) {
            return Err(AnalyticalError::InvalidConfig {
                message: format!(
                    "initial guess {} outside [{}, {}]",
                    self.initial_guess, self.lower_bound, self.upper_bound
                ),
            });
        }
        Ok(())
    }
}

impl Default for ImpliedVolConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 100,
            initial_guess: 0.2,
            lower_bound: 1e-6,
            upper_bound: 5.0,
        }
    }
}

/// No-arbitrage price band `[lower, upper)` for a contract.
///
/// `lower` is the deterministic (zero-volatility) value; `upper` is the
/// infinite-volatility limit: the spot for a call, the discounted strike for
/// a put.
pub fn price_bounds(params: &OptionParams) -> (f64, f64) {
    let discounted_strike = params.discounted_strike();
    match params.option_type {
        OptionType::Call => ((params.spot - discounted_strike).max(0.0), params.spot),
        OptionType::Put => ((discounted_strike - params.spot).max(0.0), discounted_strike),
    }
}

/// Solves for the volatility that reproduces `market_price`.
///
/// The `volatility` field of `params` is ignored.
///
/// # Errors
/// - `AnalyticalError::InvalidConfig` if `config` fails validation
/// - `AnalyticalError::InvalidParameters` if the contract is invalid
/// - `AnalyticalError::ExpiredContract` if `expiry == 0`
/// - `AnalyticalError::InvalidPrice` for a non-finite or negative price, or one
///   outside [`price_bounds`]
/// - `AnalyticalError::Solver` if neither Newton nor Brent converges
///
/// # Examples
/// ```
/// use pricer_models::analytical::{implied_volatility, ImpliedVolConfig};
/// use pricer_models::instruments::{OptionParams, OptionType};
///
/// let params = OptionParams::new(100.0, 100.0, 0.05, 0.0, 1.0, OptionType::Call).unwrap();
/// let sigma = implied_volatility(10.450_583_572_185_565, &params, &ImpliedVolConfig::default()).unwrap();
/// assert!((sigma - 0.2).abs() < 1e-5);
/// ```
pub fn implied_volatility(
    market_price: f64,
    params: &OptionParams,
    config: &ImpliedVolConfig,
) -> Result<f64, AnalyticalError> {
    config.validate()?;
    let params = params.with_volatility(0.0);
    params.validate()?;

    if params.expiry == 0.0 {
        return Err(AnalyticalError::ExpiredContract);
    }

    if !market_price.is_finite() || market_price < 0.0 {
        return Err(AnalyticalError::InvalidPrice {
            price: market_price,
            reason: "price must be finite and non-negative".to_string(),
        });
    }

    let (lower, upper) = price_bounds(&params);
    if market_price < lower - config.tolerance {
        return Err(AnalyticalError::InvalidPrice {
            price: market_price,
            reason: format!("below the no-arbitrage lower bound {}", lower),
        });
    }
    if market_price >= upper {
        return Err(AnalyticalError::InvalidPrice {
            price: market_price,
            reason: format!("at or above the no-arbitrage upper bound {}", upper),
        });
    }
    if market_price - lower <= config.tolerance {
        return Ok(0.0);
    }

    let model = |sigma: f64| BlackScholes::new(params.spot, params.rate, sigma.max(0.0));
    let objective = |sigma: f64| match model(sigma) {
        Ok(bs) => bs.price(params.strike, params.expiry, params.option_type) - market_price,
        Err(_) => f64::NAN,
    };
    let slope = |sigma: f64| match model(sigma) {
        Ok(bs) => bs.vega(params.strike, params.expiry),
        Err(_) => f64::NAN,
    };

    let newton = NewtonRaphsonSolver::new(SolverConfig::new(config.tolerance, config.max_iterations));
    if let Ok(sigma) = newton.find_root_within(
        &objective,
        &slope,
        config.initial_guess,
        config.lower_bound,
        config.upper_bound,
    ) {
        return Ok(sigma);
    }

    let brent = BrentSolver::new(SolverConfig::bracketing().with_tolerance(config.tolerance));
    let sigma = brent.find_root(&objective, config.lower_bound, config.upper_bound)?;
    Ok(sigma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::evaluate;
    use crate::instruments::InstrumentError;
    use approx::assert_relative_eq;

    fn contract(spot: f64, strike: f64, expiry: f64, option_type: OptionType) -> OptionParams {
        OptionParams::new(spot, strike, 0.05, 0.0, expiry, option_type).unwrap()
    }

    fn round_trip(params: OptionParams, sigma: f64) -> f64 {
        let price = evaluate(&params.with_volatility(sigma)).unwrap().price;
        implied_volatility(price, &params, &ImpliedVolConfig::default()).unwrap()
    }

    #[test]
    fn test_recovers_atm_volatility() {
        for kind in OptionType::ALL {
            let sigma = round_trip(contract(100.0, 100.0, 1.0, kind), 0.2);
            assert_relative_eq!(sigma, 0.2, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_recovers_across_strikes_and_vols() {
        for strike in [80.0, 90.0, 100.0, 115.0, 130.0] {
            for sigma in [0.15, 0.4, 0.9] {
                let recovered = round_trip(contract(100.0, strike, 0.5, OptionType::Call), sigma);
                assert_relative_eq!(recovered, sigma, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_high_volatility_recovered() {
        let recovered = round_trip(contract(100.0, 60.0, 2.0, OptionType::Put), 3.0);
        assert_relative_eq!(recovered, 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_bracketing_fallback_when_newton_is_capped() {
        let params = contract(100.0, 130.0, 0.5, OptionType::Call);
        let price = evaluate(&params.with_volatility(0.45)).unwrap().price;
        let config = ImpliedVolConfig {
            max_iterations: 1,
            ..ImpliedVolConfig::default()
        };

        let sigma = implied_volatility(price, &params, &config).unwrap();
        assert_relative_eq!(sigma, 0.45, epsilon = 1e-6);
    }

    #[test]
    fn test_price_at_lower_bound_gives_zero() {
        let params = contract(120.0, 100.0, 1.0, OptionType::Call);
        let (lower, _) = price_bounds(&params);
        let sigma = implied_volatility(lower, &params, &ImpliedVolConfig::default()).unwrap();
        assert_eq!(sigma, 0.0);
    }

    #[test]
    fn test_rejects_out_of_band_prices() {
        let params = contract(100.0, 100.0, 1.0, OptionType::Call);
        let config = ImpliedVolConfig::default();

        assert!(matches!(
            implied_volatility(100.0, &params, &config),
            Err(AnalyticalError::InvalidPrice { .. })
        ));
        assert!(matches!(
            implied_volatility(1.0, &params, &config),
            Err(AnalyticalError::InvalidPrice { .. })
        ));
        assert!(matches!(
            implied_volatility(f64::NAN, &params, &config),
            Err(AnalyticalError::InvalidPrice { .. })
        ));
        assert!(matches!(
            implied_volatility(-1.0, &params, &config),
            Err(AnalyticalError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_rejects_expired_contract() {
        let params = contract(100.0, 100.0, 0.0, OptionType::Call);
        assert_eq!(
            implied_volatility(1.0, &params, &ImpliedVolConfig::default()),
            Err(AnalyticalError::ExpiredContract)
        );
    }

    #[test]
    fn test_rejects_invalid_contract() {
        let params = OptionParams {
            spot: -1.0,
            ..OptionParams::default()
        };
        assert!(matches!(
            implied_volatility(5.0, &params, &ImpliedVolConfig::default()),
            Err(AnalyticalError::InvalidParameters(
                InstrumentError::InvalidSpot { .. }
            ))
        ));
    }

    #[test]
    fn test_rejects_bad_config() {
        let params = contract(100.0, 100.0, 1.0, OptionType::Call);
        let configs = [
            ImpliedVolConfig {
                tolerance: 0.0,
                ..ImpliedVolConfig::default()
            },
            ImpliedVolConfig {
                max_iterations: 0,
                ..ImpliedVolConfig::default()
            },
            ImpliedVolConfig {
                lower_bound: 2.0,
                upper_bound: 1.0,
                ..ImpliedVolConfig::default()
            },
            ImpliedVolConfig {
                initial_guess: 9.0,
                ..ImpliedVolConfig::default()
            },
        ];
        for config in configs {
            assert!(matches!(
                implied_volatility(10.0, &params, &config),
                Err(AnalyticalError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn test_price_bounds() {
        let discounted = 100.0 * (-0.05_f64).exp();
        let call = price_bounds(&contract(100.0, 100.0, 1.0, OptionType::Call));
        assert_relative_eq!(call.0, 100.0 - discounted, epsilon = 1e-12);
        assert_eq!(call.1, 100.0);

        let put = price_bounds(&contract(100.0, 100.0, 1.0, OptionType::Put));
        assert_eq!(put.0, 0.0);
        assert_relative_eq!(put.1, discounted, epsilon = 1e-12);
    }
}
