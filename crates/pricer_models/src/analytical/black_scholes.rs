//! Black-Scholes pricing model for European options.
//!
//! Closed-form prices and Greeks for European calls and puts on a
//! non-dividend-paying underlying.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate Inputs
//!
//! When the total volatility σ√T vanishes (zero volatility or zero time to
//! expiry) the formula is replaced by its deterministic limit:
//! - price `max(±(S - K·e^(-rT)), 0)`, which is the exact intrinsic value at
//!   expiry
//! - delta the indicator of forward moneyness, 0.5 on the boundary
//! - gamma and vega zero
//! - theta `∓r·K·e^(-rT)·1{itm}` and rho `±K·T·e^(-rT)·1{itm}` before
//!   expiry, both zero at expiry
//!
//! The limit keeps put-call parity and the no-arbitrage bounds exact.

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use super::valuation::{Greeks, Valuation};
use crate::instruments::{InstrumentError, OptionParams, OptionType};

/// Total volatility σ√T below which the deterministic limit applies.
const MIN_TOTAL_VOLATILITY: f64 = 1e-12;

/// Black-Scholes model for European option pricing.
///
/// Holds the market state (spot, rate, volatility); strike, expiry and
/// option type are supplied per call so one model prices a whole strip.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive and finite)
    /// * `rate` - Risk-free interest rate (finite, may be negative)
    /// * `volatility` - Volatility (must be non-negative and finite)
    ///
    /// # Errors
    /// `AnalyticalError::InvalidParameters` wrapping the offending field.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, -0.2).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if !(spot.is_finite() && spot > zero) {
            return Err(InstrumentError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            }
            .into());
        }

        if !rate.is_finite() {
            return Err(InstrumentError::InvalidRate {
                rate: rate.to_f64().unwrap_or(f64::NAN),
            }
            .into());
        }

        if !(volatility.is_finite() && volatility >= zero) {
            return Err(InstrumentError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            }
            .into());
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    #[inline]
    fn discount(&self, expiry: T) -> T {
        (-self.rate * expiry).exp()
    }

    #[inline]
    fn is_deterministic(&self, expiry: T) -> bool {
        self.volatility * expiry.sqrt() < T::from(MIN_TOTAL_VOLATILITY).unwrap()
    }

    /// Weight of the call's exercise indicator in the deterministic limit:
    /// 1 above the discounted strike, 0 below, 0.5 on it.
    #[inline]
    fn exercise_weight(&self, strike: T, expiry: T) -> T {
        let forward_strike = strike * self.discount(expiry);
        if self.spot > forward_strike {
            T::one()
        } else if self.spot < forward_strike {
            T::zero()
        } else {
            T::from(0.5).unwrap()
        }
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// In the deterministic limit returns `+∞`, `-∞` or `0` according to
    /// forward moneyness.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        if self.is_deterministic(expiry) {
            let w = self.exercise_weight(strike, expiry);
            return if w == T::one() {
                T::infinity()
            } else if w == T::zero() {
                T::neg_infinity()
            } else {
                T::zero()
            };
        }

        let half = T::from(0.5).unwrap();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / (self.volatility * expiry.sqrt())
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        if self.is_deterministic(expiry) {
            return self.d1(strike, expiry);
        }
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes the option price.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::OptionType;
    ///
    /// // At expiry the price is the intrinsic value
    /// let bs = BlackScholes::new(110.0_f64, 0.05, 0.2).unwrap();
    /// assert_eq!(bs.price(100.0, 0.0, OptionType::Call), 10.0);
    /// assert_eq!(bs.price(100.0, 0.0, OptionType::Put), 0.0);
    /// ```
    pub fn price(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        let discounted_strike = strike * self.discount(expiry);
        let sign = option_type.sign::<T>();

        if self.is_deterministic(expiry) {
            return (sign * (self.spot - discounted_strike)).max(T::zero());
        }

        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();

        // V = ±[S·N(±d₁) - K·e^(-rT)·N(±d₂)]
        let value = sign
            * (self.spot * norm_cdf(sign * d1) - discounted_strike * norm_cdf(sign * d2));
        value.max(T::zero())
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        self.price(strike, expiry, OptionType::Call)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        self.price(strike, expiry, OptionType::Put)
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    #[inline]
    pub fn delta(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        let call_delta = if self.is_deterministic(expiry) {
            self.exercise_weight(strike, expiry)
        } else {
            norm_cdf(self.d1(strike, expiry))
        };

        match option_type {
            OptionType::Call => call_delta,
            OptionType::Put => call_delta - T::one(),
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self, strike: T, expiry: T) -> T {
        if self.is_deterministic(expiry) {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        norm_pdf(d1) / (self.spot * self.volatility * expiry.sqrt())
    }

    /// Computes Vega (∂V/∂σ) per unit of volatility.
    ///
    /// Vega = S·√T·φ(d₁), identical for calls and puts.
    #[inline]
    pub fn vega(&self, strike: T, expiry: T) -> T {
        if self.is_deterministic(expiry) {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        self.spot * expiry.sqrt() * norm_pdf(d1)
    }

    /// Computes Theta (∂V/∂t) per year of calendar time.
    ///
    /// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    #[inline]
    pub fn theta(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        if expiry == T::zero() {
            return T::zero();
        }

        let carry = self.rate * strike * self.discount(expiry);

        if self.is_deterministic(expiry) {
            let w = self.exercise_weight(strike, expiry);
            return match option_type {
                OptionType::Call => -carry * w,
                OptionType::Put => carry * (T::one() - w),
            };
        }

        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let two = T::from(2.0).unwrap();

        // Common term: -(S·σ·φ(d₁))/(2√T)
        let decay = -(self.spot * self.volatility * norm_pdf(d1)) / (two * expiry.sqrt());

        match option_type {
            OptionType::Call => decay - carry * norm_cdf(d2),
            OptionType::Put => decay + carry * norm_cdf(-d2),
        }
    }

    /// Computes Rho (∂V/∂r) per unit of rate.
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    #[inline]
    pub fn rho(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        if expiry == T::zero() {
            return T::zero();
        }

        let exposure = strike * expiry * self.discount(expiry);

        let call_weight = if self.is_deterministic(expiry) {
            self.exercise_weight(strike, expiry)
        } else {
            norm_cdf(self.d2(strike, expiry))
        };

        match option_type {
            OptionType::Call => exposure * call_weight,
            OptionType::Put => -exposure * (T::one() - call_weight),
        }
    }

    /// Computes all five Greeks.
    pub fn greeks(&self, strike: T, expiry: T, option_type: OptionType) -> Greeks<T> {
        Greeks {
            delta: self.delta(strike, expiry, option_type),
            gamma: self.gamma(strike, expiry),
            vega: self.vega(strike, expiry),
            theta: self.theta(strike, expiry, option_type),
            rho: self.rho(strike, expiry, option_type),
        }
    }

    /// Computes the price together with all five Greeks.
    pub fn valuation(&self, strike: T, expiry: T, option_type: OptionType) -> Valuation<T> {
        Valuation {
            price: self.price(strike, expiry, option_type),
            greeks: self.greeks(strike, expiry, option_type),
        }
    }
}

impl BlackScholes<f64> {
    /// Builds the model from the market fields of a contract.
    pub fn from_params(params: &OptionParams) -> Result<Self, AnalyticalError> {
        Self::new(params.spot, params.rate, params.volatility)
    }
}

/// Prices a contract and computes its Greeks.
///
/// # Errors
/// - `AnalyticalError::InvalidParameters` if any field fails validation
/// - `AnalyticalError::NumericalInstability` if a result overflows
///   (only reachable with extreme rates or expiries)
///
/// # Examples
/// ```
/// use pricer_models::analytical::evaluate;
/// use pricer_models::instruments::{OptionParams, OptionType};
///
/// let params = OptionParams::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Put).unwrap();
/// let valuation = evaluate(&params).unwrap();
/// assert!((valuation.price - 5.5735).abs() < 1e-3);
/// assert!((valuation.greeks.delta + 0.3632).abs() < 1e-4);
/// ```
pub fn evaluate(params: &OptionParams) -> Result<Valuation<f64>, AnalyticalError> {
    params.validate()?;

    let model = BlackScholes::from_params(params)?;
    let valuation = model.valuation(params.strike, params.expiry, params.option_type);

    if !valuation.is_finite() {
        return Err(AnalyticalError::NumericalInstability {
            message: format!("non-finite valuation for {:?}", params),
        });
    }

    Ok(valuation)
}
