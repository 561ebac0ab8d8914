//! Pricing results: fair value plus first- and second-order sensitivities.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::AnalyticalError;

/// Calendar days per year used by [`Greeks::theta_per_day`].
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Black-Scholes sensitivities.
///
/// Units follow the raw partial derivatives:
/// - `vega` per unit of volatility (1.00 = 100 vol points)
/// - `theta` per year of calendar time
/// - `rho` per unit of rate
///
/// Use the `*_per_percent` / `*_per_day` helpers for desk conventions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T: Float> {
    /// ∂V/∂S
    pub delta: T,
    /// ∂²V/∂S²
    pub gamma: T,
    /// ∂V/∂σ
    pub vega: T,
    /// ∂V/∂t (calendar time, i.e. −∂V/∂T)
    pub theta: T,
    /// ∂V/∂r
    pub rho: T,
}

impl<T: Float> Greeks<T> {
    /// All sensitivities zero.
    pub fn zero() -> Self {
        Self {
            delta: T::zero(),
            gamma: T::zero(),
            vega: T::zero(),
            theta: T::zero(),
            rho: T::zero(),
        }
    }

    /// Vega for a one-point (0.01) move in volatility.
    #[inline]
    pub fn vega_per_percent(&self) -> T {
        self.vega / T::from(100.0).unwrap()
    }

    /// Theta per calendar day.
    #[inline]
    pub fn theta_per_day(&self) -> T {
        self.theta / T::from(DAYS_PER_YEAR).unwrap()
    }

    /// Rho for a one-point (0.01) move in the rate.
    #[inline]
    pub fn rho_per_percent(&self) -> T {
        self.rho / T::from(100.0).unwrap()
    }

    /// Returns `true` if every field is finite.
    pub fn is_finite(&self) -> bool {
        self.delta.is_finite()
            && self.gamma.is_finite()
            && self.vega.is_finite()
            && self.theta.is_finite()
            && self.rho.is_finite()
    }
}

/// Fair value together with its Greeks.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{evaluate, OutputMetric};
/// use pricer_models::instruments::{OptionParams, OptionType};
///
/// let params = OptionParams::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap();
/// let valuation = evaluate(&params).unwrap();
///
/// assert!((valuation.price - 10.4506).abs() < 1e-3);
/// assert_eq!(valuation.metric(OutputMetric::Delta), valuation.greeks.delta);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Valuation<T: Float> {
    /// Fair value
    pub price: T,
    /// Sensitivities
    pub greeks: Greeks<T>,
}

impl<T: Float> Valuation<T> {
    /// Selects one output by name.
    #[inline]
    pub fn metric(&self, metric: OutputMetric) -> T {
        match metric {
            OutputMetric::Value => self.price,
            OutputMetric::Delta => self.greeks.delta,
            OutputMetric::Gamma => self.greeks.gamma,
            OutputMetric::Vega => self.greeks.vega,
            OutputMetric::Theta => self.greeks.theta,
            OutputMetric::Rho => self.greeks.rho,
        }
    }

    /// See [`Greeks::vega_per_percent`].
    pub fn vega_per_percent(&self) -> T {
        self.greeks.vega_per_percent()
    }

    /// See [`Greeks::theta_per_day`].
    pub fn theta_per_day(&self) -> T {
        self.greeks.theta_per_day()
    }

    /// See [`Greeks::rho_per_percent`].
    pub fn rho_per_percent(&self) -> T {
        self.greeks.rho_per_percent()
    }

    /// Returns `true` if price and every Greek are finite.
    pub fn is_finite(&self) -> bool {
        self.price.is_finite() && self.greeks.is_finite()
    }
}

/// Quantity read out of a [`Valuation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutputMetric {
    /// Option fair value
    #[default]
    Value,
    /// ∂V/∂S
    Delta,
    /// ∂²V/∂S²
    Gamma,
    /// ∂V/∂σ
    Vega,
    /// ∂V/∂t
    Theta,
    /// ∂V/∂r
    Rho,
}

impl OutputMetric {
    /// Every metric in display order.
    pub const ALL: [OutputMetric; 6] = [
        OutputMetric::Value,
        OutputMetric::Delta,
        OutputMetric::Gamma,
        OutputMetric::Vega,
        OutputMetric::Theta,
        OutputMetric::Rho,
    ];

    /// Capitalised label for axes and selectors.
    pub fn label(&self) -> &'static str {
        match self {
            OutputMetric::Value => "Value",
            OutputMetric::Delta => "Delta",
            OutputMetric::Gamma => "Gamma",
            OutputMetric::Vega => "Vega",
            OutputMetric::Theta => "Theta",
            OutputMetric::Rho => "Rho",
        }
    }

    /// Lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMetric::Value => "value",
            OutputMetric::Delta => "delta",
            OutputMetric::Gamma => "gamma",
            OutputMetric::Vega => "vega",
            OutputMetric::Theta => "theta",
            OutputMetric::Rho => "rho",
        }
    }
}

impl fmt::Display for OutputMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMetric {
    type Err = AnalyticalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = match wanted.as_str() {
            "price" => "value",
            other => other,
        };
        OutputMetric::ALL
            .into_iter()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| AnalyticalError::UnknownMetric {
                name: s.trim().to_string(),
            })
    }
}
