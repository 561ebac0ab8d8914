//! The contract field varied by a sweep.

use std::fmt;
use std::str::FromStr;

use pricer_models::instruments::OptionParams;

use super::error::SweepError;
use super::sweep::SweepRange;

/// Independent variable of a sweep: one field of [`OptionParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SweepVariable {
    /// Underlying price `S`
    Spot,
    /// Strike `K`
    Strike,
    /// Risk-free rate `r`
    Rate,
    /// Volatility `σ`
    #[default]
    Volatility,
    /// Time to expiry `t`, in years
    Expiry,
}

impl SweepVariable {
    /// Every variable in selector order.
    pub const ALL: [SweepVariable; 5] = [
        SweepVariable::Spot,
        SweepVariable::Strike,
        SweepVariable::Rate,
        SweepVariable::Volatility,
        SweepVariable::Expiry,
    ];

    /// Axis label.
    pub fn label(&self) -> &'static str {
        match self {
            SweepVariable::Spot => "Stock Price",
            SweepVariable::Strike => "Strike",
            SweepVariable::Rate => "Interest rate",
            SweepVariable::Volatility => "Volatility",
            SweepVariable::Expiry => "Time to maturity (Years)",
        }
    }

    /// Short mathematical symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            SweepVariable::Spot => "S",
            SweepVariable::Strike => "K",
            SweepVariable::Rate => "r",
            SweepVariable::Volatility => "σ",
            SweepVariable::Expiry => "t",
        }
    }

    /// ASCII identifier accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            SweepVariable::Spot => "s",
            SweepVariable::Strike => "k",
            SweepVariable::Rate => "r",
            SweepVariable::Volatility => "sigma",
            SweepVariable::Expiry => "t",
        }
    }

    /// Widest range offered for this variable.
    ///
    /// The lower end of the spot, volatility and expiry ranges is a boundary
    /// value: spot 0 is rejected by the engine, while σ = 0 and t = 0 take
    /// the engine's degenerate limits.
    pub fn default_bounds(&self) -> SweepRange {
        match self {
            SweepVariable::Spot => SweepRange::new(0.0, 500.0),
            SweepVariable::Strike => SweepRange::new(5.0, 500.0),
            SweepVariable::Rate => SweepRange::new(-0.02, 0.1),
            SweepVariable::Volatility => SweepRange::new(0.0, 2.0),
            SweepVariable::Expiry => SweepRange::new(0.0, 2.0),
        }
    }

    /// Reads this variable's field from `params`.
    #[inline]
    pub fn get(&self, params: &OptionParams) -> f64 {
        match self {
            SweepVariable::Spot => params.spot,
            SweepVariable::Strike => params.strike,
            SweepVariable::Rate => params.rate,
            SweepVariable::Volatility => params.volatility,
            SweepVariable::Expiry => params.expiry,
        }
    }

    /// Returns `params` with this variable's field replaced by `value`.
    ///
    /// The result is not validated.
    #[inline]
    pub fn with(&self, params: OptionParams, value: f64) -> OptionParams {
        match self {
            SweepVariable::Spot => params.with_spot(value),
            SweepVariable::Strike => params.with_strike(value),
            SweepVariable::Rate => params.with_rate(value),
            SweepVariable::Volatility => params.with_volatility(value),
            SweepVariable::Expiry => params.with_expiry(value),
        }
    }

    /// A value the field always accepts, used to validate the fixed fields.
    pub(crate) fn neutral_value(&self) -> f64 {
        match self {
            SweepVariable::Spot | SweepVariable::Strike => 1.0,
            SweepVariable::Rate | SweepVariable::Volatility | SweepVariable::Expiry => 0.0,
        }
    }
}

impl fmt::Display for SweepVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for SweepVariable {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "spot" => Ok(SweepVariable::Spot),
            "k" | "strike" => Ok(SweepVariable::Strike),
            "r" | "rate" => Ok(SweepVariable::Rate),
            "sigma" | "σ" | "vol" | "volatility" => Ok(SweepVariable::Volatility),
            "t" | "expiry" | "time" => Ok(SweepVariable::Expiry),
            _ => Err(SweepError::UnknownVariable {
                name: s.to_string(),
            }),
        }
    }
}
