//! Call/put discriminator.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::InstrumentError;

/// Right conferred by a European option.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// let put: OptionType = "Put".parse().unwrap();
/// assert_eq!(put, OptionType::Put);
/// assert_eq!(put.intrinsic(90.0_f64, 100.0), 10.0);
/// assert_eq!(put.to_string(), "put");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike.
    #[default]
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Both variants, call first.
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    /// Returns `true` for a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// `+1` for a call, `-1` for a put.
    #[inline]
    pub fn sign<T: Float>(&self) -> T {
        match self {
            OptionType::Call => T::one(),
            OptionType::Put => -T::one(),
        }
    }

    /// Exercise value now: `max(S - K, 0)` or `max(K - S, 0)`.
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        (self.sign::<T>() * (spot - strike)).max(T::zero())
    }

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }

    /// Capitalised name, as used for tab titles.
    pub fn title(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(InstrumentError::UnknownOptionType {
                name: other.to_string(),
            }),
        }
    }
}
