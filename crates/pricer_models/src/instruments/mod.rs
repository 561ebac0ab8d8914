//! Option contract definitions.
//!
//! - [`OptionType`]: call or put
//! - [`OptionParams`]: the validated parameter record priced by the
//!   analytical engine
//! - [`InstrumentError`]: parameter validation failures
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{OptionParams, OptionType};
//!
//! let params = OptionParams::new(110.0, 100.0, 0.05, 0.2, 0.0, OptionType::Call).unwrap();
//! assert_eq!(params.intrinsic(), 10.0);
//! ```

mod error;
mod option_type;
mod params;

pub use error::InstrumentError;
pub use option_type::OptionType;
pub use params::OptionParams;
