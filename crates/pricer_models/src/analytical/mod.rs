//! Analytical pricing formulas for European options.
//!
//! This module provides:
//! - Black-Scholes closed-form prices and Greeks ([`BlackScholes`], [`evaluate`])
//! - Result types ([`Valuation`], [`Greeks`], [`OutputMetric`])
//! - Implied volatility inversion ([`implied_volatility`])
//! - Standard normal CDF/PDF ([`distributions`])
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: the model works for `f64` and `f32`
//! - **Total on valid input**: zero volatility and zero expiry have explicit
//!   limits, so valid parameters never produce NaN or infinity
//! - **Stateless**: every function is pure and safe to call from many threads

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod implied_vol;
pub mod valuation;

// Re-export main types at module level
pub use black_scholes::{evaluate, BlackScholes};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use implied_vol::{implied_volatility, price_bounds, ImpliedVolConfig};
pub use valuation::{Greeks, OutputMetric, Valuation, DAYS_PER_YEAR};
