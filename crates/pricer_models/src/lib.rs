//! # Pricer Models (L2: Business Logic)
//!
//! European option contracts and the Black-Scholes model.
//!
//! This crate provides:
//! - Contract parameters with validation (`instruments`)
//! - Closed-form prices and Greeks, including the zero-volatility and
//!   zero-expiry limits (`analytical`)
//! - Implied volatility by Newton-Raphson with a Brent fallback
//!
//! ## Design Principles
//!
//! - **Value types**: `OptionParams` is a `Copy` record; pricing never mutates
//! - **Reject, never clamp**: invalid fields surface as typed errors
//! - **Foundation reuse**: root finding comes from `pricer_core::math::solvers`
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::evaluate;
//! use pricer_models::instruments::{OptionParams, OptionType};
//!
//! let params = OptionParams::new(110.0, 100.0, 0.05, 0.2, 0.0, OptionType::Call).unwrap();
//! let valuation = evaluate(&params).unwrap();
//! assert_eq!(valuation.price, 10.0);
//! assert_eq!(valuation.greeks.delta, 1.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
