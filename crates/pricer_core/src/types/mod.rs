//! Core error types shared by every layer.
//!
//! - `error`: Structured errors for pricing, sampling grids and solvers
//!
//! # Re-exports
//!
//! [`PricingError`], [`GridError`] and [`SolverError`] are re-exported here so
//! downstream crates can write `pricer_core::types::SolverError`.

pub mod error;

pub use error::{GridError, PricingError, SolverError};
