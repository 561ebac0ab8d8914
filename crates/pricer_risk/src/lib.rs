//! # Pricer Risk (L3: Application)
//!
//! Sensitivity sweeps of the Black-Scholes engine.
//!
//! This crate provides:
//! - One-dimensional sweeps: vary one contract field, hold the rest fixed
//! - Default ranges and axis labels for every sweepable field
//! - Rejection accounting for sample points outside the model's domain
//! - Rayon-based parallel sweeps (feature `parallel`)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L3)             │
//! ├─────────────────────────────────────────┤
//! │  scenarios/  - SweepVariable, SweepSpec │
//! │               SweepSeries, SweepError   │
//! │  parallel/   - Rayon sweeps             │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Black-Scholes prices and Greeks        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::OutputMetric;
//! use pricer_models::instruments::{OptionParams, OptionType};
//! use pricer_risk::scenarios::{sweep, SweepRange, SweepVariable};
//!
//! let base = OptionParams::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap();
//!
//! // Call delta as the spot moves from 50 to 150
//! let series = sweep(&base, SweepVariable::Spot, SweepRange::new(50.0, 150.0), 101, OutputMetric::Delta).unwrap();
//!
//! assert_eq!(series.len(), 101);
//! assert!(series.points.iter().all(|p| (0.0..=1.0).contains(&p.y)));
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): `parallel::par_sweep` on the Rayon thread pool
//! - `serde` (default): serialisation for sweep specs and series

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod scenarios;

// Re-export commonly used types
#[cfg(feature = "parallel")]
pub use parallel::{par_sweep, par_sweep_many};
pub use scenarios::{
    initial_window, sweep, SweepError, SweepPoint, SweepRange, SweepSeries, SweepSpec,
    SweepVariable,
};
