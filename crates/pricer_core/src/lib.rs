//! # pricer_core: Mathematical Foundation for the Greeks Visualiser
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Sampling grids for parameter sweeps (`math::grid`)
//! - Root-finding solvers used by the implied volatility search (`math::solvers`)
//! - Error types: `PricingError`, `SolverError`, `GridError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::grid::{sample_grid, GridSpacing};
//! use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // Five evenly spaced points on [0, 1]
//! let xs = sample_grid(0.0_f64, 1.0, 5, GridSpacing::Linear).unwrap();
//! assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
//!
//! // Solve x² - 2 = 0
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//! let root = solver.find_root(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0).unwrap();
//! # assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for grid spacing and error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
