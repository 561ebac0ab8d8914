//! Root-finding solvers.
//!
//! Used by the implied volatility search, which tries Newton first and
//! falls back to Brent's method when Newton stalls or leaves the admissible
//! volatility range.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: Quadratic convergence given an explicit derivative
//! - [`BrentSolver`]: Guaranteed convergence on a sign-changing bracket, no derivative needed
//!
//! Both read their stopping rule from [`SolverConfig`].
//!
//! ## Example
//!
//! ```
//! use pricer_core::math::solvers::{BrentSolver, SolverConfig};
//!
//! let solver = BrentSolver::new(SolverConfig::bracketing());
//! let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

mod brent;
mod config;
mod newton_raphson;

pub use brent::BrentSolver;
pub use config::SolverConfig;
pub use newton_raphson::NewtonRaphsonSolver;
