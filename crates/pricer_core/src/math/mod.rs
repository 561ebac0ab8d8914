//! Numerical building blocks.
//!
//! - `grid`: evenly and logarithmically spaced sample points
//! - `solvers`: Newton-Raphson and Brent root finders

pub mod grid;
pub mod solvers;
