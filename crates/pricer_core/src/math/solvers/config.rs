//! Solver configuration.

use num_traits::Float;

/// Convergence settings shared by the root finders.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default()
///     .with_tolerance(1e-12)
///     .with_max_iterations(250);
/// assert_eq!(config.max_iterations, 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Stop once `|f(x)|` (or the bracket width) falls below this value.
    pub tolerance: T,

    /// Iteration cap; exceeding it yields `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// `tolerance = 1e-10`, `max_iterations = 100`.
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a configuration from explicit values.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Settings for bracketing searches, which may fall back to halving the
    /// interval and so get a larger iteration cap than Newton.
    pub fn bracketing() -> Self {
        Self {
            tolerance: T::from(1e-12).unwrap(),
            max_iterations: 200,
        }
    }

    /// Replace the tolerance.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0`.
    pub fn with_tolerance(self, tolerance: T) -> Self {
        Self::new(tolerance, self.max_iterations)
    }

    /// Replace the iteration cap.
    ///
    /// # Panics
    ///
    /// Panics if `max_iterations == 0`.
    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        Self::new(self.tolerance, max_iterations)
    }
}
