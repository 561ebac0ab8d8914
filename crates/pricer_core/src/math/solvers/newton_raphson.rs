//! Newton-Raphson root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Newton-Raphson root finder.
///
/// Iterates `x_{n+1} = x_n - f(x_n) / f'(x_n)` until `|f(x)| < tolerance`.
/// Converges quadratically near a simple root, but can stall where the
/// derivative vanishes or wander off when the seed is poor; callers that need
/// a guaranteed answer pair it with [`BrentSolver`](super::BrentSolver).
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// // Solve x³ - x - 2 = 0
/// let f = |x: f64| x * x * x - x - 2.0;
/// let f_prime = |x: f64| 3.0 * x * x - 1.0;
///
/// let root = solver.find_root(f, f_prime, 1.5).unwrap();
/// assert!(f(root).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with [`SolverConfig::default`].
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Find a root of `f` from the seed `x0` using the derivative `f_prime`.
    ///
    /// # Errors
    ///
    /// * `SolverError::DerivativeNearZero` - `|f'(x)|` fell below `1e-30`
    /// * `SolverError::NumericalInstability` - an iterate became non-finite
    /// * `SolverError::MaxIterationsExceeded` - no convergence within the cap
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        self.iterate(f, f_prime, x0, None)
    }

    /// Like [`find_root`](Self::find_root), but fails as soon as an iterate
    /// leaves `[lower, upper]`.
    ///
    /// Useful when `f` is only meaningful on part of the real line, such as a
    /// price as a function of a non-negative volatility.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::NewtonRaphsonSolver;
    /// use pricer_core::types::SolverError;
    ///
    /// let solver = NewtonRaphsonSolver::<f64>::with_defaults();
    ///
    /// // The first Newton step from 0.1 on x² - 4 jumps to 20.05
    /// let result = solver.find_root_within(|x| x * x - 4.0, |x| 2.0 * x, 0.1, 0.0, 10.0);
    /// assert!(matches!(result, Err(SolverError::NumericalInstability(_))));
    /// ```
    pub fn find_root_within<F, G>(
        &self,
        f: F,
        f_prime: G,
        x0: T,
        lower: T,
        upper: T,
    ) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        self.iterate(f, f_prime, x0, Some((lower, upper)))
    }

    fn iterate<F, G>(
        &self,
        f: F,
        f_prime: G,
        x0: T,
        bounds: Option<(T, T)>,
    ) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let mut x = x0;
        let epsilon = T::from(1e-30).unwrap();

        for _ in 0..self.config.max_iterations {
            let f_val = f(x);

            if f_val.abs() < self.config.tolerance {
                return Ok(x);
            }

            let f_prime_val = f_prime(x);
            if f_prime_val.abs() < epsilon {
                return Err(SolverError::DerivativeNearZero {
                    x: x.to_f64().unwrap_or(f64::NAN),
                });
            }

            x = x - f_val / f_prime_val;

            if !x.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }

            if let Some((lower, upper)) = bounds {
                if x < lower || x > upper {
                    return Err(SolverError::NumericalInstability(format!(
                        "Newton iterate {} left [{}, {}]",
                        x.to_f64().unwrap_or(f64::NAN),
                        lower.to_f64().unwrap_or(f64::NAN),
                        upper.to_f64().unwrap_or(f64::NAN),
                    )));
                }
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
