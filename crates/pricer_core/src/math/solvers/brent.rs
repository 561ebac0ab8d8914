//! Brent's method root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Brent's method root finder.
///
/// Keeps a sign-changing bracket `[b, c]` and at each step tries inverse
/// quadratic interpolation (or a secant step when only two distinct points
/// are known), falling back to bisection whenever the interpolated step
/// would leave the bracket or shrink it too slowly. Converges
/// superlinearly on smooth functions and never worse than bisection.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::bracketing());
///
/// // x³ - 2x - 5 = 0 has its real root near 2.0946
/// let f = |x: f64| x * x * x - 2.0 * x - 5.0;
/// let root = solver.find_root(f, 2.0, 3.0).unwrap();
/// assert!(f(root).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BrentSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BrentSolver<T> {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with [`SolverConfig::bracketing`].
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::bracketing())
    }

    /// Find a root of `f` inside `[a, b]` (either order).
    ///
    /// Stops when `|f(x)|` falls below the tolerance or the bracket is
    /// narrower than the tolerance (plus a few ulps of `x`). An endpoint that
    /// is already a root is returned as is.
    ///
    /// # Errors
    ///
    /// * `SolverError::NoBracket` - `f(a)` and `f(b)` share a sign
    /// * `SolverError::NumericalInstability` - `f` is non-finite at an endpoint
    ///   or at an iterate
    /// * `SolverError::MaxIterationsExceeded` - tolerance not met within the cap
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let (mut a, mut b) = (a, b);
        let (mut fa, mut fb) = (f(a), f(b));

        if !fa.is_finite() || !fb.is_finite() {
            return Err(SolverError::NumericalInstability(
                "Function is non-finite at bracket endpoint".to_string(),
            ));
        }
        if fa == T::zero() {
            return Ok(a);
        }
        if fb == T::zero() {
            return Ok(b);
        }
        if fa.signum() == fb.signum() {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            return Err(SolverError::NoBracket {
                a: lo.to_f64().unwrap_or(f64::NAN),
                b: hi.to_f64().unwrap_or(f64::NAN),
            });
        }

        let one = T::one();
        let two = one + one;
        let three = two + one;
        let half = one / two;
        let tol = self.config.tolerance;

        let (mut c, mut fc) = (b, fb);
        let mut d = b - a;
        let mut e = d;

        for _ in 0..self.config.max_iterations {
            // Re-establish the bracket [b, c]
            if fb.signum() == fc.signum() {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }
            // b is the best estimate so far
            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }

            let tol1 = two * T::epsilon() * b.abs() + half * tol;
            let xm = half * (c - b);
            if xm.abs() <= tol1 || fb.abs() < tol {
                return Ok(b);
            }

            if e.abs() >= tol1 && fa.abs() > fb.abs() {
                let s = fb / fa;
                let (mut p, mut q) = if a == c {
                    (two * xm * s, one - s)
                } else {
                    let q = fa / fc;
                    let r = fb / fc;
                    (
                        s * (two * xm * q * (q - r) - (b - a) * (r - one)),
                        (q - one) * (r - one) * (s - one),
                    )
                };
                if p > T::zero() {
                    q = -q;
                }
                p = p.abs();

                let interpolation_limit = three * xm * q - (tol1 * q).abs();
                if two * p < interpolation_limit.min((e * q).abs()) {
                    e = d;
                    d = p / q;
                } else {
                    d = xm;
                    e = d;
                }
            } else {
                d = xm;
                e = d;
            }

            a = b;
            fa = fb;
            b = if d.abs() > tol1 {
                b + d
            } else if xm > T::zero() {
                b + tol1
            } else {
                b - tol1
            };
            fb = f(b);

            if !fb.is_finite() {
                return Err(SolverError::NumericalInstability(format!(
                    "Function is non-finite at x = {}",
                    b.to_f64().unwrap_or(f64::NAN)
                )));
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::cell::Cell;

    // ==========================================================
    // Convergence
    // ==========================================================

    #[test]
    fn test_sqrt_two() {
        let solver = BrentSolver::with_defaults();
        let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
        assert_relative_eq!(root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_cosine_fixed_point() {
        let solver = BrentSolver::with_defaults();
        let f = |x: f64| x - x.cos();
        let root = solver.find_root(f, 0.0, 1.0).unwrap();
        assert!(f(root).abs() < 1e-10);
    }

    #[test]
    fn test_reversed_bracket() {
        let solver = BrentSolver::with_defaults();
        let root = solver.find_root(|x: f64| x - 0.3, 1.0, 0.0).unwrap();
        assert_relative_eq!(root, 0.3, epsilon = 1e-10);
    }

    #[test]
    fn test_decreasing_function() {
        let solver = BrentSolver::with_defaults();
        let root = solver.find_root(|x: f64| 1.0 - x.exp(), -1.0, 2.0).unwrap();
        assert_relative_eq!(root, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_endpoint_root() {
        let solver = BrentSolver::with_defaults();
        assert_eq!(solver.find_root(|x: f64| x - 1.0, 1.0, 4.0).unwrap(), 1.0);
        assert_eq!(solver.find_root(|x: f64| x - 4.0, 1.0, 4.0).unwrap(), 4.0);
    }

    #[test]
    fn test_fewer_evaluations_than_halving() {
        // Halving [0, 2] down to 1e-12 takes about 41 evaluations
        let calls = Cell::new(0);
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            x * x - 2.0
        };
        let solver = BrentSolver::new(SolverConfig::bracketing());
        let root = solver.find_root(f, 0.0, 2.0).unwrap();

        assert_relative_eq!(root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert!(calls.get() < 20, "took {} evaluations", calls.get());
    }

    #[test]
    fn test_f32() {
        let solver: BrentSolver<f32> = BrentSolver::new(SolverConfig::new(1e-6, 100));
        let root = solver.find_root(|x: f32| x * x - 2.0, 0.0, 2.0).unwrap();
        assert!((root - std::f32::consts::SQRT_2).abs() < 1e-5);
    }

    // ==========================================================
    // Errors
    // ==========================================================

    #[test]
    fn test_no_bracket() {
        let solver = BrentSolver::with_defaults();
        let result = solver.find_root(|x: f64| x * x + 1.0, 1.0, -1.0);
        assert_eq!(result, Err(SolverError::NoBracket { a: -1.0, b: 1.0 }));
    }

    #[test]
    fn test_non_finite_endpoint() {
        let solver = BrentSolver::with_defaults();
        let result = solver.find_root(|x: f64| x.ln(), -1.0, 2.0);
        assert!(matches!(result, Err(SolverError::NumericalInstability(_))));
    }

    #[test]
    fn test_iteration_cap() {
        let solver = BrentSolver::new(SolverConfig::new(1e-300, 2));
        let result = solver.find_root(|x: f64| x * x * x - 2.0 * x - 5.0, 2.0, 3.0);
        assert_eq!(
            result,
            Err(SolverError::MaxIterationsExceeded { iterations: 2 })
        );
    }

    #[test]
    fn test_config_accessor() {
        let solver = BrentSolver::new(SolverConfig::new(1e-8, 50));
        assert_eq!(solver.config().max_iterations, 50);
        assert_relative_eq!(solver.config().tolerance, 1e-8);
    }
}
