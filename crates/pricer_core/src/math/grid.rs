//! Sampling grids for parameter sweeps.
//!
//! Generates the ordered sample points at which a model is evaluated when one
//! parameter is varied and the others are held fixed:
//! - [`GridSpacing::Linear`]: evenly spaced points (the usual choice)
//! - [`GridSpacing::Logarithmic`]: geometrically spaced points, useful for
//!   volatility and time to expiry where the interesting region sits near zero
//!
//! Both end points are always reproduced exactly.

use num_traits::Float;

use crate::types::GridError;

/// Spacing policy between consecutive sample points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GridSpacing {
    /// Constant difference between neighbours.
    #[default]
    Linear,
    /// Constant ratio between neighbours; requires a strictly positive start.
    Logarithmic,
}

impl GridSpacing {
    /// Returns the lowercase name of the spacing.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Logarithmic => "logarithmic",
        }
    }
}

/// Generates `count` sample points spanning `[start, end]`.
///
/// # Arguments
/// * `start` - First sample point
/// * `end` - Last sample point (must be `>= start`)
/// * `count` - Number of points; at least 2 unless `start == end`
/// * `spacing` - Linear or logarithmic spacing
///
/// # Errors
/// - `GridError::NonFiniteBound` if either bound is NaN or infinite
/// - `GridError::ReversedRange` if `start > end`
/// - `GridError::TooFewPoints` if `count` is 0, or 1 on a non-degenerate range
/// - `GridError::NonPositiveLogBound` for logarithmic spacing with `start <= 0`
///
/// # Examples
/// ```
/// use pricer_core::math::grid::{sample_grid, GridSpacing};
///
/// let xs = sample_grid(1.0_f64, 100.0, 3, GridSpacing::Logarithmic).unwrap();
/// assert_eq!(xs[0], 1.0);
/// assert!((xs[1] - 10.0).abs() < 1e-12);
/// assert_eq!(xs[2], 100.0);
/// ```
pub fn sample_grid<T: Float>(
    start: T,
    end: T,
    count: usize,
    spacing: GridSpacing,
) -> Result<Vec<T>, GridError> {
    if !start.is_finite() || !end.is_finite() {
        return Err(GridError::NonFiniteBound {
            start: start.to_f64().unwrap_or(f64::NAN),
            end: end.to_f64().unwrap_or(f64::NAN),
        });
    }

    if start > end {
        return Err(GridError::ReversedRange {
            start: start.to_f64().unwrap_or(f64::NAN),
            end: end.to_f64().unwrap_or(f64::NAN),
        });
    }

    if count == 0 || (count == 1 && start != end) {
        return Err(GridError::TooFewPoints { got: count, need: 2 });
    }

    if spacing == GridSpacing::Logarithmic && start <= T::zero() {
        return Err(GridError::NonPositiveLogBound {
            start: start.to_f64().unwrap_or(f64::NAN),
        });
    }

    if count == 1 {
        return Ok(vec![start]);
    }

    let last = count - 1;
    let steps = T::from(last).ok_or(GridError::TooFewPoints { got: count, need: 2 })?;

    let mut points: Vec<T> = match spacing {
        GridSpacing::Linear => {
            let width = end - start;
            (0..count)
                .map(|i| start + width * T::from(i).unwrap_or_else(T::zero) / steps)
                .collect()
        }
        GridSpacing::Logarithmic => {
            let log_start = start.ln();
            let log_width = end.ln() - log_start;
            (0..count)
                .map(|i| (log_start + log_width * T::from(i).unwrap_or_else(T::zero) / steps).exp())
                .collect()
        }
    };

    // Rounding in ln/exp can push interior points a ulp past the bounds.
    for x in points.iter_mut() {
        *x = x.max(start).min(end);
    }
    points[0] = start;
    points[last] = end;

    Ok(points)
}

/// Convenience wrapper for evenly spaced points (numpy-style `linspace`).
#[inline]
pub fn linspace<T: Float>(start: T, end: T, count: usize) -> Result<Vec<T>, GridError> {
    sample_grid(start, end, count, GridSpacing::Linear)
}

/// Convenience wrapper for geometrically spaced points between two values.
#[inline]
pub fn geomspace<T: Float>(start: T, end: T, count: usize) -> Result<Vec<T>, GridError> {
    sample_grid(start, end, count, GridSpacing::Logarithmic)
}
