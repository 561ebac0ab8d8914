//! Rayon-based parallel sweeps.
//!
//! The engine is pure, so grid points are evaluated independently and
//! collected back in grid order. Output is identical to the sequential
//! [`SweepSpec::run`](crate::scenarios::SweepSpec::run).

use pricer_models::instruments::OptionParams;
use rayon::prelude::*;

use crate::scenarios::{SweepError, SweepSeries, SweepSpec};

/// Grid size below which [`par_sweep`] stays on the calling thread.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2048;

/// Evaluates `spec` across the Rayon thread pool.
///
/// Small grids are evaluated sequentially; thread hand-off costs more than
/// a few thousand closed-form evaluations.
///
/// # Errors
/// Same as [`SweepSpec::run`].
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionParams;
/// use pricer_risk::parallel::par_sweep;
/// use pricer_risk::scenarios::{SweepRange, SweepSpec, SweepVariable};
///
/// let spec = SweepSpec::new(SweepVariable::Strike, SweepRange::new(50.0, 150.0), 10_000);
/// let base = OptionParams::default();
///
/// assert_eq!(par_sweep(&spec, &base).unwrap(), spec.run(&base).unwrap());
/// ```
pub fn par_sweep(spec: &SweepSpec, base: &OptionParams) -> Result<SweepSeries, SweepError> {
    let grid = spec.grid(base)?;
    if grid.len() < DEFAULT_PARALLEL_THRESHOLD {
        return Ok(spec.collect(base, grid.iter().map(|&x| spec.sample(base, x))));
    }

    let samples: Vec<_> = grid.par_iter().map(|&x| spec.sample(base, x)).collect();
    Ok(spec.collect(base, samples))
}

/// Runs several sweeps of the same base contract in parallel.
///
/// Results are returned in the order of `specs`; each sweep fails or
/// succeeds on its own.
pub fn par_sweep_many(
    specs: &[SweepSpec],
    base: &OptionParams,
) -> Vec<Result<SweepSeries, SweepError>> {
    specs.par_iter().map(|spec| spec.run(base)).collect()
}
