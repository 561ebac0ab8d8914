//! One-dimensional sweeps of the Black-Scholes engine.
//!
//! A sweep fixes every field of a base [`OptionParams`] except one, samples
//! that field across a [`SweepRange`], evaluates the engine at each sample
//! and keeps one [`OutputMetric`] per point.

use pricer_core::math::grid::{sample_grid, GridSpacing};
use pricer_models::analytical::{evaluate, OutputMetric};
use pricer_models::instruments::{OptionParams, OptionType};
use tracing::debug;

use super::error::SweepError;
use super::variable::SweepVariable;

/// Closed interval `[start, end]` of the independent variable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepRange {
    /// First sample point
    pub start: f64,
    /// Last sample point
    pub end: f64,
}

impl SweepRange {
    /// Creates a range. Ordering is checked when the sweep runs.
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// `end - start`.
    #[inline]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Returns `true` if `x` lies in the closed interval.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.start <= x && x <= self.end
    }

    /// Intersects this range with `bounds`.
    ///
    /// Returns `bounds` unchanged when the two do not overlap.
    pub fn clamp_to(&self, bounds: SweepRange) -> SweepRange {
        let start = self.start.max(bounds.start);
        let end = self.end.min(bounds.end);
        if start <= end {
            SweepRange::new(start, end)
        } else {
            bounds
        }
    }
}

/// Starting window of the range selector when `variable` becomes the
/// independent variable.
///
/// The centre is capped at two thirds of the variable's upper default bound
/// and the window spans `[centre / 2, 3 · centre / 2]`, ordered and clipped
/// to [`SweepVariable::default_bounds`].
///
/// # Examples
/// ```
/// use pricer_risk::scenarios::{initial_window, SweepRange, SweepVariable};
///
/// let window = initial_window(SweepVariable::Spot, 100.0);
/// assert_eq!(window, SweepRange::new(50.0, 150.0));
///
/// // Centre capped at 2/3 of the 2.0 upper bound
/// let window = initial_window(SweepVariable::Volatility, 1.8);
/// assert!((window.end - 2.0).abs() < 1e-12);
/// ```
pub fn initial_window(variable: SweepVariable, centre: f64) -> SweepRange {
    let bounds = variable.default_bounds();
    let centre = if centre.is_finite() {
        centre.min(2.0 * bounds.end / 3.0)
    } else {
        bounds.start + bounds.width() / 2.0
    };
    let (a, b) = (centre / 2.0, 3.0 * centre / 2.0);
    SweepRange::new(a.min(b), a.max(b)).clamp_to(bounds)
}

/// One evaluated sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepPoint {
    /// Value of the independent variable
    pub x: f64,
    /// Selected metric at `x`
    pub y: f64,
}

/// Ordered result of a sweep.
///
/// Points are in grid order, from `range.start` to `range.end`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepSeries {
    /// Field that was varied
    pub variable: SweepVariable,
    /// Quantity on the y axis
    pub metric: OutputMetric,
    /// Contract kind
    pub option_type: OptionType,
    /// Evaluated samples
    pub points: Vec<SweepPoint>,
    /// Number of grid points that could not be priced: the contract is
    /// invalid at that value, or the valuation overflows
    pub rejected: usize,
}

impl SweepSeries {
    /// Number of plotted points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no point could be evaluated.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points as `(x, y)` tuples, the shape chart widgets consume.
    pub fn xy(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x, p.y)).collect()
    }

    /// Smallest and largest x, or `None` for an empty series.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        extent(self.points.iter().map(|p| p.x))
    }

    /// Padded y extent for plotting, or `None` for an empty series.
    ///
    /// Adds 5% of the span on each side; a flat series gets a band of
    /// `max(|y| · 5%, 1e-6)` so the interval never collapses.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        let (lo, hi) = extent(self.points.iter().map(|p| p.y))?;
        let span = hi - lo;
        let pad = if span > 0.0 {
            span * 0.05
        } else {
            (lo.abs() * 0.05).max(1e-6)
        };
        Some((lo - pad, hi + pad))
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Full description of a sweep.
///
/// # Examples
/// ```
/// use pricer_core::math::grid::GridSpacing;
/// use pricer_models::analytical::OutputMetric;
/// use pricer_models::instruments::OptionParams;
/// use pricer_risk::scenarios::{SweepRange, SweepSpec, SweepVariable};
///
/// let spec = SweepSpec::new(SweepVariable::Volatility, SweepRange::new(0.05, 1.0), 50)
///     .with_spacing(GridSpacing::Logarithmic)
///     .with_metric(OutputMetric::Vega);
///
/// let series = spec.run(&OptionParams::default()).unwrap();
/// assert_eq!(series.len(), 50);
/// assert_eq!(series.rejected, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepSpec {
    /// Field to vary
    pub variable: SweepVariable,
    /// Interval to cover
    pub range: SweepRange,
    /// Number of grid points
    pub samples: usize,
    /// Grid spacing
    pub spacing: GridSpacing,
    /// Quantity to record
    pub metric: OutputMetric,
}

impl SweepSpec {
    /// Linear sweep of the option value.
    pub fn new(variable: SweepVariable, range: SweepRange, samples: usize) -> Self {
        Self {
            variable,
            range,
            samples,
            spacing: GridSpacing::Linear,
            metric: OutputMetric::Value,
        }
    }

    /// Sets the grid spacing.
    pub fn with_spacing(mut self, spacing: GridSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the recorded metric.
    pub fn with_metric(mut self, metric: OutputMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Evaluates the engine along the grid.
    ///
    /// # Errors
    /// - `SweepError::InvalidBase` if a field held fixed is invalid
    /// - `SweepError::Grid` for a non-finite, reversed or under-sampled
    ///   range, or logarithmic spacing with `start <= 0`
    pub fn run(&self, base: &OptionParams) -> Result<SweepSeries, SweepError> {
        let grid = self.grid(base)?;
        let series = self.collect(base, grid.iter().map(|&x| self.sample(base, x)));
        Ok(series)
    }

    /// Validates the fixed fields and builds the sample points.
    pub(crate) fn grid(&self, base: &OptionParams) -> Result<Vec<f64>, SweepError> {
        let fixed = self.variable.with(*base, self.variable.neutral_value());
        fixed.validate().map_err(SweepError::InvalidBase)?;

        // A degenerate range is a single point however many samples are asked for.
        let count = if self.range.start == self.range.end {
            self.samples.min(1)
        } else {
            self.samples
        };
        Ok(sample_grid(self.range.start, self.range.end, count, self.spacing)?)
    }

    /// Evaluates one grid point; `None` if the contract at `x` is invalid or
    /// its valuation is not finite.
    #[inline]
    pub(crate) fn sample(&self, base: &OptionParams, x: f64) -> Option<SweepPoint> {
        let params = self.variable.with(*base, x);
        evaluate(&params).ok().map(|valuation| SweepPoint {
            x,
            y: valuation.metric(self.metric),
        })
    }

    pub(crate) fn collect(
        &self,
        base: &OptionParams,
        samples: impl IntoIterator<Item = Option<SweepPoint>>,
    ) -> SweepSeries {
        let mut points = Vec::with_capacity(self.samples);
        let mut rejected = 0;
        for sample in samples {
            match sample {
                Some(point) => points.push(point),
                None => rejected += 1,
            }
        }

        debug!(
            variable = self.variable.as_str(),
            metric = self.metric.as_str(),
            spacing = self.spacing.name(),
            start = self.range.start,
            end = self.range.end,
            points = points.len(),
            rejected,
            "sweep evaluated"
        );

        SweepSeries {
            variable: self.variable,
            metric: self.metric,
            option_type: base.option_type,
            points,
            rejected,
        }
    }
}

/// Linear sweep of `metric` over `range`.
///
/// Shorthand for [`SweepSpec::run`] with evenly spaced points.
///
/// # Examples
/// ```
/// use pricer_models::analytical::OutputMetric;
/// use pricer_models::instruments::OptionParams;
/// use pricer_risk::scenarios::{sweep, SweepRange, SweepVariable};
///
/// let base = OptionParams::default();
/// let series = sweep(&base, SweepVariable::Spot, SweepRange::new(50.0, 150.0), 101, OutputMetric::Value).unwrap();
///
/// assert_eq!(series.len(), 101);
/// assert!(series.points.windows(2).all(|w| w[1].y >= w[0].y));
/// ```
pub fn sweep(
    base: &OptionParams,
    variable: SweepVariable,
    range: SweepRange,
    samples: usize,
    metric: OutputMetric,
) -> Result<SweepSeries, SweepError> {
    SweepSpec::new(variable, range, samples)
        .with_metric(metric)
        .run(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::GridError;
    use pricer_models::instruments::InstrumentError;

    fn atm(option_type: OptionType) -> OptionParams {
        OptionParams::new(100.0, 100.0, 0.05, 0.2, 1.0, option_type).unwrap()
    }

    // ==========================================================
    // Sweep output
    // ==========================================================

    #[test]
    fn test_spot_sweep_call_price_non_decreasing() {
        let series = sweep(
            &atm(OptionType::Call),
            SweepVariable::Spot,
            SweepRange::new(50.0, 150.0),
            101,
            OutputMetric::Value,
        )
        .unwrap();

        assert_eq!(series.len(), 101);
        assert_eq!(series.rejected, 0);
        assert_eq!(series.points[0].x, 50.0);
        assert_eq!(series.points[100].x, 150.0);
        for pair in series.points.windows(2) {
            assert!(pair[1].x > pair[0].x);
            assert!(pair[1].y >= pair[0].y);
        }
    }

    #[test]
    fn test_spot_sweep_monotone_through_forward_atm() {
        // d1 = 0 at S = K·e^(-σ²T/2) when r = 0
        let centre = 100.0 * (-0.02_f64).exp();
        let base = OptionParams::new(centre, 100.0, 0.0, 0.2, 1.0, OptionType::Call).unwrap();
        let range = SweepRange::new(centre - 1e-6, centre + 1e-6);

        for metric in [OutputMetric::Value, OutputMetric::Delta] {
            let series = sweep(&base, SweepVariable::Spot, range, 101, metric).unwrap();
            assert_eq!(series.len(), 101);
            for pair in series.points.windows(2) {
                assert!(
                    pair[1].y >= pair[0].y,
                    "{} fell from {} to {} at S = {}",
                    metric,
                    pair[0].y,
                    pair[1].y,
                    pair[1].x
                );
            }
        }
    }

    #[test]
    fn test_points_match_direct_evaluation() {
        let base = atm(OptionType::Put);
        let series = sweep(
            &base,
            SweepVariable::Rate,
            SweepRange::new(-0.02, 0.1),
            7,
            OutputMetric::Rho,
        )
        .unwrap();

        for point in &series.points {
            let expected = evaluate(&base.with_rate(point.x)).unwrap().greeks.rho;
            assert_eq!(point.y, expected);
        }
        assert_eq!(series.option_type, OptionType::Put);
        assert_eq!(series.metric, OutputMetric::Rho);
    }

    #[test]
    fn test_invalid_points_are_skipped_and_counted() {
        // Spot 0 at the bottom of the default range is not a valid contract
        let bounds = SweepVariable::Spot.default_bounds();
        let series = sweep(
            &atm(OptionType::Call),
            SweepVariable::Spot,
            bounds,
            11,
            OutputMetric::Delta,
        )
        .unwrap();

        assert_eq!(series.rejected, 1);
        assert_eq!(series.len(), 10);
        assert_eq!(series.points[0].x, 50.0);
    }

    #[test]
    fn test_overflowing_points_are_skipped_and_counted() {
        // e^(-rT) overflows for r = -500 once T > ~1.42
        let base = atm(OptionType::Call).with_rate(-500.0);
        let series = sweep(
            &base,
            SweepVariable::Expiry,
            SweepRange::new(0.5, 2.0),
            4,
            OutputMetric::Value,
        )
        .unwrap();

        assert!(series.rejected >= 1);
        assert_eq!(series.rejected + series.len(), 4);
        assert!(series.points.iter().all(|p| p.y.is_finite() && p.x < 2.0));
    }

    #[test]
    fn test_zero_volatility_and_expiry_are_plotted() {
        for variable in [SweepVariable::Volatility, SweepVariable::Expiry] {
            let series = sweep(
                &atm(OptionType::Call),
                variable,
                variable.default_bounds(),
                21,
                OutputMetric::Value,
            )
            .unwrap();
            assert_eq!(series.rejected, 0);
            assert!(series.points.iter().all(|p| p.y.is_finite()));
        }
    }

    #[test]
    fn test_degenerate_range_yields_one_point() {
        let series = sweep(
            &atm(OptionType::Call),
            SweepVariable::Strike,
            SweepRange::new(100.0, 100.0),
            1000,
            OutputMetric::Value,
        )
        .unwrap();
        assert_eq!(series.len(), 1);
        assert_relative_eq!(series.points[0].y, 10.450583572185565, epsilon = 1e-6);
    }

    #[test]
    fn test_log_spacing() {
        let series = SweepSpec::new(SweepVariable::Expiry, SweepRange::new(0.01, 1.0), 3)
            .with_spacing(GridSpacing::Logarithmic)
            .run(&atm(OptionType::Call))
            .unwrap();
        assert_relative_eq!(series.points[1].x, 0.1, max_relative = 1e-12);
    }

    // ==========================================================
    // Errors
    // ==========================================================

    #[test]
    fn test_invalid_base_rejected() {
        let base = OptionParams {
            strike: -5.0,
            ..OptionParams::default()
        };
        let result = sweep(
            &base,
            SweepVariable::Spot,
            SweepRange::new(50.0, 150.0),
            10,
            OutputMetric::Value,
        );
        assert_eq!(
            result,
            Err(SweepError::InvalidBase(InstrumentError::InvalidStrike {
                strike: -5.0
            }))
        );
    }

    #[test]
    fn test_swept_field_not_part_of_base_validation() {
        let base = OptionParams {
            spot: -5.0,
            ..OptionParams::default()
        };
        let series = sweep(
            &base,
            SweepVariable::Spot,
            SweepRange::new(50.0, 150.0),
            10,
            OutputMetric::Value,
        )
        .unwrap();
        assert_eq!(series.len(), 10);
    }

    #[test]
    fn test_grid_errors_surface() {
        let base = atm(OptionType::Call);
        let run = |range: SweepRange, samples: usize| {
            sweep(&base, SweepVariable::Spot, range, samples, OutputMetric::Value)
        };

        assert!(matches!(
            run(SweepRange::new(150.0, 50.0), 10),
            Err(SweepError::Grid(GridError::ReversedRange { .. }))
        ));
        assert!(matches!(
            run(SweepRange::new(50.0, 150.0), 1),
            Err(SweepError::Grid(GridError::TooFewPoints { .. }))
        ));
        assert!(matches!(
            run(SweepRange::new(f64::NAN, 150.0), 10),
            Err(SweepError::Grid(GridError::NonFiniteBound { .. }))
        ));

        let log = SweepSpec::new(SweepVariable::Volatility, SweepRange::new(0.0, 1.0), 10)
            .with_spacing(GridSpacing::Logarithmic)
            .run(&base);
        assert!(matches!(
            log,
            Err(SweepError::Grid(GridError::NonPositiveLogBound { .. }))
        ));
    }

    // ==========================================================
    // Series helpers
    // ==========================================================

    #[test]
    fn test_bounds() {
        let series = sweep(
            &atm(OptionType::Call),
            SweepVariable::Spot,
            SweepRange::new(80.0, 120.0),
            5,
            OutputMetric::Value,
        )
        .unwrap();

        assert_eq!(series.x_bounds(), Some((80.0, 120.0)));
        let (lo, hi) = series.y_bounds().unwrap();
        assert!(lo < series.points[0].y);
        assert!(hi > series.points[4].y);
        assert_eq!(series.xy()[2], (series.points[2].x, series.points[2].y));
    }

    #[test]
    fn test_flat_series_y_bounds_do_not_collapse() {
        // Gamma is zero everywhere once expiry is zero
        let series = sweep(
            &atm(OptionType::Call).with_expiry(0.0),
            SweepVariable::Rate,
            SweepRange::new(0.0, 0.1),
            5,
            OutputMetric::Gamma,
        )
        .unwrap();

        let (lo, hi) = series.y_bounds().unwrap();
        assert!(lo < 0.0 && hi > 0.0);
        assert!(lo.is_finite() && hi.is_finite());
    }

    #[test]
    fn test_empty_series_has_no_bounds() {
        let series = SweepSeries {
            variable: SweepVariable::Spot,
            metric: OutputMetric::Value,
            option_type: OptionType::Call,
            points: Vec::new(),
            rejected: 3,
        };
        assert!(series.is_empty());
        assert_eq!(series.x_bounds(), None);
        assert_eq!(series.y_bounds(), None);
    }

    // ==========================================================
    // Initial window
    // ==========================================================

    #[test]
    fn test_initial_window_centres_on_value() {
        assert_eq!(
            initial_window(SweepVariable::Spot, 100.0),
            SweepRange::new(50.0, 150.0)
        );
        let window = initial_window(SweepVariable::Volatility, 0.1);
        assert_relative_eq!(window.start, 0.05, epsilon = 1e-15);
        assert_relative_eq!(window.end, 0.15, epsilon = 1e-15);
    }

    #[test]
    fn test_initial_window_caps_centre() {
        let window = initial_window(SweepVariable::Spot, 450.0);
        let centre = 2.0 * 500.0 / 3.0;
        assert_relative_eq!(window.start, centre / 2.0, epsilon = 1e-12);
        assert_relative_eq!(window.end, 500.0, epsilon = 1e-12);
    }

    #[test]
    fn test_initial_window_stays_in_bounds() {
        for variable in SweepVariable::ALL {
            let bounds = variable.default_bounds();
            for centre in [-0.01, 0.0, 0.04, 1.0, 8.0, 100.0, 1e6, f64::NAN] {
                let window = initial_window(variable, centre);
                assert!(window.start <= window.end, "{variable:?} {centre}");
                assert!(bounds.contains(window.start) && bounds.contains(window.end));
            }
        }
    }

    #[test]
    fn test_negative_rate_window_is_ordered() {
        let window = initial_window(SweepVariable::Rate, -0.01);
        assert_relative_eq!(window.start, -0.015, epsilon = 1e-15);
        assert_relative_eq!(window.end, -0.005, epsilon = 1e-15);
    }
}
