//! Sweep command implementation
//!
//! Evaluates one metric across a range of one contract field.

use std::path::Path;

use pricer_core::math::grid::GridSpacing;
use pricer_models::analytical::OutputMetric;
use pricer_models::instruments::OptionParams;
use pricer_risk::parallel::par_sweep;
use pricer_risk::scenarios::{initial_window, SweepRange, SweepSeries, SweepSpec, SweepVariable};
use serde::Serialize;
use tracing::{info, warn};

use super::{emit, render_table};
use crate::config::{OutputFormat, MAX_SAMPLES};
use crate::{CliError, Result};

/// Sweep settings after defaults have been applied
#[derive(Debug, Clone)]
pub struct SweepRequest<'a> {
    /// Field to vary
    pub variable: SweepVariable,
    /// Metric to record
    pub metric: OutputMetric,
    /// Range start; defaults to the initial window around the base value
    pub from: Option<f64>,
    /// Range end; defaults to the initial window around the base value
    pub to: Option<f64>,
    /// Grid points
    pub samples: usize,
    /// Logarithmic spacing
    pub log: bool,
    /// Output format
    pub format: OutputFormat,
    /// Destination file, stdout if `None`
    pub output: Option<&'a Path>,
}

impl SweepRequest<'_> {
    /// Resolves the range and builds the sweep description
    pub fn spec(&self, base: &OptionParams) -> Result<SweepSpec> {
        if self.samples > MAX_SAMPLES {
            return Err(CliError::InvalidArgument(format!(
                "--samples {} exceeds maximum allowed ({})",
                self.samples, MAX_SAMPLES
            )));
        }

        let window = initial_window(self.variable, self.variable.get(base));
        let range = SweepRange::new(
            self.from.unwrap_or(window.start),
            self.to.unwrap_or(window.end),
        );

        // A single-point range needs one sample; any other range needs both ends
        let min_samples = if range.start == range.end { 1 } else { 2 };
        if self.samples < min_samples {
            return Err(CliError::InvalidArgument(format!(
                "--samples must be at least {} for [{}, {}], got {}",
                min_samples, range.start, range.end, self.samples
            )));
        }
        let spacing = if self.log {
            GridSpacing::Logarithmic
        } else {
            GridSpacing::Linear
        };

        Ok(SweepSpec::new(self.variable, range, self.samples)
            .with_spacing(spacing)
            .with_metric(self.metric))
    }
}

#[derive(Debug, Serialize)]
struct SweepRow {
    x: f64,
    y: f64,
}

/// Run the sweep command
pub fn run(base: &OptionParams, request: &SweepRequest<'_>) -> Result<()> {
    let spec = request.spec(base)?;
    info!(
        "Sweeping {} of {} {} over [{}, {}] ({} {} points)",
        spec.metric,
        base.option_type,
        spec.variable.label(),
        spec.range.start,
        spec.range.end,
        spec.samples,
        spec.spacing.name()
    );

    let series = par_sweep(&spec, base)?;
    if series.rejected > 0 {
        warn!(
            "{} of {} points skipped: contract invalid or valuation not finite at those values",
            series.rejected,
            series.rejected + series.len()
        );
    }

    emit(&render(&series, request.format)?, request.output)?;
    if let Some(path) = request.output {
        info!("Wrote {} points to {}", series.len(), path.display());
    }
    Ok(())
}

/// Formats a series in the requested format
pub fn render(series: &SweepSeries, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<(String, String)> = series
                .points
                .iter()
                .map(|p| (format!("{:.6}", p.x), format!("{:.6}", p.y)))
                .collect();
            Ok(render_table(
                (series.variable.symbol(), series.metric.label()),
                &rows,
            ))
        }
        OutputFormat::Csv => {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(Vec::new());
            writer.write_record([series.variable.as_str(), series.metric.as_str()])?;
            for point in &series.points {
                writer.serialize(SweepRow {
                    x: point.x,
                    y: point.y,
                })?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(series)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::instruments::OptionType;

    fn request(variable: SweepVariable) -> SweepRequest<'static> {
        SweepRequest {
            variable,
            metric: OutputMetric::Value,
            from: None,
            to: None,
            samples: 11,
            log: false,
            format: OutputFormat::Csv,
            output: None,
        }
    }

    #[test]
    fn test_range_defaults_to_initial_window() {
        let base = OptionParams::default();
        let spec = request(SweepVariable::Spot).spec(&base).unwrap();
        assert_eq!(spec.range, SweepRange::new(50.0, 150.0));
    }

    #[test]
    fn test_partial_range_override() {
        let base = OptionParams::default();
        let spec = SweepRequest {
            to: Some(200.0),
            log: true,
            ..request(SweepVariable::Strike)
        }
        .spec(&base)
        .unwrap();
        assert_eq!(spec.range, SweepRange::new(50.0, 200.0));
        assert_eq!(spec.spacing, GridSpacing::Logarithmic);
    }

    #[test]
    fn test_zero_samples_rejected() {
        let result = SweepRequest {
            samples: 0,
            ..request(SweepVariable::Spot)
        }
        .spec(&OptionParams::default());
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_sample_count_limits() {
        let base = OptionParams::default();

        let too_many = SweepRequest {
            samples: MAX_SAMPLES + 1,
            ..request(SweepVariable::Spot)
        }
        .spec(&base);
        assert!(
            matches!(too_many, Err(CliError::InvalidArgument(ref msg)) if msg.contains("exceeds maximum"))
        );

        let one = SweepRequest {
            samples: 1,
            ..request(SweepVariable::Spot)
        }
        .spec(&base);
        assert!(matches!(one, Err(CliError::InvalidArgument(_))));

        let at_limit = SweepRequest {
            samples: MAX_SAMPLES,
            ..request(SweepVariable::Spot)
        }
        .spec(&base)
        .unwrap();
        assert_eq!(at_limit.samples, MAX_SAMPLES);
    }

    #[test]
    fn test_single_point_range_accepts_one_sample() {
        let spec = SweepRequest {
            from: Some(100.0),
            to: Some(100.0),
            samples: 1,
            ..request(SweepVariable::Strike)
        }
        .spec(&OptionParams::default())
        .unwrap();

        let series = spec.run(&OptionParams::default()).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.points[0].x, 100.0);
    }

    #[test]
    fn test_csv_output() {
        let base = OptionParams::default().with_option_type(OptionType::Put);
        let spec = request(SweepVariable::Spot).spec(&base).unwrap();
        let series = spec.run(&base).unwrap();
        let csv = render(&series, OutputFormat::Csv).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], "s,value");
        assert_eq!(lines.len(), 12);
        assert!(lines[1].starts_with("50.0,"));
        assert!(lines[11].starts_with("150.0,"));
    }

    #[test]
    fn test_table_and_json_output() {
        let base = OptionParams::default();
        let series = request(SweepVariable::Volatility)
            .spec(&base)
            .unwrap()
            .run(&base)
            .unwrap();

        let table = render(&series, OutputFormat::Table).unwrap();
        assert!(table.contains("σ"));
        assert!(table.contains("Value"));
        assert_eq!(table.lines().count(), 11 + 4);

        let json: serde_json::Value =
            serde_json::from_str(&render(&series, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["variable"], "volatility");
        assert_eq!(json["points"].as_array().unwrap().len(), 11);
        assert_eq!(json["rejected"], 0);
    }

    #[test]
    fn test_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.csv");
        let request = SweepRequest {
            output: Some(&path),
            ..request(SweepVariable::Rate)
        };
        run(&OptionParams::default(), &request).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("r,value\n"));
    }
}
