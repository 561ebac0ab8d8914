//! Parameter sweeps over one contract field.
//!
//! This module provides:
//! - The independent variable and its default ranges ([`SweepVariable`])
//! - Sweep description and execution ([`SweepSpec`], [`sweep`])
//! - Ordered results ready for plotting ([`SweepSeries`])
//! - The range selector's starting window ([`initial_window`])
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 Sweep Layer                   │
//! ├──────────────────────────────────────────────┤
//! │  SweepVariable - field to vary, bounds       │
//! │  SweepSpec     - range, samples, spacing     │
//! │  SweepSeries   - ordered (x, y) points       │
//! │  SweepError    - whole-sweep failures        │
//! └──────────────────────────────────────────────┘
//! ```

mod error;
mod sweep;
mod variable;

pub use error::SweepError;
pub use sweep::{initial_window, sweep, SweepPoint, SweepRange, SweepSeries, SweepSpec};
pub use variable::SweepVariable;

// Sweeps are parameterised by these; re-exported for one-stop imports
pub use pricer_core::math::grid::GridSpacing;
pub use pricer_models::analytical::OutputMetric;
