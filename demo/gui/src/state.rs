//! Dashboard state and input handling, independent of the terminal.
//!
//! Every user action is a method on [`DashboardState`]; rendering reads the
//! state and the [`SweepSeries`] produced by [`DashboardState::compute`].

use pricer_models::analytical::OutputMetric;
use pricer_models::instruments::{OptionParams, OptionType};
use pricer_risk::scenarios::{initial_window, sweep, SweepRange, SweepSeries, SweepVariable};
use tracing::debug;

/// Points per curve.
pub const DEFAULT_SAMPLES: usize = 1000;

/// Opening values of the five contract inputs, in [`SweepVariable::ALL`] order.
pub const INITIAL_VALUES: [f64; 5] = [100.0, 100.0, 0.05, 0.1, 1.0];

/// Opening range of the volatility slider.
pub const INITIAL_RANGE: SweepRange = SweepRange::new(0.02, 0.1);

/// Slider steps across a variable's full bounds.
const SLIDER_STEPS: f64 = 100.0;

/// Title shown above the controls.
pub const TITLE: &str = "Visualising Black-Scholes option values and Greeks";

/// Placeholder drawn instead of a chart when the inputs cannot be priced.
pub const INVALID_INPUT_MESSAGE: &str = "⚠ Please enter valid input values";

/// Widget with keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Dependent-variable selector
    Metric,
    /// Independent-variable selector
    Variable,
    /// Call/Put tabs
    OptionType,
    /// Numeric input for one contract field
    Input(SweepVariable),
    /// Lower handle of the range slider
    RangeStart,
    /// Upper handle of the range slider
    RangeEnd,
}

fn index(variable: SweepVariable) -> usize {
    match variable {
        SweepVariable::Spot => 0,
        SweepVariable::Strike => 1,
        SweepVariable::Rate => 2,
        SweepVariable::Volatility => 3,
        SweepVariable::Expiry => 4,
    }
}

fn parse_input(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn cycle<T: Copy + PartialEq>(items: &[T], current: T, step: i32) -> T {
    let len = items.len() as i32;
    let pos = items.iter().position(|&i| i == current).unwrap_or(0) as i32;
    items[(pos + step).rem_euclid(len) as usize]
}

/// State of the Greeks dashboard.
#[derive(Debug, Clone)]
pub struct DashboardState {
    metric: OutputMetric,
    variable: SweepVariable,
    option_type: OptionType,
    inputs: [String; 5],
    memory: [f64; 5],
    range: SweepRange,
    focus: Focus,
    show_info: bool,
    samples: usize,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    /// Opening state: Value against Volatility for a call.
    pub fn new() -> Self {
        let variable = SweepVariable::Volatility;
        let mut inputs = INITIAL_VALUES.map(|v| v.to_string());
        inputs[index(variable)].clear();

        Self {
            metric: OutputMetric::Value,
            variable,
            option_type: OptionType::Call,
            inputs,
            memory: INITIAL_VALUES,
            range: INITIAL_RANGE,
            focus: Focus::Metric,
            show_info: false,
            samples: DEFAULT_SAMPLES,
        }
    }

    /// Overrides the number of points per curve.
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    // ==========================================================
    // Accessors
    // ==========================================================

    /// Selected dependent variable.
    pub fn metric(&self) -> OutputMetric {
        self.metric
    }

    /// Selected independent variable.
    pub fn variable(&self) -> SweepVariable {
        self.variable
    }

    /// Selected tab.
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Current slider window.
    pub fn range(&self) -> SweepRange {
        self.range
    }

    /// Slider limits for the current variable.
    pub fn range_bounds(&self) -> SweepRange {
        self.variable.default_bounds()
    }

    /// Widget with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Whether the information panel is open.
    pub fn show_info(&self) -> bool {
        self.show_info
    }

    /// `true` for the input of the current independent variable.
    pub fn is_disabled(&self, variable: SweepVariable) -> bool {
        variable == self.variable
    }

    /// Text of an input, or `None` when it is disabled and shows its placeholder.
    pub fn input_text(&self, variable: SweepVariable) -> Option<&str> {
        if self.is_disabled(variable) {
            None
        } else {
            Some(&self.inputs[index(variable)])
        }
    }

    /// Last valid value entered for `variable`.
    pub fn remembered(&self, variable: SweepVariable) -> f64 {
        self.memory[index(variable)]
    }

    /// "Select the range for ..." prompt above the slider.
    pub fn range_prompt(&self) -> String {
        format!("Select the range for {}:", self.variable.label())
    }

    /// Chart heading.
    pub fn chart_title(&self) -> String {
        format!(
            "Black–Scholes {} vs {}",
            self.metric.label(),
            self.variable.label()
        )
    }

    // ==========================================================
    // Selectors
    // ==========================================================

    /// Changes the dependent variable.
    pub fn select_metric(&mut self, metric: OutputMetric) {
        self.metric = metric;
    }

    /// Switches tab.
    pub fn select_option_type(&mut self, option_type: OptionType) {
        self.option_type = option_type;
    }

    /// Changes the independent variable.
    ///
    /// The new variable's input is disabled, the previous one is restored to
    /// its remembered value and the slider is re-centred on the new variable.
    pub fn select_variable(&mut self, variable: SweepVariable) {
        if variable == self.variable {
            return;
        }

        let previous = self.variable;
        self.inputs[index(previous)] = self.memory[index(previous)].to_string();
        self.inputs[index(variable)].clear();
        self.variable = variable;
        self.range = initial_window(variable, self.memory[index(variable)]);

        if self.focus == Focus::Input(variable) {
            self.focus = Focus::Variable;
        }
        debug!(
            "independent variable {} -> {}, window [{}, {}]",
            previous, variable, self.range.start, self.range.end
        );
    }

    /// Toggles the information panel.
    pub fn toggle_info(&mut self) {
        self.show_info = !self.show_info;
    }

    // ==========================================================
    // Inputs
    // ==========================================================

    /// Appends a character to the focused input. Returns `false` if ignored.
    pub fn type_char(&mut self, ch: char) -> bool {
        let Focus::Input(variable) = self.focus else {
            return false;
        };
        if self.is_disabled(variable) || !(ch.is_ascii_digit() || matches!(ch, '.' | '-' | 'e' | 'E')) {
            return false;
        }
        self.inputs[index(variable)].push(ch);
        self.remember(variable);
        true
    }

    /// Deletes the last character of the focused input.
    pub fn backspace(&mut self) -> bool {
        let Focus::Input(variable) = self.focus else {
            return false;
        };
        if self.is_disabled(variable) {
            return false;
        }
        self.inputs[index(variable)].pop();
        self.remember(variable);
        true
    }

    /// Replaces the text of an enabled input.
    pub fn set_input(&mut self, variable: SweepVariable, text: &str) {
        if self.is_disabled(variable) {
            return;
        }
        self.inputs[index(variable)] = text.to_string();
        self.remember(variable);
    }

    fn remember(&mut self, variable: SweepVariable) {
        if let Some(value) = parse_input(&self.inputs[index(variable)]) {
            self.memory[index(variable)] = value;
        }
    }

    // ==========================================================
    // Range slider
    // ==========================================================

    /// Sets the slider window, clipped to the variable's bounds.
    pub fn set_range(&mut self, range: SweepRange) {
        let bounds = self.range_bounds();
        let start = range.start.min(range.end);
        let end = range.start.max(range.end);
        self.range = SweepRange::new(start, end).clamp_to(bounds);
    }

    fn nudge(&mut self, upper: bool, steps: i32) {
        let bounds = self.range_bounds();
        let step = bounds.width() / SLIDER_STEPS * steps as f64;
        if upper {
            self.range.end = (self.range.end + step).clamp(self.range.start, bounds.end);
        } else {
            self.range.start = (self.range.start + step).clamp(bounds.start, self.range.end);
        }
    }

    // ==========================================================
    // Focus and navigation
    // ==========================================================

    fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Metric, Focus::Variable, Focus::OptionType];
        order.extend(
            SweepVariable::ALL
                .iter()
                .filter(|&&v| !self.is_disabled(v))
                .map(|&v| Focus::Input(v)),
        );
        order.extend([Focus::RangeStart, Focus::RangeEnd]);
        order
    }

    /// Moves focus forward (`step > 0`) or backward, skipping the disabled input.
    pub fn move_focus(&mut self, step: i32) {
        self.focus = cycle(&self.focus_order(), self.focus, step);
    }

    /// Left/right on the focused widget.
    pub fn adjust(&mut self, step: i32) {
        match self.focus {
            Focus::Metric => self.metric = cycle(&OutputMetric::ALL, self.metric, step),
            Focus::Variable => {
                let next = cycle(&SweepVariable::ALL, self.variable, step);
                self.select_variable(next);
            }
            Focus::OptionType => {
                self.option_type = cycle(&OptionType::ALL, self.option_type, step)
            }
            Focus::Input(_) => {}
            Focus::RangeStart => self.nudge(false, step),
            Focus::RangeEnd => self.nudge(true, step),
        }
    }

    // ==========================================================
    // Evaluation
    // ==========================================================

    /// Contract built from the inputs, or `None` if any enabled input does
    /// not parse.
    ///
    /// The independent variable takes its remembered value; the sweep
    /// replaces it at every point.
    pub fn base_params(&self) -> Option<OptionParams> {
        let mut values = self.memory;
        for variable in SweepVariable::ALL {
            if !self.is_disabled(variable) {
                values[index(variable)] = parse_input(&self.inputs[index(variable)])?;
            }
        }

        Some(OptionParams {
            spot: values[0],
            strike: values[1],
            rate: values[2],
            volatility: values[3],
            expiry: values[4],
            option_type: self.option_type,
        })
    }

    /// Sweeps the selected metric across the slider window.
    ///
    /// `None` means the placeholder should be drawn: an input does not parse,
    /// a fixed field is out of range, or no point could be priced.
    pub fn compute(&self) -> Option<SweepSeries> {
        let base = self.base_params()?;
        match sweep(&base, self.variable, self.range, self.samples, self.metric) {
            Ok(series) if !series.is_empty() => Some(series),
            Ok(_) => None,
            Err(e) => {
                debug!("sweep rejected: {}", e);
                None
            }
        }
    }
}
