//! CLI configuration management.
//!
//! Loads `greeks.toml` with environment variable override support. A missing
//! file is not an error: every field has a default.
//!
//! ```toml
//! log_level = "info"
//! samples = 1000
//! format = "table"
//!
//! [base]
//! spot = 100.0
//! strike = 100.0
//! rate = 0.05
//! volatility = 0.1
//! expiry = 1.0
//! option_type = "call"
//! ```

use std::path::Path;

use pricer_models::instruments::{OptionParams, OptionType};
use serde::Deserialize;
use thiserror::Error;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawn table for terminals
    #[default]
    Table,
    /// Comma-separated values with a header row
    Csv,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Contract used when a command-line flag is not given
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ContractDefaults {
    /// Underlying price
    #[serde(default = "default_spot")]
    pub spot: f64,
    /// Strike
    #[serde(default = "default_strike")]
    pub strike: f64,
    /// Risk-free rate
    #[serde(default = "default_rate")]
    pub rate: f64,
    /// Volatility
    #[serde(default = "default_volatility")]
    pub volatility: f64,
    /// Time to expiry in years
    #[serde(default = "default_expiry")]
    pub expiry: f64,
    /// Call or put
    #[serde(default)]
    pub option_type: OptionType,
}

fn default_spot() -> f64 {
    100.0
}

fn default_strike() -> f64 {
    100.0
}

fn default_rate() -> f64 {
    0.05
}

fn default_volatility() -> f64 {
    0.1
}

fn default_expiry() -> f64 {
    1.0
}

impl Default for ContractDefaults {
    fn default() -> Self {
        Self {
            spot: default_spot(),
            strike: default_strike(),
            rate: default_rate(),
            volatility: default_volatility(),
            expiry: default_expiry(),
            option_type: OptionType::default(),
        }
    }
}

impl ContractDefaults {
    /// The defaults as an (unvalidated) contract
    pub fn to_params(&self) -> OptionParams {
        OptionParams {
            spot: self.spot,
            strike: self.strike,
            rate: self.rate,
            volatility: self.volatility,
            expiry: self.expiry,
            option_type: self.option_type,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Grid points per sweep
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Output format when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// Fallback contract
    #[serde(default)]
    pub base: ContractDefaults,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_samples() -> usize {
    1000
}

/// Upper limit on `samples`
pub const MAX_SAMPLES: usize = 10_000_000;

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            samples: default_samples(),
            format: OutputFormat::default(),
            base: ContractDefaults::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    ///
    /// Unparseable values are ignored.
    pub fn with_env_override(mut self) -> Self {
        if let Ok(log_level) = std::env::var("GREEKS_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(samples) = std::env::var("GREEKS_SAMPLES") {
            if let Ok(samples) = samples.trim().parse() {
                self.samples = samples;
            }
        }

        if let Ok(format) = std::env::var("GREEKS_FORMAT") {
            if let Some(format) = OutputFormat::parse(format.trim()) {
                self.format = format;
            }
        }

        self
    }

    /// Validate the configuration, reporting every problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.samples < 2 {
            errors.push(format!("samples must be at least 2, got {}", self.samples));
        }
        if self.samples > MAX_SAMPLES {
            errors.push(format!(
                "samples {} exceeds maximum allowed ({})",
                self.samples, MAX_SAMPLES
            ));
        }

        if let Err(e) = self.base.to_params().validate() {
            errors.push(format!("base contract: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
