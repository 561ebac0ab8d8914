//! Error types for the `greeks` CLI.

use pricer_models::analytical::AnalyticalError;
use pricer_models::instruments::InstrumentError;
use pricer_risk::scenarios::SweepError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Contract parameters rejected
    #[error("Invalid contract: {0}")]
    Contract(#[from] InstrumentError),

    /// Pricing or implied-volatility failure
    #[error("Pricing error: {0}")]
    Pricing(#[from] AnalyticalError),

    /// Sweep could not be run
    #[error("Sweep error: {0}")]
    Sweep(#[from] SweepError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialisation error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
