//! Check command implementation
//!
//! Validates the configuration and prints the effective settings.

use pricer_models::analytical::evaluate;
use tracing::info;

use super::{emit, render_table};
use crate::config::{CliConfig, ConfigError};
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig, source: &str) -> Result<()> {
    info!("Checking configuration from {}", source);

    emit(&render(config, source), None)?;

    if let Err(e) = config.validate() {
        if let ConfigError::Validation(errors) = &e {
            for error in errors {
                println!("  ✗ {}", error);
            }
        }
        return Err(e.into());
    }

    // The base contract must also price cleanly
    let valuation = evaluate(&config.base.to_params())?;
    println!("  ✓ configuration valid (base price {:.6})", valuation.price);
    Ok(())
}

/// Formats the effective settings
pub fn render(config: &CliConfig, source: &str) -> String {
    let base = &config.base;
    let rows: Vec<(String, String)> = vec![
        ("source".to_string(), source.to_string()),
        ("log_level".to_string(), config.log_level.clone()),
        ("samples".to_string(), config.samples.to_string()),
        ("format".to_string(), format!("{:?}", config.format).to_lowercase()),
        ("base.spot".to_string(), base.spot.to_string()),
        ("base.strike".to_string(), base.strike.to_string()),
        ("base.rate".to_string(), base.rate.to_string()),
        ("base.volatility".to_string(), base.volatility.to_string()),
        ("base.expiry".to_string(), base.expiry.to_string()),
        ("base.option_type".to_string(), base.option_type.to_string()),
    ];
    render_table(("Setting", "Value"), &rows)
}
