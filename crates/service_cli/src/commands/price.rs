//! Price command implementation
//!
//! Prices a single European option and reports its Greeks.

use pricer_models::analytical::{evaluate, Valuation};
use pricer_models::instruments::OptionParams;
use serde::Serialize;
use tracing::info;

use super::{emit, render_table};
use crate::config::OutputFormat;
use crate::Result;

#[derive(Debug, Serialize)]
struct PriceReport<'a> {
    contract: &'a OptionParams,
    valuation: &'a Valuation<f64>,
    vega_per_percent: f64,
    theta_per_day: f64,
    rho_per_percent: f64,
}

#[derive(Debug, Serialize)]
struct PriceRow {
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    expiry: f64,
    option_type: &'static str,
    price: f64,
    delta: f64,
    gamma: f64,
    vega: f64,
    theta: f64,
    rho: f64,
}

/// Run the price command
pub fn run(params: &OptionParams, format: OutputFormat) -> Result<()> {
    info!(
        "Pricing {} S={} K={} r={} σ={} t={}",
        params.option_type, params.spot, params.strike, params.rate, params.volatility, params.expiry
    );

    let valuation = evaluate(params)?;
    emit(&render(params, &valuation, format)?, None)
}

/// Formats a valuation in the requested format
pub fn render(params: &OptionParams, valuation: &Valuation<f64>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_valuation_table(params, valuation)),
        OutputFormat::Json => {
            let report = PriceReport {
                contract: params,
                valuation,
                vega_per_percent: valuation.vega_per_percent(),
                theta_per_day: valuation.theta_per_day(),
                rho_per_percent: valuation.rho_per_percent(),
            };
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Csv => {
            let greeks = &valuation.greeks;
            let row = PriceRow {
                spot: params.spot,
                strike: params.strike,
                rate: params.rate,
                volatility: params.volatility,
                expiry: params.expiry,
                option_type: params.option_type.as_str(),
                price: valuation.price,
                delta: greeks.delta,
                gamma: greeks.gamma,
                vega: greeks.vega,
                theta: greeks.theta,
                rho: greeks.rho,
            };
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.serialize(row)?;
            let bytes = writer
                .into_inner()
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

fn render_valuation_table(params: &OptionParams, valuation: &Valuation<f64>) -> String {
    let greeks = &valuation.greeks;
    let rows: Vec<(String, String)> = [
        ("Price", valuation.price),
        ("Delta", greeks.delta),
        ("Gamma", greeks.gamma),
        ("Vega", greeks.vega),
        ("Vega (1% vol)", valuation.vega_per_percent()),
        ("Theta (per year)", greeks.theta),
        ("Theta (per day)", valuation.theta_per_day()),
        ("Rho", greeks.rho),
        ("Rho (1% rate)", valuation.rho_per_percent()),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), format!("{:.6}", value)))
    .collect();

    let title = format!(
        "{} S={} K={} r={} σ={} t={}\n",
        params.option_type.title(),
        params.spot,
        params.strike,
        params.rate,
        params.volatility,
        params.expiry
    );
    title + &render_table(("Metric", "Value"), &rows)
}
