//! Implied volatility command implementation
//!
//! Inverts the Black-Scholes formula for a quoted option price.

use pricer_models::analytical::{implied_volatility, price_bounds, ImpliedVolConfig};
use pricer_models::instruments::OptionParams;
use serde::Serialize;
use tracing::{debug, info};

use super::{emit, render_table};
use crate::config::OutputFormat;
use crate::Result;

#[derive(Debug, Serialize)]
struct ImpliedVolReport<'a> {
    contract: &'a OptionParams,
    price: f64,
    implied_volatility: f64,
}

/// Run the implied-vol command
///
/// The `volatility` of `params` is ignored.
pub fn run(price: f64, params: &OptionParams, format: OutputFormat) -> Result<()> {
    let (lower, upper) = price_bounds(params);
    info!(
        "Solving implied volatility for {} priced at {} (no-arbitrage band [{}, {}))",
        params.option_type, price, lower, upper
    );

    let config = ImpliedVolConfig::default();
    debug!("Solver settings: {:?}", config);
    let sigma = implied_volatility(price, params, &config)?;

    emit(&render(price, sigma, params, format)?, None)
}

/// Formats the solved volatility in the requested format
pub fn render(price: f64, sigma: f64, params: &OptionParams, format: OutputFormat) -> Result<String> {
    let contract = params.with_volatility(sigma);
    match format {
        OutputFormat::Table => {
            let rows = vec![
                ("Price".to_string(), format!("{:.6}", price)),
                ("Implied volatility".to_string(), format!("{:.6}", sigma)),
                ("Implied volatility (%)".to_string(), format!("{:.4}", sigma * 100.0)),
            ];
            Ok(render_table(("Metric", "Value"), &rows))
        }
        OutputFormat::Csv => Ok(format!(
            "option_type,spot,strike,rate,expiry,price,implied_volatility\n{},{},{},{},{},{},{}\n",
            contract.option_type,
            contract.spot,
            contract.strike,
            contract.rate,
            contract.expiry,
            price,
            sigma
        )),
        OutputFormat::Json => {
            let report = ImpliedVolReport {
                contract: &contract,
                price,
                implied_volatility: sigma,
            };
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use pricer_models::analytical::{evaluate, AnalyticalError};
    use pricer_models::instruments::OptionType;

    #[test]
    fn test_render_table() {
        let params = OptionParams::new(100.0, 100.0, 0.05, 0.0, 1.0, OptionType::Call).unwrap();
        let table = render(10.450584, 0.2, &params, OutputFormat::Table).unwrap();
        assert!(table.contains("0.200000"));
        assert!(table.contains("20.0000"));
    }

    #[test]
    fn test_render_json_carries_solved_volatility() {
        let params = OptionParams::new(100.0, 110.0, 0.01, 0.0, 0.5, OptionType::Put).unwrap();
        let price = evaluate(&params.with_volatility(0.35)).unwrap().price;
        let sigma = implied_volatility(price, &params, &ImpliedVolConfig::default()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&render(price, sigma, &params, OutputFormat::Json).unwrap())
                .unwrap();
        let reported = json["contract"]["volatility"].as_f64().unwrap();
        approx::assert_relative_eq!(reported, 0.35, epsilon = 1e-6);
        assert_eq!(json["contract"]["option_type"], "put");
    }

    #[test]
    fn test_render_csv() {
        let params = OptionParams::default();
        let csv = render(4.5, 0.1, &params, OutputFormat::Csv).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[1], "call,100,100,0.05,1,4.5,0.1");
    }

    #[test]
    fn test_run_rejects_price_above_spot() {
        let params = OptionParams::default();
        let result = run(150.0, &params, OutputFormat::Table);
        assert!(matches!(
            result,
            Err(CliError::Pricing(AnalyticalError::InvalidPrice { .. }))
        ));
    }
}
