//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod implied_vol;
pub mod price;
pub mod sweep;

use std::io::Write;
use std::path::Path;

use clap::Args;
use pricer_models::instruments::{OptionParams, OptionType};

use crate::config::ContractDefaults;
use crate::Result;

/// Contract flags shared by every pricing command
///
/// Unset flags fall back to the `[base]` table of the configuration.
#[derive(Debug, Clone, Default, Args)]
pub struct ContractArgs {
    /// Underlying price S
    #[arg(long)]
    pub spot: Option<f64>,

    /// Strike K
    #[arg(long)]
    pub strike: Option<f64>,

    /// Risk-free rate r (0.05 = 5%)
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Volatility σ (0.2 = 20%)
    #[arg(long)]
    pub vol: Option<f64>,

    /// Time to expiry t in years
    #[arg(long)]
    pub expiry: Option<f64>,

    /// Option type (call, put)
    #[arg(long = "type")]
    pub option_type: Option<OptionType>,
}

impl ContractArgs {
    /// Merges the flags over `defaults`. The result is not validated.
    pub fn resolve(&self, defaults: &ContractDefaults) -> OptionParams {
        OptionParams {
            spot: self.spot.unwrap_or(defaults.spot),
            strike: self.strike.unwrap_or(defaults.strike),
            rate: self.rate.unwrap_or(defaults.rate),
            volatility: self.vol.unwrap_or(defaults.volatility),
            expiry: self.expiry.unwrap_or(defaults.expiry),
            option_type: self.option_type.unwrap_or(defaults.option_type),
        }
    }
}

/// Writes rendered output to `path`, or to stdout when `path` is `None`
pub fn emit(rendered: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, rendered)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Renders a two-column box-drawn table
pub(crate) fn render_table(headers: (&str, &str), rows: &[(String, String)]) -> String {
    let left = rows
        .iter()
        .map(|(l, _)| l.chars().count())
        .chain(std::iter::once(headers.0.chars().count()))
        .max()
        .unwrap_or(0);
    let right = rows
        .iter()
        .map(|(_, r)| r.chars().count())
        .chain(std::iter::once(headers.1.chars().count()))
        .max()
        .unwrap_or(0);

    let rule = |l: char, m: char, r: char| {
        format!(
            "{l}{}{m}{}{r}\n",
            "─".repeat(left + 2),
            "─".repeat(right + 2)
        )
    };

    let mut out = rule('┌', '┬', '┐');
    out.push_str(&format!("│ {:<left$} │ {:>right$} │\n", headers.0, headers.1));
    out.push_str(&rule('├', '┼', '┤'));
    for (l, r) in rows {
        out.push_str(&format!("│ {:<left$} │ {:>right$} │\n", l, r));
    }
    out.push_str(&rule('└', '┴', '┘'));
    out
}
