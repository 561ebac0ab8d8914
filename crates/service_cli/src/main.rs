//! Greeks CLI - Black-Scholes prices, sensitivities and sweeps
//!
//! This is the command-line entry point for the pricer crates.
//!
//! # Commands
//!
//! - `greeks price` - Price one option and print its Greeks
//! - `greeks sweep --variable <s|k|r|sigma|t>` - Evaluate a metric across a range
//! - `greeks implied-vol --price <P>` - Solve for the volatility matching a price
//! - `greeks check` - Validate configuration and print effective settings
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate orchestrates the pricer
//! layers: `pricer_models` for single valuations and `pricer_risk` for sweeps.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use pricer_models::analytical::OutputMetric;
use pricer_risk::scenarios::SweepVariable;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use commands::ContractArgs;
use config::{CliConfig, OutputFormat};
pub use error::{CliError, Result};

/// Black-Scholes pricing and Greeks CLI
#[derive(Parser)]
#[command(name = "greeks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "greeks.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price one option and print its Greeks
    Price {
        #[command(flatten)]
        contract: ContractArgs,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Evaluate one metric across a range of one contract field
    Sweep {
        #[command(flatten)]
        contract: ContractArgs,

        /// Independent variable (s, k, r, sigma, t)
        #[arg(short = 'x', long)]
        variable: SweepVariable,

        /// Dependent variable (value, delta, gamma, vega, theta, rho)
        #[arg(short, long, default_value = "value")]
        metric: OutputMetric,

        /// Range start (defaults to a window around the base value)
        #[arg(long, allow_negative_numbers = true)]
        from: Option<f64>,

        /// Range end (defaults to a window around the base value)
        #[arg(long, allow_negative_numbers = true)]
        to: Option<f64>,

        /// Number of sample points (defaults to the configured value)
        #[arg(short = 'n', long)]
        samples: Option<usize>,

        /// Space samples logarithmically
        #[arg(long)]
        log: bool,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Solve for the volatility that reproduces a quoted price
    ImpliedVol {
        /// Quoted option price
        #[arg(short, long)]
        price: f64,

        #[command(flatten)]
        contract: ContractArgs,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Check configuration and print the effective settings
    Check,
}

fn init_tracing(log_level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = Path::new(&cli.config);
    let config = CliConfig::load_or_default(config_path)?.with_env_override();

    init_tracing(&config.log_level, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    let source = if config_path.exists() {
        cli.config.clone()
    } else {
        "built-in defaults".to_string()
    };
    debug!("Configuration loaded from {}", source);

    // `check` reports validation problems itself
    if !matches!(cli.command, Commands::Check) {
        config.validate()?;
    }

    match cli.command {
        Commands::Price { contract, format } => {
            let params = contract.resolve(&config.base);
            params.validate()?;
            commands::price::run(&params, format.unwrap_or(config.format))
        }
        Commands::Sweep {
            contract,
            variable,
            metric,
            from,
            to,
            samples,
            log,
            format,
            output,
        } => {
            let request = commands::sweep::SweepRequest {
                variable,
                metric,
                from,
                to,
                samples: samples.unwrap_or(config.samples),
                log,
                format: format.unwrap_or(config.format),
                output: output.as_deref(),
            };
            commands::sweep::run(&contract.resolve(&config.base), &request)
        }
        Commands::ImpliedVol {
            price,
            contract,
            format,
        } => {
            let params = contract.resolve(&config.base);
            commands::implied_vol::run(price, &params, format.unwrap_or(config.format))
        }
        Commands::Check => commands::check::run(&config, &source),
    }
}
