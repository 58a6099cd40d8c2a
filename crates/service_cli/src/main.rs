//! Hedgelab CLI - option pricing, Greeks and hedge-effectiveness simulation
//!
//! # Commands
//!
//! - `hedgelab price` - Price one contract and report its Greeks
//! - `hedgelab validate` - Run the Black-Scholes benchmark suite
//! - `hedgelab hedge` - Compare hedging strategies on a one-option book
//! - `hedgelab paths` - Simulate GBM paths and summarise terminal prices
//! - `hedgelab check` - Check configuration and runtime environment

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pricer_core::types::{ExerciseStyle, OptionParameters, OptionType};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::FileConfig;

/// Hedgelab option pricing and hedging CLI
#[derive(Parser)]
#[command(name = "hedgelab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML); defaults to ./hedgelab.toml if present
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for command results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Contract terms shared by several commands.
#[derive(Args, Debug, Clone)]
pub struct ContractArgs {
    /// Spot price of the underlying
    #[arg(long, default_value_t = 100.0)]
    spot: f64,

    /// Strike price
    #[arg(short = 'k', long, default_value_t = 100.0)]
    strike: f64,

    /// Annualised volatility (0.2 = 20%)
    #[arg(long, default_value_t = 0.2)]
    vol: f64,

    /// Continuously compounded risk-free rate
    #[arg(short, long, default_value_t = 0.05)]
    rate: f64,

    /// Time to maturity in years
    #[arg(short = 't', long, default_value_t = 1.0)]
    maturity: f64,

    /// Option type (call, put)
    #[arg(long = "type", default_value = "call")]
    option_type: OptionType,

    /// Exercise style (european, american)
    #[arg(long, default_value = "european")]
    style: ExerciseStyle,
}

impl ContractArgs {
    /// Validated option parameters.
    pub fn params(&self) -> Result<OptionParameters> {
        Ok(OptionParameters::new(
            self.spot,
            self.strike,
            self.vol,
            self.rate,
            self.maturity,
            self.option_type,
            self.style,
        )?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Price one contract and report its Greeks
    Price {
        #[command(flatten)]
        contract: ContractArgs,

        /// Lattice steps for American contracts (overrides configuration)
        #[arg(long)]
        steps: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Run the Black-Scholes benchmark suite and Greek sanity checks
    Validate {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Compare no-hedge, delta and gamma strategies on a one-option book
    Hedge {
        #[command(flatten)]
        contract: ContractArgs,

        /// Number of contracts held (negative for short)
        #[arg(short, long, default_value_t = 10.0, allow_negative_numbers = true)]
        quantity: f64,

        /// Number of simulated scenarios
        #[arg(short = 'n', long, default_value_t = 1_000)]
        scenarios: usize,

        /// Scenario seed (overrides configuration)
        #[arg(long)]
        seed: Option<u64>,

        /// Strike of the gamma-hedge put (defaults to 95% of the strike)
        #[arg(long)]
        hedge_strike: Option<f64>,

        /// Skip the gamma-hedge run
        #[arg(long)]
        no_gamma: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Simulate GBM paths in parallel and summarise terminal prices
    Paths {
        /// Initial spot price
        #[arg(long, default_value_t = 100.0)]
        spot: f64,

        /// Annualised volatility
        #[arg(long, default_value_t = 0.2)]
        vol: f64,

        /// Risk-free drift rate
        #[arg(short, long, default_value_t = 0.05)]
        rate: f64,

        /// Horizon in years
        #[arg(short = 't', long, default_value_t = 1.0)]
        maturity: f64,

        /// Number of paths (overrides configuration)
        #[arg(short = 'n', long)]
        num_paths: Option<usize>,

        /// Steps per path (overrides configuration)
        #[arg(long)]
        steps: Option<usize>,

        /// Global seed (overrides configuration)
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Check system configuration and runtime environment
    Check,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!("Verbose mode enabled");

    let config = FileConfig::load(cli.config.as_ref())?;

    match cli.command {
        Commands::Price {
            contract,
            steps,
            format,
        } => commands::price::run(&config, &contract, steps, format),
        Commands::Validate { format } => commands::validate::run(&config, format),
        Commands::Hedge {
            contract,
            quantity,
            scenarios,
            seed,
            hedge_strike,
            no_gamma,
            format,
        } => commands::hedge::run(
            &config,
            &commands::hedge::HedgeArgs {
                contract,
                quantity,
                scenarios,
                seed,
                hedge_strike,
                gamma: !no_gamma,
            },
            format,
        ),
        Commands::Paths {
            spot,
            vol,
            rate,
            maturity,
            num_paths,
            steps,
            seed,
            format,
        } => commands::paths::run(
            &config,
            &commands::paths::PathsArgs {
                spot,
                vol,
                rate,
                maturity,
                num_paths,
                steps,
                seed,
            },
            format,
        ),
        Commands::Check => commands::check::run(cli.config.as_ref()),
    }
}
