//! Paths command implementation
//!
//! Simulates geometric Brownian motion paths in parallel and summarises the
//! terminal distribution against its analytic mean.

use pricer_core::types::PricingError;
use pricer_pricing::mc::{simulate_gbm_paths, GbmParams, PathConfig, TerminalSummary};
use serde_json::json;
use tracing::info;

use crate::config::FileConfig;
use crate::{OutputFormat, Result};

/// Arguments of the paths command.
#[derive(Debug, Clone)]
pub struct PathsArgs {
    /// Initial spot
    pub spot: f64,
    /// Volatility
    pub vol: f64,
    /// Drift rate
    pub rate: f64,
    /// Horizon in years
    pub maturity: f64,
    /// Path count override
    pub num_paths: Option<usize>,
    /// Step count override
    pub steps: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
}

/// Run the paths command
pub fn run(config: &FileConfig, args: &PathsArgs, format: OutputFormat) -> Result<()> {
    let path_config = PathConfig::builder()
        .n_paths(args.num_paths.unwrap_or(config.paths.n_paths()))
        .n_steps(args.steps.unwrap_or(config.paths.n_steps()))
        .maybe_seed(args.seed.or(config.paths.seed()))
        .build()
        .map_err(PricingError::from)?;
    let gbm = GbmParams::new(args.spot, args.rate, args.vol, args.maturity);

    info!(
        n_paths = path_config.n_paths(),
        n_steps = path_config.n_steps(),
        threads = rayon::current_num_threads(),
        "simulating GBM paths"
    );
    let paths = simulate_gbm_paths(&gbm, &path_config)?;
    let summary = TerminalSummary::from_paths(&paths);
    let expected = gbm.expected_terminal();
    let standard_error = summary.std_dev / (summary.n_paths as f64).sqrt();

    match format {
        OutputFormat::Json => {
            let output = json!({
                "n_paths": paths.n_paths(),
                "n_steps": paths.n_steps(),
                "seed": paths.seed(),
                "terminal": summary,
                "expected_mean": expected,
                "standard_error": standard_error,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Table => {
            println!(
                "GBM S0={:.2} σ={:.4} r={:.4} T={:.4}",
                args.spot, args.vol, args.rate, args.maturity
            );
            println!(
                "{} paths x {} steps (seed {})",
                paths.n_paths(),
                paths.n_steps(),
                paths.seed()
            );
            println!();
            println!("Terminal mean    {:>12.4}", summary.mean);
            println!("Expected mean    {:>12.4}", expected);
            println!("Standard error   {:>12.4}", standard_error);
            println!("Std deviation    {:>12.4}", summary.std_dev);
            println!("Min / max        {:>12.4} / {:.4}", summary.min, summary.max);
        }
    }
    Ok(())
}
