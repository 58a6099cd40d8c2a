//! Price command implementation
//!
//! Prices one contract through the routing engine and reports its Greeks.

use pricer_core::traits::OptionPricer;
use serde_json::json;
use tracing::info;

use crate::config::FileConfig;
use crate::{ContractArgs, OutputFormat, Result};

/// Run the price command
pub fn run(
    config: &FileConfig,
    contract: &ContractArgs,
    steps: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let params = contract.params()?;
    let engine = config.engine(steps)?;
    let model = engine.model_for(&params);
    info!(%model, lattice_steps = engine.lattice_steps(), "pricing contract");

    let price = engine.price(&params)?;
    let greeks = engine.greeks(&params)?;

    match format {
        OutputFormat::Json => {
            let output = json!({
                "params": params,
                "model": model,
                "price": price,
                "greeks": greeks,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Table => {
            println!(
                "{} {} S={:.2} K={:.2} σ={:.4} r={:.4} T={:.4}",
                params.exercise_style(),
                params.option_type(),
                params.spot(),
                params.strike(),
                params.volatility(),
                params.rate(),
                params.maturity(),
            );
            println!("Model: {}", model);
            println!();
            println!("┌──────────┬──────────────┐");
            println!("│ Price    │ {:>12.4} │", price);
            println!("├──────────┼──────────────┤");
            println!("│ Delta    │ {:>12.4} │", greeks.delta);
            println!("│ Gamma    │ {:>12.4} │", greeks.gamma);
            println!("│ Vega     │ {:>12.4} │", greeks.vega);
            println!("│ Theta    │ {:>12.4} │", greeks.theta);
            println!("│ Rho      │ {:>12.4} │", greeks.rho);
            println!("└──────────┴──────────────┘");
            println!("Vega and rho per 1%, theta per day");
        }
    }

    Ok(())
}
