//! Hedge command implementation
//!
//! Compares hedging strategies on a book holding one option contract.

use pricer_core::types::OptionType;
use pricer_risk::config::SimulationConfig;
use pricer_risk::hedging::{HedgingSimulator, SimulationResult, StrategyComparison};
use pricer_risk::portfolio::Portfolio;
use tracing::info;

use crate::config::FileConfig;
use crate::{CliError, ContractArgs, OutputFormat, Result};

/// Gamma-hedge put strike as a fraction of the book's strike.
const DEFAULT_HEDGE_MONEYNESS: f64 = 0.95;

/// Arguments of the hedge command.
#[derive(Debug, Clone)]
pub struct HedgeArgs {
    /// Contract held by the book
    pub contract: ContractArgs,
    /// Contracts held
    pub quantity: f64,
    /// Scenario count
    pub scenarios: usize,
    /// Seed override
    pub seed: Option<u64>,
    /// Strike of the gamma-hedge put
    pub hedge_strike: Option<f64>,
    /// Whether to run the gamma strategy
    pub gamma: bool,
}

/// Run the hedge command
pub fn run(config: &FileConfig, args: &HedgeArgs, format: OutputFormat) -> Result<()> {
    if args.scenarios == 0 {
        return Err(CliError::InvalidArgument(
            "--scenarios must be at least 1".to_string(),
        ));
    }

    let params = args.contract.params()?;
    let book = Portfolio::builder().option(params, args.quantity).build();

    let hedge_params = if args.gamma {
        let strike = args
            .hedge_strike
            .unwrap_or(params.strike() * DEFAULT_HEDGE_MONEYNESS);
        Some(
            params
                .with_option_type(OptionType::Put)
                .with_strike(strike)?,
        )
    } else {
        None
    };

    let simulator =
        HedgingSimulator::new(config.engine(None)?, simulation_config(config, args.seed))?;
    info!(
        quantity = args.quantity,
        scenarios = args.scenarios,
        gamma = args.gamma,
        "comparing hedging strategies"
    );
    let comparison = simulator.compare_strategies(&book, args.scenarios, hedge_params.as_ref())?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&comparison)?),
        OutputFormat::Table => print_table(args, &comparison),
    }
    Ok(())
}

/// File settings with the seed overridden when given.
fn simulation_config(config: &FileConfig, seed: Option<u64>) -> SimulationConfig {
    match seed {
        Some(_) => config
            .simulation
            .with_scenarios(config.simulation.scenarios().with_seed(seed)),
        None => config.simulation.clone(),
    }
}

fn print_table(args: &HedgeArgs, comparison: &StrategyComparison) {
    let no_hedge = &comparison.no_hedge;
    println!(
        "Book: {} x {} {} K={:.2} T={:.2}",
        args.quantity,
        args.contract.style,
        args.contract.option_type,
        args.contract.strike,
        args.contract.maturity
    );
    println!(
        "Simulation: {} scenarios, initial value {:.2}",
        no_hedge.scenario_count, no_hedge.initial_value
    );
    println!("{:-<78}", "");
    println!(
        "{:<14} {:>10} {:>12} {:>10} {:>10} {:>10} {:>8}",
        "Strategy", "PnL Std", "Variance", "5th pct", "95th pct", "Delta", "Reduct."
    );
    println!("{:-<78}", "");
    print_row(no_hedge, None);
    print_row(&comparison.delta_hedge, Some(comparison.delta_variance_reduction));
    if let Some(gamma) = &comparison.gamma_hedge {
        print_row(gamma, comparison.gamma_variance_reduction);
    }
    println!("{:-<78}", "");
    println!(
        "Target (>= 15% delta variance reduction): {} ({:.1}%)",
        if comparison.target_met { "MET" } else { "NOT MET" },
        comparison.delta_variance_reduction
    );
}

fn print_row(result: &SimulationResult, reduction: Option<f64>) {
    let stats = &result.statistics;
    let reduction = reduction.map_or_else(|| "-".to_string(), |r| format!("{:.1}%", r));
    println!(
        "{:<14} {:>10.2} {:>12.2} {:>10.2} {:>10.2} {:>10.4} {:>8}",
        result.strategy.label(),
        stats.std_dev,
        stats.variance,
        stats.percentiles.p5,
        stats.percentiles.p95,
        result.portfolio_greeks.delta,
        reduction
    );
}
