//! Check command implementation
//!
//! Reports configuration, runtime parallelism, and a smoke-test price.

use std::path::PathBuf;

use pricer_core::traits::OptionPricer;
use pricer_core::types::{ExerciseStyle, OptionParameters, OptionType};
use tracing::info;

use crate::config::{FileConfig, DEFAULT_CONFIG_FILE};
use crate::Result;

/// Run the check command
pub fn run(config_path: Option<&PathBuf>) -> Result<()> {
    info!("Checking system configuration...");

    println!("hedgelab {}", env!("CARGO_PKG_VERSION"));

    let source = match config_path {
        Some(path) => path.display().to_string(),
        None if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() => {
            DEFAULT_CONFIG_FILE.to_string()
        }
        None => "built-in defaults".to_string(),
    };
    let config = FileConfig::load(config_path)?;
    println!("  Configuration:   {} (valid)", source);
    println!("  Lattice steps:   {}", config.engine.lattice_steps);
    println!("  Rayon threads:   {}", rayon::current_num_threads());

    let engine = config.engine(None)?;
    let call = OptionParameters::new(
        100.0,
        100.0,
        0.2,
        0.05,
        1.0,
        OptionType::Call,
        ExerciseStyle::European,
    )?;
    let american_put = call
        .with_option_type(OptionType::Put)
        .with_exercise_style(ExerciseStyle::American);

    println!("  ATM call (BS):   {:.4}", engine.price(&call)?);
    println!("  ATM put (CRR):   {:.4}", engine.price(&american_put)?);

    info!("System check complete");
    Ok(())
}
