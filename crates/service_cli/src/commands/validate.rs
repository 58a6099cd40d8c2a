//! Validate command implementation
//!
//! Checks the pricing engine against closed-form benchmark prices and
//! Greek sanity rules.

use pricer_models::validation::{greek_sanity_checks, validate_pricing, TOLERANCE_PCT};
use serde_json::json;
use tracing::{info, warn};

use crate::config::FileConfig;
use crate::{CliError, OutputFormat, Result};

/// Run the validate command
pub fn run(config: &FileConfig, format: OutputFormat) -> Result<()> {
    let engine = config.engine(None)?;
    let report = validate_pricing(&engine)?;
    let checks = greek_sanity_checks(&engine)?;
    info!(
        max_error_pct = report.max_error_pct,
        passed = report.passed,
        total = report.total,
        "benchmark suite complete"
    );

    match format {
        OutputFormat::Json => {
            let output = json!({
                "tolerance_pct": TOLERANCE_PCT,
                "benchmarks": report,
                "sanity_checks": checks,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Table => {
            println!("Benchmark validation (tolerance {:.1}%)", TOLERANCE_PCT);
            println!("{:-<72}", "");
            println!(
                "{:<28} {:>10} {:>12} {:>10} {:>8}",
                "Case", "Expected", "Calculated", "Error %", "Status"
            );
            println!("{:-<72}", "");
            for case in &report.results {
                println!(
                    "{:<28} {:>10.4} {:>12.4} {:>10.4} {:>8}",
                    case.name,
                    case.expected,
                    case.calculated,
                    case.error_pct,
                    status(case.passed)
                );
            }
            println!("{:-<72}", "");
            println!(
                "Passed {}/{}  max error {:.4}%  avg error {:.4}%",
                report.passed, report.total, report.max_error_pct, report.avg_error_pct
            );
            println!();
            println!("Greek sanity checks (ATM call)");
            for check in &checks {
                println!("  {:<24} {:>10.6}  {}", check.name, check.value, status(check.passed));
            }
        }
    }

    let failed =
        (report.total - report.passed) + checks.iter().filter(|check| !check.passed).count();
    if failed > 0 {
        warn!(failed, "validation out of tolerance");
        return Err(CliError::ValidationFailed {
            failed,
            total: report.total + checks.len(),
        });
    }
    Ok(())
}

fn status(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL"
    }
}
