//! CLI error types.

use pricer_core::types::PricingError;
use pricer_risk::HedgingError;
use thiserror::Error;

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A command-line argument was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Pricing failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Hedge construction or simulation failed.
    #[error(transparent)]
    Hedging(#[from] HedgingError),

    /// The benchmark suite missed its tolerance.
    #[error("Validation failed: {failed} of {total} checks out of tolerance")]
    ValidationFailed {
        /// Failing cases and sanity checks
        failed: usize,
        /// Total cases and sanity checks
        total: usize,
    },

    /// JSON output could not be produced.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
