//! Hedging error types.
//!
//! This module provides structured error types for scenario generation,
//! portfolio valuation and hedge simulation using `thiserror`.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors that can occur while building hedges or running simulations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HedgingError {
    /// Pricing or parameter validation failed.
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Gamma hedging was requested without a hedge option.
    #[error("Missing hedge instrument: gamma hedging requires hedge option parameters")]
    MissingHedgeInstrument,

    /// The portfolio has no option position to take base market state from.
    #[error("Portfolio is empty: at least one option position is required")]
    EmptyPortfolio,

    /// The hedge option's gamma is too small to solve for a hedge quantity.
    #[error("Degenerate hedge ratio: hedge option gamma {gamma:e} is below {threshold:e}")]
    DegenerateHedgeRatio {
        /// Gamma of the hedge option.
        gamma: f64,
        /// Minimum absolute gamma accepted.
        threshold: f64,
    },

    /// Invalid scenario or simulation configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias for hedging operations.
pub type HedgingResult<T> = Result<T, HedgingError>;
