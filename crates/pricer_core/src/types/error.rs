//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from parameter validation and pricing operations

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every pricing operation validates its inputs at the boundary and reports
/// the failing field together with a human-readable reason, instead of
/// letting NaN or infinity leak into downstream aggregates.
///
/// # Variants
/// - `InvalidParameter`: A contract or configuration field is out of range
/// - `UnsupportedExerciseStyle`: The selected model cannot price this exercise style
/// - `NumericalInstability`: The computation left its well-defined region
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid("spot", -1.0, "must be positive");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter: spot = -1 (must be positive)"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A parameter is outside its valid domain.
    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Name of the offending field
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Why the value was rejected
        reason: String,
    },

    /// Exercise style is not supported by the selected model.
    #[error("Unsupported exercise style: {style} is not supported by {model}")]
    UnsupportedExerciseStyle {
        /// The exercise style that was requested
        style: String,
        /// The model that rejected it
        model: &'static str,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl PricingError {
    /// Shorthand for [`PricingError::InvalidParameter`].
    pub fn invalid(name: &'static str, value: f64, reason: impl Into<String>) -> Self {
        PricingError::InvalidParameter {
            name,
            value,
            reason: reason.into(),
        }
    }

    /// Returns `true` for parameter validation failures.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, PricingError::InvalidParameter { .. })
    }
}

/// Result alias for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;
