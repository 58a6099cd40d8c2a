//! Error types for path simulation configuration.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Configuration error for path simulation.
///
/// Raised by [`super::PathConfigBuilder::build`] before any path is
/// generated. Converts into [`PricingError::InvalidParameter`] at the
/// public simulation entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Path count outside [1, MAX_PATHS].
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Step count outside [1, MAX_STEPS].
    #[error("Invalid step count {0}: must be in range [1, 10_000]")]
    InvalidStepCount(usize),

    /// Invalid model parameter.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Constraint that was violated.
        reason: &'static str,
    },
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidPathCount(n) => {
                PricingError::invalid("n_paths", n as f64, "must be in range [1, 10_000_000]")
            }
            ConfigError::InvalidStepCount(n) => {
                PricingError::invalid("n_steps", n as f64, "must be in range [1, 10_000]")
            }
            ConfigError::InvalidParameter {
                name,
                value,
                reason,
            } => PricingError::invalid(name, value, reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("Invalid path count 0"));

        let err = ConfigError::InvalidStepCount(20_000);
        assert!(err.to_string().contains("Invalid step count 20000"));
    }

    #[test]
    fn test_converts_to_pricing_error() {
        let err: PricingError = ConfigError::InvalidParameter {
            name: "volatility",
            value: -0.1,
            reason: "must be non-negative",
        }
        .into();
        assert!(matches!(
            err,
            PricingError::InvalidParameter {
                name: "volatility",
                ..
            }
        ));
    }
}
