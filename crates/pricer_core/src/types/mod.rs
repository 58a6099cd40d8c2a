//! Contract, sensitivity and error types.
//!
//! This module provides:
//! - `option`: Option contract parameters ([`OptionParameters`], [`OptionType`], [`ExerciseStyle`])
//! - `greeks`: Sensitivity set ([`Greeks`])
//! - `error`: Structured error type for pricing operations ([`PricingError`])

pub mod error;
pub mod greeks;
pub mod option;

// Re-export commonly used types at module level
pub use error::{PricingError, PricingResult};
pub use greeks::Greeks;
pub use option::{ExerciseStyle, OptionParameters, OptionParametersBuilder, OptionType};
