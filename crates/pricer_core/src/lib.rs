//! # pricer_core: Foundation types for option pricing and hedging
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Option contract parameters: `OptionParameters`, `OptionType`, `ExerciseStyle` (`types::option`)
//! - Sensitivities: `Greeks` (`types::greeks`)
//! - Error types: `PricingError` (`types::error`)
//! - Standard normal distribution functions (`math::distributions`)
//! - The `OptionPricer` trait implemented by every model (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::norm_cdf;
//! use pricer_core::types::{OptionParameters, OptionType, ExerciseStyle};
//!
//! let params = OptionParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call, ExerciseStyle::European).unwrap();
//! let bumped = params.with_volatility(0.21).unwrap();
//! assert_eq!(params.volatility(), 0.2);
//! assert_eq!(bumped.volatility(), 0.21);
//!
//! assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for parameters, Greeks and enums

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
