//! Core traits shared across the pricing layers.
//!
//! This module defines:
//! - Option valuation and sensitivities (`OptionPricer` trait)
//!
//! Implementors are plain structs and enums; callers are generic over the
//! trait (static dispatch), never `Box<dyn OptionPricer>`.

pub mod pricer;

pub use pricer::OptionPricer;
