//! # Pricer Models
//!
//! Option pricing models and the engine that routes between them.
//!
//! This crate provides:
//! - Closed-form Black-Scholes price and Greeks ([`analytical`])
//! - Cox-Ross-Rubinstein lattice with early exercise ([`lattice`])
//! - Bump-and-revalue Greeks for any pricing function
//! - Exercise-style routing engine ([`engine`])
//! - Benchmark validation suite ([`validation`])
//!
//! ## Design Principles
//!
//! - **Enum dispatch**: the engine resolves a [`engine::PricingModel`] per call
//! - **Immutable inputs**: pricers never modify the contract they are given
//! - **Explicit domains**: out-of-domain inputs are errors, never NaN

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod engine;
pub mod lattice;
pub mod validation;

pub use engine::{EngineConfig, PricingEngine, PricingModel};
