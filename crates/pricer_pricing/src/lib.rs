//! # Pricer Pricing
//!
//! Batched and parallel counterparts of the `pricer_models` engine.
//!
//! - [`kernels`]: flat-argument Black-Scholes and lattice kernels
//! - [`batch`]: [`batch::BatchPricer`], parallel pricing over spot arrays
//!   and contract lists
//! - [`mc`]: parallel GBM path simulation with per-path generators
//! - [`rng`]: seeded random number generation
//!
//! Results agree with the baseline engine within floating-point tolerance;
//! path output is identical for a given seed regardless of thread count.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::mc::price_paths_batch;
//!
//! let paths = price_paths_batch(100.0, 0.2, 0.05, 1.0, 10_000, 252, Some(42)).unwrap();
//! assert_eq!(paths.terminal_values().len(), 10_000);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod batch;
pub mod kernels;
pub mod mc;
pub mod rng;

pub use batch::BatchPricer;
