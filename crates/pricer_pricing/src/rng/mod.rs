//! # Random Number Generation
//!
//! Seeded generators for scenario and path simulation.
//!
//! - **Reproducibility**: every generator is seeded and records its seed
//! - **Independence**: parallel work derives one stream per path from
//!   `(seed, path index)`; no generator is shared between threads
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::{derive_path_seed, PricerRng};
