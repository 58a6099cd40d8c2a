//! Parallel Monte Carlo path simulation.
//!
//! ```text
//! price_paths_batch / simulate_gbm_paths
//! ├── PathConfig  (path and step counts, seed)
//! ├── GbmParams   (S₀, r, σ, T)
//! └── PathMatrix  (row-major n_paths × (n_steps + 1))
//! ```

mod config;
mod error;
mod paths;

pub use config::{PathConfig, PathConfigBuilder, DEFAULT_PATHS, DEFAULT_STEPS, MAX_PATHS, MAX_STEPS};
pub use error::ConfigError;
pub use paths::{price_paths_batch, simulate_gbm_paths, GbmParams, PathMatrix, TerminalSummary};
