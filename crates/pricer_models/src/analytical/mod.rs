//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//!
//! ## Design Principles
//!
//! - **Fail fast**: σ ≤ 0, T ≤ 0 or American exercise are rejected before
//!   the formula runs, so no NaN or infinity reaches a caller
//! - **Numerical Stability**: Uses the erfc-based CDF from `pricer_core`

pub mod black_scholes;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, DAYS_PER_YEAR, PERCENT};
