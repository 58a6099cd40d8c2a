//! Lattice pricing for European and American options.
//!
//! - `binomial`: Cox-Ross-Rubinstein tree with early exercise
//! - `greeks`: Bump-and-revalue sensitivities shared with the batch kernels

pub mod binomial;
pub mod greeks;

pub use binomial::{
    min_stable_steps, risk_neutral_probability, stable_steps, BinomialTree, MAX_STABLE_STEPS,
};
pub use greeks::{
    finite_difference_greeks, RATE_BUMP, SPOT_BUMP_FRACTION, TIME_BUMP, VOLATILITY_BUMP,
};
