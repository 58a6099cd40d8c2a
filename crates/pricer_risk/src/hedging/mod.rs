//! Hedge overlays and their effectiveness under simulated market moves.
//!
//! ```text
//! Portfolio ──hedge(strategy)──► hedged Portfolio
//!                                     │
//!        ScenarioGenerator ──► revalue per scenario ──► PnL series ──► PnlStatistics
//! ```

mod simulator;
mod statistics;
mod strategy;

pub use simulator::{
    variance_reduction, HedgingSimulator, SimulationResult, StrategyComparison,
    TARGET_VARIANCE_REDUCTION_PCT,
};
pub use statistics::{percentile_sorted, PnlPercentiles, PnlStatistics};
pub use strategy::HedgeStrategy;
