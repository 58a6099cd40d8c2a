//! Randomised market scenarios for stress testing.
//!
//! ```text
//! ScenarioConfig ──► ScenarioGenerator ──► Vec<MarketScenario>
//!   ranges, floor      seeded stream          spot, vol, elapsed
//! ```

mod generator;
mod market;

pub use generator::ScenarioGenerator;
pub use market::MarketScenario;
