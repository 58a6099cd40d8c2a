//! # Pricer Risk
//!
//! Scenario generation, portfolio valuation and hedge-effectiveness
//! simulation.
//!
//! This crate provides:
//! - Builder-validated scenario and simulation settings ([`config`])
//! - Seeded uniform-shock market scenarios ([`scenarios`])
//! - Option and underlying positions with immutable hedge tags ([`portfolio`])
//! - Linear portfolio marking and Greek aggregation ([`valuation`])
//! - Delta and gamma hedge overlays with PnL statistics ([`hedging`])
//! - Rayon helpers for scenario revaluation ([`parallel`])
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              pricer_risk                │
//! │  hedging/    - strategies, simulator    │
//! │  valuation   - PortfolioValuer          │
//! │  scenarios/  - ScenarioGenerator        │
//! │  portfolio/  - Position, Portfolio      │
//! │  parallel/   - rayon utilities          │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │     pricer_models / pricer_pricing      │
//! │  PricingEngine, PricerRng               │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::{OptionParameters, OptionType, ExerciseStyle};
//! use pricer_risk::config::{ScenarioConfig, SimulationConfig};
//! use pricer_risk::hedging::HedgingSimulator;
//! use pricer_risk::portfolio::Portfolio;
//! use pricer_models::PricingEngine;
//!
//! let call = OptionParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call, ExerciseStyle::European).unwrap();
//! let book = Portfolio::builder().option(call, 10.0).build();
//!
//! let config = SimulationConfig::builder()
//!     .scenarios(ScenarioConfig::builder().seed(1).build().unwrap())
//!     .build()
//!     .unwrap();
//! let simulator = HedgingSimulator::new(PricingEngine::default(), config).unwrap();
//!
//! let comparison = simulator.compare_strategies(&book, 1_000, None).unwrap();
//! assert!(comparison.delta_variance_reduction > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod error;
pub mod hedging;
pub mod parallel;
pub mod portfolio;
pub mod scenarios;
pub mod valuation;

pub use error::{HedgingError, HedgingResult};
pub use hedging::{HedgeStrategy, HedgingSimulator, SimulationResult, StrategyComparison};
pub use portfolio::{Portfolio, Position};
pub use valuation::PortfolioValuer;
