//! Style-routing pricing engine.
//!
//! [`PricingEngine`] is the single entry point used by the risk layer. Each
//! call resolves a [`PricingModel`] from the contract's exercise style and
//! dispatches with a `match`:
//!
//! | Exercise | Model | Greeks |
//! |----------|-------|--------|
//! | European | [`BlackScholes`] | closed form |
//! | American | [`BinomialTree`] | bump-and-revalue |

use pricer_core::traits::OptionPricer;
use pricer_core::types::{ExerciseStyle, Greeks, OptionParameters, PricingError};

use crate::analytical::BlackScholes;
use crate::lattice::BinomialTree;

/// Pricing model selected for a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PricingModel {
    /// Closed-form Black-Scholes.
    Analytic,
    /// Cox-Ross-Rubinstein binomial lattice.
    Lattice,
}

impl PricingModel {
    /// Model used for the given exercise style.
    #[inline]
    pub fn for_style(style: ExerciseStyle) -> Self {
        match style {
            ExerciseStyle::European => PricingModel::Analytic,
            ExerciseStyle::American => PricingModel::Lattice,
        }
    }

    /// Human-readable model name.
    pub fn name(&self) -> &'static str {
        match self {
            PricingModel::Analytic => BlackScholes::NAME,
            PricingModel::Lattice => "Binomial (CRR)",
        }
    }
}

impl std::fmt::Display for PricingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Time steps of the lattice used for American contracts.
    pub lattice_steps: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lattice_steps: BinomialTree::DEFAULT_STEPS,
        }
    }
}

/// Routes each contract to the analytic or lattice pricer.
///
/// # Examples
/// ```
/// use pricer_core::traits::OptionPricer;
/// use pricer_core::types::{OptionParameters, OptionType, ExerciseStyle};
/// use pricer_models::engine::{PricingEngine, PricingModel};
///
/// let engine = PricingEngine::default();
/// let put = OptionParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Put, ExerciseStyle::American).unwrap();
///
/// assert_eq!(engine.model_for(&put), PricingModel::Lattice);
/// assert!(engine.price(&put).unwrap() > 6.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PricingEngine {
    lattice: BinomialTree,
}

impl PricingEngine {
    /// Creates an engine whose lattice uses `steps` time steps.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `steps == 0`.
    pub fn new(steps: usize) -> Result<Self, PricingError> {
        Ok(Self {
            lattice: BinomialTree::new(steps)?,
        })
    }

    /// Creates an engine from configuration.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `config.lattice_steps == 0`.
    pub fn from_config(config: &EngineConfig) -> Result<Self, PricingError> {
        Self::new(config.lattice_steps)
    }

    /// Lattice steps used for American contracts.
    #[inline]
    pub fn lattice_steps(&self) -> usize {
        self.lattice.steps()
    }

    /// The lattice pricer.
    #[inline]
    pub fn lattice(&self) -> &BinomialTree {
        &self.lattice
    }

    /// Model that will price `params`.
    #[inline]
    pub fn model_for(&self, params: &OptionParameters) -> PricingModel {
        PricingModel::for_style(params.exercise_style())
    }
}

impl OptionPricer for PricingEngine {
    fn price(&self, params: &OptionParameters) -> Result<f64, PricingError> {
        match self.model_for(params) {
            PricingModel::Analytic => BlackScholes.price(params),
            PricingModel::Lattice => self.lattice.price(params),
        }
    }

    fn greeks(&self, params: &OptionParameters) -> Result<Greeks, PricingError> {
        match self.model_for(params) {
            PricingModel::Analytic => BlackScholes.greeks(params),
            PricingModel::Lattice => self.lattice.numerical_greeks(params),
        }
    }
}
