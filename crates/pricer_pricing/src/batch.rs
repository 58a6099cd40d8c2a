//! Batched pricing over many spots or many contracts.
//!
//! Every input is validated before any work is dispatched, so a batch
//! either fails up front or prices every element. Elements are independent
//! and priced in parallel with rayon; each worker owns its lattice buffer.

use std::cell::RefCell;

use rayon::prelude::*;

use pricer_core::types::{Greeks, OptionParameters, PricingError};
use pricer_models::analytical::BlackScholes;
use pricer_models::engine::{PricingEngine, PricingModel};
use pricer_models::lattice::{finite_difference_greeks, BinomialTree};

use crate::kernels::{bs_greeks, bs_price, lattice_price, LatticeInputs};

/// Parallel counterpart of [`PricingEngine`].
///
/// Routes by exercise style exactly like the baseline engine: European
/// contracts use the closed-form kernels, American ones the lattice kernel
/// with bump-and-revalue Greeks.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionParameters, OptionType, ExerciseStyle};
/// use pricer_pricing::batch::BatchPricer;
///
/// let call = OptionParameters::new(100.0, 100.0, 0.25, 0.05, 1.0, OptionType::Call, ExerciseStyle::European).unwrap();
/// let spots: Vec<f64> = (80..=120).map(f64::from).collect();
///
/// let prices = BatchPricer::default().price_spots(&call, &spots).unwrap();
/// assert_eq!(prices.len(), spots.len());
/// assert!(prices.windows(2).all(|w| w[1] > w[0]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPricer {
    lattice_steps: usize,
}

impl Default for BatchPricer {
    fn default() -> Self {
        Self {
            lattice_steps: BinomialTree::DEFAULT_STEPS,
        }
    }
}

impl From<&PricingEngine> for BatchPricer {
    fn from(engine: &PricingEngine) -> Self {
        Self {
            lattice_steps: engine.lattice_steps(),
        }
    }
}

impl BatchPricer {
    /// Creates a batch pricer whose lattice uses `steps` time steps.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `steps == 0`.
    pub fn new(steps: usize) -> Result<Self, PricingError> {
        let tree = BinomialTree::new(steps)?;
        Ok(Self {
            lattice_steps: tree.steps(),
        })
    }

    /// Lattice steps used for American contracts.
    #[inline]
    pub fn lattice_steps(&self) -> usize {
        self.lattice_steps
    }

    /// Prices `base` at each spot in `spots`.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if any spot is not positive and
    /// finite, or if the contract is outside its model's domain.
    pub fn price_spots(
        &self,
        base: &OptionParameters,
        spots: &[f64],
    ) -> Result<Vec<f64>, PricingError> {
        let contracts = Self::respot(base, spots)?;
        self.price_many(&contracts)
    }

    /// Greeks of `base` at each spot in `spots`.
    ///
    /// # Errors
    /// Same conditions as [`BatchPricer::price_spots`].
    pub fn greeks_spots(
        &self,
        base: &OptionParameters,
        spots: &[f64],
    ) -> Result<Vec<Greeks>, PricingError> {
        let contracts = Self::respot(base, spots)?;
        self.greeks_many(&contracts)
    }

    /// Prices every contract, in input order.
    ///
    /// # Errors
    /// The first validation error in input order; the lattice reports
    /// `NumericalInstability` when a contract would need more than
    /// `MAX_STABLE_STEPS` steps.
    pub fn price_many(&self, contracts: &[OptionParameters]) -> Result<Vec<f64>, PricingError> {
        Self::check_domains(contracts)?;
        let steps = self.lattice_steps;

        contracts
            .par_iter()
            .map_init(Vec::new, |buffer, params| {
                match PricingModel::for_style(params.exercise_style()) {
                    PricingModel::Analytic => Ok(bs_price(
                        params.spot(),
                        params.strike(),
                        params.volatility(),
                        params.rate(),
                        params.maturity(),
                        params.is_call(),
                    )),
                    PricingModel::Lattice => {
                        lattice_price(&LatticeInputs::from(params), steps, buffer)
                    }
                }
            })
            .collect()
    }

    /// Greeks of every contract, in input order.
    ///
    /// # Errors
    /// Same conditions as [`BatchPricer::price_many`].
    pub fn greeks_many(
        &self,
        contracts: &[OptionParameters],
    ) -> Result<Vec<Greeks>, PricingError> {
        Self::check_domains(contracts)?;
        let steps = self.lattice_steps;

        contracts
            .par_iter()
            .map(|params| match PricingModel::for_style(params.exercise_style()) {
                PricingModel::Analytic => Ok(bs_greeks(
                    params.spot(),
                    params.strike(),
                    params.volatility(),
                    params.rate(),
                    params.maturity(),
                    params.is_call(),
                )),
                PricingModel::Lattice => {
                    let buffer = RefCell::new(Vec::with_capacity(steps + 1));
                    finite_difference_greeks(params, |bumped| {
                        lattice_price(&LatticeInputs::from(bumped), steps, &mut buffer.borrow_mut())
                    })
                }
            })
            .collect()
    }

    fn respot(base: &OptionParameters, spots: &[f64]) -> Result<Vec<OptionParameters>, PricingError> {
        spots.iter().map(|&spot| base.with_spot(spot)).collect()
    }

    fn check_domains(contracts: &[OptionParameters]) -> Result<(), PricingError> {
        for params in contracts {
            match PricingModel::for_style(params.exercise_style()) {
                PricingModel::Analytic => BlackScholes::check_domain(params)?,
                PricingModel::Lattice => {
                    if params.maturity() > 0.0 && params.volatility() <= 0.0 {
                        return Err(PricingError::invalid(
                            "volatility",
                            params.volatility(),
                            "must be positive for the binomial lattice",
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}
