//! Hedge construction and scenario-based effectiveness simulation.

use pricer_core::traits::OptionPricer;
use pricer_core::types::{Greeks, OptionParameters, PricingError};
use pricer_models::PricingEngine;
use tracing::{debug, info};

use super::statistics::PnlStatistics;
use super::strategy::HedgeStrategy;
use crate::config::SimulationConfig;
use crate::error::{HedgingError, HedgingResult};
use crate::parallel::try_map_ordered;
use crate::portfolio::{Portfolio, Position};
use crate::scenarios::{MarketScenario, ScenarioGenerator};
use crate::valuation::PortfolioValuer;

/// Delta-hedge variance reduction (in percent) treated as acceptable.
pub const TARGET_VARIANCE_REDUCTION_PCT: f64 = 15.0;

/// Outcome of one `(portfolio, strategy)` simulation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// Strategy applied before revaluation
    pub strategy: HedgeStrategy,
    /// Number of scenarios revalued
    pub scenario_count: usize,
    /// Hedged book value at the base market state
    pub initial_value: f64,
    /// PnL distribution statistics
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub statistics: PnlStatistics,
    /// Per-scenario PnL, in scenario order
    pub pnl_series: Vec<f64>,
    /// Scenarios the book was revalued under
    pub scenarios: Vec<MarketScenario>,
    /// Aggregate Greeks of the hedged book at inception
    pub portfolio_greeks: Greeks,
    /// The book actually simulated, including hedge positions
    pub hedged_portfolio: Portfolio,
}

/// Side-by-side results of the hedging strategies on one book.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyComparison {
    /// Unhedged run
    pub no_hedge: SimulationResult,
    /// Delta-hedged run
    pub delta_hedge: SimulationResult,
    /// Gamma-hedged run, when a hedge option was supplied
    pub gamma_hedge: Option<SimulationResult>,
    /// `(1 - var_delta / var_none) · 100`
    pub delta_variance_reduction: f64,
    /// `(1 - var_gamma / var_none) · 100`
    pub gamma_variance_reduction: Option<f64>,
    /// Whether the delta hedge reached [`TARGET_VARIANCE_REDUCTION_PCT`]
    pub target_met: bool,
}

impl StrategyComparison {
    /// Results in `none`, `delta`, `gamma` order.
    pub fn results(&self) -> impl Iterator<Item = &SimulationResult> {
        [Some(&self.no_hedge), Some(&self.delta_hedge), self.gamma_hedge.as_ref()]
            .into_iter()
            .flatten()
    }
}

/// Percentage variance reduction of `hedged` relative to `base`.
///
/// Returns 0 when the base variance is zero, since no reduction is
/// measurable.
pub fn variance_reduction(base: f64, hedged: f64) -> f64 {
    if base.abs() <= f64::EPSILON {
        0.0
    } else {
        (1.0 - hedged / base) * 100.0
    }
}

/// Builds hedge overlays and measures their effectiveness under random
/// market scenarios.
///
/// Hedge construction never mutates the caller's portfolio; each hedge
/// returns a new book with the hedge positions appended.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{OptionParameters, OptionType, ExerciseStyle};
/// use pricer_models::PricingEngine;
/// use pricer_risk::config::{ScenarioConfig, SimulationConfig};
/// use pricer_risk::hedging::{HedgeStrategy, HedgingSimulator};
/// use pricer_risk::portfolio::Portfolio;
///
/// let call = OptionParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call, ExerciseStyle::European).unwrap();
/// let book = Portfolio::builder().option(call, 10.0).build();
///
/// let config = SimulationConfig::builder()
///     .scenarios(ScenarioConfig::builder().seed(7).build().unwrap())
///     .build()
///     .unwrap();
/// let simulator = HedgingSimulator::new(PricingEngine::default(), config).unwrap();
///
/// let none = simulator.simulate_effectiveness(&book, HedgeStrategy::None, 500, None).unwrap();
/// let delta = simulator.simulate_effectiveness(&book, HedgeStrategy::Delta, 500, None).unwrap();
/// assert!(delta.statistics.variance < none.statistics.variance);
/// ```
#[derive(Debug, Clone)]
pub struct HedgingSimulator<P = PricingEngine> {
    valuer: PortfolioValuer<P>,
    config: SimulationConfig,
}

impl Default for HedgingSimulator<PricingEngine> {
    fn default() -> Self {
        Self {
            valuer: PortfolioValuer::default(),
            config: SimulationConfig::default(),
        }
    }
}

impl<P: OptionPricer + Sync> HedgingSimulator<P> {
    /// Creates a simulator around `pricer`.
    ///
    /// # Errors
    /// `HedgingError::InvalidConfig` if `config` fails validation.
    pub fn new(pricer: P, config: SimulationConfig) -> HedgingResult<Self> {
        config.validate()?;
        let valuer = PortfolioValuer::new(pricer).with_maturity_floor(config.maturity_floor());
        Ok(Self { valuer, config })
    }

    /// Portfolio valuer used for marking.
    #[inline]
    pub fn valuer(&self) -> &PortfolioValuer<P> {
        &self.valuer
    }

    /// Simulation settings.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Appends an underlying hedge of `-delta` when `|delta|` exceeds the
    /// configured threshold.
    ///
    /// # Errors
    /// - `PricingError::NumericalInstability` if the aggregate delta is not
    ///   finite
    /// - Propagates pricing errors from Greek aggregation
    pub fn delta_hedge(&self, portfolio: &Portfolio) -> HedgingResult<Portfolio> {
        let delta = self.valuer.aggregate_greeks(portfolio)?.delta;
        if !delta.is_finite() {
            return Err(PricingError::NumericalInstability(format!(
                "portfolio delta {} is not finite",
                delta
            ))
            .into());
        }
        let quantity = -delta;
        if quantity.abs() > self.config.delta_threshold() {
            debug!(hedge_quantity = quantity, "appending delta hedge");
            Ok(portfolio.with_position(Position::hedge_underlying(quantity)))
        } else {
            debug!(delta, "delta below threshold, no hedge");
            Ok(portfolio.clone())
        }
    }

    /// Neutralises gamma with `hedge_params`, then delta-hedges the
    /// combined book.
    ///
    /// # Errors
    /// - `HedgingError::DegenerateHedgeRatio` if the hedge option's gamma
    ///   is below the configured minimum in absolute value, or the hedge
    ///   quantity overflows
    /// - Propagates pricing errors
    pub fn gamma_hedge(
        &self,
        portfolio: &Portfolio,
        hedge_params: &OptionParameters,
    ) -> HedgingResult<Portfolio> {
        let portfolio_gamma = self.valuer.aggregate_greeks(portfolio)?.gamma;
        let hedge_gamma = self.valuer.pricer().greeks(hedge_params)?.gamma;
        let threshold = self.config.min_hedge_gamma();
        if !(hedge_gamma.abs() >= threshold) {
            return Err(HedgingError::DegenerateHedgeRatio {
                gamma: hedge_gamma,
                threshold,
            });
        }

        let quantity = -portfolio_gamma / hedge_gamma;
        if !quantity.is_finite() {
            return Err(HedgingError::DegenerateHedgeRatio {
                gamma: hedge_gamma,
                threshold,
            });
        }
        debug!(portfolio_gamma, hedge_gamma, hedge_quantity = quantity, "appending gamma hedge");
        let gamma_neutral = portfolio.with_position(Position::hedge_option(*hedge_params, quantity));
        self.delta_hedge(&gamma_neutral)
    }

    /// Applies `strategy` to `portfolio`.
    ///
    /// # Errors
    /// `HedgingError::MissingHedgeInstrument` for [`HedgeStrategy::Gamma`]
    /// without `hedge_params`; otherwise as the individual hedges.
    pub fn hedge(
        &self,
        portfolio: &Portfolio,
        strategy: HedgeStrategy,
        hedge_params: Option<&OptionParameters>,
    ) -> HedgingResult<Portfolio> {
        match strategy {
            HedgeStrategy::None => Ok(portfolio.clone()),
            HedgeStrategy::Delta => self.delta_hedge(portfolio),
            HedgeStrategy::Gamma => {
                let params = hedge_params.ok_or(HedgingError::MissingHedgeInstrument)?;
                self.gamma_hedge(portfolio, params)
            }
        }
    }

    /// Hedges `portfolio`, revalues it under `count` random scenarios and
    /// summarises the PnL against the base state.
    ///
    /// The base market state is the spot and volatility of the first
    /// option position. A seeded scenario configuration draws the same
    /// scenarios on every call, so strategies compared on one simulator
    /// see common random numbers.
    ///
    /// # Errors
    /// - `HedgingError::InvalidConfig` if `count == 0`
    /// - `HedgingError::EmptyPortfolio` if there is no option position
    /// - `HedgingError::MissingHedgeInstrument` for gamma without
    ///   `hedge_params`
    /// - `HedgingError::DegenerateHedgeRatio` from the gamma hedge
    /// - `HedgingError::Pricing` if any revaluation fails; the whole run
    ///   aborts
    pub fn simulate_effectiveness(
        &self,
        portfolio: &Portfolio,
        strategy: HedgeStrategy,
        count: usize,
        hedge_params: Option<&OptionParameters>,
    ) -> HedgingResult<SimulationResult> {
        if count == 0 {
            return Err(HedgingError::InvalidConfig(
                "scenario count must be > 0".to_string(),
            ));
        }
        let base = *portfolio.first_option().ok_or(HedgingError::EmptyPortfolio)?;
        if strategy.requires_hedge_option() && hedge_params.is_none() {
            return Err(HedgingError::MissingHedgeInstrument);
        }

        let hedged = self.hedge(portfolio, strategy, hedge_params)?;
        let initial_value = self
            .valuer
            .value(&hedged, base.spot(), Some(base.volatility()), 0.0)?;

        let mut generator = ScenarioGenerator::new(self.config.scenarios().clone())?;
        let scenarios = generator.generate(base.spot(), base.volatility(), count)?;
        let vol_floored = scenarios
            .iter()
            .filter(|s| s.is_vol_floored(base.volatility()))
            .count();
        debug!(
            %strategy,
            count,
            vol_floored,
            seed = generator.seed(),
            initial_value,
            "revaluing scenarios"
        );

        let pnl_series = try_map_ordered(&scenarios, self.config.parallel(), |s| {
            self.valuer
                .value(&hedged, s.spot, Some(s.volatility), s.time_elapsed)
                .map(|value| value - initial_value)
        })?;

        let statistics = PnlStatistics::from_samples(&pnl_series).ok_or_else(|| {
            HedgingError::InvalidConfig("no PnL samples were produced".to_string())
        })?;
        let portfolio_greeks = self.valuer.aggregate_greeks(&hedged)?;

        info!(
            %strategy,
            count,
            pnl_mean = statistics.mean,
            pnl_std = statistics.std_dev,
            "simulation complete"
        );

        Ok(SimulationResult {
            strategy,
            scenario_count: count,
            initial_value,
            statistics,
            pnl_series,
            scenarios,
            portfolio_greeks,
            hedged_portfolio: hedged,
        })
    }

    /// Runs `none` and `delta`, plus `gamma` when `hedge_params` is given,
    /// and reports variance reductions against the unhedged run.
    ///
    /// # Errors
    /// Any error from [`HedgingSimulator::simulate_effectiveness`].
    pub fn compare_strategies(
        &self,
        portfolio: &Portfolio,
        count: usize,
        hedge_params: Option<&OptionParameters>,
    ) -> HedgingResult<StrategyComparison> {
        let no_hedge = self.simulate_effectiveness(portfolio, HedgeStrategy::None, count, None)?;
        let delta_hedge =
            self.simulate_effectiveness(portfolio, HedgeStrategy::Delta, count, None)?;
        let gamma_hedge = hedge_params
            .map(|params| {
                self.simulate_effectiveness(portfolio, HedgeStrategy::Gamma, count, Some(params))
            })
            .transpose()?;

        let base_variance = no_hedge.statistics.variance;
        let delta_variance_reduction =
            variance_reduction(base_variance, delta_hedge.statistics.variance);
        let gamma_variance_reduction = gamma_hedge
            .as_ref()
            .map(|result| variance_reduction(base_variance, result.statistics.variance));
        let target_met = delta_variance_reduction >= TARGET_VARIANCE_REDUCTION_PCT;

        info!(
            delta_variance_reduction,
            gamma_variance_reduction = gamma_variance_reduction.unwrap_or(f64::NAN),
            target_met,
            "strategy comparison complete"
        );

        Ok(StrategyComparison {
            no_hedge,
            delta_hedge,
            gamma_hedge,
            delta_variance_reduction,
            gamma_variance_reduction,
            target_met,
        })
    }
}
