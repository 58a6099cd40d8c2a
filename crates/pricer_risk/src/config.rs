//! Scenario and simulation configuration.
//!
//! Both configurations are immutable once built; the builders validate at
//! [`ScenarioConfigBuilder::build`] / [`SimulationConfigBuilder::build`],
//! and deserialised values are validated again when a generator or
//! simulator is constructed from them.

use crate::error::HedgingError;
use crate::parallel::ParallelConfig;

/// Default spot shock range as a fraction of spot.
pub const DEFAULT_SPOT_SHOCK_RANGE: (f64, f64) = (-0.2, 0.2);

/// Default volatility shock range as a fraction of volatility.
pub const DEFAULT_VOL_SHOCK_RANGE: (f64, f64) = (-0.5, 0.5);

/// Default elapsed time per scenario: one trading day.
pub const DEFAULT_TIME_STEP: f64 = 1.0 / 252.0;

/// Default lower bound on shocked volatility.
pub const DEFAULT_VOL_FLOOR: f64 = 0.01;

/// Default lower bound on remaining maturity during revaluation.
pub const DEFAULT_MATURITY_FLOOR: f64 = 0.001;

/// Default minimum |delta| for which an underlying hedge is added.
pub const DEFAULT_DELTA_THRESHOLD: f64 = 0.001;

/// Default minimum |gamma| of a gamma-hedge option.
pub const DEFAULT_MIN_HEDGE_GAMMA: f64 = 1e-8;

fn invalid(message: String) -> HedgingError {
    HedgingError::InvalidConfig(message)
}

fn check_range(name: &str, (low, high): (f64, f64)) -> Result<(), HedgingError> {
    if !low.is_finite() || !high.is_finite() {
        return Err(invalid(format!("{} bounds must be finite", name)));
    }
    if low > high {
        return Err(invalid(format!(
            "{} is not ordered: [{}, {}]",
            name, low, high
        )));
    }
    Ok(())
}

/// Market scenario generation settings.
///
/// # Examples
///
/// ```rust
/// use pricer_risk::config::ScenarioConfig;
///
/// let config = ScenarioConfig::builder()
///     .spot_shock_range(-0.1, 0.1)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.spot_shock_range(), (-0.1, 0.1));
/// assert_eq!(config.vol_floor(), 0.01);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScenarioConfig {
    spot_shock_range: (f64, f64),
    vol_shock_range: (f64, f64),
    time_step: f64,
    vol_floor: f64,
    seed: Option<u64>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            spot_shock_range: DEFAULT_SPOT_SHOCK_RANGE,
            vol_shock_range: DEFAULT_VOL_SHOCK_RANGE,
            time_step: DEFAULT_TIME_STEP,
            vol_floor: DEFAULT_VOL_FLOOR,
            seed: None,
        }
    }
}

impl ScenarioConfig {
    /// Creates a new configuration builder with default values.
    #[inline]
    pub fn builder() -> ScenarioConfigBuilder {
        ScenarioConfigBuilder::default()
    }

    /// Spot shock range `[low, high)` as a fraction of spot.
    #[inline]
    pub fn spot_shock_range(&self) -> (f64, f64) {
        self.spot_shock_range
    }

    /// Volatility shock range `[low, high)` as a fraction of volatility.
    #[inline]
    pub fn vol_shock_range(&self) -> (f64, f64) {
        self.vol_shock_range
    }

    /// Time elapsed in each scenario, in years.
    #[inline]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Lower bound on shocked volatility.
    #[inline]
    pub fn vol_floor(&self) -> f64 {
        self.vol_floor
    }

    /// Seed for reproducible scenarios; `None` draws from OS entropy.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Copy with the seed replaced; `None` draws from entropy.
    pub fn with_seed(&self, seed: Option<u64>) -> Self {
        Self {
            seed,
            ..self.clone()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// `HedgingError::InvalidConfig` if:
    /// - a range is unordered or non-finite
    /// - the spot shock lower bound is ≤ -1 (non-positive shocked spot)
    /// - the time step is negative or non-finite
    /// - the vol floor is not positive
    pub fn validate(&self) -> Result<(), HedgingError> {
        check_range("spot_shock_range", self.spot_shock_range)?;
        check_range("vol_shock_range", self.vol_shock_range)?;
        if self.spot_shock_range.0 <= -1.0 {
            return Err(invalid(format!(
                "spot_shock_range lower bound {} must be > -1",
                self.spot_shock_range.0
            )));
        }
        if !(self.time_step.is_finite() && self.time_step >= 0.0) {
            return Err(invalid(format!(
                "time_step {} must be non-negative",
                self.time_step
            )));
        }
        if !(self.vol_floor.is_finite() && self.vol_floor > 0.0) {
            return Err(invalid(format!(
                "vol_floor {} must be positive",
                self.vol_floor
            )));
        }
        Ok(())
    }
}

/// Builder for [`ScenarioConfig`].
#[derive(Clone, Debug, Default)]
pub struct ScenarioConfigBuilder {
    config: ScenarioConfig,
}

impl ScenarioConfigBuilder {
    /// Sets the spot shock range.
    #[inline]
    pub fn spot_shock_range(mut self, low: f64, high: f64) -> Self {
        self.config.spot_shock_range = (low, high);
        self
    }

    /// Sets the volatility shock range.
    #[inline]
    pub fn vol_shock_range(mut self, low: f64, high: f64) -> Self {
        self.config.vol_shock_range = (low, high);
        self
    }

    /// Sets the elapsed time per scenario in years.
    #[inline]
    pub fn time_step(mut self, time_step: f64) -> Self {
        self.config.time_step = time_step;
        self
    }

    /// Sets the volatility floor.
    #[inline]
    pub fn vol_floor(mut self, vol_floor: f64) -> Self {
        self.config.vol_floor = vol_floor;
        self
    }

    /// Sets the seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.config.seed = seed;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// See [`ScenarioConfig::validate`].
    pub fn build(self) -> Result<ScenarioConfig, HedgingError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Hedge simulation settings.
///
/// # Examples
///
/// ```rust
/// use pricer_risk::config::{ScenarioConfig, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .scenarios(ScenarioConfig::builder().seed(42).build().unwrap())
///     .maturity_floor(0.002)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.scenarios().seed(), Some(42));
/// assert_eq!(config.maturity_floor(), 0.002);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    scenarios: ScenarioConfig,
    maturity_floor: f64,
    delta_threshold: f64,
    min_hedge_gamma: f64,
    parallel: ParallelConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            scenarios: ScenarioConfig::default(),
            maturity_floor: DEFAULT_MATURITY_FLOOR,
            delta_threshold: DEFAULT_DELTA_THRESHOLD,
            min_hedge_gamma: DEFAULT_MIN_HEDGE_GAMMA,
            parallel: ParallelConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Creates a new configuration builder with default values.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Scenario generation settings.
    #[inline]
    pub fn scenarios(&self) -> &ScenarioConfig {
        &self.scenarios
    }

    /// Lower bound on remaining maturity during revaluation.
    #[inline]
    pub fn maturity_floor(&self) -> f64 {
        self.maturity_floor
    }

    /// Minimum |delta| for which an underlying hedge is added.
    #[inline]
    pub fn delta_threshold(&self) -> f64 {
        self.delta_threshold
    }

    /// Minimum |gamma| of a gamma-hedge option.
    #[inline]
    pub fn min_hedge_gamma(&self) -> f64 {
        self.min_hedge_gamma
    }

    /// Parallel revaluation settings.
    #[inline]
    pub fn parallel(&self) -> &ParallelConfig {
        &self.parallel
    }

    /// Copy with different scenario settings.
    pub fn with_scenarios(&self, scenarios: ScenarioConfig) -> Self {
        Self {
            scenarios,
            ..self.clone()
        }
    }

    /// Validates the configuration, including the scenario settings.
    ///
    /// # Errors
    /// `HedgingError::InvalidConfig` for a non-positive maturity floor, a
    /// negative or non-finite delta threshold, or a non-positive minimum
    /// hedge gamma.
    pub fn validate(&self) -> Result<(), HedgingError> {
        self.scenarios.validate()?;
        if !(self.maturity_floor.is_finite() && self.maturity_floor > 0.0) {
            return Err(invalid(format!(
                "maturity_floor {} must be positive",
                self.maturity_floor
            )));
        }
        if !(self.delta_threshold.is_finite() && self.delta_threshold >= 0.0) {
            return Err(invalid(format!(
                "delta_threshold {} must be non-negative",
                self.delta_threshold
            )));
        }
        if !(self.min_hedge_gamma.is_finite() && self.min_hedge_gamma > 0.0) {
            return Err(invalid(format!(
                "min_hedge_gamma {} must be positive",
                self.min_hedge_gamma
            )));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    config: SimulationConfig,
}

impl SimulationConfigBuilder {
    /// Sets the scenario settings.
    #[inline]
    pub fn scenarios(mut self, scenarios: ScenarioConfig) -> Self {
        self.config.scenarios = scenarios;
        self
    }

    /// Sets the maturity floor.
    #[inline]
    pub fn maturity_floor(mut self, floor: f64) -> Self {
        self.config.maturity_floor = floor;
        self
    }

    /// Sets the delta-hedge threshold.
    #[inline]
    pub fn delta_threshold(mut self, threshold: f64) -> Self {
        self.config.delta_threshold = threshold;
        self
    }

    /// Sets the minimum hedge-option gamma.
    #[inline]
    pub fn min_hedge_gamma(mut self, gamma: f64) -> Self {
        self.config.min_hedge_gamma = gamma;
        self
    }

    /// Sets the parallel revaluation settings.
    #[inline]
    pub fn parallel(mut self, parallel: ParallelConfig) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// See [`SimulationConfig::validate`].
    pub fn build(self) -> Result<SimulationConfig, HedgingError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
