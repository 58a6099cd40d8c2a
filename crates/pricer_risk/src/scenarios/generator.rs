//! Uniform-shock scenario generator.

use pricer_core::types::PricingError;
use pricer_pricing::rng::PricerRng;

use super::market::MarketScenario;
use crate::config::ScenarioConfig;
use crate::error::HedgingError;

/// Draws i.i.d. uniform spot and volatility shocks around a base state.
///
/// The generator owns its random stream: successive calls to
/// [`ScenarioGenerator::generate`] continue the stream and produce fresh
/// scenarios. Two generators built from the same seeded configuration
/// produce identical sequences.
///
/// # Examples
///
/// ```rust
/// use pricer_risk::config::ScenarioConfig;
/// use pricer_risk::scenarios::ScenarioGenerator;
///
/// let config = ScenarioConfig::builder().seed(42).build().unwrap();
/// let mut generator = ScenarioGenerator::new(config).unwrap();
///
/// let scenarios = generator.generate(100.0, 0.2, 1_000).unwrap();
/// assert_eq!(scenarios.len(), 1_000);
/// assert!(scenarios.iter().all(|s| s.spot >= 80.0 && s.spot < 120.0));
/// assert!(scenarios.iter().all(|s| s.volatility >= 0.01));
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioGenerator {
    config: ScenarioConfig,
    rng: PricerRng,
}

impl ScenarioGenerator {
    /// Creates a generator, seeding from the configuration or OS entropy.
    ///
    /// # Errors
    /// `HedgingError::InvalidConfig` if the configuration is invalid.
    pub fn new(config: ScenarioConfig) -> Result<Self, HedgingError> {
        config.validate()?;
        let rng = match config.seed() {
            Some(seed) => PricerRng::from_seed(seed),
            None => PricerRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    /// Generation settings.
    #[inline]
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Seed of the underlying stream (drawn from entropy if not configured).
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Draws `count` scenarios around `(base_spot, base_vol)`.
    ///
    /// Per scenario, the spot shock is drawn before the volatility shock.
    ///
    /// # Errors
    /// `HedgingError::Pricing` with `InvalidParameter` if `base_spot` is not
    /// positive or `base_vol` is negative.
    pub fn generate(
        &mut self,
        base_spot: f64,
        base_vol: f64,
        count: usize,
    ) -> Result<Vec<MarketScenario>, HedgingError> {
        if !(base_spot.is_finite() && base_spot > 0.0) {
            return Err(PricingError::invalid("base_spot", base_spot, "must be positive").into());
        }
        if !(base_vol.is_finite() && base_vol >= 0.0) {
            return Err(PricingError::invalid("base_vol", base_vol, "must be non-negative").into());
        }

        let (spot_low, spot_high) = self.config.spot_shock_range();
        let (vol_low, vol_high) = self.config.vol_shock_range();
        let vol_floor = self.config.vol_floor();
        let time_elapsed = self.config.time_step();

        let scenarios = (0..count)
            .map(|_| {
                let spot_shock = self.rng.gen_range(spot_low, spot_high);
                let vol_shock = self.rng.gen_range(vol_low, vol_high);
                MarketScenario {
                    spot: base_spot * (1.0 + spot_shock),
                    volatility: (base_vol * (1.0 + vol_shock)).max(vol_floor),
                    time_elapsed,
                    spot_shock,
                    vol_shock,
                }
            })
            .collect();
        Ok(scenarios)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> ScenarioGenerator {
        ScenarioGenerator::new(ScenarioConfig::builder().seed(seed).build().unwrap()).unwrap()
    }

    #[test]
    fn test_bounds() {
        let scenarios = seeded(1).generate(100.0, 0.2, 5_000).unwrap();
        for s in &scenarios {
            let shock = s.spot / 100.0 - 1.0;
            assert!((-0.2 - 1e-12..0.2 + 1e-12).contains(&shock));
            assert!((-0.5..0.5).contains(&s.vol_shock));
            assert!(s.volatility >= 0.01);
            assert_eq!(s.time_elapsed, 1.0 / 252.0);
        }
    }

    #[test]
    fn test_vol_floor_applies() {
        let config = ScenarioConfig::builder()
            .vol_shock_range(-0.99, -0.9)
            .vol_floor(0.05)
            .seed(3)
            .build()
            .unwrap();
        let scenarios = ScenarioGenerator::new(config)
            .unwrap()
            .generate(100.0, 0.2, 100)
            .unwrap();
        assert!(scenarios.iter().all(|s| s.volatility == 0.05));
        assert!(scenarios.iter().all(|s| s.is_vol_floored(0.2)));
    }

    #[test]
    fn test_zero_base_vol_gives_floor() {
        let scenarios = seeded(9).generate(100.0, 0.0, 10).unwrap();
        assert!(scenarios.iter().all(|s| s.volatility == 0.01));
    }

    #[test]
    fn test_seeded_reproducible_and_stream_advances() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        let first = a.generate(100.0, 0.2, 10).unwrap();
        assert_eq!(first, b.generate(100.0, 0.2, 10).unwrap());

        let second = a.generate(100.0, 0.2, 10).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_invalid_base_state() {
        let mut generator = seeded(0);
        assert!(matches!(
            generator.generate(0.0, 0.2, 1),
            Err(HedgingError::Pricing(PricingError::InvalidParameter { .. }))
        ));
        assert!(generator.generate(100.0, -0.1, 1).is_err());
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(seeded(0).generate(100.0, 0.2, 0).unwrap().is_empty());
    }

    #[test]
    fn test_mean_shock_near_zero() {
        let scenarios = seeded(5).generate(100.0, 0.2, 20_000).unwrap();
        let mean = scenarios.iter().map(|s| s.spot_shock).sum::<f64>() / 20_000.0;
        // σ of U(-0.2, 0.2) ≈ 0.115, standard error ≈ 0.0008
        assert!(mean.abs() < 0.005);
    }
}
