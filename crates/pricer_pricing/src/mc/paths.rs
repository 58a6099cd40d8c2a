//! Parallel Geometric Brownian Motion path simulation.
//!
//! Paths use the exact log-space step
//!
//! ```text
//! S(t+dt) = S(t) × exp((r - σ²/2)·dt + σ·√dt·Z)
//! ```
//!
//! # Memory Layout
//!
//! Paths are stored row-major: `data[path_idx * (n_steps + 1) + step_idx]`,
//! where `step_idx = 0` holds the initial spot. Each rayon task owns exactly
//! one row and one generator seeded from `(seed, path_idx)`, so the output
//! does not depend on the number of worker threads.

use rayon::prelude::*;

use pricer_core::types::PricingError;

use super::config::PathConfig;
use super::error::ConfigError;
use crate::rng::PricerRng;

/// Parameters for GBM path generation.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.05, 0.2, 1.0);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Risk-free drift (r), annualised.
    pub rate: f64,
    /// Volatility (σ), annualised.
    pub volatility: f64,
    /// Horizon (T) in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(spot: f64, rate: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
            maturity,
        }
    }

    /// Validates the parameters.
    ///
    /// # Errors
    /// `ConfigError::InvalidParameter` unless `S₀ > 0`, `σ ≥ 0`, `T > 0`
    /// and every field is finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |name: &'static str, value: f64, reason: &'static str| {
            ConfigError::InvalidParameter {
                name,
                value,
                reason,
            }
        };
        if !(self.spot.is_finite() && self.spot > 0.0) {
            return Err(invalid("spot", self.spot, "must be positive and finite"));
        }
        if !self.rate.is_finite() {
            return Err(invalid("rate", self.rate, "must be finite"));
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(invalid(
                "volatility",
                self.volatility,
                "must be non-negative and finite",
            ));
        }
        if !(self.maturity.is_finite() && self.maturity > 0.0) {
            return Err(invalid(
                "maturity",
                self.maturity,
                "must be positive and finite",
            ));
        }
        Ok(())
    }

    /// Risk-neutral expectation of the terminal price, `S₀·e^(rT)`.
    #[inline]
    pub fn expected_terminal(&self) -> f64 {
        self.spot * (self.rate * self.maturity).exp()
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}

/// Simulated paths, `n_paths` rows of `n_steps + 1` prices.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMatrix {
    n_paths: usize,
    n_steps: usize,
    seed: u64,
    data: Vec<f64>,
}

impl PathMatrix {
    /// Number of paths (rows).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps; each row has `n_steps + 1` prices.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Global seed the per-path streams were derived from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Row length.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.n_steps + 1
    }

    /// Prices along path `index`, or `None` if out of range.
    #[inline]
    pub fn path(&self, index: usize) -> Option<&[f64]> {
        if index >= self.n_paths {
            return None;
        }
        let start = index * self.row_len();
        Some(&self.data[start..start + self.row_len()])
    }

    /// Iterator over all rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.row_len())
    }

    /// Final price of every path.
    pub fn terminal_values(&self) -> Vec<f64> {
        self.rows().map(|row| row[self.n_steps]).collect()
    }

    /// Row-major price buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consumes the matrix, returning the row-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}

/// Summary of terminal prices.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TerminalSummary {
    /// Number of paths.
    pub n_paths: usize,
    /// Mean terminal price.
    pub mean: f64,
    /// Population standard deviation of terminal prices.
    pub std_dev: f64,
    /// Smallest terminal price.
    pub min: f64,
    /// Largest terminal price.
    pub max: f64,
}

impl TerminalSummary {
    /// Summarises the last column of `paths`.
    pub fn from_paths(paths: &PathMatrix) -> Self {
        let terminal = paths.terminal_values();
        let n = terminal.len().max(1) as f64;
        let mean = terminal.iter().sum::<f64>() / n;
        let variance = terminal.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        Self {
            n_paths: terminal.len(),
            mean,
            std_dev: variance.sqrt(),
            min: terminal.iter().copied().fold(f64::INFINITY, f64::min),
            max: terminal.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

/// Simulates GBM paths in parallel across paths.
///
/// Without a configured seed a global seed is drawn from OS entropy and
/// recorded in the returned [`PathMatrix`].
///
/// # Errors
/// `PricingError::InvalidParameter` for invalid GBM parameters.
pub fn simulate_gbm_paths(
    params: &GbmParams,
    config: &PathConfig,
) -> Result<PathMatrix, PricingError> {
    params.validate()?;
    config.validate()?;

    let n_paths = config.n_paths();
    let n_steps = config.n_steps();
    let seed = config
        .seed()
        .unwrap_or_else(|| PricerRng::from_entropy().seed());

    let dt = params.maturity / n_steps as f64;
    let drift = (params.rate - 0.5 * params.volatility * params.volatility) * dt;
    let diffusion = params.volatility * dt.sqrt();

    let mut data = vec![0.0; n_paths * (n_steps + 1)];
    data.par_chunks_mut(n_steps + 1)
        .enumerate()
        .for_each(|(index, row)| {
            let mut rng = PricerRng::for_path(seed, index);
            row[0] = params.spot;
            for step in 0..n_steps {
                row[step + 1] = row[step] * (drift + diffusion * rng.gen_normal()).exp();
            }
        });

    Ok(PathMatrix {
        n_paths,
        n_steps,
        seed,
        data,
    })
}

/// Simulates `n_paths` GBM paths of `n_steps` steps from flat arguments.
///
/// # Errors
/// `PricingError::InvalidParameter` for invalid parameters or counts.
///
/// # Examples
/// ```
/// use pricer_pricing::mc::price_paths_batch;
///
/// let paths = price_paths_batch(100.0, 0.2, 0.05, 1.0, 1_000, 52, Some(7)).unwrap();
/// assert_eq!(paths.n_paths(), 1_000);
/// assert_eq!(paths.path(0).unwrap().len(), 53);
/// assert_eq!(paths.path(999).unwrap()[0], 100.0);
/// ```
pub fn price_paths_batch(
    spot: f64,
    volatility: f64,
    rate: f64,
    maturity: f64,
    n_paths: usize,
    n_steps: usize,
    seed: Option<u64>,
) -> Result<PathMatrix, PricingError> {
    let config = PathConfig::builder()
        .n_paths(n_paths)
        .n_steps(n_steps)
        .maybe_seed(seed)
        .build()?;
    simulate_gbm_paths(&GbmParams::new(spot, rate, volatility, maturity), &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config(n_paths: usize, n_steps: usize) -> PathConfig {
        PathConfig::builder()
            .n_paths(n_paths)
            .n_steps(n_steps)
            .seed(42)
            .build()
            .unwrap()
    }

    #[test]
    fn test_shape_and_initial_column() {
        let paths = simulate_gbm_paths(&GbmParams::default(), &config(100, 12)).unwrap();
        assert_eq!(paths.n_paths(), 100);
        assert_eq!(paths.row_len(), 13);
        assert_eq!(paths.as_slice().len(), 1_300);
        assert!(paths.rows().all(|row| row[0] == 100.0));
        assert!(paths.as_slice().iter().all(|&s| s > 0.0));
        assert!(paths.path(100).is_none());
    }

    #[test]
    fn test_zero_volatility_is_deterministic_growth() {
        let params = GbmParams::new(100.0, 0.05, 0.0, 1.0);
        let paths = simulate_gbm_paths(&params, &config(4, 10)).unwrap();
        for value in paths.terminal_values() {
            assert_relative_eq!(value, params.expected_terminal(), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_terminal_mean_is_forward() {
        let params = GbmParams::default();
        let paths = simulate_gbm_paths(&params, &config(20_000, 10)).unwrap();
        let summary = TerminalSummary::from_paths(&paths);

        // Standard error ≈ 21 / √20000 ≈ 0.15
        assert!((summary.mean - params.expected_terminal()).abs() < 0.6);
        assert!(summary.min > 0.0 && summary.max > summary.mean);
    }

    #[test]
    fn test_same_seed_reproducible() {
        let a = simulate_gbm_paths(&GbmParams::default(), &config(50, 20)).unwrap();
        let b = simulate_gbm_paths(&GbmParams::default(), &config(50, 20)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_row_depends_only_on_path_index() {
        // Path 3 of a 10-path run equals path 3 of a 500-path run
        let small = simulate_gbm_paths(&GbmParams::default(), &config(10, 8)).unwrap();
        let large = simulate_gbm_paths(&GbmParams::default(), &config(500, 8)).unwrap();
        assert_eq!(small.path(3), large.path(3));
    }

    #[test]
    fn test_entropy_seed_recorded() {
        let cfg = PathConfig::builder().n_paths(5).n_steps(5).build().unwrap();
        let first = simulate_gbm_paths(&GbmParams::default(), &cfg).unwrap();
        let replay = simulate_gbm_paths(
            &GbmParams::default(),
            &PathConfig::builder()
                .n_paths(5)
                .n_steps(5)
                .seed(first.seed())
                .build()
                .unwrap(),
        )
        .unwrap();
        assert_eq!(first, replay);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(price_paths_batch(-1.0, 0.2, 0.05, 1.0, 10, 10, Some(1)).is_err());
        assert!(price_paths_batch(100.0, -0.2, 0.05, 1.0, 10, 10, Some(1)).is_err());
        assert!(price_paths_batch(100.0, 0.2, 0.05, 0.0, 10, 10, Some(1)).is_err());
        assert!(matches!(
            price_paths_batch(100.0, 0.2, 0.05, 1.0, 0, 10, Some(1)),
            Err(PricingError::InvalidParameter { name: "n_paths", .. })
        ));
    }
}
