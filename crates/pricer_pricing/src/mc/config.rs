//! Path simulation configuration.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Default number of paths.
pub const DEFAULT_PATHS: usize = 10_000;

/// Default number of steps: one per trading day over a year.
pub const DEFAULT_STEPS: usize = 252;

/// Path simulation configuration.
///
/// Use [`PathConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PathConfig;
///
/// let config = PathConfig::builder()
///     .n_paths(10_000)
///     .n_steps(252)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathConfig {
    n_paths: usize,
    n_steps: usize,
    seed: Option<u64>,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            n_steps: DEFAULT_STEPS,
            seed: None,
        }
    }
}

impl PathConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> PathConfigBuilder {
        PathConfigBuilder::default()
    }

    /// Number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Optional global seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - `n_paths` is 0 or greater than 10,000,000
    /// - `n_steps` is 0 or greater than 10,000
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        Ok(())
    }
}

/// Builder for [`PathConfig`].
#[derive(Clone, Debug, Default)]
pub struct PathConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u64>,
}

impl PathConfigBuilder {
    /// Sets the number of paths, in [1, 10_000_000].
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path, in [1, 10_000].
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the global seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the global seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// `ConfigError` if `n_paths` or `n_steps` is missing or out of range.
    pub fn build(self) -> Result<PathConfig, ConfigError> {
        let n_paths = self.n_paths.ok_or(ConfigError::InvalidPathCount(0))?;
        let n_steps = self.n_steps.ok_or(ConfigError::InvalidStepCount(0))?;

        let config = PathConfig {
            n_paths,
            n_steps,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
