//! CLI configuration loading.
//!
//! Settings come from an optional TOML file, then command-line overrides:
//!
//! ```toml
//! [engine]
//! lattice_steps = 200
//!
//! [simulation]
//! maturity_floor = 0.001
//! delta_threshold = 0.001
//!
//! [simulation.scenarios]
//! spot_shock_range = [-0.2, 0.2]
//! vol_shock_range = [-0.5, 0.5]
//! seed = 42
//!
//! [paths]
//! n_paths = 10000
//! n_steps = 252
//! ```

use std::path::{Path, PathBuf};

use pricer_models::{EngineConfig, PricingEngine};
use pricer_pricing::mc::PathConfig;
use pricer_risk::config::SimulationConfig;
use serde::Deserialize;
use tracing::debug;

use crate::{CliError, Result};

/// File consulted when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "hedgelab.toml";

/// Contents of a configuration file; every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Pricing engine settings
    pub engine: EngineConfig,
    /// Hedge simulation settings
    pub simulation: SimulationConfig,
    /// Path simulation settings
    pub paths: PathConfig,
}

impl FileConfig {
    /// Parses and validates TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: FileConfig = toml::from_str(content)
            .map_err(|e| CliError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if present, else
    /// defaults.
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        match path {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration");
                Self::from_file(path)
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                debug!(path = DEFAULT_CONFIG_FILE, "loading default configuration");
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    /// Rejects out-of-range values that serde accepted.
    pub fn validate(&self) -> Result<()> {
        PricingEngine::from_config(&self.engine)
            .map_err(|e| CliError::Config(e.to_string()))?;
        self.simulation
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;
        self.paths
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok(())
    }

    /// Pricing engine, with an optional step-count override.
    pub fn engine(&self, lattice_steps: Option<usize>) -> Result<PricingEngine> {
        let config = EngineConfig {
            lattice_steps: lattice_steps.unwrap_or(self.engine.lattice_steps),
        };
        Ok(PricingEngine::from_config(&config)?)
    }
}
