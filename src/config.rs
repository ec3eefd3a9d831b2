use crate::percolation::CONFIDENCE_95;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Settings for a statistics run, loadable from a TOML file.
///
/// ```toml
/// grid_size = 200
/// trials = 100
/// seed = 7
/// progress = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub grid_size: Option<usize>,
    pub trials: Option<usize>,
    pub seed: Option<u64>,
    pub confidence_z: f64,
    pub progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            grid_size: None,
            trials: None,
            seed: None,
            confidence_z: CONFIDENCE_95,
            progress: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("confidence_z must be a positive finite number, got {0}")]
    InvalidConfidence(f64),
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.confidence_z.is_finite() || self.confidence_z <= 0.0 {
            return Err(ConfigError::InvalidConfidence(self.confidence_z));
        }
        Ok(())
    }

    /// Overrides file values with whatever was given on the command line.
    pub fn merge_cli(
        mut self,
        grid_size: Option<usize>,
        trials: Option<usize>,
        seed: Option<u64>,
        progress: bool,
    ) -> Self {
        self.grid_size = grid_size.or(self.grid_size);
        self.trials = trials.or(self.trials);
        self.seed = seed.or(self.seed);
        self.progress |= progress;
        self
    }
}
