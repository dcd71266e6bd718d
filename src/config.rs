use std::path::Path;

use crate::ai::Algorithm;
use crate::error::ConfigError;

/// Engine configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search variant: minimax, alphabeta, expected or expected_prune.
    pub algorithm: String,
    /// Search depth in plies.
    pub depth: u32,
    /// Include the trace tree in move reports.
    pub include_tree: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            algorithm: "alphabeta".to_string(),
            depth: 5,
            include_tree: false,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Validation("depth must be >= 1".into()));
        }
        self.algorithm
            .parse::<Algorithm>()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        Ok(())
    }

    /// The configured algorithm, parsed.
    pub fn algorithm(&self) -> Result<Algorithm, ConfigError> {
        self.algorithm
            .parse::<Algorithm>()
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }
}
