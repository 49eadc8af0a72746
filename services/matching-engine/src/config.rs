//! Matching session configuration

use serde::{Deserialize, Serialize};

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid engine config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid engine config: {field} must be greater than zero")]
    Zero { field: &'static str },
}

/// Configuration for a matching session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Trades the tape holds before its first reallocation.
    pub tape_capacity: usize,
    /// Number of price levels per side in session snapshots.
    pub snapshot_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tape_capacity: 1024,
            snapshot_depth: 10,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.snapshot_depth == 0 {
            return Err(ConfigError::Zero { field: "snapshot_depth" });
        }
        Ok(())
    }
}
