//! Batch orchestration configuration

use crate::error::BatchError;
use serde::{Deserialize, Serialize};

/// Configuration for one batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Maximum number of documents accepted per batch
    pub max_documents: usize,

    /// Similarity score at or above which a posting is flagged as a
    /// likely duplicate
    pub duplicate_threshold: f64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_documents: 10,
            duplicate_threshold: 0.7,
        }
    }
}

impl BatchConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), BatchError> {
        if self.max_documents == 0 {
            return Err(BatchError::Config("max_documents must be greater than 0".to_string()));
        }
        if !(0.0..=1.0).contains(&self.duplicate_threshold) {
            return Err(BatchError::Config(
                "duplicate_threshold must be between 0.0 and 1.0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
