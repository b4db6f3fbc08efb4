//! Extraction pipeline configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the per-document extraction pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum document text length in characters
    pub max_text_length: usize,

    /// Timeout for one extraction call in seconds
    pub extraction_timeout_secs: u64,

    /// Confidence score below which the draft is flagged for review
    pub confidence_warning_threshold: u8,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_text_length: 50_000,
            extraction_timeout_secs: 120,
            confidence_warning_threshold: 70,
        }
    }
}

impl ExtractorConfig {
    /// Get extraction timeout as Duration
    pub fn extraction_timeout(&self) -> Duration {
        Duration::from_secs(self.extraction_timeout_secs)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        if self.extraction_timeout_secs == 0 {
            return Err("extraction_timeout_secs must be greater than 0".to_string());
        }
        if self.confidence_warning_threshold > 100 {
            return Err("confidence_warning_threshold must be at most 100".to_string());
        }
        Ok(())
    }

    /// Preset for long scanned documents: larger limit, longer timeout
    pub fn lenient() -> Self {
        Self {
            max_text_length: 200_000,
            extraction_timeout_secs: 300,
            confidence_warning_threshold: 50,
        }
    }

    /// Preset for short postings with strict review requirements
    pub fn strict() -> Self {
        Self {
            max_text_length: 20_000,
            extraction_timeout_secs: 60,
            confidence_warning_threshold: 80,
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_text_length, 50_000);
        assert_eq!(config.extraction_timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(ExtractorConfig::lenient().validate().is_ok());
        assert!(ExtractorConfig::strict().validate().is_ok());
        assert!(ExtractorConfig::lenient().max_text_length > ExtractorConfig::strict().max_text_length);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExtractorConfig {
            max_text_length: 0,
            ..ExtractorConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ExtractorConfig {
            confidence_warning_threshold: 101,
            ..ExtractorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::strict();
        let toml_str = config.to_toml().unwrap();
        let loaded = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(loaded.max_text_length, config.max_text_length);
        assert_eq!(loaded.extraction_timeout_secs, config.extraction_timeout_secs);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let loaded = ExtractorConfig::from_toml("max_text_length = 1000").unwrap();
        assert_eq!(loaded.max_text_length, 1000);
        assert_eq!(loaded.extraction_timeout_secs, 120);
    }
}
