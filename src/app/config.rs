//! Configuration Management

use crate::alphabet::Alphabet;
use crate::landmark::types::REFERENCE_KEYPOINT_COUNT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Session settings
    pub session: SessionConfig,
    /// Tracker settings
    #[serde(default)]
    pub tracker: TrackerConfig,
    /// Grammar-correction settings
    pub correction: CorrectionConfig,
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Minimum time gap between captures, in seconds
    pub capture_interval_secs: f64,
    /// Ordered alphabet charset, matching the classifier's class order
    pub alphabet: String,
    /// Keypoints per hand, fixed by the tracking model
    pub keypoint_count: usize,
}

/// Tracker configuration (hints passed through to the tracking model)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Maximum number of hands per frame
    pub max_hands: usize,
    /// Minimum confidence for an initial detection
    pub min_detection_confidence: f32,
    /// Minimum confidence for tracking an already-detected hand
    pub min_tracking_confidence: f32,
}

/// Grammar-correction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionConfig {
    /// text2text-generation endpoint URL
    pub endpoint: String,
    /// Maximum generated length
    pub max_length: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capture_interval_secs: 1.0,
            alphabet: Alphabet::default_charset(),
            keypoint_count: REFERENCE_KEYPOINT_COUNT,
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_hands: 2,
            min_detection_confidence: 0.7,
            min_tracking_confidence: 0.7,
        }
    }
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            endpoint:
                "https://api-inference.huggingface.co/models/prithivida/grammar_error_correcter_v1"
                    .to_string(),
            max_length: 50,
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.session.capture_interval_secs < 0.0
            || !self.session.capture_interval_secs.is_finite()
        {
            return Err(crate::Error::Config(format!(
                "capture_interval_secs must be non-negative, got {}",
                self.session.capture_interval_secs
            )));
        }
        Alphabet::from_charset(&self.session.alphabet)?;
        if self.session.keypoint_count == 0 {
            return Err(crate::Error::Config(
                "keypoint_count must be > 0".to_string(),
            ));
        }
        if self.tracker.max_hands == 0 {
            return Err(crate::Error::Config("max_hands must be > 0".to_string()));
        }
        if !(0.0..=1.0).contains(&self.tracker.min_detection_confidence) {
            return Err(crate::Error::Config(format!(
                "min_detection_confidence must be in [0, 1], got {}",
                self.tracker.min_detection_confidence
            )));
        }
        if !(0.0..=1.0).contains(&self.tracker.min_tracking_confidence) {
            return Err(crate::Error::Config(format!(
                "min_tracking_confidence must be in [0, 1], got {}",
                self.tracker.min_tracking_confidence
            )));
        }
        if self.correction.endpoint.trim().is_empty() {
            return Err(crate::Error::Config(
                "correction endpoint must not be empty".to_string(),
            ));
        }
        if self.correction.max_length == 0 {
            return Err(crate::Error::Config("max_length must be > 0".to_string()));
        }
        Ok(())
    }

    /// Feature-vector width implied by the keypoint count
    pub fn feature_width(&self) -> usize {
        self.session.keypoint_count * 2
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default location
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), crate::Error> {
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;

        // Create parent directories
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".signscribe").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.session.capture_interval_secs, 1.0);
        assert_eq!(config.session.keypoint_count, 21);
        assert_eq!(config.feature_width(), 42);
        assert_eq!(config.session.alphabet.chars().count(), 35);
    }

    #[test]
    fn negative_interval_is_rejected() {
        let mut config = Config::default();
        config.session.capture_interval_secs = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn duplicate_alphabet_is_rejected() {
        let mut config = Config::default();
        config.session.alphabet = "AAB".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn out_of_range_confidence_is_rejected() {
        let mut config = Config::default();
        config.tracker.min_detection_confidence = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.session.capture_interval_secs = 0.5;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.session.capture_interval_secs, 0.5);
        assert_eq!(loaded.correction.max_length, 50);
    }

    #[test]
    fn load_rejects_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "session = \"not a table\"").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
