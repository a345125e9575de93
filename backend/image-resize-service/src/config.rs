/// Configuration management for image-resize-service
///
/// Loads `RESIZE_*` environment variables with defaults matching the
/// production deployment.
use crate::services::thumbnail::ResizeConfig;
use serde::Deserialize;
use thiserror::Error;

const ENV_PREFIX: &str = "RESIZE_";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read environment: {0}")]
    Env(#[from] envy::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// How a failed invocation is reported to the caller
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FailureMode {
    /// Return the error to the runtime so the platform retries / dead-letters
    #[default]
    Propagate,
    /// Answer with `{statusCode, body}` describing the failure
    Respond,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_destination_bucket")]
    pub destination_bucket: String,
    #[serde(default = "default_dimension")]
    pub width: u32,
    #[serde(default = "default_dimension")]
    pub height: u32,
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
    #[serde(default)]
    pub failure_mode: FailureMode,
}

fn default_destination_bucket() -> String {
    "resized-image-kizashi".to_string()
}

fn default_dimension() -> u32 {
    128
}

fn default_jpeg_quality() -> u8 {
    75
}

impl Default for Config {
    fn default() -> Self {
        Self {
            destination_bucket: default_destination_bucket(),
            width: default_dimension(),
            height: default_dimension(),
            jpeg_quality: default_jpeg_quality(),
            failure_mode: FailureMode::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let config: Config = envy::prefixed(ENV_PREFIX).from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from explicit key/value pairs (keys carry the prefix)
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Config = envy::prefixed(ENV_PREFIX).from_iter(pairs)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.destination_bucket.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "RESIZE_DESTINATION_BUCKET must not be empty".to_string(),
            ));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "thumbnail dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConfigError::Invalid(format!(
                "RESIZE_JPEG_QUALITY must be within 1..=100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }

    pub fn resize(&self) -> ResizeConfig {
        ResizeConfig {
            width: self.width,
            height: self.height,
            jpeg_quality: self.jpeg_quality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_pairs(Vec::new()).unwrap();
        assert_eq!(config.destination_bucket, "resized-image-kizashi");
        assert_eq!(config.width, 128);
        assert_eq!(config.height, 128);
        assert_eq!(config.jpeg_quality, 75);
        assert_eq!(config.failure_mode, FailureMode::Propagate);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_pairs(pairs(&[
            ("RESIZE_DESTINATION_BUCKET", "thumbs-staging"),
            ("RESIZE_WIDTH", "256"),
            ("RESIZE_HEIGHT", "64"),
            ("RESIZE_JPEG_QUALITY", "90"),
            ("RESIZE_FAILURE_MODE", "respond"),
            ("UNRELATED", "ignored"),
        ]))
        .unwrap();

        assert_eq!(config.destination_bucket, "thumbs-staging");
        assert_eq!(config.resize().width, 256);
        assert_eq!(config.resize().height, 64);
        assert_eq!(config.resize().jpeg_quality, 90);
        assert_eq!(config.failure_mode, FailureMode::Respond);
    }

    #[test]
    fn test_rejects_zero_dimension() {
        let err = Config::from_pairs(pairs(&[("RESIZE_WIDTH", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_out_of_range_quality() {
        let err = Config::from_pairs(pairs(&[("RESIZE_JPEG_QUALITY", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_blank_bucket() {
        let err = Config::from_pairs(pairs(&[("RESIZE_DESTINATION_BUCKET", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_unparseable_value() {
        let err = Config::from_pairs(pairs(&[("RESIZE_HEIGHT", "tall")])).unwrap_err();
        assert!(matches!(err, ConfigError::Env(_)));
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env() {
        std::env::set_var("RESIZE_DESTINATION_BUCKET", "thumbs-from-env");
        std::env::remove_var("RESIZE_WIDTH");
        std::env::remove_var("RESIZE_HEIGHT");

        let config = Config::from_env().unwrap();
        assert_eq!(config.destination_bucket, "thumbs-from-env");
        assert_eq!(config.width, 128);

        std::env::remove_var("RESIZE_DESTINATION_BUCKET");
    }
}
