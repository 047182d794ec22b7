//! Directions service configuration

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Configuration for the Google Directions client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsConfig {
    /// Base URL for the directions endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key for the directions provider (sensitive - uses `SecretString`)
    #[serde(skip_serializing)]
    pub api_key: SecretString,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of route candidates to return
    #[serde(default = "default_max_routes")]
    pub max_routes: usize,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com/maps/api/directions/json".to_string()
}

const fn default_timeout_secs() -> u64 {
    15
}

const fn default_max_routes() -> usize {
    5
}

impl DirectionsConfig {
    /// Create a configuration with defaults for the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: SecretString::from(api_key.into()),
            timeout_secs: default_timeout_secs(),
            max_routes: default_max_routes(),
        }
    }

    /// Override the base URL (used by tests against a mock server)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.max_routes == 0 {
            return Err("max_routes must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DirectionsConfig::new("key");
        assert_eq!(
            config.base_url,
            "https://maps.googleapis.com/maps/api/directions/json"
        );
        assert_eq!(config.timeout_secs, 15);
        assert_eq!(config.max_routes, 5);
    }

    #[test]
    fn test_with_base_url() {
        let config = DirectionsConfig::new("key").with_base_url("http://localhost:9000");
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_validation_success() {
        let config = DirectionsConfig::new("key");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = DirectionsConfig::new("key").with_base_url("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = DirectionsConfig {
            timeout_secs: 0,
            ..DirectionsConfig::new("key")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_max_routes() {
        let config = DirectionsConfig {
            max_routes: 0,
            ..DirectionsConfig::new("key")
        };
        assert!(config.validate().is_err());
    }
}
