//! Configuration for text generation

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Configuration for the Gemini text generation client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Base URL of the generation API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key for the generation provider (sensitive - uses `SecretString`)
    #[serde(skip_serializing)]
    pub api_key: SecretString,

    /// Model to use
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

const fn default_timeout_secs() -> u64 {
    60
}

impl GenerationConfig {
    /// Create a configuration with defaults for the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: SecretString::from(api_key.into()),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Override the base URL (used by tests against a mock server)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}
