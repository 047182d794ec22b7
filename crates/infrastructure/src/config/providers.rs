//! Provider configurations: directions and inference.

use ai_core::GenerationConfig;
use integration_directions::DirectionsConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Directions provider settings
///
/// The credential is optional; without it the route catalog serves the
/// static fallback list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsSettings {
    /// Base URL for the directions endpoint
    #[serde(default = "default_directions_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Connection timeout in seconds
    #[serde(default = "default_directions_timeout")]
    pub timeout_secs: u64,

    /// Maximum number of route candidates to request
    #[serde(default = "default_max_routes")]
    pub max_routes: usize,
}

fn default_directions_base_url() -> String {
    "https://maps.googleapis.com/maps/api/directions/json".to_string()
}

const fn default_directions_timeout() -> u64 {
    15
}

const fn default_max_routes() -> usize {
    5
}

impl Default for DirectionsSettings {
    fn default() -> Self {
        Self {
            base_url: default_directions_base_url(),
            api_key: None,
            timeout_secs: default_directions_timeout(),
            max_routes: default_max_routes(),
        }
    }
}

impl DirectionsSettings {
    /// Build the client configuration, if a credential is configured
    #[must_use]
    pub fn to_client_config(&self) -> Option<DirectionsConfig> {
        self.api_key.as_ref().map(|key| DirectionsConfig {
            base_url: self.base_url.clone(),
            api_key: SecretString::from(key.expose_secret().to_string()),
            timeout_secs: self.timeout_secs,
            max_routes: self.max_routes,
        })
    }
}

/// Inference provider settings
///
/// The credential is optional; without it the plan composer renders the
/// deterministic plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceSettings {
    /// Base URL of the generation API
    #[serde(default = "default_inference_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Model to use
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_inference_timeout")]
    pub timeout_secs: u64,
}

fn default_inference_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

const fn default_inference_timeout() -> u64 {
    60
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            base_url: default_inference_base_url(),
            api_key: None,
            model: default_model(),
            timeout_secs: default_inference_timeout(),
        }
    }
}

impl InferenceSettings {
    /// Build the client configuration, if a credential is configured
    #[must_use]
    pub fn to_client_config(&self) -> Option<GenerationConfig> {
        self.api_key.as_ref().map(|key| GenerationConfig {
            base_url: self.base_url.clone(),
            api_key: SecretString::from(key.expose_secret().to_string()),
            model: self.model.clone(),
            timeout_secs: self.timeout_secs,
        })
    }
}
