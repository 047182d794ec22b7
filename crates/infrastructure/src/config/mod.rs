//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `providers`: directions and inference provider settings
//!
//! Loaded from an optional `config.toml` with `YATRI_*` environment
//! overrides. Provider credentials are read from plain environment
//! variables (`YATRI_DIRECTIONS_API_KEY`, `YATRI_INFERENCE_API_KEY`) so a
//! deployment needs no config file at all. A missing credential is not an
//! error; the corresponding provider simply stays unconfigured and the
//! service runs on its fallback paths.

mod providers;
mod server;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

pub use providers::{DirectionsSettings, InferenceSettings};
pub use server::ServerConfig;

/// Environment variable carrying the directions provider credential
pub const DIRECTIONS_API_KEY_VAR: &str = "YATRI_DIRECTIONS_API_KEY";

/// Environment variable carrying the inference provider credential
pub const INFERENCE_API_KEY_VAR: &str = "YATRI_INFERENCE_API_KEY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Directions provider settings
    #[serde(default)]
    pub directions: DirectionsSettings,

    /// Inference provider settings
    #[serde(default)]
    pub inference: InferenceSettings,
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) and `YATRI_*`
    /// environment variables, then overlay provider credentials from
    /// their dedicated environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a config source exists but cannot be parsed.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("YATRI")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut app_config: Self = builder.build()?.try_deserialize()?;
        app_config.overlay_credentials_from_env();
        Ok(app_config)
    }

    /// Fill credential fields from their dedicated environment variables
    ///
    /// Values already present (from config.toml) take precedence.
    fn overlay_credentials_from_env(&mut self) {
        if self.directions.api_key.is_none() {
            if let Some(key) = non_empty_env(DIRECTIONS_API_KEY_VAR) {
                self.directions.api_key = Some(SecretString::from(key));
            }
        }

        if self.inference.api_key.is_none() {
            if let Some(key) = non_empty_env(INFERENCE_API_KEY_VAR) {
                self.inference.api_key = Some(SecretString::from(key));
            }
        }
    }
}

/// Read an environment variable, treating empty values as absent
fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
