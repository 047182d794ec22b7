//! Infrastructure layer for Yatri
//!
//! Provides configuration loading and the adapters that implement the
//! application ports against the integration crates.

pub mod adapters;
pub mod config;

pub use adapters::{DirectionsRouteAdapter, GeminiInferenceAdapter};
pub use config::{AppConfig, DirectionsSettings, InferenceSettings, ServerConfig};
