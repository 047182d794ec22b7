//! Google Directions integration for Yatri
//!
//! Fetches public transit route candidates between two free-form place names
//! via the [Google Directions API](https://developers.google.com/maps/documentation/directions).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern: [`DirectionsClient`] defines the
//! interface for transit route lookup, implemented by
//! [`GoogleDirectionsClient`]. The client only exists when an API key is
//! configured; callers without a key use their own fallback data instead.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_directions::{DirectionsConfig, GoogleDirectionsClient};
//!
//! let config = DirectionsConfig::new("my-api-key");
//! let client = GoogleDirectionsClient::new(&config)?;
//!
//! let routes = client.fetch_transit_routes("Mumbai", "Pune").await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{DirectionsClient, GoogleDirectionsClient};
pub use config::DirectionsConfig;
pub use error::DirectionsError;
pub use models::DirectionsRoute;
