//! Directions adapter - Implements RoutePort using integration_directions

use application::error::ApplicationError;
use application::ports::RoutePort;
use async_trait::async_trait;
use domain::TransitRoute;
use integration_directions::{
    DirectionsClient, DirectionsConfig, DirectionsRoute, GoogleDirectionsClient,
};
use tracing::instrument;

/// Adapter for live route lookup via the Google Directions API
#[derive(Debug)]
pub struct DirectionsRouteAdapter {
    client: GoogleDirectionsClient,
}

impl DirectionsRouteAdapter {
    /// Create the adapter around an existing client
    pub const fn new(client: GoogleDirectionsClient) -> Self {
        Self { client }
    }

    /// Create the adapter from a client configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn from_config(config: &DirectionsConfig) -> Result<Self, ApplicationError> {
        let client = GoogleDirectionsClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client))
    }

    /// Attach the service-level metadata the wire format does not supply
    ///
    /// The fare range is a placeholder; the directions API reports no
    /// fares for these requests.
    fn convert_route(route: DirectionsRoute, origin: &str, destination: &str) -> TransitRoute {
        TransitRoute::new(
            "Google Maps Transit",
            route.duration,
            format!("Google Maps suggested route from {origin} to {destination}"),
        )
        .with_cost("₹50-200")
        .with_steps(route.steps)
        .with_operator("Google Maps")
        .with_frequency("Real-time")
        .with_comfort("Good")
        .with_accuracy("Very High")
    }
}

#[async_trait]
impl RoutePort for DirectionsRouteAdapter {
    #[instrument(skip(self))]
    async fn fetch_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<TransitRoute>, ApplicationError> {
        let routes = self
            .client
            .fetch_transit_routes(origin, destination)
            .await
            .map_err(|e| ApplicationError::ExternalService(e.to_string()))?;

        Ok(routes
            .into_iter()
            .map(|route| Self::convert_route(route, origin, destination))
            .collect())
    }
}
