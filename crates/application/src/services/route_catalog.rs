//! Route catalog - Transit route candidates with graceful degradation
//!
//! Wraps the optional live directions port and guarantees the route-list
//! invariants: the catalog never fails and never returns an empty list.

use std::{fmt, sync::Arc};

use domain::TransitRoute;
use tracing::{debug, instrument, warn};

use crate::ports::RoutePort;
use crate::services::fallback::fallback_routes;

/// Service answering "how can I get from A to B?"
///
/// Holds the live route port when a directions credential is configured;
/// otherwise every lookup resolves from the static fallback catalog.
pub struct RouteCatalog {
    live: Option<Arc<dyn RoutePort>>,
}

impl fmt::Debug for RouteCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteCatalog")
            .field("live_provider", &self.live.is_some())
            .finish()
    }
}

impl RouteCatalog {
    /// Create a catalog backed by a live directions port
    pub fn new(live: Arc<dyn RoutePort>) -> Self {
        Self { live: Some(live) }
    }

    /// Create a catalog that only serves the fallback list
    pub fn without_live_provider() -> Self {
        Self { live: None }
    }

    /// Get route candidates for the given origin/destination pair
    ///
    /// Infallible by contract: any live-path failure or empty result is
    /// absorbed and replaced with the fallback list, which is non-empty
    /// by construction.
    #[instrument(skip(self))]
    pub async fn get_routes(&self, origin: &str, destination: &str) -> Vec<TransitRoute> {
        let Some(port) = &self.live else {
            debug!("No directions provider configured, serving fallback routes");
            return fallback_routes(origin, destination);
        };

        match port.fetch_routes(origin, destination).await {
            Ok(routes) if !routes.is_empty() => routes,
            Ok(_) => {
                warn!("Directions provider returned no routes, serving fallback routes");
                fallback_routes(origin, destination)
            },
            Err(error) => {
                warn!(%error, "Directions lookup failed, serving fallback routes");
                fallback_routes(origin, destination)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::MockRoutePort;

    fn live_route() -> TransitRoute {
        TransitRoute::new(
            "Google Maps Transit",
            "2 hours 45 mins",
            "Google Maps suggested route from Mumbai to Pune",
        )
        .with_cost("₹50-200")
    }

    #[tokio::test]
    async fn serves_fallback_without_live_provider() {
        let catalog = RouteCatalog::without_live_provider();
        let routes = catalog.get_routes("Delhi", "Jaipur").await;

        assert!(!routes.is_empty());
        assert_eq!(routes[0].mode, "State Transport Bus");
        assert!(routes[0].details.contains("Delhi"));
        assert!(routes[0].details.contains("Jaipur"));
    }

    #[tokio::test]
    async fn serves_live_routes_when_available() {
        let mut port = MockRoutePort::new();
        port.expect_fetch_routes()
            .returning(|_, _| Ok(vec![live_route()]));

        let catalog = RouteCatalog::new(Arc::new(port));
        let routes = catalog.get_routes("Mumbai", "Pune").await;

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].mode, "Google Maps Transit");
    }

    #[tokio::test]
    async fn substitutes_fallback_on_provider_error() {
        let mut port = MockRoutePort::new();
        port.expect_fetch_routes().returning(|_, _| {
            Err(ApplicationError::ExternalService(
                "Provider status not OK: REQUEST_DENIED".to_string(),
            ))
        });

        let catalog = RouteCatalog::new(Arc::new(port));
        let routes = catalog.get_routes("Mumbai", "Pune").await;

        assert!(!routes.is_empty());
        assert_eq!(routes[0].mode, "State Transport Bus");
        assert!(routes[0].details.contains("Mumbai"));
    }

    #[tokio::test]
    async fn substitutes_fallback_on_empty_result() {
        let mut port = MockRoutePort::new();
        port.expect_fetch_routes().returning(|_, _| Ok(Vec::new()));

        let catalog = RouteCatalog::new(Arc::new(port));
        let routes = catalog.get_routes("Mumbai", "Pune").await;

        assert!(!routes.is_empty());
        assert_eq!(routes[0].mode, "State Transport Bus");
    }

    #[tokio::test]
    async fn identical_calls_yield_identical_output() {
        let mut port = MockRoutePort::new();
        port.expect_fetch_routes()
            .times(2)
            .returning(|_, _| Ok(vec![live_route()]));

        let catalog = RouteCatalog::new(Arc::new(port));
        let first = catalog.get_routes("Mumbai", "Pune").await;
        let second = catalog.get_routes("Mumbai", "Pune").await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn never_returns_empty_regardless_of_provider_behavior() {
        for failing in [true, false] {
            let mut port = MockRoutePort::new();
            if failing {
                port.expect_fetch_routes().returning(|_, _| {
                    Err(ApplicationError::ExternalService("Connection failed".to_string()))
                });
            } else {
                port.expect_fetch_routes().returning(|_, _| Ok(Vec::new()));
            }

            let catalog = RouteCatalog::new(Arc::new(port));
            assert!(!catalog.get_routes("A", "B").await.is_empty());
        }
    }
}
