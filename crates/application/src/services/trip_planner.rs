//! Trip planner service - Request handling orchestration
//!
//! The thin connective layer: route lookup first, plan composition second,
//! response assembly last. Route data flows one direction only.

use std::fmt;

use domain::{TripRequest, TripResponse};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::services::{PlanComposer, RouteCatalog};

/// Service handling one trip request end to end
pub struct TripPlannerService {
    routes: RouteCatalog,
    composer: PlanComposer,
}

impl fmt::Debug for TripPlannerService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TripPlannerService")
            .field("routes", &self.routes)
            .field("composer", &self.composer)
            .finish()
    }
}

impl TripPlannerService {
    /// Create the planner from its two collaborators
    pub const fn new(routes: RouteCatalog, composer: PlanComposer) -> Self {
        Self { routes, composer }
    }

    /// Plan a trip: fetch route candidates, compose the narrative plan,
    /// assemble the response
    ///
    /// Route lookup cannot fail by contract. A composition failure on the
    /// live LLM path propagates to the caller.
    #[instrument(skip(self, request), fields(origin = %request.origin, destination = %request.destination))]
    pub async fn plan_trip(&self, request: &TripRequest) -> Result<TripResponse, ApplicationError> {
        request.validate()?;

        let routes = self
            .routes
            .get_routes(&request.origin, &request.destination)
            .await;

        debug!(route_count = routes.len(), "Route candidates resolved");

        let plan = self
            .composer
            .compose_plan(
                &request.origin,
                &request.destination,
                &request.preferences,
                &routes,
            )
            .await?;

        Ok(TripResponse {
            plan,
            routes_data: routes,
        })
    }
}
