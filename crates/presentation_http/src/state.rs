//! Application state shared across handlers

use std::sync::Arc;

use application::TripPlannerService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Trip planner service handling `/plan-trip`
    pub trip_planner: Arc<TripPlannerService>,
}
