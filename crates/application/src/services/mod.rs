//! Application services

mod fallback;
mod plan_composer;
mod route_catalog;
mod trip_planner;

pub use fallback::fallback_routes;
pub use plan_composer::PlanComposer;
pub use route_catalog::RouteCatalog;
pub use trip_planner::TripPlannerService;
