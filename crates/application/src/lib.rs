//! Application layer for Yatri
//!
//! Orchestrates trip planning: route candidate lookup (with fallback),
//! plan composition (LLM or deterministic), and the request-handling
//! service that ties them together. External providers are reached only
//! through the ports defined here.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{InferencePort, RoutePort};
pub use services::{PlanComposer, RouteCatalog, TripPlannerService};
