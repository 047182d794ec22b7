//! Domain entities

mod trip;

pub use trip::{Preferences, TransitRoute, TripRequest, TripResponse};
