//! Static fallback route catalog
//!
//! Used whenever the live directions provider is unconfigured, unreachable,
//! or returns nothing usable. Durations and fares are illustrative ranges;
//! steps are templated with the requested place names.

use domain::TransitRoute;

/// Build the fallback route list for an origin/destination pair
///
/// Always returns at least one entry; the bus route comes first.
pub fn fallback_routes(origin: &str, destination: &str) -> Vec<TransitRoute> {
    vec![
        TransitRoute::new(
            "State Transport Bus",
            "3-8 hours",
            format!(
                "Take state transport bus from {origin} to {destination}. Comfortable and economical option."
            ),
        )
        .with_cost("₹80-400")
        .with_steps(vec![
            format!("Go to {origin} bus stand"),
            "Book ticket at counter or online".to_string(),
            format!("Board state transport bus to {destination}"),
            "Travel time: 3-8 hours depending on distance".to_string(),
            format!("Get down at {destination} bus stand"),
            "Take local transport to final destination".to_string(),
        ])
        .with_operator("State Transport Corporation")
        .with_frequency("Every 30-60 minutes")
        .with_comfort("Standard")
        .with_accuracy("High"),
        TransitRoute::new(
            "Express Train",
            "2-6 hours",
            format!(
                "Take an express train from {origin} to {destination}. Faster than road for longer distances."
            ),
        )
        .with_cost("₹150-800")
        .with_steps(vec![
            format!("Reach {origin} railway station"),
            "Book ticket online (IRCTC) or at the reservation counter".to_string(),
            format!("Board the express train towards {destination}"),
            "Travel time: 2-6 hours depending on the service".to_string(),
            format!("Alight at {destination} railway station"),
            "Take local transport to final destination".to_string(),
        ])
        .with_operator("Indian Railways")
        .with_frequency("Multiple departures daily")
        .with_comfort("Good")
        .with_accuracy("High"),
        TransitRoute::new(
            "Shared Cab",
            "Varies by traffic",
            format!(
                "Shared cab from {origin} to {destination}. Door-to-door but costlier than bus or train."
            ),
        )
        .with_cost("₹200-600")
        .with_steps(vec![
            format!("Book a shared cab from {origin} via an aggregator app"),
            "Confirm pickup point and departure time".to_string(),
            format!("Ride to {destination} with intermediate stops"),
            "Pay the driver or through the app on arrival".to_string(),
        ])
        .with_operator("Private operators")
        .with_frequency("On demand")
        .with_comfort("Good")
        .with_accuracy("Medium"),
    ]
}
