//! Trip planning handler

use axum::{Json, extract::State};
use domain::{TripRequest, TripResponse};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Handle a trip planning request
///
/// The JSON extractor rejects malformed bodies before this handler runs;
/// blank origin/destination values are rejected by the planner's
/// validation and surface as 400.
#[instrument(skip(state, request), fields(origin = %request.origin, destination = %request.destination))]
pub async fn plan_trip(
    State(state): State<AppState>,
    Json(request): Json<TripRequest>,
) -> Result<Json<TripResponse>, ApiError> {
    let response = state.trip_planner.plan_trip(&request).await?;
    Ok(Json(response))
}
