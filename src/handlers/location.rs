use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::warn;

use crate::{
    error::ApiError,
    models::{AlertResponse, LocationRequest},
    services::destination::DestinationService,
};

/// Report the client's current position and get back an arrival alert
///
/// "No destination set" is an informational 200 alert, not an error.
pub async fn location(
    State(service): State<Arc<DestinationService>>,
    Json(request): Json<LocationRequest>,
) -> Result<Json<AlertResponse>, ApiError> {
    let alert = service.check_location(request.into()).await.map_err(|e| {
        warn!("Rejecting location report: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(alert.into()))
}
