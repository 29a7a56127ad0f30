use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::warn;

use crate::{
    error::ApiError,
    models::{LocationPoint, RadiusStatusResponse, SetAlertRadiusRequest, SetDestinationRequest},
    services::destination::DestinationService,
};

/// Store a new destination, replacing coordinates and radius together
pub async fn set_destination(
    State(service): State<Arc<DestinationService>>,
    Json(request): Json<SetDestinationRequest>,
) -> Result<Json<RadiusStatusResponse>, ApiError> {
    let latitude = request.latitude.ok_or_else(|| {
        warn!("Rejecting destination without latitude");
        ApiError::MissingField("latitude")
    })?;
    let longitude = request.longitude.ok_or_else(|| {
        warn!("Rejecting destination without longitude");
        ApiError::MissingField("longitude")
    })?;

    let destination = LocationPoint::new(latitude, longitude);
    if !destination.is_valid() {
        warn!("Rejecting destination with latitude {}", latitude);
        return Err(ApiError::InvalidLatitude(latitude));
    }

    let radius = service
        .set_destination(destination, request.alert_radius)
        .await;

    Ok(Json(RadiusStatusResponse::destination_set(radius)))
}

pub async fn set_alert_radius(
    State(service): State<Arc<DestinationService>>,
    Json(request): Json<SetAlertRadiusRequest>,
) -> Json<RadiusStatusResponse> {
    let radius = service.set_alert_radius(request.alert_radius).await;

    Json(RadiusStatusResponse::alert_radius_updated(radius))
}
