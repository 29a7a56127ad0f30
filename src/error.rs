use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::libraries::proximity_check::ProximityError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Latitude must be between -90 and 90 degrees, got {0}")]
    InvalidLatitude(f64),

    #[error(transparent)]
    Proximity(#[from] ProximityError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) | ApiError::InvalidLatitude(_) | ApiError::Proximity(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
