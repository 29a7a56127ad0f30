use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::destination::{LocationPoint, ProximityAlert};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDestinationRequest {
    // Optional at the wire level so a missing coordinate gets a clear 400
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub alert_radius: Option<Number>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAlertRadiusRequest {
    #[serde(default)]
    pub alert_radius: Option<Number>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRequest {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<LocationRequest> for LocationPoint {
    fn from(request: LocationRequest) -> Self {
        LocationPoint::new(request.latitude, request.longitude)
    }
}

/// Body returned by both setters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiusStatusResponse {
    pub status: String,
    pub alert_radius: Number,
}

impl RadiusStatusResponse {
    pub fn destination_set(alert_radius: Number) -> Self {
        Self {
            status: "Destination set".to_string(),
            alert_radius,
        }
    }

    pub fn alert_radius_updated(alert_radius: Number) -> Self {
        Self {
            status: "Alert radius updated".to_string(),
            alert_radius,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertResponse {
    pub alert: String,
}

impl From<ProximityAlert> for AlertResponse {
    fn from(alert: ProximityAlert) -> Self {
        Self {
            alert: alert.message().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn running() -> Self {
        Self {
            status: "Server is running".to_string(),
        }
    }
}
