pub mod destination;
pub mod requests;

// Re-export commonly used types
pub use destination::{
    DestinationState, LocationPoint, ProximityAlert, DEFAULT_ALERT_RADIUS_METERS,
};
pub use requests::{
    AlertResponse, LocationRequest, RadiusStatusResponse, SetAlertRadiusRequest,
    SetDestinationRequest, StatusResponse,
};
