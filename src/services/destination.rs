use serde_json::Number;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::{
    libraries::proximity_check::{ProximityChecker, ProximityError},
    models::{
        destination::{default_alert_radius, radius_meters},
        DestinationState, LocationPoint, ProximityAlert,
    },
};

/// Owns the tracked destination; every operation takes the lock exactly once.
pub struct DestinationService {
    state: RwLock<DestinationState>,
    checker: ProximityChecker,
}

impl DestinationService {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(DestinationState::new()),
            checker: ProximityChecker::new(),
        }
    }

    /// Replace the destination and radius wholesale, returning the stored radius
    pub async fn set_destination(&self, point: LocationPoint, radius: Option<Number>) -> Number {
        let radius = radius.unwrap_or_else(default_alert_radius);

        let mut state = self.state.write().await;
        state.coordinates = Some(point);
        state.alert_radius = radius.clone();

        info!(
            "Destination set to ({}, {}) with alert radius {}m",
            point.latitude, point.longitude, radius
        );

        radius
    }

    /// Update only the alert radius, leaving coordinates untouched
    pub async fn set_alert_radius(&self, radius: Option<Number>) -> Number {
        let radius = radius.unwrap_or_else(default_alert_radius);

        self.state.write().await.alert_radius = radius.clone();
        info!("Alert radius updated to {}m", radius);

        radius
    }

    /// Compare a reported location with the destination without mutating state
    pub async fn check_location(
        &self,
        current: LocationPoint,
    ) -> Result<ProximityAlert, ProximityError> {
        let (destination, radius) = {
            let state = self.state.read().await;
            match state.coordinates {
                Some(destination) => (destination, radius_meters(&state.alert_radius)),
                None => {
                    debug!("Location reported before any destination was set");
                    return Ok(ProximityAlert::NoDestination);
                }
            }
        };

        let result = self.checker.check(&current, &destination, radius)?;

        debug!(
            "Proximity check - reached: {}, distance: {:.1}m, radius: {}m",
            result.reached, result.distance, result.radius
        );

        Ok(result.alert())
    }

    pub async fn snapshot(&self) -> DestinationState {
        self.state.read().await.clone()
    }
}

impl Default for DestinationService {
    fn default() -> Self {
        Self::new()
    }
}
