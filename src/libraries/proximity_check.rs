use geo::{GeodesicDistance, Point};

use crate::models::{LocationPoint, ProximityAlert};

/// Result of comparing a reported location against the destination
#[derive(Debug, Clone)]
pub struct ProximityCheckResult {
    pub reached: bool,
    pub distance: f64,
    pub radius: f64,
}

impl ProximityCheckResult {
    pub fn alert(&self) -> ProximityAlert {
        if self.reached {
            ProximityAlert::Reached
        } else {
            ProximityAlert::KeepGoing
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProximityError {
    #[error("Latitude must be between -90 and 90 degrees, got {0}")]
    InvalidLatitude(f64),

    #[error("Distance to destination is undefined for the given coordinates.")]
    UndefinedDistance,
}

/// Decides whether a client has arrived within a given alert radius
pub struct ProximityChecker;

impl ProximityChecker {
    pub fn new() -> Self {
        Self
    }

    /// Check a reported location against the destination and alert radius
    pub fn check(
        &self,
        current: &LocationPoint,
        destination: &LocationPoint,
        radius: f64,
    ) -> Result<ProximityCheckResult, ProximityError> {
        if !current.is_valid() {
            return Err(ProximityError::InvalidLatitude(current.latitude));
        }

        let distance = current.distance_to(destination);

        // Out-of-range latitudes yield NaN, which would otherwise truncate to 0m
        if !distance.is_finite() {
            return Err(ProximityError::UndefinedDistance);
        }

        Ok(ProximityCheckResult {
            reached: is_within_radius(distance, radius),
            distance,
            radius,
        })
    }
}

impl Default for ProximityChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Calculate distance between two points in meters on the WGS-84 ellipsoid
pub fn calculate_distance(point1: &LocationPoint, point2: &LocationPoint) -> f64 {
    let p1 = Point::new(point1.longitude, point1.latitude);
    let p2 = Point::new(point2.longitude, point2.latitude);

    p1.geodesic_distance(&p2)
}

/// Whole meters only: both sides are truncated toward zero before comparing.
pub fn is_within_radius(distance: f64, radius: f64) -> bool {
    (distance.trunc() as i64) < (radius.trunc() as i64)
}
