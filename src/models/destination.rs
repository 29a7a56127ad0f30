use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Radius used at start-up and whenever a request omits `alertRadius`.
pub const DEFAULT_ALERT_RADIUS_METERS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationPoint {
    /// Create a new location point
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Latitude must lie within [-90, 90]; longitudes wrap, so any finite value is accepted
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && self.longitude.is_finite()
    }

    /// Calculate the distance to another location point in meters
    pub fn distance_to(&self, other: &LocationPoint) -> f64 {
        crate::libraries::proximity_check::calculate_distance(self, other)
    }
}

/// The single tracked trip: where the client is heading and how close counts as arrived.
///
/// The radius keeps the number exactly as the client sent it so it can be echoed back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationState {
    pub coordinates: Option<LocationPoint>,
    pub alert_radius: Number,
}

impl DestinationState {
    pub fn new() -> Self {
        Self {
            coordinates: None,
            alert_radius: default_alert_radius(),
        }
    }

    pub fn alert_radius_meters(&self) -> f64 {
        radius_meters(&self.alert_radius)
    }
}

impl Default for DestinationState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn default_alert_radius() -> Number {
    Number::from(DEFAULT_ALERT_RADIUS_METERS)
}

/// Numeric value of a radius for distance comparisons
pub fn radius_meters(radius: &Number) -> f64 {
    // Without arbitrary precision every JSON number has an f64 form
    radius.as_f64().unwrap_or(0.0)
}

/// Outcome of a location report, surfaced to the client as the `alert` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximityAlert {
    NoDestination,
    Reached,
    KeepGoing,
}

impl ProximityAlert {
    pub fn message(&self) -> &'static str {
        match self {
            ProximityAlert::NoDestination => "No destination set",
            ProximityAlert::Reached => "You have reached your destination!",
            ProximityAlert::KeepGoing => "Keep going!",
        }
    }
}

impl std::fmt::Display for ProximityAlert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
