//! Issue location
//!
//! A location is a human-readable address, a coordinate pair, or both.
//! At least one part must be present; submission validates this.

use serde::{Deserialize, Serialize};

/// Approximate km per degree of latitude, used for the nearby bounding box
const KM_PER_DEGREE: f64 = 111.0;

/// Padding factor applied to the nearby bounding box
const BOX_PADDING: f64 = 1.5;

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Whether `self` falls inside a padded square box around `center`
    ///
    /// The box extends `(radius_km / 111) * 1.5` degrees in each direction;
    /// a cheap proximity filter, not a great-circle distance.
    #[must_use]
    pub fn within_box(&self, center: Self, radius_km: f64) -> bool {
        let offset = (radius_km / KM_PER_DEGREE) * BOX_PADDING;
        (self.latitude - center.latitude).abs() <= offset
            && (self.longitude - center.longitude).abs() <= offset
    }
}

/// Where an issue was reported
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Human-readable address, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Coordinate pair, if captured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl Location {
    /// Location from an address string
    #[must_use]
    pub fn from_address(address: impl Into<String>) -> Self {
        Self { address: Some(address.into()), coordinates: None }
    }

    /// Location from a coordinate pair
    #[must_use]
    pub const fn from_coordinates(latitude: f64, longitude: f64) -> Self {
        Self { address: None, coordinates: Some(Coordinates::new(latitude, longitude)) }
    }

    /// Whether at least one part is present (non-blank address or coordinates)
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.coordinates.is_some()
            || self.address.as_ref().is_some_and(|a| !a.trim().is_empty())
    }
}
