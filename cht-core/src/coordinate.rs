use crate::error::CoordinateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default selection on first load: New Delhi.
pub const DEFAULT_LATITUDE: f64 = 28.61;
pub const DEFAULT_LONGITUDE: f64 = 77.23;

/// A (latitude, longitude) pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Coordinate {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
        }
    }
}

impl Coordinate {
    /// Build a coordinate from untrusted input, rejecting anything outside
    /// the valid ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::Latitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Build a coordinate from a map click.
    ///
    /// Leaflet reports unwrapped longitudes once the user pans past the
    /// antimeridian (e.g. 200.0), so longitude is wrapped back into
    /// [-180, 180] and latitude is clamped. In-range input is returned as-is.
    pub fn from_map_click(latitude: f64, longitude: f64) -> Option<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        let longitude = if (-180.0..=180.0).contains(&longitude) {
            longitude
        } else {
            (longitude + 180.0).rem_euclid(360.0) - 180.0
        };
        Some(Self {
            latitude: latitude.clamp(-90.0, 90.0),
            longitude,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Latitude: {:.4}, Longitude: {:.4}",
            self.latitude, self.longitude
        )
    }
}
