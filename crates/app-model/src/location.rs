//! Device location shapes

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Location validation error types
#[derive(Debug, Error)]
pub enum LocationError {
    /// Latitude outside `-90.0..=90.0`
    #[error("latitude out of range: {0}")]
    LatitudeOutOfRange(f64),

    /// Longitude outside `-180.0..=180.0`
    #[error("longitude out of range: {0}")]
    LongitudeOutOfRange(f64),
}

/// Result type for location operations
pub type Result<T> = std::result::Result<T, LocationError>;

/// A point-in-time device location
///
/// Coordinates are plain numbers; the shape encodes no range checks.
/// [`LocationData::validate`] applies them where a boundary requires it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationData {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Reverse-geocoded address, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Capture time as epoch milliseconds
    pub timestamp: i64,
}

impl LocationData {
    /// Create a location fix
    pub fn new(latitude: f64, longitude: f64, timestamp: i64) -> Self {
        Self {
            latitude,
            longitude,
            address: None,
            timestamp,
        }
    }

    /// Set the reverse-geocoded address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Validate coordinate ranges at a trust boundary
    ///
    /// Non-finite coordinates fail the range check as well.
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(LocationError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(LocationError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_round_trip() {
        let fix = LocationData::new(31.2304, 121.4737, 1_735_689_600_000)
            .with_address("Maternity center, Pudong");
        let json = serde_json::to_string(&fix).unwrap();
        let back: LocationData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fix);
    }

    #[test]
    fn test_location_skips_absent_address() {
        let fix = LocationData::new(0.0, 0.0, 0);
        let json = serde_json::to_string(&fix).unwrap();
        assert!(!json.contains("address"));
        assert!(fix.validate().is_ok());
    }

    #[test]
    fn test_location_range_validation() {
        assert!(matches!(
            LocationData::new(90.5, 0.0, 0).validate(),
            Err(LocationError::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            LocationData::new(0.0, -180.5, 0).validate(),
            Err(LocationError::LongitudeOutOfRange(_))
        ));
        // Boundary values are inside the range
        assert!(LocationData::new(-90.0, 180.0, 0).validate().is_ok());
        // NaN never satisfies a range check
        assert!(LocationData::new(f64::NAN, 0.0, 0).validate().is_err());
    }
}
