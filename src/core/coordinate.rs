//! # Coordinate
//!
//! A position on the Earth's surface in decimal degrees.
//!
//! Construction is unchecked so values can be decoded straight from
//! upstream payloads. Call [`Coordinate::validate`] (or go through
//! [`crate::core::distance::distance_km`]) before doing math with them.

use serde::{Deserialize, Serialize};

/// Latitude bound in degrees
pub const MAX_LATITUDE: f64 = 90.0;

/// Longitude bound in degrees
pub const MAX_LONGITUDE: f64 = 180.0;

/// A latitude/longitude pair in degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Why a coordinate was rejected
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    #[error("coordinate ({latitude}, {longitude}) is not finite")]
    NonFinite { latitude: f64, longitude: f64 },

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

impl Coordinate {
    /// Create a coordinate without checking its range
    ///
    /// # Example
    /// ```
    /// use nearest_place::Coordinate;
    /// let paris = Coordinate::new(48.8566, 2.3522);
    /// assert!(paris.validate().is_ok());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Create a coordinate, rejecting anything `validate` would reject
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        let coordinate = Self::new(latitude, longitude);
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Check both components are finite and within range
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(CoordinateError::NonFinite {
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }
        if self.latitude.abs() > MAX_LATITUDE {
            return Err(CoordinateError::LatitudeOutOfRange(self.latitude));
        }
        if self.longitude.abs() > MAX_LONGITUDE {
            return Err(CoordinateError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }

    /// Whether `validate` would succeed
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Latitude in radians
    pub fn latitude_rad(&self) -> f64 {
        self.latitude.to_radians()
    }

    /// Longitude in radians
    pub fn longitude_rad(&self) -> f64 {
        self.longitude.to_radians()
    }

    /// Shift both components by the given number of degrees
    pub fn offset(&self, d_latitude: f64, d_longitude: f64) -> Self {
        Self::new(self.latitude + d_latitude, self.longitude + d_longitude)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

impl std::str::FromStr for Coordinate {
    type Err = String;

    /// Parse `"lat,lon"`, the form used on the command line
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| format!("expected `lat,lon`, got `{s}`"))?;
        let latitude: f64 = lat
            .trim()
            .parse()
            .map_err(|e| format!("bad latitude `{}`: {e}", lat.trim()))?;
        let longitude: f64 = lon
            .trim()
            .parse()
            .map_err(|e| format!("bad longitude `{}`: {e}", lon.trim()))?;
        Ok(Self::new(latitude, longitude))
    }
}
