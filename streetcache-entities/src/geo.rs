use std::fmt;
use thiserror::Error;

pub type Degrees = f64;

/// A geographical position in WGS84 decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPoint {
    lat: Degrees,
    lng: Degrees,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapPointError {
    #[error("Latitude out of range")]
    Latitude,
    #[error("Longitude out of range")]
    Longitude,
}

impl MapPoint {
    pub const LAT_MAX: Degrees = 90.0;
    pub const LAT_MIN: Degrees = -90.0;
    pub const LNG_MAX: Degrees = 180.0;
    pub const LNG_MIN: Degrees = -180.0;

    /// Create a point without checking the coordinate ranges.
    pub const fn from_lat_lng_deg(lat: Degrees, lng: Degrees) -> Self {
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg(lat: Degrees, lng: Degrees) -> Result<Self, MapPointError> {
        if !(Self::LAT_MIN..=Self::LAT_MAX).contains(&lat) {
            return Err(MapPointError::Latitude);
        }
        if !(Self::LNG_MIN..=Self::LNG_MAX).contains(&lng) {
            return Err(MapPointError::Longitude);
        }
        Ok(Self { lat, lng })
    }

    pub const fn lat(self) -> Degrees {
        self.lat
    }

    pub const fn lng(self) -> Degrees {
        self.lng
    }

    pub const fn to_lat_lng_deg(self) -> (Degrees, Degrees) {
        (self.lat, self.lng)
    }
}

/// Formats the point as `lat,lng`, the notation expected by the map providers.
impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
