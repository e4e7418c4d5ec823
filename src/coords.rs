//! Latitude and longitude coordinates.

use crate::errors::FriendMapErr;
use serde::Serialize;
use std::convert::TryFrom;

/// The latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, checking latitude is in [-90, 90] and longitude in [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, FriendMapErr> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(FriendMapErr::InvalidCoordinate(latitude, longitude));
        }

        Ok(Coordinate {
            latitude,
            longitude,
        })
    }

    /// Build from a GeoJSON style `[lon, lat]` position.
    pub fn from_lon_lat(position: &[f64]) -> Option<Result<Self, FriendMapErr>> {
        match *position {
            [lon, lat] => Some(Coordinate::new(lat, lon)),
            _ => None,
        }
    }

    /// The GeoJSON style `[lon, lat]` position. Longitude comes first.
    pub fn to_lon_lat(self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Latitude in degrees.
    pub fn latitude(self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(self) -> f64 {
        self.longitude
    }
}

/// `(lat, lon)` pairs.
impl TryFrom<(f64, f64)> for Coordinate {
    type Error = FriendMapErr;

    fn try_from(pair: (f64, f64)) -> Result<Self, Self::Error> {
        Coordinate::new(pair.0, pair.1)
    }
}

#[cfg(test)]
mod unit {
    use super::*;

    #[test]
    fn test_range_checks() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(90.5, 0.0).is_err());
        assert!(Coordinate::new(0.0, -180.1).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_lon_lat_order() {
        let coord = Coordinate::new(55.77, 12.51).unwrap();
        assert_eq!(coord.to_lon_lat(), [12.51, 55.77]);

        let back = Coordinate::from_lon_lat(&[12.51, 55.77]).unwrap().unwrap();
        assert_eq!(back, coord);
    }

    #[test]
    fn test_from_lon_lat_wrong_length() {
        assert!(Coordinate::from_lon_lat(&[12.51]).is_none());
        assert!(Coordinate::from_lon_lat(&[12.51, 55.77, 3.0]).is_none());
        assert!(Coordinate::from_lon_lat(&[]).is_none());
    }

    #[test]
    fn test_try_from_pair() {
        let coord = Coordinate::try_from((55.70, 12.50)).unwrap();
        assert_eq!(coord.latitude(), 55.70);
        assert_eq!(coord.longitude(), 12.50);
    }
}
