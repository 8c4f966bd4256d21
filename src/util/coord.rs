use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::core::constants::MAX_LATITUDE;

/// A latitude/longitude pair in degrees (WGS-84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<LatLng> for Point<f64> {
    fn from(value: LatLng) -> Self {
        Point::new(value.longitude, value.latitude)
    }
}

/// Trait for types that can provide x/y coordinates.
///
/// Implemented for `(f64, f64)` tuples, `geo_types::Point<f64>` and
/// [`LatLng`]. This allows functions to accept either type. The x-coordinate
/// is the longitude, the y-coordinate the latitude.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for LatLng {
    fn x(&self) -> f64 {
        self.longitude
    }
    fn y(&self) -> f64 {
        self.latitude
    }
}

/// Clamps latitude into the Web Mercator valid range.
///
/// Values beyond the limit (including the poles, where the projection is
/// undefined) clamp to the limit rather than failing.
pub fn clamp_latitude(lat: f64) -> f64 {
    lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
}

/// Wraps longitude into (-180, 180].
///
/// An exact result of 180 maps to -180, so both antimeridian inputs project
/// to the identical x.
pub fn normalize_longitude(lon: f64) -> f64 {
    let x = ((lon + 180.0) % 360.0 + 360.0) % 360.0 - 180.0;
    if x == 180.0 { -180.0 } else { x }
}
