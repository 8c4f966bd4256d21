use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::constants::{EARTH_RADIUS_M, MAX_LATITUDE};
use crate::util::coord::{clamp_latitude, normalize_longitude};

/// A bounding box in projected Web Mercator meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MercatorBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl MercatorBounds {
    /// World extent at the latitude clamp limit.
    ///
    /// Symmetric about the origin: `min_y == -max_y`.
    pub fn world() -> Self {
        let max_x = PI * EARTH_RADIUS_M;
        let max_y = lat_to_y(MAX_LATITUDE);
        Self {
            min_x: -max_x,
            max_x,
            min_y: -max_y,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center of the box in projected meters.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

/// Projects longitude (degrees) to Mercator x (meters), normalizing first.
pub fn lon_to_x(lon: f64) -> f64 {
    EARTH_RADIUS_M * normalize_longitude(lon).to_radians()
}

/// Projects latitude (degrees) to Mercator y (meters), clamping first.
pub fn lat_to_y(lat: f64) -> f64 {
    let phi = clamp_latitude(lat).to_radians();
    EARTH_RADIUS_M * (PI / 4.0 + phi / 2.0).tan().ln()
}

/// Unprojects Mercator x (meters) back to longitude (degrees).
pub fn x_to_lon(x: f64) -> f64 {
    normalize_longitude((x / EARTH_RADIUS_M).to_degrees())
}

/// Unprojects Mercator y (meters) back to latitude (degrees).
pub fn y_to_lat(y: f64) -> f64 {
    let phi = 2.0 * (y / EARTH_RADIUS_M).exp().atan() - PI / 2.0;
    phi.to_degrees()
}
