use std::f64::consts::PI;

use crate::core::constants::EARTH_RADIUS_M;

/// Approximate linear size in meters of a cell at the given level.
///
/// Closed form: world circumference divided by `6^levels`. Strictly
/// decreasing as `levels` grows. Zero or negative levels yield a size at or
/// above the world circumference; the formula stays well-defined, so they
/// are accepted rather than rejected.
pub fn approx_cell_size_meters(levels: i32) -> f64 {
    let world = 2.0 * PI * EARTH_RADIUS_M;
    world / 6.0_f64.powi(levels)
}
