pub mod coord;

pub use coord::{Coordinate, LatLng, clamp_latitude, normalize_longitude};
