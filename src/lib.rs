//! # gda-rs
//!
//! Global digital addressing: converts a latitude/longitude into a short
//! alphanumeric code by recursively subdividing the Web Mercator plane into a
//! 6x6 grid, one symbol per level, and converts codes back to the center of
//! the cell they identify.
//!
//! There are three main entry points.
//!
//! ### 1. `AddressCell` - Single Cell Operations
//!
//! ```
//! use gda_rs::AddressCell;
//!
//! # fn main() -> Result<(), gda_rs::GdaError> {
//! let cell = AddressCell::from_lat_lng(28.6139, 77.2090, 10)?;
//! println!("{}", cell.code);
//! let polygon = cell.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Free Functions - Encode/Decode Strings
//!
//! ```
//! use gda_rs::{decode_address, encode_address};
//!
//! # fn main() -> Result<(), gda_rs::GdaError> {
//! let code = encode_address(28.6139, 77.2090, 10)?;
//! let center = decode_address(&code)?;
//! println!("{} -> ({}, {})", code, center.latitude, center.longitude);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Cell Size Estimation
//!
//! ```
//! use gda_rs::approx_cell_size_meters;
//!
//! let size = approx_cell_size_meters(10);
//! assert!(size < 1.0);
//! ```

pub mod api;
pub mod core;
pub mod error;
pub mod index;
pub mod util;

pub use api::AddressCell;
pub use core::{
    ADDRESS_GRID, DEFAULT_LEVELS, EARTH_RADIUS_M, GRID_DIM, MAX_LATITUDE, MercatorBounds,
    approx_cell_size_meters, lat_to_y, lon_to_x, x_to_lon, y_to_lat,
};
pub use error::GdaError;
pub use index::{decode_address, encode_address};
pub use util::{Coordinate, LatLng, clamp_latitude, normalize_longitude};

pub use geo_types;
