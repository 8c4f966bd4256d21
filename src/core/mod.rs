pub mod constants;
pub mod dimensions;
pub mod grid;
pub mod mercator;

pub use constants::{ADDRESS_GRID, DEFAULT_LEVELS, EARTH_RADIUS_M, GRID_DIM, MAX_LATITUDE};
pub use dimensions::approx_cell_size_meters;
pub use grid::{decode_cells, encode_cells, grid_position};
pub use mercator::{MercatorBounds, lat_to_y, lon_to_x, x_to_lon, y_to_lat};
