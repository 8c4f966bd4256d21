/// Web Mercator sphere radius in meters (WGS-84 semi-major axis)
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Latitude limit of the Web Mercator projection (degrees)
pub const MAX_LATITUDE: f64 = 85.05112878;

/// Cells per axis at every subdivision level
pub const GRID_DIM: usize = 6;

/// Default code length in symbols
pub const DEFAULT_LEVELS: u8 = 10;

/// Margin keeping projected points strictly inside the world bounds
pub(crate) const BOUNDS_EPSILON: f64 = 1e-9;

/// Symbol table labelling the 6x6 sub-cells at every level.
///
/// Row 0 is the northernmost band of the current cell, column 0 the
/// westernmost. Symbols are case-sensitive and pairwise distinct.
pub const ADDRESS_GRID: [[char; 6]; 6] = [
    ['I', 'A', 'B', 'C', 'D', 'E'],
    ['G', 'H', 'J', 'K', 'L', 'M'],
    ['N', 'P', 'Q', 'R', 'S', 'T'],
    ['U', 'r', 'W', 'X', 'Y', 'Z'],
    ['a', 'b', '9', 'd', 'V', 'F'],
    ['2', '3', '4', '5', '6', '7'],
];
