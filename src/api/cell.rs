use geo_types::{Coord, LineString, Polygon, Rect};
use serde::Serialize;
use wkt::ToWkt;

use crate::core::constants::EARTH_RADIUS_M;
use crate::core::dimensions::approx_cell_size_meters;
use crate::core::grid::decode_cells;
use crate::core::mercator::{MercatorBounds, x_to_lon, y_to_lat};
use crate::error::GdaError;
use crate::index::identifier::encode_address;
use crate::util::coord::{Coordinate, LatLng};

/// A grid cell identified by a digital address code.
///
/// Bundles the code with the cell's center, level count and projected bounds,
/// and offers geometry output for mapping tools.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressCell {
    pub code: String,
    pub center: LatLng,
    pub levels: u8,
    pub bounds: MercatorBounds,
}

impl AddressCell {
    fn from_symbols(code: String, symbols: &str) -> Result<Self, GdaError> {
        let bounds = decode_cells(symbols)?;
        let (cx, cy) = bounds.center();

        Ok(Self {
            code,
            center: LatLng::new(y_to_lat(cy), x_to_lon(cx)),
            levels: symbols.chars().count() as u8,
            bounds,
        })
    }

    /// Create an AddressCell from a latitude/longitude pair in degrees.
    ///
    /// # Example
    /// ```
    /// use gda_rs::AddressCell;
    ///
    /// # fn main() -> Result<(), gda_rs::GdaError> {
    /// let cell = AddressCell::from_lat_lng(28.6139, 77.2090, 10)?;
    /// assert_eq!(cell.code, "SrDA-TYAV-PT");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_lat_lng(lat: f64, lon: f64, levels: u8) -> Result<Self, GdaError> {
        let code = encode_address(lat, lon, levels)?;
        let symbols: String = code.chars().filter(|&ch| ch != '-').collect();
        Self::from_symbols(code, &symbols)
    }

    /// Create an AddressCell from any coordinate-like value
    /// (x = longitude, y = latitude).
    pub fn from_point<C: Coordinate>(point: &C, levels: u8) -> Result<Self, GdaError> {
        Self::from_lat_lng(point.y(), point.x(), levels)
    }

    /// Restore an AddressCell from an existing code.
    ///
    /// # Example
    /// ```
    /// use gda_rs::AddressCell;
    ///
    /// # fn main() -> Result<(), gda_rs::GdaError> {
    /// let cell = AddressCell::from_lat_lng(28.6139, 77.2090, 10)?;
    /// let restored = AddressCell::from_code(&cell.code)?;
    /// assert_eq!(cell, restored);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_code(code: &str) -> Result<Self, GdaError> {
        let symbols: String = code.chars().filter(|&ch| ch != '-').collect();
        if symbols.is_empty() {
            return Err(GdaError::EmptyCode);
        }
        Self::from_symbols(code.to_string(), &symbols)
    }

    pub fn latitude(&self) -> f64 {
        self.center.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.center.longitude
    }

    /// Approximate linear size of this cell in meters.
    pub fn approx_size_meters(&self) -> f64 {
        approx_cell_size_meters(self.levels as i32)
    }

    // The east edge is derived from the west edge and the box width, so a
    // cell touching the antimeridian reports 180 instead of wrapping to -180.
    fn corners_degrees(&self) -> (f64, f64, f64, f64) {
        let west = x_to_lon(self.bounds.min_x);
        let east = west + (self.bounds.width() / EARTH_RADIUS_M).to_degrees();
        let south = y_to_lat(self.bounds.min_y);
        let north = y_to_lat(self.bounds.max_y);
        (west, south, east, north)
    }

    /// Cell bounds as a degree-space rectangle (x = longitude, y = latitude).
    pub fn to_rect(&self) -> Rect<f64> {
        let (west, south, east, north) = self.corners_degrees();
        Rect::new(Coord { x: west, y: south }, Coord { x: east, y: north })
    }

    /// Cell boundary as a closed degree-space polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let (west, south, east, north) = self.corners_degrees();
        let coords = vec![
            Coord { x: west, y: south },
            Coord { x: east, y: south },
            Coord { x: east, y: north },
            Coord { x: west, y: north },
            Coord { x: west, y: south },
        ];
        Polygon::new(LineString::from(coords), vec![])
    }

    /// Cell boundary as a WKT polygon string.
    pub fn to_wkt(&self) -> String {
        self.to_polygon().wkt_string()
    }

    /// Cell boundary as a GeoJSON feature carrying the code and level count.
    pub fn to_geojson(&self) -> String {
        let geometry = geojson::Geometry::new(geojson::Value::from(&self.to_polygon()));

        let mut properties = geojson::JsonObject::new();
        properties.insert("code".to_string(), serde_json::Value::from(self.code.clone()));
        properties.insert("levels".to_string(), serde_json::Value::from(self.levels));

        let feature = geojson::Feature {
            bbox: None,
            geometry: Some(geometry),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        };
        geojson::GeoJson::from(feature).to_string()
    }
}
