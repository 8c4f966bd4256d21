use tracing::debug;

use crate::core::grid::{decode_cells, encode_cells};
use crate::core::mercator::{lat_to_y, lon_to_x, x_to_lon, y_to_lat};
use crate::error::GdaError;
use crate::util::coord::{LatLng, clamp_latitude, normalize_longitude};

/// Encodes a coordinate into a digital address code.
///
/// The coordinate is clamped/normalized into the Web Mercator valid ranges,
/// projected to planar meters and pushed through `levels` rounds of 6x6
/// subdivision, one symbol per round. Symbols are grouped into hyphen-joined
/// chunks of four, so a 10-level code reads as `AAAA-BBBB-CC`.
///
/// # Process
///
/// 1. Rejects NaN or infinite latitude/longitude
/// 2. Clamps latitude to ±85.05112878°, wraps longitude into (-180, 180]
/// 3. Projects to Web Mercator meters
/// 4. Selects one grid cell per level, narrowing the candidate box each time
/// 5. Groups the accumulated symbols with hyphens
///
/// # Example
/// ```
/// use gda_rs::encode_address;
///
/// # fn main() -> Result<(), gda_rs::GdaError> {
/// let code = encode_address(28.6139, 77.2090, 10)?;
/// assert_eq!(code, "SrDA-TYAV-PT");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`GdaError::NonFiniteCoordinate`] - latitude or longitude is NaN/infinite
/// - [`GdaError::InvalidLevels`] - `levels` is zero
pub fn encode_address(lat: f64, lon: f64, levels: u8) -> Result<String, GdaError> {
    if !lat.is_finite() || !lon.is_finite() {
        return Err(GdaError::NonFiniteCoordinate);
    }
    if levels == 0 {
        return Err(GdaError::InvalidLevels(levels));
    }

    let lat = clamp_latitude(lat);
    let lon = normalize_longitude(lon);

    let symbols = encode_cells(lon_to_x(lon), lat_to_y(lat), levels);
    let code = group_symbols(&symbols);
    debug!(%code, levels, "encoded coordinate");
    Ok(code)
}

/// Decodes a digital address code back to the center of its cell.
///
/// Hyphens are stripped, then each symbol narrows the world box to one of 36
/// sub-cells. The center of the final box is unprojected to degrees. The
/// result is the cell center, not the originally encoded point; the two agree
/// to within the cell size at the code's level.
///
/// # Example
/// ```
/// use gda_rs::decode_address;
///
/// # fn main() -> Result<(), gda_rs::GdaError> {
/// let center = decode_address("SrDA-TYAV-PT")?;
/// assert!((center.latitude - 28.6139).abs() < 0.001);
/// assert!((center.longitude - 77.2090).abs() < 0.001);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`GdaError::EmptyCode`] - nothing left after removing separators
/// - [`GdaError::InvalidSymbol`] - a character is not in the symbol grid
pub fn decode_address(code: &str) -> Result<LatLng, GdaError> {
    let symbols: String = code.chars().filter(|&ch| ch != '-').collect();
    if symbols.is_empty() {
        return Err(GdaError::EmptyCode);
    }

    let cell = decode_cells(&symbols)?;
    let (cx, cy) = cell.center();
    let center = LatLng::new(y_to_lat(cy), x_to_lon(cx));
    debug!(
        latitude = center.latitude,
        longitude = center.longitude,
        "decoded code"
    );
    Ok(center)
}

/// Joins symbols into hyphen-separated groups of four.
///
/// The final group holds the remainder (1-4 symbols), so ten symbols come out
/// as 4-4-2.
fn group_symbols(symbols: &str) -> String {
    let mut grouped = String::with_capacity(symbols.len() + symbols.len() / 4);
    for (i, ch) in symbols.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            grouped.push('-');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strip(code: &str) -> String {
        code.chars().filter(|&ch| ch != '-').collect()
    }

    #[test]
    fn test_known_codes() -> Result<(), GdaError> {
        assert_eq!(encode_address(28.6139, 77.2090, 10)?, "SrDA-TYAV-PT");
        assert_eq!(encode_address(51.5007, -0.1246, 10)?, "J77F-53FG-RT");
        assert_eq!(encode_address(0.0, 0.0, 10)?, "R222-2222-22");
        Ok(())
    }

    #[test]
    fn test_grouping_lengths() -> Result<(), GdaError> {
        assert_eq!(encode_address(28.6139, 77.2090, 4)?, "SrDA");
        assert_eq!(encode_address(28.6139, 77.2090, 6)?, "SrDA-TY");
        assert_eq!(encode_address(28.6139, 77.2090, 8)?, "SrDA-TYAV");

        let code = encode_address(28.6139, 77.2090, 10)?;
        assert_eq!(strip(&code).len(), 10);
        assert_eq!(code.find('-'), Some(4));
        assert_eq!(code.rfind('-'), Some(9));
        Ok(())
    }

    #[test]
    fn test_group_symbols_general_rule() {
        assert_eq!(group_symbols("ABCDEFGHIJ"), "ABCD-EFGH-IJ");
        assert_eq!(group_symbols("ABCDEFGH"), "ABCD-EFGH");
        assert_eq!(group_symbols("ABCDEF"), "ABCD-EF");
        assert_eq!(group_symbols("ABCD"), "ABCD");
        assert_eq!(group_symbols("A"), "A");
    }

    #[test]
    fn test_pole_clamps_to_limit() -> Result<(), GdaError> {
        assert_eq!(
            encode_address(90.0, 77.2090, 10)?,
            encode_address(85.05112878, 77.2090, 10)?
        );
        assert_eq!(
            encode_address(-90.0, 77.2090, 10)?,
            encode_address(-85.05112878, 77.2090, 10)?
        );
        Ok(())
    }

    #[test]
    fn test_longitude_wraps() -> Result<(), GdaError> {
        assert_eq!(
            encode_address(28.6139, 437.2090, 10)?,
            encode_address(28.6139, 77.2090, 10)?
        );
        assert_eq!(
            encode_address(40.0, 180.0, 5)?,
            encode_address(40.0, -180.0, 5)?
        );
        Ok(())
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(
            encode_address(f64::NAN, 77.2090, 10),
            Err(GdaError::NonFiniteCoordinate)
        );
        assert_eq!(
            encode_address(28.6139, f64::INFINITY, 10),
            Err(GdaError::NonFiniteCoordinate)
        );
        assert_eq!(
            encode_address(f64::NEG_INFINITY, 0.0, 10),
            Err(GdaError::NonFiniteCoordinate)
        );
    }

    #[test]
    fn test_zero_levels_rejected() {
        assert_eq!(
            encode_address(28.6139, 77.2090, 0),
            Err(GdaError::InvalidLevels(0))
        );
    }

    #[test]
    fn test_decode_known_center() -> Result<(), GdaError> {
        let center = decode_address("SrDA-TYAV-PT")?;
        assert!((center.latitude - 28.613901072311293).abs() < 1e-9);
        assert!((center.longitude - 77.20900193853834).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_decode_ignores_separators() -> Result<(), GdaError> {
        assert_eq!(decode_address("SrDA-TYAV-PT")?, decode_address("SrDATYAVPT")?);
        Ok(())
    }

    #[test]
    fn test_decode_empty_rejected() {
        assert_eq!(decode_address(""), Err(GdaError::EmptyCode));
        assert_eq!(decode_address("---"), Err(GdaError::EmptyCode));
    }

    #[test]
    fn test_decode_invalid_symbol_reports_offender() {
        assert_eq!(decode_address("!@#$"), Err(GdaError::InvalidSymbol('!')));
        assert_eq!(decode_address("SrDA-TYA0"), Err(GdaError::InvalidSymbol('0')));
    }

    #[test]
    fn test_decoded_point_in_valid_ranges() -> Result<(), GdaError> {
        let code = encode_address(28.6139, 77.2090, 10)?;
        let center = decode_address(&code)?;

        assert!((-90.0..=90.0).contains(&center.latitude));
        assert!((-180.0..=180.0).contains(&center.longitude));
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_cell_center_reencodes_to_same_code(
            lat in -85.0511f64..85.0511,
            lon in -180.0f64..180.0,
            levels in 1u8..=10,
        ) {
            let code = encode_address(lat, lon, levels).unwrap();
            prop_assert_eq!(strip(&code).len(), levels as usize);

            let center = decode_address(&code).unwrap();
            let reencoded = encode_address(center.latitude, center.longitude, levels).unwrap();
            prop_assert_eq!(code, reencoded);
        }

        #[test]
        fn prop_shorter_code_is_prefix_of_longer(
            lat in -85.0511f64..85.0511,
            lon in -180.0f64..180.0,
            levels in 1u8..10,
        ) {
            let shorter = strip(&encode_address(lat, lon, levels).unwrap());
            let longer = strip(&encode_address(lat, lon, levels + 1).unwrap());
            prop_assert!(longer.starts_with(&shorter));
        }
    }
}
