//! Coordinate formatting
//!
//! Geometries store `(x, y)` = `(lng, lat)`. Everything the map client reads
//! is `(lat, lng)`, so every formatter here swaps the axes.

use geo::Coord;

/// Default number of fractional digits for `LatLngBounds#toString()` style output
pub const DEFAULT_URL_PRECISION: u32 = 10;

/// Polyline fixed-point scale (5 decimal places)
const E5: f64 = 1e5;

/// Render a float the way the map client literals expect: plain decimal
/// (never exponent notation), shortest round-trip digits, always with a
/// fractional part (`10.0`, `10.01`, `-0.5`, `0.00005`).
pub fn format_number(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

/// `"lat, lng"` as used inside `LatLng` constructor calls
pub fn lat_lng_pair(coord: Coord<f64>) -> String {
    format!("{}, {}", format_number(coord.y), format_number(coord.x))
}

/// Round to `precision` fractional digits, half away from zero
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        // precision beyond what f64 can scale; the value is already exact
        return value;
    }
    scaled.round() / factor
}

/// `"lat,lng"` rounded to `precision` fractional digits, as in `LatLng#toUrlValue()`
pub fn url_value(coord: Coord<f64>, precision: u32) -> String {
    format!(
        "{},{}",
        format_number(round_to_precision(coord.y, precision)),
        format_number(round_to_precision(coord.x, precision)),
    )
}

/// Scale a single axis to polyline fixed point.
///
/// Latitude and longitude are rounded independently; `f64::round` rounds half
/// away from zero.
pub fn to_e5(value: f64) -> i64 {
    (value * E5).round() as i64
}

pub fn from_e5(value: i64) -> f64 {
    value as f64 / E5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_pair_swaps_axes() {
        assert_eq!(lat_lng_pair(Coord { x: 10.0, y: 10.01 }), "10.01, 10.0");
        assert_eq!(lat_lng_pair(Coord { x: -122.5, y: 37.25 }), "37.25, -122.5");
    }

    #[test]
    fn test_format_number_keeps_fraction() {
        assert_eq!(format_number(5.0), "5.0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.125), "-0.125");
    }

    #[test]
    fn test_format_number_never_uses_exponent() {
        assert_eq!(format_number(0.00005), "0.00005");
        assert_eq!(format_number(-0.00001234), "-0.00001234");
        assert_eq!(format_number(1e21), "1000000000000000000000.0");
        assert_eq!(lat_lng_pair(Coord { x: 0.00005, y: 51.5 }), "51.5, 0.00005");
        assert_eq!(
            url_value(Coord { x: 0.0, y: 0.00001234 }, DEFAULT_URL_PRECISION),
            "0.00001234,0.0"
        );
    }

    #[test]
    fn test_url_value_rounds() {
        let coord = Coord { x: 1.23456789, y: -4.5 };
        assert_eq!(url_value(coord, 3), "-4.5,1.235");
        assert_eq!(url_value(coord, DEFAULT_URL_PRECISION), "-4.5,1.23456789");
        assert_eq!(url_value(Coord { x: 0.0, y: 5.0 }, 2), "5.0,0.0");
    }

    #[test]
    fn test_to_e5_rounds_half_away_from_zero() {
        assert_eq!(to_e5(38.5), 3_850_000);
        assert_eq!(to_e5(0.000016), 2);
        assert_eq!(to_e5(-0.000016), -2);
        assert_eq!(to_e5(-0.000014), -1);
        assert_eq!(to_e5(-120.2), -12_020_000);
        assert_eq!(from_e5(-12_020_000), -120.2);
    }
}
