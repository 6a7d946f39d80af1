//! Coordinate projection module
//!
//! Provides conversions between geographic WGS84 coordinates (longitude/latitude
//! in degrees) and Web Mercator planar coordinates (x/y in meters).
//!
//! Both directions are pure functions: no state, no I/O, and equal inputs always
//! produce bit-identical outputs. Out-of-range input is rejected, never clamped;
//! a clamped result would silently disagree with the stored geographic record.

mod types;

pub use types::{ProjectionError, EARTH_RADIUS_M, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

use std::f64::consts::PI;

/// Projects WGS84 coordinates forward to Web Mercator.
///
/// # Arguments
///
/// * `lon` - Longitude in degrees (-180.0 to 180.0)
/// * `lat` - Latitude in degrees (-85.05112878 to 85.05112878, exclusive)
///
/// # Returns
///
/// A `Result` containing the `(x, y)` pair in meters, or an error if either
/// input is outside its valid range. NaN input is rejected as out of range.
#[inline]
pub fn forward(lon: f64, lat: f64) -> Result<(f64, f64), ProjectionError> {
    if !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(ProjectionError::LongitudeOutOfRange(lon));
    }
    // Exclusive bounds: at the band edge y already spans the full map extent.
    if !(lat > MIN_LAT && lat < MAX_LAT) {
        return Err(ProjectionError::LatitudeOutOfRange(lat));
    }

    let x = lon.to_radians() * EARTH_RADIUS_M;
    let y = EARTH_RADIUS_M * (PI / 4.0 + lat.to_radians() / 2.0).tan().ln();

    Ok((x, y))
}

/// Projects Web Mercator coordinates back to WGS84.
///
/// Used for display and verification only; the write path never needs it.
/// Total over all finite inputs. Within the forward precondition,
/// `inverse(forward(lon, lat))` reproduces `(lon, lat)` to within
/// floating-point rounding error.
#[inline]
pub fn inverse(x: f64, y: f64) -> (f64, f64) {
    let lon = (x / EARTH_RADIUS_M).to_degrees();
    let lat = (2.0 * (y / EARTH_RADIUS_M).exp().atan() - PI / 2.0).to_degrees();

    (lon, lat)
}
