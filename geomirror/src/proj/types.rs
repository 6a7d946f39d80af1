//! Projection type definitions and valid coordinate ranges

use std::fmt;

/// WGS84 semi-major axis in meters, the sphere radius used by Web Mercator.
pub const EARTH_RADIUS_M: f64 = 6378137.0;

/// Web Mercator valid latitude range (exclusive bounds).
///
/// Beyond these latitudes the projection diverges toward infinity.
pub const MIN_LAT: f64 = -85.05112878;
pub const MAX_LAT: f64 = 85.05112878;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Errors that can occur during coordinate projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionError {
    /// Latitude is outside the projectable band (-85.05112878 to 85.05112878, exclusive)
    LatitudeOutOfRange(f64),
    /// Longitude is outside valid range (-180.0 to 180.0)
    LongitudeOutOfRange(f64),
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::LatitudeOutOfRange(lat) => {
                write!(
                    f,
                    "latitude {} is outside the projectable band ({} to {}, exclusive)",
                    lat, MIN_LAT, MAX_LAT
                )
            }
            ProjectionError::LongitudeOutOfRange(lon) => {
                write!(
                    f,
                    "longitude {} is outside the valid range ({} to {})",
                    lon, MIN_LON, MAX_LON
                )
            }
        }
    }
}

impl std::error::Error for ProjectionError {}
