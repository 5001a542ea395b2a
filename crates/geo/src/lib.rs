//! Geospatial primitives for Sortbin tools.
//!
//! This crate provides:
//! - Geographic (WGS-84) and planar (S-JTSK) coordinate types
//! - WGS-84 to EPSG:5514 (S-JTSK / Krovak East North) projection
//! - Planar Euclidean distance in metres
//!
//! # Example
//!
//! ```
//! use sortbin_geo::{GeoCoordinate, KrovakProjection};
//!
//! let projection = KrovakProjection::new();
//! let brno = GeoCoordinate::new(16.60796, 49.19522);
//!
//! let point = projection.forward(&brno).unwrap();
//! assert!((point.x - (-598_163.3)).abs() < 0.5);
//! assert!((point.y - (-1_160_740.5)).abs() < 0.5);
//! ```

mod distance;
mod error;
mod projection;

pub use distance::distance_meters;
pub use error::{GeoError, Result};
pub use projection::KrovakProjection;

/// A geographic coordinate in WGS-84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoCoordinate {
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
}

impl GeoCoordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `longitude` - Longitude in degrees (-180 to 180)
    /// * `latitude` - Latitude in degrees (-90 to 90)
    #[inline]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

impl From<(f64, f64)> for GeoCoordinate {
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Self::new(longitude, latitude)
    }
}

/// A point in the planar EPSG:5514 system.
///
/// Axis units are metres; both components are negative over Czech
/// territory (the Krovak southing/westing axes are negated to east/north).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlanarPoint {
    /// Easting in metres
    pub x: f64,
    /// Northing in metres
    pub y: f64,
}

impl PlanarPoint {
    /// Creates a new planar point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for PlanarPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
