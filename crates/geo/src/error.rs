//! Error types for the geo crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during geo operations.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Input coordinate cannot be projected
    #[error("coordinate ({longitude}, {latitude}) is outside the projection domain")]
    OutOfDomain {
        /// Longitude of the rejected input, degrees
        longitude: f64,
        /// Latitude of the rejected input, degrees
        latitude: f64,
    },
}
