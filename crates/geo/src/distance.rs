//! Planar Euclidean distance.
//!
//! EPSG:5514 is distance-preserving over Czech territory (scale distortion
//! stays within roughly 10 cm/km), so straight Euclidean distance on the
//! projected axes approximates real-world metres.

use crate::PlanarPoint;

/// Calculates the Euclidean distance between two planar points in metres.
///
/// # Arguments
/// * `from` - Starting point
/// * `to` - Ending point
///
/// # Returns
/// Distance in metres
///
/// # Example
/// ```
/// use sortbin_geo::{distance_meters, PlanarPoint};
///
/// let a = PlanarPoint::new(0.0, 0.0);
/// let b = PlanarPoint::new(3.0, 4.0);
///
/// assert_eq!(distance_meters(&a, &b), 5.0);
/// ```
#[inline]
pub fn distance_meters(from: &PlanarPoint, to: &PlanarPoint) -> f64 {
    (from.x - to.x).hypot(from.y - to.y)
}
