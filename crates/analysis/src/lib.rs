//! Nearest-container distance analysis and summary statistics.
//!
//! Takes the canonical record sets produced by `sortbin-dataset` and
//! computes, for every address point, the distance to the nearest
//! publicly accessible container ([`nearest_distances`]), then condenses
//! the result into mean/median/maximum figures ([`DistanceStats`]).

mod error;
mod nearest;
mod stats;

pub use error::AnalysisError;
pub use nearest::{AddressDistance, DistanceTable, MAX_SANE_DISTANCE_M, nearest_distances};
pub use stats::DistanceStats;
