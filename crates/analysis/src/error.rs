//! Error types for the distance analysis.

use thiserror::Error;

/// Fatal problems found while computing distances.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// An address has no eligible container and no co-location match.
    /// Raised instead of reporting a bogus sentinel distance.
    #[error("address '{label}' has no reachable public container")]
    NoReachableContainer {
        /// Label of the unreachable address
        label: String,
    },

    /// A nearest distance beyond the sanity limit means broken input,
    /// and aborts the whole run rather than skewing the statistics.
    #[error("address '{label}' is {meters:.0} m from the nearest container, beyond the 10 km sanity limit")]
    OutlierDistance {
        /// Label of the offending address
        label: String,
        /// The computed minimum distance
        meters: f64,
    },
}
