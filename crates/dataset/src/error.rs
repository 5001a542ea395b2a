//! Error types for dataset loading and extraction.

use std::path::PathBuf;

use thiserror::Error;

use crate::extract::DatasetKind;

/// Errors that can occur while loading or extracting a dataset.
///
/// Everything here is fatal for the run; per-record problems are tallied
/// inside [`crate::Extraction`] instead of surfacing as errors.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Input file does not exist
    #[error("file {} does not exist", path.display())]
    NotFound {
        /// Path that failed to resolve
        path: PathBuf,
    },

    /// Input file exists but cannot be read
    #[error("no permission to read {}", path.display())]
    AccessDenied {
        /// Path that was rejected
        path: PathBuf,
    },

    /// Any other read failure
    #[error("failed to read {}", path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Content is not a JSON feature collection
    #[error("{} is not a valid feature collection: {source}", path.display())]
    Malformed {
        /// Path being parsed
        path: PathBuf,
        /// Parse diagnostic
        #[source]
        source: serde_json::Error,
    },

    /// No usable records remain after filtering
    #[error("not enough usable {kind} records to compute distances")]
    InsufficientData {
        /// Which dataset came up empty
        kind: DatasetKind,
    },

    /// Address coordinate could not be projected
    #[error(transparent)]
    Projection(#[from] sortbin_geo::GeoError),
}
