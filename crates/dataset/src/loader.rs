//! GeoJSON feature-collection loading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::DatasetError;

/// The top-level shape every input file must have.
#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Value>,
}

/// Reads `path` and returns its `features` array in source order.
///
/// Individual features stay opaque [`serde_json::Value`]s here; field
/// extraction and validation happen in [`crate::Extractor`].
///
/// # Errors
///
/// * [`DatasetError::NotFound`] / [`DatasetError::AccessDenied`] /
///   [`DatasetError::Io`] when the file cannot be read
/// * [`DatasetError::Malformed`] when the content is not valid JSON or
///   lacks a top-level `features` array; carries the parse diagnostic
pub fn load_features(path: &Path) -> Result<Vec<Value>, DatasetError> {
    let raw = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => DatasetError::NotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => DatasetError::AccessDenied {
            path: path.to_path_buf(),
        },
        _ => DatasetError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let collection: FeatureCollection =
        serde_json::from_str(&raw).map_err(|source| DatasetError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        path = %path.display(),
        features = collection.features.len(),
        "loaded feature collection"
    );

    Ok(collection.features)
}
