//! Dataset loading and record extraction for Sortbin tools.
//!
//! This crate turns raw GeoJSON feature collections into the canonical
//! `(label, optional point)` records the distance analysis works with:
//! - [`load_features`] reads a file and returns its `features` array
//! - [`Extractor`] maps raw features into a [`RecordSet`], tolerating and
//!   tallying records with missing fields
//!
//! Containers carry planar S-JTSK coordinates and an access flag; address
//! points carry WGS-84 coordinates and are projected on the way in.

mod error;
mod extract;
mod loader;
mod record;

pub use error::DatasetError;
pub use extract::{DatasetKind, Extraction, Extractor};
pub use loader::load_features;
pub use record::{CanonicalRecord, RecordSet};
