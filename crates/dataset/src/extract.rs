//! Raw feature extraction into canonical records.
//!
//! One driver, two specializations: container features carry planar
//! S-JTSK coordinates and an access flag, address features carry WGS-84
//! coordinates that get projected on the way in. Records missing a
//! required field are dropped and tallied, never aborted on.

use std::fmt;

use serde_json::Value;

use sortbin_geo::{GeoCoordinate, KrovakProjection, PlanarPoint};

use crate::error::DatasetError;
use crate::record::{CanonicalRecord, RecordSet};

/// Access flag value marking a container as open to the public.
/// Anything else (locked yards, housing-block keys, …) makes the
/// container ineligible for distance measurement.
const OPEN_ACCESS: &str = "volně";

/// Which dataset a batch of raw features belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    /// Waste-sorting container sites
    Containers,
    /// Residential address points
    Addresses,
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetKind::Containers => write!(f, "container"),
            DatasetKind::Addresses => write!(f, "address"),
        }
    }
}

/// Outcome of extracting a single raw feature.
enum RecordOutcome {
    /// All required fields present
    Complete(CanonicalRecord),
    /// A required field is missing or mistyped; drop and count
    Incomplete,
}

/// Result of extracting a whole dataset.
#[derive(Debug)]
pub struct Extraction {
    /// Ordered label to record mapping
    pub records: RecordSet,
    /// How many raw features were dropped for missing required fields
    pub invalid: usize,
}

/// Maps raw GeoJSON features into [`CanonicalRecord`]s.
///
/// The projection is an explicit dependency: construct it once at startup
/// and hand it in, rather than reaching for process-wide state.
pub struct Extractor<'a> {
    projection: &'a KrovakProjection,
}

impl<'a> Extractor<'a> {
    /// Creates an extractor using the given projection for address input.
    #[must_use]
    pub fn new(projection: &'a KrovakProjection) -> Self {
        Self { projection }
    }

    /// Extracts every feature of `kind`, tallying dropped records.
    ///
    /// Duplicate labels follow [`RecordSet::insert`] semantics (last write
    /// wins).
    ///
    /// # Errors
    ///
    /// * [`DatasetError::InsufficientData`] when no usable record remains
    /// * [`DatasetError::Projection`] when an address coordinate cannot be
    ///   projected, which is a fatal data problem, unlike a missing field
    pub fn extract(&self, features: &[Value], kind: DatasetKind) -> Result<Extraction, DatasetError> {
        let mut records = RecordSet::new();
        let mut invalid = 0usize;

        for feature in features {
            let outcome = match kind {
                DatasetKind::Containers => container_record(feature),
                DatasetKind::Addresses => self.address_record(feature)?,
            };
            match outcome {
                RecordOutcome::Complete(record) => records.insert(record),
                RecordOutcome::Incomplete => invalid += 1,
            }
        }

        tracing::debug!(%kind, kept = records.len(), invalid, "extracted dataset");

        if records.is_empty() {
            return Err(DatasetError::InsufficientData { kind });
        }

        Ok(Extraction { records, invalid })
    }

    /// Street + house number label, WGS-84 coordinates projected to planar.
    fn address_record(&self, feature: &Value) -> Result<RecordOutcome, DatasetError> {
        let properties = feature.get("properties");
        let Some(street) = properties
            .and_then(|p| p.get("addr:street"))
            .and_then(Value::as_str)
        else {
            return Ok(RecordOutcome::Incomplete);
        };
        let Some(house_number) = properties
            .and_then(|p| p.get("addr:housenumber"))
            .and_then(Value::as_str)
        else {
            return Ok(RecordOutcome::Incomplete);
        };
        let Some((longitude, latitude)) = coordinate_pair(feature) else {
            return Ok(RecordOutcome::Incomplete);
        };

        let point = self
            .projection
            .forward(&GeoCoordinate::new(longitude, latitude))?;

        Ok(RecordOutcome::Complete(CanonicalRecord {
            label: format!("{street} {house_number}"),
            point: Some(point),
        }))
    }
}

/// Station name, planar coordinates, and the access flag.
///
/// Coordinates are required even for access-restricted records; a record
/// that lacks them is incomplete, not merely ineligible.
fn container_record(feature: &Value) -> RecordOutcome {
    let properties = feature.get("properties");
    let Some(label) = properties
        .and_then(|p| p.get("STATIONNAME"))
        .and_then(Value::as_str)
    else {
        return RecordOutcome::Incomplete;
    };
    let Some((x, y)) = coordinate_pair(feature) else {
        return RecordOutcome::Incomplete;
    };
    let Some(access) = properties
        .and_then(|p| p.get("PRISTUP"))
        .and_then(Value::as_str)
    else {
        return RecordOutcome::Incomplete;
    };

    let point = (access == OPEN_ACCESS).then(|| PlanarPoint::new(x, y));

    RecordOutcome::Complete(CanonicalRecord {
        label: label.to_string(),
        point,
    })
}

/// First two numbers of `geometry.coordinates`, if present.
fn coordinate_pair(feature: &Value) -> Option<(f64, f64)> {
    let coordinates = feature
        .get("geometry")?
        .get("coordinates")?
        .as_array()?;
    let first = coordinates.first()?.as_f64()?;
    let second = coordinates.get(1)?.as_f64()?;
    Some((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn container(name: &str, access: &str, x: f64, y: f64) -> Value {
        json!({
            "type": "Feature",
            "properties": {"STATIONNAME": name, "PRISTUP": access},
            "geometry": {"type": "Point", "coordinates": [x, y]}
        })
    }

    fn address(street: &str, number: &str, longitude: f64, latitude: f64) -> Value {
        json!({
            "type": "Feature",
            "properties": {"addr:street": street, "addr:housenumber": number},
            "geometry": {"type": "Point", "coordinates": [longitude, latitude]}
        })
    }

    #[test]
    fn test_open_container_is_eligible() {
        let projection = KrovakProjection::new();
        let features = vec![container("Bystrc 1", "volně", -598_163.3, -1_160_740.5)];

        let extraction = Extractor::new(&projection)
            .extract(&features, DatasetKind::Containers)
            .unwrap();

        let record = extraction.records.get("Bystrc 1").unwrap();
        assert_eq!(record.point, Some(PlanarPoint::new(-598_163.3, -1_160_740.5)));
        assert_eq!(extraction.invalid, 0);
    }

    #[test]
    fn test_restricted_container_is_kept_without_point() {
        let projection = KrovakProjection::new();
        let features = vec![
            container("Bystrc 1", "volně", -598_163.3, -1_160_740.5),
            container("Vnitroblok", "obyvatelům domu", -598_000.0, -1_160_000.0),
        ];

        let extraction = Extractor::new(&projection)
            .extract(&features, DatasetKind::Containers)
            .unwrap();

        assert_eq!(extraction.records.len(), 2);
        assert!(extraction.records.get("Vnitroblok").unwrap().point.is_none());
    }

    #[test]
    fn test_container_missing_station_name_is_invalid() {
        let projection = KrovakProjection::new();
        let features = vec![
            json!({
                "properties": {"PRISTUP": "volně"},
                "geometry": {"coordinates": [-598_163.3, -1_160_740.5]}
            }),
            container("Bystrc 1", "volně", -598_163.3, -1_160_740.5),
        ];

        let extraction = Extractor::new(&projection)
            .extract(&features, DatasetKind::Containers)
            .unwrap();

        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.invalid, 1);
    }

    #[test]
    fn test_restricted_container_still_needs_coordinates() {
        let projection = KrovakProjection::new();
        let features = vec![
            json!({
                "properties": {"STATIONNAME": "Vnitroblok", "PRISTUP": "obyvatelům domu"},
                "geometry": {"type": "Point"}
            }),
            container("Bystrc 1", "volně", -598_163.3, -1_160_740.5),
        ];

        let extraction = Extractor::new(&projection)
            .extract(&features, DatasetKind::Containers)
            .unwrap();

        assert_eq!(extraction.invalid, 1);
        assert!(extraction.records.get("Vnitroblok").is_none());
    }

    #[test]
    fn test_address_label_joins_street_and_number() {
        let projection = KrovakProjection::new();
        let features = vec![address("Dvořákova", "12", 16.60796, 49.19522)];

        let extraction = Extractor::new(&projection)
            .extract(&features, DatasetKind::Addresses)
            .unwrap();

        let record = extraction.records.get("Dvořákova 12").unwrap();
        let point = record.point.unwrap();
        assert!((point.x - (-598_163.33)).abs() < 0.5);
        assert!((point.y - (-1_160_740.51)).abs() < 0.5);
    }

    #[test]
    fn test_invalid_tally_for_addresses() {
        // 10 raw records, 3 without a house number -> 7 kept, 3 counted
        let projection = KrovakProjection::new();
        let mut features = Vec::new();
        for i in 0..7 {
            features.push(address("Lidická", &format!("{i}"), 16.60, 49.19));
        }
        for _ in 0..3 {
            features.push(json!({
                "properties": {"addr:street": "Lidická"},
                "geometry": {"coordinates": [16.60, 49.19]}
            }));
        }

        let extraction = Extractor::new(&projection)
            .extract(&features, DatasetKind::Addresses)
            .unwrap();

        assert_eq!(extraction.records.len(), 7);
        assert_eq!(extraction.invalid, 3);
    }

    #[test]
    fn test_mistyped_house_number_is_invalid() {
        let projection = KrovakProjection::new();
        let features = vec![
            json!({
                "properties": {"addr:street": "Lidická", "addr:housenumber": 7},
                "geometry": {"coordinates": [16.60, 49.19]}
            }),
            address("Lidická", "9", 16.60, 49.19),
        ];

        let extraction = Extractor::new(&projection)
            .extract(&features, DatasetKind::Addresses)
            .unwrap();

        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.invalid, 1);
    }

    #[test]
    fn test_duplicate_address_label_last_wins() {
        let projection = KrovakProjection::new();
        let features = vec![
            address("Lidická", "7", 16.60796, 49.19522),
            address("Lidická", "7", 16.60960, 49.19612),
        ];

        let extraction = Extractor::new(&projection)
            .extract(&features, DatasetKind::Addresses)
            .unwrap();

        assert_eq!(extraction.records.len(), 1);
        let point = extraction.records.get("Lidická 7").unwrap().point.unwrap();
        // second record's coordinates won
        assert!((point.x - (-598_033.74)).abs() < 0.5);
    }

    #[test]
    fn test_empty_result_is_insufficient_data() {
        let projection = KrovakProjection::new();
        let features = vec![json!({"properties": {}})];

        let result = Extractor::new(&projection).extract(&features, DatasetKind::Addresses);
        assert!(matches!(
            result,
            Err(DatasetError::InsufficientData {
                kind: DatasetKind::Addresses
            })
        ));
    }

    #[test]
    fn test_unprojectable_address_is_fatal() {
        let projection = KrovakProjection::new();
        let features = vec![address("Lidická", "7", 16.60, 95.0)];

        let result = Extractor::new(&projection).extract(&features, DatasetKind::Addresses);
        assert!(matches!(result, Err(DatasetError::Projection(_))));
    }
}
