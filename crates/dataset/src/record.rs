//! Canonical records and the insertion-ordered label mapping.

use std::collections::HashMap;

use sortbin_geo::PlanarPoint;

/// One extracted record: a display label plus an optional planar point.
///
/// `point` is `None` for containers that are structurally complete but not
/// open to the public; those stay in the set so the co-location rule can
/// match them against address labels.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalRecord {
    /// Station name for containers, `"street housenumber"` for addresses
    pub label: String,
    /// Planar coordinate, absent for access-restricted containers
    pub point: Option<PlanarPoint>,
}

/// Insertion-ordered mapping from label to record.
///
/// Duplicate labels overwrite the stored record in place: the last write
/// wins, and the entry keeps the position of its first insertion. Earlier
/// same-label records are dropped without a warning, an accepted quirk of
/// the source datasets that the tests below pin down.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    records: Vec<CanonicalRecord>,
    index: HashMap<String, usize>,
}

impl RecordSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any existing record with the same label.
    pub fn insert(&mut self, record: CanonicalRecord) {
        match self.index.get(&record.label) {
            Some(&position) => self.records[position] = record,
            None => {
                self.index.insert(record.label.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Looks up a record by its label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&CanonicalRecord> {
        self.index.get(label).map(|&position| &self.records[position])
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CanonicalRecord> {
        self.records.iter()
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the set holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a CanonicalRecord;
    type IntoIter = std::slice::Iter<'a, CanonicalRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
