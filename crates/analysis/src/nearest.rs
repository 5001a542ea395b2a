//! Batch nearest-container distance computation.
//!
//! A plain linear scan: every address is checked against every container.
//! Quadratic, but the city datasets top out at a few thousand points each,
//! so a spatial index would buy nothing worth its weight here.

use sortbin_dataset::RecordSet;
use sortbin_geo::distance_meters;

use crate::error::AnalysisError;

/// Upper sanity bound on a nearest-container distance, in metres.
pub const MAX_SANE_DISTANCE_M: f64 = 10_000.0;

/// Minimum distance from one address to any reachable container.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressDistance {
    /// Address label
    pub label: String,
    /// Distance to the nearest container; exactly 0.0 for a co-location
    /// match, a planar Euclidean value otherwise
    pub meters: f64,
}

/// Per-address minimum distances, in address input order.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    entries: Vec<AddressDistance>,
}

impl DistanceTable {
    /// Iterates entries in address input order.
    pub fn iter(&self) -> impl Iterator<Item = &AddressDistance> {
        self.entries.iter()
    }

    /// Number of addresses in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<AddressDistance> for DistanceTable {
    fn from_iter<I: IntoIterator<Item = AddressDistance>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Computes the minimum distance from every address to any reachable
/// container.
///
/// Containers without a point (access-restricted) normally contribute no
/// candidate. The exception is one sharing the address's exact label,
/// which is read as "this address is the container's documented location":
/// the distance is then fixed at exactly `0.0` and the scan stops.
///
/// # Errors
///
/// * [`AnalysisError::NoReachableContainer`] when an address has no
///   candidate at all
/// * [`AnalysisError::OutlierDistance`] when a minimum exceeds
///   [`MAX_SANE_DISTANCE_M`]; the run aborts immediately and remaining
///   addresses are not processed
pub fn nearest_distances(
    containers: &RecordSet,
    addresses: &RecordSet,
) -> Result<DistanceTable, AnalysisError> {
    let mut entries = Vec::with_capacity(addresses.len());

    for address in addresses {
        let Some(origin) = address.point else { continue };

        let mut nearest: Option<f64> = None;
        for container in containers {
            match container.point {
                None if container.label == address.label => {
                    nearest = Some(0.0);
                    break;
                }
                None => {}
                Some(site) => {
                    let candidate = distance_meters(&origin, &site);
                    if nearest.is_none_or(|best| candidate < best) {
                        nearest = Some(candidate);
                    }
                }
            }
        }

        let Some(meters) = nearest else {
            return Err(AnalysisError::NoReachableContainer {
                label: address.label.clone(),
            });
        };
        if meters > MAX_SANE_DISTANCE_M {
            return Err(AnalysisError::OutlierDistance {
                label: address.label.clone(),
                meters,
            });
        }

        entries.push(AddressDistance {
            label: address.label.clone(),
            meters,
        });
    }

    tracing::debug!(addresses = entries.len(), "computed nearest distances");

    Ok(DistanceTable { entries })
}
