//! Aggregate statistics over the per-address distances.

use crate::nearest::DistanceTable;

/// Summary of the per-address minimum distances, in metres.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Lower-middle median (see [`DistanceStats::from_table`])
    pub median: f64,
    /// Largest minimum distance
    pub max: f64,
    /// Label of the first address (in table order) at the maximum
    pub farthest: String,
}

impl DistanceStats {
    /// Computes the summary, or `None` for an empty table.
    ///
    /// The median sorts ascending and takes position `(n - 1) / 2`; for an
    /// even count it averages positions `(n - 1) / 2` and `(n - 1) / 2 + 1`
    /// (the lower-middle pair, so `[10, 20, 30, 40]` gives 25). Ties for
    /// the maximum resolve to the earliest address in table order.
    #[must_use]
    pub fn from_table(table: &DistanceTable) -> Option<Self> {
        let mut entries = table.iter();
        let first = entries.next()?;

        let mut sum = first.meters;
        let mut max = first.meters;
        let mut farthest = first.label.as_str();
        for entry in entries {
            sum += entry.meters;
            if entry.meters > max {
                max = entry.meters;
                farthest = entry.label.as_str();
            }
        }

        let mut sorted: Vec<f64> = table.iter().map(|entry| entry.meters).collect();
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            mean: sum / sorted.len() as f64,
            median: median_of_sorted(&sorted),
            max,
            farthest: farthest.to_string(),
        })
    }
}

/// Median of an ascending slice, lower-middle convention.
fn median_of_sorted(sorted: &[f64]) -> f64 {
    let position = (sorted.len() - 1) / 2;
    if sorted.len() % 2 == 1 {
        sorted[position]
    } else {
        (sorted[position] + sorted[position + 1]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nearest::AddressDistance;

    fn table(distances: &[(&str, f64)]) -> DistanceTable {
        distances
            .iter()
            .map(|(label, meters)| AddressDistance {
                label: (*label).to_string(),
                meters: *meters,
            })
            .collect()
    }

    #[test]
    fn test_median_even_count_lower_middle_pair() {
        let stats = DistanceStats::from_table(&table(&[
            ("a", 10.0),
            ("b", 20.0),
            ("c", 30.0),
            ("d", 40.0),
        ]))
        .unwrap();
        assert_eq!(stats.median, 25.0);
    }

    #[test]
    fn test_median_odd_count() {
        let stats = DistanceStats::from_table(&table(&[("a", 5.0), ("b", 1.0), ("c", 9.0)])).unwrap();
        assert_eq!(stats.median, 5.0);
    }

    #[test]
    fn test_mean() {
        let stats = DistanceStats::from_table(&table(&[("a", 0.0), ("b", 5.0)])).unwrap();
        assert_eq!(stats.mean, 2.5);
    }

    #[test]
    fn test_max_and_farthest() {
        let stats = DistanceStats::from_table(&table(&[
            ("Main 5", 0.0),
            ("Oak 1", 5.0),
        ]))
        .unwrap();
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.farthest, "Oak 1");
        assert_eq!(stats.median, 2.5);
    }

    #[test]
    fn test_max_tie_keeps_first_in_order() {
        let stats = DistanceStats::from_table(&table(&[
            ("a", 5.0),
            ("b", 9.0),
            ("c", 9.0),
        ]))
        .unwrap();
        assert_eq!(stats.farthest, "b");
    }

    #[test]
    fn test_single_entry() {
        let stats = DistanceStats::from_table(&table(&[("only", 42.0)])).unwrap();
        assert_eq!(stats.mean, 42.0);
        assert_eq!(stats.median, 42.0);
        assert_eq!(stats.max, 42.0);
        assert_eq!(stats.farthest, "only");
    }

    #[test]
    fn test_empty_table() {
        assert!(DistanceStats::from_table(&DistanceTable::default()).is_none());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Mean, median, and max do not care about address order
            #[test]
            fn stats_invariant_under_permutation(
                values in proptest::collection::vec(0.0f64..10_000.0, 1..50).prop_shuffle()
            ) {
                let original: Vec<(String, f64)> = values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| (format!("addr {i}"), v))
                    .collect();
                let mut reversed = original.clone();
                reversed.reverse();

                let build = |pairs: &[(String, f64)]| {
                    pairs
                        .iter()
                        .map(|(label, meters)| AddressDistance {
                            label: label.clone(),
                            meters: *meters,
                        })
                        .collect::<DistanceTable>()
                };

                let a = DistanceStats::from_table(&build(&original)).unwrap();
                let b = DistanceStats::from_table(&build(&reversed)).unwrap();

                prop_assert!((a.mean - b.mean).abs() < 1e-6);
                prop_assert_eq!(a.median, b.median);
                prop_assert_eq!(a.max, b.max);
            }
        }
    }
}
