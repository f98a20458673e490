//! Repetition-based oversampling.
//!
//! The coarse balancing strategy: bring every class up to (near) the
//! majority count by appending whole extra copies of its rows. The
//! duplication factor is integer, `max_count / count`, so a class is never
//! pushed past the majority count by more than its own size minus one.
//!
//! For fine-grained balancing of binary data, see [`crate::smote`].

use std::collections::BTreeMap;

use rand::prelude::*;
use serde::Serialize;

use crate::data::Dataset;
use crate::error::BalanceError;
use crate::partition::ClassPartition;

/// Diagnostic summary of one oversampling run.
///
/// Keyed by label value. Serializable so an external reporting collaborator
/// can log it as structured data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OversampleReport {
    /// Input sample count per class.
    pub counts: BTreeMap<u32, usize>,

    /// Whole-copy duplication factor per class (0 for empty classes).
    pub factors: BTreeMap<u32, usize>,
}

/// Balance class counts by duplicating whole class subsets.
///
/// For each class `i` with count `c[i] > 0`, the duplication factor is
/// `max(c) / c[i]` (integer division); the output contains the full input
/// plus `factor - 1` extra copies of every class with `factor > 1`. No row
/// is ever dropped, and empty classes contribute nothing. The concatenated
/// result is shuffled into a uniformly random permutation drawn from
/// `seed`, so downstream training never sees class-sorted blocks.
///
/// # Errors
///
/// Returns [`BalanceError::InvalidLabel`] if any label exceeds `n_classes`.
///
/// # Example
///
/// ```
/// use imbalance::oversample::oversample_by_repetition;
/// use imbalance::data::Dataset;
/// use ndarray::{Array1, Array2};
///
/// // 6 majority rows, 2 minority rows
/// let features = Array2::from_shape_fn((8, 3), |(r, c)| (r * 3 + c) as f32);
/// let labels = Array1::from_vec(vec![0, 0, 0, 0, 0, 0, 1, 1]);
/// let ds = Dataset::new(features, labels).unwrap();
///
/// let (balanced, report) = oversample_by_repetition(&ds, 1, 42).unwrap();
/// assert_eq!(report.factors[&1], 3);
/// assert_eq!(balanced.n_samples(), 8 + 2 * 2);
/// ```
pub fn oversample_by_repetition(
    dataset: &Dataset,
    n_classes: u32,
    seed: u64,
) -> Result<(Dataset, OversampleReport), BalanceError> {
    let partition = ClassPartition::new(dataset.labels(), n_classes)?;
    let max_count = partition.max_count();

    let mut counts = BTreeMap::new();
    let mut factors = BTreeMap::new();
    for label in 0..=n_classes {
        let count = partition.count(label);
        counts.insert(label, count);
        factors.insert(label, if count > 0 { max_count / count } else { 0 });
    }

    // All original rows, then the extra whole copies per class.
    let mut rows: Vec<usize> = (0..dataset.n_samples()).collect();
    for label in 0..=n_classes {
        let factor = factors[&label];
        if factor > 1 {
            for _ in 1..factor {
                rows.extend_from_slice(partition.indices(label));
            }
        }
    }

    let mut rng = StdRng::seed_from_u64(seed);
    rows.shuffle(&mut rng);

    let balanced = dataset.select_rows(&rows);
    Ok((balanced, OversampleReport { counts, factors }))
}

#[cfg(test)]
mod tests {
    use ndarray::{Array1, Array2, array};

    use super::*;

    fn two_class(n_majority: usize, n_minority: usize) -> Dataset {
        let n = n_majority + n_minority;
        let features = Array2::from_shape_fn((n, 2), |(r, c)| (r * 2 + c) as f32);
        let labels: Array1<u32> =
            Array1::from_iter((0..n).map(|r| if r < n_majority { 0 } else { 1 }));
        Dataset::new(features, labels).unwrap()
    }

    #[test]
    fn factor_is_floor_of_count_ratio() {
        let ds = two_class(100, 25);
        let (balanced, report) = oversample_by_repetition(&ds, 1, 7).unwrap();

        assert_eq!(report.counts[&0], 100);
        assert_eq!(report.counts[&1], 25);
        assert_eq!(report.factors[&0], 1);
        assert_eq!(report.factors[&1], 4);

        let minority_out = balanced.labels().iter().filter(|&&l| l == 1).count();
        assert_eq!(minority_out, 100);
        assert_eq!(balanced.n_samples(), 200);
    }

    #[test]
    fn no_row_is_dropped() {
        let ds = two_class(10, 3);
        let (balanced, _) = oversample_by_repetition(&ds, 1, 0).unwrap();

        // Multiset containment: every original row appears at least once.
        for r in 0..ds.n_samples() {
            let original = ds.row(r);
            let present = (0..balanced.n_samples()).any(|b| balanced.row(b) == original);
            assert!(present, "original row {r} missing from output");
        }
    }

    #[test]
    fn empty_class_contributes_nothing() {
        let features = array![[1.0], [2.0], [3.0]];
        let labels = array![0, 0, 2];
        let ds = Dataset::new(features, labels).unwrap();

        let (balanced, report) = oversample_by_repetition(&ds, 2, 1).unwrap();
        assert_eq!(report.factors[&1], 0);
        assert!(balanced.labels().iter().all(|&l| l != 1));
        // Class 2 doubled: 3 originals + 1 extra copy.
        assert_eq!(balanced.n_samples(), 4);
    }

    #[test]
    fn shuffle_is_seed_deterministic() {
        let ds = two_class(20, 5);
        let (a, _) = oversample_by_repetition(&ds, 1, 99).unwrap();
        let (b, _) = oversample_by_repetition(&ds, 1, 99).unwrap();
        assert_eq!(a.features(), b.features());
        assert_eq!(a.labels(), b.labels());
    }

    #[test]
    fn already_balanced_input_is_only_shuffled() {
        let ds = two_class(8, 8);
        let (balanced, report) = oversample_by_repetition(&ds, 1, 3).unwrap();
        assert_eq!(report.factors[&0], 1);
        assert_eq!(report.factors[&1], 1);
        assert_eq!(balanced.n_samples(), 16);
    }

    #[test]
    fn invalid_label_propagates() {
        let ds = Dataset::new(array![[1.0], [2.0]], array![0, 9]).unwrap();
        assert!(matches!(
            oversample_by_repetition(&ds, 1, 0),
            Err(BalanceError::InvalidLabel { label: 9, .. })
        ));
    }

    #[test]
    fn report_serializes() {
        let ds = two_class(4, 2);
        let (_, report) = oversample_by_repetition(&ds, 1, 0).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"counts\""));
        assert!(json.contains("\"factors\""));
    }
}
