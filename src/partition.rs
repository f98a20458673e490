//! Class partitioning.
//!
//! Splits a labeled dataset into per-class row index sets. This is the
//! shared first step of both balancing strategies: repetition oversampling
//! needs per-class counts, SMOTE needs the minority rows themselves.

use ndarray::ArrayView1;

use crate::data::Dataset;
use crate::error::BalanceError;

/// Per-class row indices and counts for a label vector.
///
/// Built by a single scan over the labels. Valid label values are
/// `0..=n_classes`, matching the dense label encoding the upstream pipeline
/// produces (`n_classes = 1` for binary data). A label outside that domain
/// is an error rather than a silent empty class - the rest of the pipeline
/// has no later validation point.
///
/// # Example
///
/// ```
/// use imbalance::partition::ClassPartition;
/// use ndarray::array;
///
/// let labels = array![0, 1, 0, 2, 1, 0];
/// let partition = ClassPartition::new(labels.view(), 2).unwrap();
///
/// assert_eq!(partition.counts(), &[3, 2, 1]);
/// assert_eq!(partition.indices(1), &[1, 4]);
/// assert_eq!(partition.max_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ClassPartition {
    /// Row indices per label value; outer index = label.
    indices: Vec<Vec<usize>>,

    /// Sample count per label value.
    counts: Vec<usize>,
}

impl ClassPartition {
    /// Partition labels into classes `0..=n_classes`.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError::InvalidLabel`] if any label exceeds
    /// `n_classes`.
    pub fn new(labels: ArrayView1<'_, u32>, n_classes: u32) -> Result<Self, BalanceError> {
        let n_buckets = n_classes as usize + 1;
        let mut indices: Vec<Vec<usize>> = vec![Vec::new(); n_buckets];

        for (row, &label) in labels.iter().enumerate() {
            if label > n_classes {
                return Err(BalanceError::InvalidLabel { label, n_classes });
            }
            indices[label as usize].push(row);
        }

        let counts = indices.iter().map(|rows| rows.len()).collect();
        Ok(Self { indices, counts })
    }

    /// Number of label values covered (`n_classes + 1`).
    #[inline]
    pub fn n_labels(&self) -> usize {
        self.counts.len()
    }

    /// Sample count for one label value.
    ///
    /// # Panics
    ///
    /// Panics if `label` exceeds the `n_classes` the partition was built
    /// with; out-of-domain labels in the *data* were already rejected by
    /// [`ClassPartition::new`].
    #[inline]
    pub fn count(&self, label: u32) -> usize {
        self.counts[label as usize]
    }

    /// Sample counts indexed by label value.
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Row indices carrying one label value, in input order.
    ///
    /// # Panics
    ///
    /// Panics if `label` exceeds the `n_classes` the partition was built
    /// with.
    #[inline]
    pub fn indices(&self, label: u32) -> &[usize] {
        &self.indices[label as usize]
    }

    /// Count of the most populous class.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Split a dataset into per-class subsets, indexed by label value.
    ///
    /// The partition must have been built from this dataset's labels.
    pub fn split(&self, dataset: &Dataset) -> Vec<Dataset> {
        self.indices
            .iter()
            .map(|rows| dataset.select_rows(rows))
            .collect()
    }
}
