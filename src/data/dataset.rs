//! Labeled dataset container.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis, concatenate};

use crate::error::BalanceError;

use super::schema::Schema;

/// A feature matrix with one integer class label per sample.
///
/// # Storage Layout
///
/// Features are stored in **sample-major** layout: `[n_samples, n_features]`.
/// Each sample's feature vector is contiguous in memory, which is the access
/// pattern every balancing component uses (row selection, row interpolation,
/// row concatenation).
///
/// Labels take values in `0..=n_classes`; the label domain is validated by
/// the consuming components, not at construction.
///
/// # Example
///
/// ```
/// use imbalance::data::Dataset;
/// use ndarray::array;
///
/// let features = array![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]];
/// let labels = array![0, 1, 0];
/// let ds = Dataset::new(features, labels).unwrap();
///
/// assert_eq!(ds.n_samples(), 3);
/// assert_eq!(ds.n_features(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Feature data: `[n_samples, n_features]` (sample-major).
    features: Array2<f32>,

    /// Class labels: length = n_samples.
    labels: Array1<u32>,

    /// Column names.
    schema: Schema,
}

impl Dataset {
    /// Create a dataset from a sample-major feature matrix and parallel labels.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError::ShapeMismatch`] if `labels.len()` differs from
    /// the number of feature rows.
    pub fn new(features: Array2<f32>, labels: Array1<u32>) -> Result<Self, BalanceError> {
        if labels.len() != features.nrows() {
            return Err(BalanceError::ShapeMismatch {
                expected: features.nrows(),
                got: labels.len(),
                field: "labels",
            });
        }
        let schema = Schema::unnamed(features.ncols());
        Ok(Self {
            features,
            labels,
            schema,
        })
    }

    /// Attach a column schema.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError::ShapeMismatch`] if the schema column count
    /// differs from the feature width.
    pub fn with_schema(mut self, schema: Schema) -> Result<Self, BalanceError> {
        if schema.n_columns() != self.n_features() {
            return Err(BalanceError::ShapeMismatch {
                expected: self.n_features(),
                got: schema.n_columns(),
                field: "schema",
            });
        }
        self.schema = schema;
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of samples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    /// Number of feature columns.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// View of the feature matrix, `[n_samples, n_features]`.
    #[inline]
    pub fn features(&self) -> ArrayView2<'_, f32> {
        self.features.view()
    }

    /// View of the label vector.
    #[inline]
    pub fn labels(&self) -> ArrayView1<'_, u32> {
        self.labels.view()
    }

    /// Feature vector of one sample.
    #[inline]
    pub fn row(&self, sample: usize) -> ArrayView1<'_, f32> {
        self.features.row(sample)
    }

    /// Column schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Fraction of samples carrying label `1`.
    ///
    /// Meaningful for binary datasets; used to decide whether synthesis is
    /// needed at all.
    pub fn positive_proportion(&self) -> f64 {
        if self.labels.is_empty() {
            return 0.0;
        }
        let positives = self.labels.iter().filter(|&&l| l == 1).count();
        positives as f64 / self.labels.len() as f64
    }

    /// Consume the dataset, returning the owned feature matrix and labels.
    pub fn into_parts(self) -> (Array2<f32>, Array1<u32>) {
        (self.features, self.labels)
    }

    // =========================================================================
    // Row operations
    // =========================================================================

    /// New dataset containing the given rows, in the given order.
    ///
    /// Indices may repeat; each occurrence contributes one output row. The
    /// schema is carried over unchanged.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn select_rows(&self, indices: &[usize]) -> Dataset {
        Dataset {
            features: self.features.select(Axis(0), indices),
            labels: self.labels.select(Axis(0), indices),
            schema: self.schema.clone(),
        }
    }

    /// New dataset with extra rows appended after the originals.
    ///
    /// Original row order is preserved. The schema is carried over unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError::ShapeMismatch`] if the appended rows have a
    /// different feature width or the label count differs from the row count.
    pub fn append_rows<'a>(
        &'a self,
        rows: ArrayView2<'a, f32>,
        labels: ArrayView1<'a, u32>,
    ) -> Result<Dataset, BalanceError> {
        if rows.ncols() != self.n_features() {
            return Err(BalanceError::ShapeMismatch {
                expected: self.n_features(),
                got: rows.ncols(),
                field: "appended rows",
            });
        }
        if labels.len() != rows.nrows() {
            return Err(BalanceError::ShapeMismatch {
                expected: rows.nrows(),
                got: labels.len(),
                field: "appended labels",
            });
        }
        let features = concatenate(Axis(0), &[self.features.view(), rows])
            .expect("widths checked above");
        let labels = concatenate(Axis(0), &[self.labels.view(), labels])
            .expect("one-dimensional concatenation cannot fail");
        Ok(Dataset {
            features,
            labels,
            schema: self.schema.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn small() -> Dataset {
        let features = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0], [4.0, 40.0]];
        let labels = array![0, 1, 0, 1];
        Dataset::new(features, labels).unwrap()
    }

    #[test]
    fn new_validates_label_length() {
        let features = array![[1.0, 2.0], [3.0, 4.0]];
        let labels = array![0];
        let result = Dataset::new(features, labels);
        assert!(matches!(
            result,
            Err(BalanceError::ShapeMismatch { field: "labels", .. })
        ));
    }

    #[test]
    fn accessors() {
        let ds = small();
        assert_eq!(ds.n_samples(), 4);
        assert_eq!(ds.n_features(), 2);
        assert_eq!(ds.row(2).to_vec(), vec![3.0, 30.0]);
        assert_eq!(ds.positive_proportion(), 0.5);
    }

    #[test]
    fn schema_width_checked() {
        let ds = small();
        assert!(ds.clone().with_schema(Schema::from_names(["a", "b"])).is_ok());
        assert!(matches!(
            ds.with_schema(Schema::from_names(["a"])),
            Err(BalanceError::ShapeMismatch { field: "schema", .. })
        ));
    }

    #[test]
    fn select_rows_repeats_and_reorders() {
        let ds = small();
        let picked = ds.select_rows(&[3, 1, 1]);
        assert_eq!(picked.n_samples(), 3);
        assert_eq!(picked.row(0).to_vec(), vec![4.0, 40.0]);
        assert_eq!(picked.row(1).to_vec(), vec![2.0, 20.0]);
        assert_eq!(picked.labels().to_vec(), vec![1, 1, 1]);
    }

    #[test]
    fn append_rows_preserves_originals() {
        let ds = small();
        let extra = array![[5.0, 50.0]];
        let out = ds.append_rows(extra.view(), array![1].view()).unwrap();
        assert_eq!(out.n_samples(), 5);
        assert_eq!(out.features().slice(ndarray::s![..4, ..]), ds.features());
        assert_eq!(out.row(4).to_vec(), vec![5.0, 50.0]);
        assert_eq!(out.labels()[4], 1);
    }

    #[test]
    fn append_rows_accepts_views_of_independent_owners() {
        // The appended rows live in their own shorter-lived owner, exactly
        // as freshly synthesized rows do.
        let ds = small();
        let out = {
            let synthetic = array![[9.0, 90.0], [8.0, 80.0]];
            let labels = array![1, 1];
            ds.append_rows(synthetic.view(), labels.view()).unwrap()
        };
        assert_eq!(out.n_samples(), 6);
        assert_eq!(out.row(5).to_vec(), vec![8.0, 80.0]);
        assert_eq!(out.labels().to_vec(), vec![0, 1, 0, 1, 1, 1]);
    }

    #[test]
    fn append_rows_width_checked() {
        let ds = small();
        let extra = array![[5.0, 50.0, 500.0]];
        assert!(matches!(
            ds.append_rows(extra.view(), array![1].view()),
            Err(BalanceError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn empty_positive_proportion() {
        let ds = Dataset::new(Array2::zeros((0, 2)), Array1::zeros(0)).unwrap();
        assert_eq!(ds.positive_proportion(), 0.0);
    }
}
