//! Stateful feature standardization.
//!
//! Per-column zero-mean unit-variance scaling with an explicit fit step.
//! The fitted state is an ordinary caller-owned value - there is no hidden
//! process-wide scaler, and `transform` never refits silently. Fit on the
//! reference matrix once, then apply to as many matrices as needed.

use ndarray::{Array1, Array2, ArrayView2, Axis};

use crate::error::BalanceError;

/// How `fit` treats a column whose standard deviation is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroVariancePolicy {
    /// Record a scale of 1, so the column transforms to all zeros.
    #[default]
    PassThrough,

    /// Fail the fit with [`BalanceError::DegenerateColumn`].
    Fail,
}

/// Fitted per-column statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalerState {
    /// Per-column mean.
    pub mean: Array1<f32>,

    /// Per-column divisor: the population standard deviation, or 1 for a
    /// passed-through zero-variance column.
    pub scale: Array1<f32>,
}

/// Standardizing scaler with distinct fit and apply steps.
///
/// # Example
///
/// ```
/// use imbalance::scale::StandardScaler;
/// use ndarray::array;
///
/// let reference = array![[1.0, 10.0], [3.0, 30.0], [5.0, 50.0]];
///
/// let mut scaler = StandardScaler::default();
/// let scaled = scaler.fit_transform(reference.view()).unwrap();
/// assert_eq!(scaled[[1, 0]], 0.0); // column means removed
///
/// // Reuse the fitted state on new data without refitting.
/// let fresh = array![[3.0, 30.0]];
/// let out = scaler.transform(fresh.view()).unwrap();
/// assert_eq!(out[[0, 0]], 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StandardScaler {
    policy: ZeroVariancePolicy,
    state: Option<ScalerState>,
}

impl StandardScaler {
    /// Scaler with an explicit zero-variance policy.
    pub fn new(policy: ZeroVariancePolicy) -> Self {
        Self {
            policy,
            state: None,
        }
    }

    /// Rehydrate a scaler from previously fitted state.
    pub fn from_state(state: ScalerState) -> Self {
        Self {
            policy: ZeroVariancePolicy::default(),
            state: Some(state),
        }
    }

    /// The fitted state, if `fit` has run.
    pub fn state(&self) -> Option<&ScalerState> {
        self.state.as_ref()
    }

    /// Compute per-column mean and population standard deviation.
    ///
    /// Replaces any previously fitted state.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError::DegenerateColumn`] under
    /// [`ZeroVariancePolicy::Fail`] when a column has zero variance. The
    /// previous state is left untouched on failure.
    pub fn fit(&mut self, features: ArrayView2<'_, f32>) -> Result<(), BalanceError> {
        let n_rows = features.nrows().max(1) as f32;
        let mean = features
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(features.ncols()));

        let mut scale = Array1::<f32>::zeros(features.ncols());
        for (column, out) in scale.iter_mut().enumerate() {
            let var = features
                .column(column)
                .iter()
                .map(|&v| {
                    let d = v - mean[column];
                    d * d
                })
                .sum::<f32>()
                / n_rows;
            let std = var.sqrt();
            if std == 0.0 {
                match self.policy {
                    ZeroVariancePolicy::PassThrough => *out = 1.0,
                    ZeroVariancePolicy::Fail => {
                        return Err(BalanceError::DegenerateColumn { column });
                    }
                }
            } else {
                *out = std;
            }
        }

        self.state = Some(ScalerState { mean, scale });
        Ok(())
    }

    /// Apply the fitted standardization: `(x - mean) / scale` per column.
    ///
    /// # Errors
    ///
    /// - [`BalanceError::NotFitted`] if `fit` has never run.
    /// - [`BalanceError::ShapeMismatch`] if the column count differs from
    ///   the fitted width.
    pub fn transform(&self, features: ArrayView2<'_, f32>) -> Result<Array2<f32>, BalanceError> {
        let state = self.state.as_ref().ok_or(BalanceError::NotFitted)?;
        if features.ncols() != state.mean.len() {
            return Err(BalanceError::ShapeMismatch {
                expected: state.mean.len(),
                got: features.ncols(),
                field: "transform columns",
            });
        }

        let mut out = features.to_owned();
        for (column, mut col) in out.columns_mut().into_iter().enumerate() {
            let mean = state.mean[column];
            let scale = state.scale[column];
            col.mapv_inplace(|v| (v - mean) / scale);
        }
        Ok(out)
    }

    /// Fit on `features`, then transform the same matrix.
    pub fn fit_transform(
        &mut self,
        features: ArrayView2<'_, f32>,
    ) -> Result<Array2<f32>, BalanceError> {
        self.fit(features)?;
        self.transform(features)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn transform_before_fit_fails() {
        let scaler = StandardScaler::default();
        let features = array![[1.0, 2.0]];
        assert_eq!(
            scaler.transform(features.view()).unwrap_err(),
            BalanceError::NotFitted
        );
    }

    #[test]
    fn standardizes_columns() {
        let features = array![[1.0, 100.0], [2.0, 200.0], [3.0, 300.0]];
        let mut scaler = StandardScaler::default();
        let scaled = scaler.fit_transform(features.view()).unwrap();

        // Each column: mean 0, population std 1.
        for c in 0..2 {
            let col = scaled.column(c);
            let mean = col.iter().sum::<f32>() / col.len() as f32;
            let var = col.iter().map(|&v| (v - mean) * (v - mean)).sum::<f32>() / col.len() as f32;
            assert_abs_diff_eq!(mean, 0.0, epsilon = 1e-6);
            assert_abs_diff_eq!(var, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn transform_reuses_state_without_refit() {
        let reference = array![[0.0], [10.0]];
        let mut scaler = StandardScaler::default();
        scaler.fit(reference.view()).unwrap();
        let before = scaler.state().cloned();

        let other = array![[5.0], [15.0]];
        let out = scaler.transform(other.view()).unwrap();

        // mean 5, std 5 from the reference matrix.
        assert_abs_diff_eq!(out[[0, 0]], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(out[[1, 0]], 2.0, epsilon = 1e-6);
        assert_eq!(scaler.state().cloned(), before);
    }

    #[test]
    fn constant_column_passes_through_as_zero() {
        let features = array![[5.0, 1.0], [5.0, 2.0], [5.0, 3.0]];
        let mut scaler = StandardScaler::new(ZeroVariancePolicy::PassThrough);
        let scaled = scaler.fit_transform(features.view()).unwrap();
        assert!(scaled.column(0).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn constant_column_fails_under_strict_policy() {
        let features = array![[5.0, 1.0], [5.0, 2.0]];
        let mut scaler = StandardScaler::new(ZeroVariancePolicy::Fail);
        assert_eq!(
            scaler.fit(features.view()).unwrap_err(),
            BalanceError::DegenerateColumn { column: 0 }
        );
        assert!(scaler.state().is_none());
    }

    #[test]
    fn width_mismatch_rejected() {
        let mut scaler = StandardScaler::default();
        scaler.fit(array![[1.0, 2.0], [3.0, 4.0]].view()).unwrap();
        let narrow = array![[1.0]];
        assert!(matches!(
            scaler.transform(narrow.view()),
            Err(BalanceError::ShapeMismatch { .. })
        ));
    }
}
