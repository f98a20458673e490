//! Synthetic minority oversampling (SMOTE).
//!
//! The fine-grained balancing strategy for binary data: instead of
//! duplicating minority rows wholesale, new minority samples are
//! interpolated between a real minority row and one of its k nearest
//! same-class neighbors. Every random draw comes from one seeded generator
//! per call, so results are reproducible.
//!
//! # Example
//!
//! ```
//! use imbalance::smote::SmoteConfig;
//! use imbalance::data::Dataset;
//! use ndarray::{Array1, Array2};
//!
//! // 8 negatives, 2 positives
//! let features = Array2::from_shape_fn((10, 4), |(r, c)| (r * 4 + c) as f32);
//! let labels = Array1::from_iter((0..10u32).map(|r| u32::from(r >= 8)));
//! let ds = Dataset::new(features, labels).unwrap();
//!
//! let config = SmoteConfig::builder()
//!     .target_proportion(0.5)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! let balanced = config.synthesize(&ds).unwrap();
//!
//! // floor(0.5 * 8 / 0.5) = 8 positives wanted, 6 synthesized
//! assert_eq!(balanced.n_samples(), 16);
//! ```

use bon::Builder;
use ndarray::{Array1, Array2};
use rand::prelude::*;

use crate::data::Dataset;
use crate::error::BalanceError;
use crate::neighbors::NeighborIndex;
use crate::partition::ClassPartition;
use crate::utils::run_with_threads;

// =============================================================================
// SmoteConfig
// =============================================================================

/// Configuration for one synthesis run.
///
/// Built via [`SmoteConfig::builder`]; `build()` validates the target
/// proportion. The config is reusable across datasets.
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct SmoteConfig {
    /// Desired positive-class proportion of the output, in `[0, 1)`.
    /// Default: 0.5 (balanced).
    #[builder(default = 0.5)]
    pub target_proportion: f64,

    /// Neighbor count for the minority k-NN index. `None` defaults to
    /// `floor(sqrt(n_samples))`, never below 1; always clamped to
    /// `pos_count - 1`.
    pub k_neighbors: Option<usize>,

    /// Random seed driving base-row choice, neighbor choice, and the
    /// interpolation factor. Default: 42.
    #[builder(default = 42)]
    pub seed: u64,

    /// Threads for the neighbor-distance pass. 0 = auto, 1 = sequential.
    /// The output never depends on this. Default: 1.
    #[builder(default = 1)]
    pub n_threads: usize,
}

impl<S: smote_config_builder::IsComplete> SmoteConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError::InvalidProportion`] if `target_proportion`
    /// is outside `[0, 1)`. At a target of exactly 1 the closed-form sample
    /// count divides by zero, so the whole `[1, ∞)` range is rejected.
    pub fn build(self) -> Result<SmoteConfig, BalanceError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl Default for SmoteConfig {
    fn default() -> Self {
        Self::builder().build().expect("default config is valid")
    }
}

impl SmoteConfig {
    fn validate(&self) -> Result<(), BalanceError> {
        if !(0.0..1.0).contains(&self.target_proportion) {
            return Err(BalanceError::InvalidProportion(self.target_proportion));
        }
        Ok(())
    }

    /// Grow the positive class of a binary dataset to the target proportion.
    ///
    /// Rows are labeled `0` (negative) or `1` (positive). The output keeps
    /// every original row in its original position and appends the synthetic
    /// positives at the end; shuffling, if wanted, is the caller's job, as
    /// is any standardization before the raw-feature distance pass.
    ///
    /// If the positive class already sits at or above the target proportion,
    /// or the closed-form target count is already met, the input is returned
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`BalanceError::InvalidLabel`] for labels other than 0/1.
    /// - [`BalanceError::InsufficientSamples`] if synthesis is required but
    ///   fewer than 2 positive rows exist to interpolate between.
    pub fn synthesize(&self, dataset: &Dataset) -> Result<Dataset, BalanceError> {
        // At or above target already: no-op by decision, not an error.
        if self.target_proportion <= dataset.positive_proportion() {
            return Ok(dataset.clone());
        }

        let partition = ClassPartition::new(dataset.labels(), 1)?;
        let pos_count = partition.count(1);
        let neg_count = partition.count(0);

        if pos_count < 2 {
            return Err(BalanceError::InsufficientSamples {
                found: pos_count,
                needed: 2,
            });
        }

        // Closed-form positive count at the target proportion, floored.
        let target_positive_count = (self.target_proportion * neg_count as f64
            / (1.0 - self.target_proportion))
            .floor() as usize;
        let needed = target_positive_count.saturating_sub(pos_count);
        if needed == 0 {
            return Ok(dataset.clone());
        }

        let k = self
            .k_neighbors
            .unwrap_or_else(|| (dataset.n_samples() as f64).sqrt().floor() as usize)
            .max(1)
            .min(pos_count - 1);

        let positives = dataset.select_rows(partition.indices(1));
        let index = run_with_threads(self.n_threads, |parallelism| {
            NeighborIndex::build(positives.features(), k, parallelism)
        });

        // Sequential draw loop: its order defines the reproducible output.
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut synthetic = Array2::<f32>::zeros((needed, dataset.n_features()));
        for mut out in synthetic.rows_mut() {
            let base_idx = rng.gen_range(0..pos_count);
            let neighbor_idx = index.neighbors(base_idx)[rng.gen_range(0..k)];
            let t: f32 = rng.r#gen();

            let base = positives.row(base_idx);
            let neighbor = positives.row(neighbor_idx);
            for (o, (&b, &n)) in out.iter_mut().zip(base.iter().zip(neighbor.iter())) {
                *o = b + t * (n - b);
            }
        }

        let synthetic_labels = Array1::<u32>::ones(needed);
        dataset.append_rows(synthetic.view(), synthetic_labels.view())
    }
}
