//! imbalance: class-imbalance handling for gradient boosted training pipelines.
//!
//! Balancing utilities for labeled feature matrices before they are handed
//! to an external trainer: class partitioning, duplication-based
//! oversampling, k-nearest-neighbor synthetic minority oversampling
//! (SMOTE), stateful standardization, and the water-year date transforms
//! that feed temporal features upstream.
//!
//! # Key Types
//!
//! - [`Dataset`] - sample-major feature matrix plus integer labels
//! - [`ClassPartition`] - per-class row indices and counts
//! - [`oversample_by_repetition`] - whole-copy duplication balancing
//! - [`SmoteConfig`] - configurable synthetic minority oversampling
//! - [`StandardScaler`] - fit/transform standardization
//!
//! # Determinism
//!
//! Every random draw (row choice, neighbor choice, interpolation factor,
//! shuffle) comes from a single seedable generator per call; identical
//! inputs and seeds produce identical outputs regardless of thread count.
//!
//! # Example
//!
//! ```
//! use imbalance::{Dataset, SmoteConfig};
//! use ndarray::{Array1, Array2};
//!
//! // 90 negatives, 10 positives
//! let features = Array2::from_shape_fn((100, 3), |(r, c)| ((r * 3 + c) % 17) as f32);
//! let labels = Array1::from_iter((0..100u32).map(|r| u32::from(r >= 90)));
//! let ds = Dataset::new(features, labels).unwrap();
//!
//! let config = SmoteConfig::builder().target_proportion(0.5).build().unwrap();
//! let balanced = config.synthesize(&ds).unwrap();
//! assert_eq!(balanced.n_samples(), 180);
//! ```

pub mod data;
pub mod error;
pub mod neighbors;
pub mod oversample;
pub mod partition;
pub mod scale;
pub mod smote;
pub mod testing;
pub mod utils;
pub mod water_year;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use data::{Dataset, Schema};
pub use error::BalanceError;
pub use neighbors::NeighborIndex;
pub use oversample::{OversampleReport, oversample_by_repetition};
pub use partition::ClassPartition;
pub use scale::{ScalerState, StandardScaler, ZeroVariancePolicy};
pub use smote::SmoteConfig;
pub use utils::{Parallelism, run_with_threads};
pub use water_year::{water_year_day, water_year_month};
