//! Seeded synthetic data generators for tests and benches.

use ndarray::{Array1, Array2};
use rand::prelude::*;

use crate::data::Dataset;

/// Random dense features, uniform in `[min, max]`.
pub fn random_features(rows: usize, cols: usize, seed: u64, min: f32, max: f32) -> Array2<f32> {
    assert!(max >= min);
    let mut rng = StdRng::seed_from_u64(seed);
    let width = max - min;
    Array2::from_shape_fn((rows, cols), |_| min + rng.r#gen::<f32>() * width)
}

/// Binary labels with an exact positive count of `round(rows * positive_fraction)`,
/// at seed-shuffled positions.
pub fn imbalanced_binary_labels(rows: usize, positive_fraction: f64, seed: u64) -> Array1<u32> {
    assert!((0.0..=1.0).contains(&positive_fraction));
    let n_positive = ((rows as f64) * positive_fraction).round() as usize;
    let mut labels: Vec<u32> = (0..rows).map(|r| u32::from(r < n_positive)).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    labels.shuffle(&mut rng);
    Array1::from_vec(labels)
}

/// An imbalanced binary dataset with uniform features in `[0, 1]`.
///
/// The positive count is exact, so tests can assert closed-form balancing
/// arithmetic against it.
pub fn imbalanced_dataset(rows: usize, cols: usize, positive_fraction: f64, seed: u64) -> Dataset {
    let features = random_features(rows, cols, seed, 0.0, 1.0);
    let labels = imbalanced_binary_labels(rows, positive_fraction, seed.wrapping_add(1));
    Dataset::new(features, labels).expect("generated shapes are consistent")
}
