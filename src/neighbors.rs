//! Same-class nearest-neighbor index.
//!
//! Brute-force k-nearest-neighbor search under Euclidean distance, used by
//! SMOTE to pick interpolation partners inside the minority class. The
//! index is ephemeral: built once per synthesis call over the minority rows
//! and discarded afterwards.
//!
//! Distances are computed on raw feature values; standardizing first is the
//! caller's decision (see [`crate::scale`]).

use ndarray::{ArrayView1, ArrayView2};

use crate::utils::Parallelism;

/// k nearest same-class neighbors for every row of a point set.
///
/// Self-matches are excluded. Ties are broken by row index, and the
/// per-query computation is order-preserving, so the index is identical
/// regardless of thread count.
#[derive(Debug, Clone)]
pub struct NeighborIndex {
    /// Neighbor row indices per query row; inner length = k.
    neighbors: Vec<Vec<usize>>,
    k: usize,
}

impl NeighborIndex {
    /// Build the index over `points` (`[n_points, n_features]`).
    ///
    /// # Panics
    ///
    /// Panics if `k == 0` or `k >= n_points` (a row cannot be its own
    /// neighbor); callers clamp `k` before building.
    pub fn build(points: ArrayView2<'_, f32>, k: usize, parallelism: Parallelism) -> Self {
        let n = points.nrows();
        assert!(k >= 1, "k must be at least 1");
        assert!(k < n, "k must be smaller than the point count");

        let neighbors = parallelism.maybe_par_map(0..n, |query| {
            let mut by_distance: Vec<(f32, usize)> = (0..n)
                .filter(|&other| other != query)
                .map(|other| (euclidean_sq(points.row(query), points.row(other)), other))
                .collect();
            // Tie-break on row index for a deterministic ordering.
            by_distance.sort_by(|a, b| {
                a.0.partial_cmp(&b.0)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(a.1.cmp(&b.1))
            });
            by_distance.truncate(k);
            by_distance.into_iter().map(|(_, idx)| idx).collect()
        });

        Self { neighbors, k }
    }

    /// Neighbor count per row.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of indexed rows.
    #[inline]
    pub fn n_points(&self) -> usize {
        self.neighbors.len()
    }

    /// The k nearest neighbors of one row, closest first.
    #[inline]
    pub fn neighbors(&self, row: usize) -> &[usize] {
        &self.neighbors[row]
    }
}

/// Squared Euclidean distance between two feature vectors.
///
/// The square root is skipped: nearest-neighbor ranking is unchanged under
/// a monotone transform.
#[inline]
fn euclidean_sq(a: ArrayView1<'_, f32>, b: ArrayView1<'_, f32>) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
