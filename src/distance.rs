//! Euclidean distance between feature vectors.
//!
//! Raw feature magnitudes are compared without any normalization, so features
//! with a large natural range (such as `length`) dominate the distance. This is
//! a known limitation of the scoring scheme and is kept intentionally.

use rayon::prelude::*;

use crate::features::FeatureVector;

/// Default training-set size from which distances are computed in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// Euclidean (L2) distance between two feature vectors.
pub fn euclidean_distance(a: &FeatureVector, b: &FeatureVector) -> f64 {
    a.values()
        .iter()
        .zip(b.values().iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Distances from `query` to every vector in `vectors`, in input order.
///
/// The work is spread across the rayon pool once `vectors` holds at least
/// `parallel_threshold` entries. Both paths return identical results.
pub fn batch_distances(
    query: &FeatureVector,
    vectors: &[FeatureVector],
    parallel_threshold: usize,
) -> Vec<f64> {
    if vectors.len() < parallel_threshold {
        return vectors
            .iter()
            .map(|v| euclidean_distance(query, v))
            .collect();
    }

    vectors
        .par_iter()
        .map(|v| euclidean_distance(query, v))
        .collect()
}
