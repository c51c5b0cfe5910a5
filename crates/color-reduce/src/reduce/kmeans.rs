//! Weighted k-means over a frame histogram.
//!
//! Finds the dominant cluster of colors rather than a single mean or mode.
//! Initial centers are drawn from an injected random source so callers can
//! make the result reproducible.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::color::{distance, Srgb};
use crate::histogram::Histogram;

/// Number of clusters when the histogram has enough distinct colors.
pub const CLUSTERS: usize = 5;

/// Upper bound on assignment/update rounds.
pub const MAX_ITERATIONS: usize = 20;

/// Total center displacement below which the centers are considered stable.
pub const CONVERGENCE_THRESHOLD: f64 = 4.0;

/// Result of one clustering run.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    /// Rounded center of the cluster holding the most pixels.
    pub color: [u8; 3],
    /// Number of clusters actually used (`min(5, distinct colors)`).
    pub clusters: usize,
    /// Zero-based iteration at which the loop stopped.
    pub iterations: usize,
    /// False if the loop hit [`MAX_ITERATIONS`] without settling.
    pub converged: bool,
}

/// Cluster `histogram` and return the center of its heaviest cluster.
///
/// The histogram must not be empty.
///
/// # Example
///
/// ```
/// use color_reduce::Histogram;
/// use color_reduce::reduce::kmeans::dominant_color;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let histogram = Histogram::from_counts([([10, 10, 10], 50), ([240, 20, 20], 5)]);
/// let result = dominant_color(&histogram, &mut StdRng::seed_from_u64(3));
/// assert_eq!(result.color, [10, 10, 10]);
/// ```
pub fn dominant_color<R: Rng + ?Sized>(histogram: &Histogram, rng: &mut R) -> Clustering {
    let entries = histogram.entries();

    let mut centers: Vec<Srgb> = if entries.len() < CLUSTERS {
        entries.iter().map(|e| e.srgb()).collect()
    } else {
        // Entries are distinct colors, so sampling entries samples values.
        entries
            .choose_multiple(rng, CLUSTERS)
            .map(|e| e.srgb())
            .collect()
    };
    let k = centers.len();

    let mut assignment = vec![0usize; entries.len()];
    let mut iterations = 0;
    let mut converged = false;

    for iteration in 0..MAX_ITERATIONS {
        iterations = iteration;

        for (slot, entry) in assignment.iter_mut().zip(entries) {
            *slot = nearest_center(&centers, entry.srgb());
        }

        let mut sums = vec![[0.0f64; 3]; k];
        let mut weights = vec![0u64; k];
        for (&cluster, entry) in assignment.iter().zip(entries) {
            let srgb = entry.srgb();
            let weight = entry.count as f64;
            sums[cluster][0] += srgb.r * weight;
            sums[cluster][1] += srgb.g * weight;
            sums[cluster][2] += srgb.b * weight;
            weights[cluster] += entry.count as u64;
        }

        let mut displacement = 0.0;
        for (center, (sum, &weight)) in centers.iter_mut().zip(sums.iter().zip(&weights)) {
            // An empty cluster keeps its previous center.
            if weight == 0 {
                continue;
            }
            let total = weight as f64;
            let updated = Srgb::new(sum[0] / total, sum[1] / total, sum[2] / total);
            displacement += distance(*center, updated);
            *center = updated;
        }

        if displacement < CONVERGENCE_THRESHOLD {
            converged = true;
            break;
        }
    }

    let mut cluster_weights = vec![0u64; k];
    for (&cluster, entry) in assignment.iter().zip(entries) {
        cluster_weights[cluster] += entry.count as u64;
    }

    // Ties go to the highest cluster index.
    let heaviest = cluster_weights
        .iter()
        .enumerate()
        .max_by_key(|(_, weight)| **weight)
        .map(|(i, _)| i)
        .unwrap_or(0);

    Clustering {
        color: centers.get(heaviest).map(|c| c.to_bytes()).unwrap_or_default(),
        clusters: k,
        iterations,
        converged,
    }
}

/// Index of the closest center; the first one wins on equal distance.
fn nearest_center(centers: &[Srgb], color: Srgb) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, center) in centers.iter().enumerate() {
        let d = distance(*center, color);
        if d < best_distance {
            best = i;
            best_distance = d;
        }
    }
    best
}
