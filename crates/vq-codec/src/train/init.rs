//! Initial centroid selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::histogram::Histogram;
use super::options::{Initialization, TrainOptions};
use crate::color::Rgb;

/// Choose `k` starting centroids from a non-empty histogram.
///
/// With no more distinct colors than `k`, every distinct color is used and
/// the list is padded by cycling through them again. The padding entries
/// receive no pixels in the first assign step and go through the
/// empty-cluster path.
pub(crate) fn initial_centroids(hist: &Histogram, k: usize, options: &TrainOptions) -> Vec<Rgb> {
    debug_assert!(!hist.is_empty() && k > 0);

    if hist.len() <= k {
        return hist.colors().iter().cycle().take(k).copied().collect();
    }

    match options.initialization {
        Initialization::KMeansPlusPlus => kmeans_plus_plus(hist, k, options.seed),
        Initialization::Popularity => most_popular(hist, k),
    }
}

/// The `k` most frequent colors; equal counts keep histogram order.
fn most_popular(hist: &Histogram, k: usize) -> Vec<Rgb> {
    let mut order: Vec<usize> = (0..hist.len()).collect();
    // Stable sort so ties stay in ascending color order.
    order.sort_by(|&a, &b| hist.counts()[b].cmp(&hist.counts()[a]));
    order
        .into_iter()
        .take(k)
        .map(|i| hist.colors()[i])
        .collect()
}

/// k-means++ seeding, weighting each color by its pixel count.
///
/// Requires `hist.len() > k`, which guarantees an unchosen color with a
/// positive weight on every draw.
fn kmeans_plus_plus(hist: &Histogram, k: usize, seed: u64) -> Vec<Rgb> {
    let mut rng = StdRng::seed_from_u64(seed);
    let colors = hist.colors();
    let counts = hist.counts();

    let mut centroids = Vec::with_capacity(k);
    let first = weighted_pick(&mut rng, counts.iter().map(|&c| c as f64));
    centroids.push(colors[first]);

    let mut min_dist: Vec<u32> = colors.iter().map(|&c| c.distance_sq(colors[first])).collect();

    while centroids.len() < k {
        let weights = counts
            .iter()
            .zip(&min_dist)
            .map(|(&count, &dist)| count as f64 * dist as f64);
        let next = weighted_pick(&mut rng, weights);
        let chosen = colors[next];
        centroids.push(chosen);

        for (d, &c) in min_dist.iter_mut().zip(colors) {
            *d = (*d).min(c.distance_sq(chosen));
        }
    }

    centroids
}

/// Draw an index with probability proportional to its weight.
///
/// Falls back to the last positive weight if rounding leaves the target
/// just past the cumulative total.
fn weighted_pick<R, I>(rng: &mut R, weights: I) -> usize
where
    R: Rng,
    I: Iterator<Item = f64> + Clone,
{
    let total: f64 = weights.clone().sum();
    let target = rng.gen::<f64>() * total;

    let mut cumulative = 0.0;
    let mut last_positive = 0;
    for (i, w) in weights.enumerate() {
        if w <= 0.0 {
            continue;
        }
        cumulative += w;
        last_positive = i;
        if target < cumulative {
            return i;
        }
    }
    last_positive
}
