//! Lloyd iteration over a color histogram.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::error::ConfigError;
use super::histogram::Histogram;
use super::init::initial_centroids;
use super::options::TrainOptions;
use super::quantize::quantize_pixels;
use crate::color::Rgb;
use crate::palette::{nearest_in, LabelMap, Palette};

/// Histogram entries per work unit in the parallel passes.
#[cfg(feature = "parallel")]
const CHUNK_LEN: usize = 4096;

/// Result of [`train`].
#[derive(Debug, Clone)]
pub struct TrainedPalette {
    /// Exactly K colors, K being the requested size clamped to the pixel count.
    pub palette: Palette,
    /// One label per input pixel, nearest entry of `palette`.
    pub labels: LabelMap,
    /// Update/assign rounds performed after the initial assignment.
    pub iterations: u32,
    /// `true` if an assign step left every label unchanged before the cap.
    pub converged: bool,
    /// Number of distinct colors in the input.
    pub distinct_colors: usize,
}

/// Train a palette on `pixels` and label every pixel with it.
///
/// The requested palette size is clamped to `pixels.len()`. The returned
/// palette is the centroid set of the last assign step, so the labels are
/// exactly that step's output and each one is a nearest entry.
///
/// # Errors
///
/// - [`ConfigError::InvalidPaletteSize`] if `palette_size` is outside `1..=256`
/// - [`ConfigError::EmptyImage`] if `pixels` is empty
///
/// Both are checked before any clustering work.
pub fn train(pixels: &[Rgb], options: &TrainOptions) -> Result<TrainedPalette, ConfigError> {
    options.validate()?;
    if pixels.is_empty() {
        return Err(ConfigError::EmptyImage);
    }

    let k = options.palette_size.min(pixels.len());
    let hist = Histogram::from_pixels(pixels);
    let mut centroids = initial_centroids(&hist, k, options);

    let mut assignment = assign(hist.colors(), &centroids, options.parallel);
    let mut iterations = 0;
    let mut converged = false;

    while iterations < options.max_iterations {
        update(&hist, &mut assignment, &mut centroids, options.parallel);
        let next = assign(hist.colors(), &centroids, options.parallel);
        iterations += 1;

        let changed = next
            .labels
            .iter()
            .zip(&assignment.labels)
            .filter(|(a, b)| a != b)
            .count();
        assignment = next;

        tracing::trace!(iteration = iterations, changed, "k-means round");
        if changed == 0 {
            converged = true;
            break;
        }
    }

    tracing::debug!(
        pixels = pixels.len(),
        distinct_colors = hist.len(),
        palette_size = k,
        iterations,
        converged,
        "Trained palette"
    );

    let palette = Palette::from_trusted(centroids);
    let labels = quantize_pixels(pixels, &palette, options.parallel);
    let labels = LabelMap::from_trusted(labels, palette.len());

    Ok(TrainedPalette {
        palette,
        labels,
        iterations,
        converged,
        distinct_colors: hist.len(),
    })
}

/// Output of one assign step, parallel to the histogram entries.
struct Assignment {
    labels: Vec<u8>,
    /// Squared distance of each entry to its assigned centroid.
    distances: Vec<u32>,
}

fn assign(colors: &[Rgb], centroids: &[Rgb], parallel: bool) -> Assignment {
    let nearest = |&c: &Rgb| {
        let (idx, dist) = nearest_in(centroids, c);
        (idx as u8, dist)
    };

    #[cfg(feature = "parallel")]
    if parallel {
        let (labels, distances) = colors.par_iter().map(nearest).unzip();
        return Assignment { labels, distances };
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    let (labels, distances) = colors.iter().map(nearest).unzip();
    Assignment { labels, distances }
}

/// Per-cluster channel totals and pixel counts.
struct ClusterSums {
    totals: Vec<[u64; 3]>,
    counts: Vec<u64>,
}

impl ClusterSums {
    fn zeros(k: usize) -> Self {
        Self {
            totals: vec![[0; 3]; k],
            counts: vec![0; k],
        }
    }

    fn accumulate(k: usize, colors: &[Rgb], weights: &[u64], labels: &[u8]) -> Self {
        let mut sums = Self::zeros(k);
        for ((c, &w), &l) in colors.iter().zip(weights).zip(labels) {
            let total = &mut sums.totals[l as usize];
            total[0] += c.r as u64 * w;
            total[1] += c.g as u64 * w;
            total[2] += c.b as u64 * w;
            sums.counts[l as usize] += w;
        }
        sums
    }

    fn merge(mut self, other: Self) -> Self {
        for (a, b) in self.totals.iter_mut().zip(&other.totals) {
            a[0] += b[0];
            a[1] += b[1];
            a[2] += b[2];
        }
        for (a, b) in self.counts.iter_mut().zip(&other.counts) {
            *a += b;
        }
        self
    }
}

/// Move each centroid to the rounded mean of its members.
///
/// A centroid without members takes the color that currently fits its own
/// centroid worst. That color's distance is then zeroed, so a second empty
/// centroid in the same round prefers a different donor.
fn update(hist: &Histogram, assignment: &mut Assignment, centroids: &mut [Rgb], parallel: bool) {
    let k = centroids.len();
    let sums = cluster_sums(hist, &assignment.labels, k, parallel);

    for (j, centroid) in centroids.iter_mut().enumerate() {
        let count = sums.counts[j];
        if count == 0 {
            let donor = farthest_entry(&assignment.distances);
            *centroid = hist.colors()[donor];
            assignment.distances[donor] = 0;
            tracing::trace!(cluster = j, color = %centroid, "Reseeded empty cluster");
            continue;
        }
        let [r, g, b] = sums.totals[j];
        // Round half up; a mean of u8 values never exceeds 255.
        let mean = |total: u64| ((total + count / 2) / count) as u8;
        *centroid = Rgb::new(mean(r), mean(g), mean(b));
    }
}

fn cluster_sums(hist: &Histogram, labels: &[u8], k: usize, parallel: bool) -> ClusterSums {
    #[cfg(feature = "parallel")]
    if parallel {
        return hist
            .colors()
            .par_chunks(CHUNK_LEN)
            .zip(hist.counts().par_chunks(CHUNK_LEN))
            .zip(labels.par_chunks(CHUNK_LEN))
            .map(|((colors, weights), labels)| ClusterSums::accumulate(k, colors, weights, labels))
            .reduce(|| ClusterSums::zeros(k), ClusterSums::merge);
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    ClusterSums::accumulate(k, hist.colors(), hist.counts(), labels)
}

/// Index of the largest distance; the first one on ties.
fn farthest_entry(distances: &[u32]) -> usize {
    let mut best = 0;
    for (i, &d) in distances.iter().enumerate() {
        if d > distances[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::train::Initialization;
    use pretty_assertions::assert_eq;

    fn rgb(r: u8, g: u8, b: u8) -> Rgb {
        Rgb::new(r, g, b)
    }

    #[test]
    fn test_rejects_invalid_palette_size() {
        let pixels = vec![rgb(1, 2, 3)];
        assert_eq!(
            train(&pixels, &TrainOptions::new(0)).unwrap_err(),
            ConfigError::InvalidPaletteSize { requested: 0 }
        );
        assert_eq!(
            train(&pixels, &TrainOptions::new(300)).unwrap_err(),
            ConfigError::InvalidPaletteSize { requested: 300 }
        );
    }

    #[test]
    fn test_rejects_empty_pixels() {
        assert_eq!(
            train(&[], &TrainOptions::new(4)).unwrap_err(),
            ConfigError::EmptyImage
        );
    }

    #[test]
    fn test_two_color_image_converges_exactly() {
        let pixels = vec![rgb(0, 0, 0), rgb(0, 0, 0), rgb(255, 255, 255), rgb(255, 255, 255)];
        let trained = train(&pixels, &TrainOptions::new(2)).unwrap();

        let mut colors = trained.palette.colors().to_vec();
        colors.sort();
        assert_eq!(colors, vec![rgb(0, 0, 0), rgb(255, 255, 255)]);

        let labels = trained.labels.as_slice();
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[2], labels[3]);
        assert_ne!(labels[0], labels[2]);
        assert!(trained.converged);
    }

    #[test]
    fn test_palette_size_clamped_to_pixel_count() {
        let pixels = vec![rgb(1, 1, 1), rgb(2, 2, 2), rgb(3, 3, 3)];
        let trained = train(&pixels, &TrainOptions::new(10)).unwrap();
        assert_eq!(trained.palette.len(), 3);
    }

    #[test]
    fn test_fewer_distinct_colors_than_slots() {
        // 16 pixels, 2 distinct colors, 8 slots
        let pixels: Vec<Rgb> = (0..16)
            .map(|i| if i % 2 == 0 { rgb(10, 20, 30) } else { rgb(200, 100, 0) })
            .collect();
        let trained = train(&pixels, &TrainOptions::new(8)).unwrap();

        assert_eq!(trained.palette.len(), 8);
        assert!(trained.converged);
        for (p, &l) in pixels.iter().zip(trained.labels.as_slice()) {
            assert_eq!(trained.palette.get(l as usize), *p);
        }
    }

    #[test]
    fn test_means_are_rounded_half_up() {
        // One cluster with members 0 and 1 -> mean 0.5 -> 1
        let pixels = vec![rgb(0, 0, 0), rgb(1, 1, 1)];
        let options = TrainOptions::new(1);
        let trained = train(&pixels, &options).unwrap();
        assert_eq!(trained.palette.colors(), &[rgb(1, 1, 1)]);
    }

    #[test]
    fn test_reseeds_empty_cluster_with_farthest_color() {
        let hist = Histogram::from_pixels(&[rgb(0, 0, 0), rgb(10, 0, 0), rgb(250, 0, 0)]);
        let mut centroids = vec![rgb(5, 0, 0), rgb(5, 0, 0)];
        let mut assignment = assign(hist.colors(), &centroids, false);
        // Duplicate centroid 1 never wins a tie, so it starts empty.
        assert!(assignment.labels.iter().all(|&l| l == 0));

        update(&hist, &mut assignment, &mut centroids, false);
        assert_eq!(centroids[1], rgb(250, 0, 0));
        assert_eq!(centroids[0], rgb(87, 0, 0));
    }

    #[test]
    fn test_iteration_cap_respected() {
        let pixels: Vec<Rgb> = (0..=255u8).map(|i| rgb(i, i / 2, 255 - i)).collect();
        let trained = train(&pixels, &TrainOptions::new(16).max_iterations(1)).unwrap();
        assert!(trained.iterations <= 1);

        let untouched = train(&pixels, &TrainOptions::new(16).max_iterations(0)).unwrap();
        assert_eq!(untouched.iterations, 0);
        assert!(!untouched.converged);
        assert_eq!(untouched.palette.len(), 16);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let pixels: Vec<Rgb> = (0..10_000u32)
            .map(|i| rgb((i % 251) as u8, (i * 7 % 253) as u8, (i * 13 % 255) as u8))
            .collect();
        let base = TrainOptions::new(32).seed(9);
        let seq = train(&pixels, &base.clone().parallel(false)).unwrap();
        let par = train(&pixels, &base.parallel(true)).unwrap();

        assert_eq!(seq.palette, par.palette);
        assert_eq!(seq.labels, par.labels);
        assert_eq!(seq.iterations, par.iterations);
    }

    #[test]
    fn test_same_seed_same_result() {
        let pixels: Vec<Rgb> = (0..2_000u32)
            .map(|i| rgb((i * 3 % 256) as u8, (i * 5 % 256) as u8, (i * 11 % 256) as u8))
            .collect();
        let options = TrainOptions::new(12).seed(1234);
        let a = train(&pixels, &options).unwrap();
        let b = train(&pixels, &options).unwrap();
        assert_eq!(a.palette, b.palette);
        assert_eq!(a.labels, b.labels);
    }

    #[test]
    fn test_popularity_initialization_trains() {
        let pixels: Vec<Rgb> = (0..500u32)
            .map(|i| rgb((i % 50) as u8 * 5, 0, 0))
            .collect();
        let options = TrainOptions::new(5).initialization(Initialization::Popularity);
        let trained = train(&pixels, &options).unwrap();
        assert_eq!(trained.palette.len(), 5);
        assert_eq!(trained.distinct_colors, 50);
    }
}
