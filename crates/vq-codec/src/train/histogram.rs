//! Distinct colors with their pixel counts.

use std::collections::HashMap;

use crate::color::Rgb;

/// The distinct colors of a pixel population, each with its pixel count.
///
/// Entries are sorted by packed `0xRRGGBB` value so that training never
/// depends on hash iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    colors: Vec<Rgb>,
    counts: Vec<u64>,
}

impl Histogram {
    /// Count the distinct colors of `pixels`.
    pub fn from_pixels(pixels: &[Rgb]) -> Self {
        let mut counts: HashMap<Rgb, u64> = HashMap::new();
        for &p in pixels {
            *counts.entry(p).or_insert(0) += 1;
        }

        let mut entries: Vec<(Rgb, u64)> = counts.into_iter().collect();
        entries.sort_unstable_by_key(|&(color, _)| color);

        let (colors, counts) = entries.into_iter().unzip();
        Self { colors, counts }
    }

    /// Number of distinct colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// `true` for an empty pixel population.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Distinct colors in ascending order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Pixel count of each color, parallel to [`colors()`](Self::colors).
    #[inline]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Total number of pixels counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}
