//! Ordered palette with nearest-color lookup.

use super::error::PaletteError;
use crate::color::Rgb;

/// Largest palette a single label byte can address.
pub const MAX_PALETTE_SIZE: usize = 256;

/// An ordered palette of 1 to 256 colors.
///
/// Order is significant: a label is a position in this palette, so the
/// palette is never reordered once labels refer to it. Duplicate colors are
/// allowed; training can legitimately produce them when an image has fewer
/// distinct colors than requested slots.
///
/// # Example
///
/// ```
/// use vq_codec::{Palette, Rgb};
///
/// let palette = Palette::new(vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// let (idx, _) = palette.nearest(Rgb::new(200, 210, 190));
/// assert_eq!(idx, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from its colors.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidSize`] unless `1 <= colors.len() <= 256`.
    pub fn new(colors: Vec<Rgb>) -> Result<Self, PaletteError> {
        if colors.is_empty() || colors.len() > MAX_PALETTE_SIZE {
            return Err(PaletteError::InvalidSize { size: colors.len() });
        }
        Ok(Self { colors })
    }

    /// Wrap colors already known to satisfy the size bounds.
    pub(crate) fn from_trusted(colors: Vec<Rgb>) -> Self {
        debug_assert!(!colors.is_empty() && colors.len() <= MAX_PALETTE_SIZE);
        Self { colors }
    }

    /// Create a palette from packed `[R, G, B, ...]` bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PaletteError> {
        if bytes.len() % 3 != 0 {
            return Err(PaletteError::ByteLengthMismatch { len: bytes.len() });
        }
        let colors = bytes
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Self::new(colors)
    }

    /// Number of colors (K).
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= len()`.
    #[inline]
    pub fn get(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// All colors in palette order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Index of the closest entry and its squared distance.
    ///
    /// Ties go to the lowest index, which keeps quantization deterministic
    /// when the palette holds duplicates.
    #[inline]
    pub fn nearest(&self, color: Rgb) -> (usize, u32) {
        nearest_in(&self.colors, color)
    }

    /// Serialize as `[R, G, B, ...]` in palette order (3·K bytes).
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.colors.len() * 3);
        for c in &self.colors {
            out.extend_from_slice(&c.to_bytes());
        }
        out
    }
}

/// Linear nearest-centroid scan shared by the palette and the trainer.
///
/// `centroids` must be non-empty.
#[inline]
pub(crate) fn nearest_in(centroids: &[Rgb], color: Rgb) -> (usize, u32) {
    let mut best_idx = 0;
    let mut best_dist = u32::MAX;
    for (i, &c) in centroids.iter().enumerate() {
        let dist = color.distance_sq(c);
        // Strict comparison keeps the lowest index on ties.
        if dist < best_dist {
            best_dist = dist;
            best_idx = i;
            if dist == 0 {
                break;
            }
        }
    }
    (best_idx, best_dist)
}
