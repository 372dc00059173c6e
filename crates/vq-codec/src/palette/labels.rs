//! Per-pixel palette indices.

use super::error::PaletteError;

/// One palette index per pixel, in the same row-major order as the image.
///
/// Constructed against a known pixel count and palette size so that every
/// label is guaranteed to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    labels: Vec<u8>,
}

impl LabelMap {
    /// Validate `labels` against the pixel count and palette size.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::LabelCountMismatch`] if `labels.len() != pixel_count`
    /// - [`PaletteError::LabelOutOfRange`] for the first label `>= palette_len`
    pub fn new(labels: Vec<u8>, pixel_count: usize, palette_len: usize) -> Result<Self, PaletteError> {
        if labels.len() != pixel_count {
            return Err(PaletteError::LabelCountMismatch {
                expected: pixel_count,
                actual: labels.len(),
            });
        }
        if let Some((index, &label)) = labels
            .iter()
            .enumerate()
            .find(|&(_, &l)| l as usize >= palette_len)
        {
            return Err(PaletteError::LabelOutOfRange {
                index,
                label,
                palette_size: palette_len,
            });
        }
        Ok(Self { labels })
    }

    /// Wrap labels produced by quantizing against a palette of `palette_len`.
    pub(crate) fn from_trusted(labels: Vec<u8>, palette_len: usize) -> Self {
        debug_assert!(labels.iter().all(|&l| (l as usize) < palette_len));
        let _ = palette_len;
        Self { labels }
    }

    /// Labels as a byte slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.labels
    }

    /// Number of labels.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// `true` when there are no labels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Consume and return the raw labels.
    pub fn into_vec(self) -> Vec<u8> {
        self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_labels() {
        let labels = LabelMap::new(vec![0, 1, 1, 0], 4, 2).unwrap();
        assert_eq!(labels.as_slice(), &[0, 1, 1, 0]);
        assert_eq!(labels.len(), 4);
    }

    #[test]
    fn test_count_mismatch() {
        assert_eq!(
            LabelMap::new(vec![0; 3], 4, 1).unwrap_err(),
            PaletteError::LabelCountMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_out_of_range_reports_first_offender() {
        assert_eq!(
            LabelMap::new(vec![0, 2, 3], 3, 2).unwrap_err(),
            PaletteError::LabelOutOfRange {
                index: 1,
                label: 2,
                palette_size: 2
            }
        );
    }

    #[test]
    fn test_full_byte_range_with_256_palette() {
        let labels: Vec<u8> = (0..=255).collect();
        assert!(LabelMap::new(labels, 256, 256).is_ok());
    }
}
