//! IndexedImage: palette plus per-pixel labels with dimensions.

use crate::api::CodecError;
use crate::color::Rgb;
use crate::image::{checked_dimensions, RasterImage};
use crate::palette::{LabelMap, Palette};

/// A palette-indexed image.
///
/// Stores one `u8` label per pixel in row-major order, the image
/// dimensions, and the palette the labels refer to. Every constructor
/// guarantees `labels.len() == width * height` and `label < palette.len()`.
///
/// # Example
///
/// ```
/// use vq_codec::{IndexedImage, Palette, Rgb};
///
/// let palette = Palette::new(vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// let image = IndexedImage::new(2, 2, palette, vec![0, 1, 1, 0]).unwrap();
///
/// assert_eq!(image.labels(), &[0, 1, 1, 0]);
/// assert_eq!(image.to_rgb_bytes().len(), 2 * 2 * 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    width: u32,
    height: u32,
    palette: Palette,
    labels: LabelMap,
}

impl IndexedImage {
    /// Build an indexed image from its parts.
    ///
    /// # Errors
    ///
    /// - [`CodecError::Image`] for zero or overflowing dimensions
    /// - [`CodecError::Palette`] for a wrong label count or a label outside
    ///   the palette
    pub fn new(width: u32, height: u32, palette: Palette, labels: Vec<u8>) -> Result<Self, CodecError> {
        let count = checked_dimensions(width, height)?;
        let labels = LabelMap::new(labels, count, palette.len())?;
        Ok(Self {
            width,
            height,
            palette,
            labels,
        })
    }

    /// Assemble parts that were validated elsewhere (decoder, trainer).
    pub(crate) fn from_trusted(width: u32, height: u32, palette: Palette, labels: LabelMap) -> Self {
        debug_assert_eq!(
            labels.len() as u64,
            u64::from(width) * u64::from(height),
            "label count must match {width}x{height}"
        );
        Self {
            width,
            height,
            palette,
            labels,
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The palette labels refer to.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// One label per pixel, row-major.
    #[inline]
    pub fn labels(&self) -> &[u8] {
        self.labels.as_slice()
    }

    /// Color of pixel `i` (row-major index).
    #[inline]
    pub fn color_at(&self, i: usize) -> Option<Rgb> {
        self.labels()
            .get(i)
            .map(|&label| self.palette.get(label as usize))
    }

    /// Reconstruct the raster by palette lookup: `pixel[i] = palette[labels[i]]`.
    pub fn to_raster(&self) -> RasterImage {
        let pixels = self
            .labels()
            .iter()
            .map(|&label| self.palette.get(label as usize))
            .collect();
        RasterImage::from_trusted(self.width, self.height, pixels)
    }

    /// Reconstructed pixels as `[R, G, B, ...]`, length `width * height * 3`.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.labels.len() * 3);
        for &label in self.labels() {
            rgb.extend_from_slice(&self.palette.get(label as usize).to_bytes());
        }
        rgb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageError;
    use crate::palette::PaletteError;

    fn three_colors() -> Palette {
        Palette::new(vec![
            Rgb::new(0, 0, 0),
            Rgb::new(255, 0, 0),
            Rgb::new(255, 255, 255),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_stores_fields() {
        let image = IndexedImage::new(3, 2, three_colors(), vec![0, 1, 2, 0, 1, 2]).unwrap();
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.labels(), &[0, 1, 2, 0, 1, 2]);
        assert_eq!(image.palette().len(), 3);
    }

    #[test]
    fn test_rejects_bad_parts() {
        let err = IndexedImage::new(0, 2, three_colors(), Vec::new()).unwrap_err();
        assert!(matches!(err, CodecError::Image(ImageError::ZeroDimension { .. })));

        let err = IndexedImage::new(2, 2, three_colors(), vec![0, 1, 2]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Palette(PaletteError::LabelCountMismatch { expected: 4, actual: 3 })
        ));

        let err = IndexedImage::new(2, 1, three_colors(), vec![0, 3]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Palette(PaletteError::LabelOutOfRange { index: 1, label: 3, .. })
        ));
    }

    #[test]
    fn test_to_raster_looks_up_palette() {
        let image = IndexedImage::new(2, 1, three_colors(), vec![1, 2]).unwrap();
        let raster = image.to_raster();
        assert_eq!(raster.width(), 2);
        assert_eq!(raster.height(), 1);
        assert_eq!(raster.pixels(), &[Rgb::new(255, 0, 0), Rgb::new(255, 255, 255)]);
        assert_eq!(image.color_at(0), Some(Rgb::new(255, 0, 0)));
        assert_eq!(image.color_at(2), None);
    }

    #[test]
    fn test_rgb_output_layout() {
        let image = IndexedImage::new(2, 1, three_colors(), vec![0, 2]).unwrap();
        assert_eq!(image.to_rgb_bytes(), vec![0, 0, 0, 255, 255, 255]);
        assert_eq!(image.to_rgb_bytes(), image.to_raster().to_rgb_bytes());
    }
}
