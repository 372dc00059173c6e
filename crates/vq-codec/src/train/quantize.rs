//! Nearest-palette-entry mapping.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::color::Rgb;
use crate::image::RasterImage;
use crate::palette::{LabelMap, Palette};

/// Label every pixel of `image` with its nearest palette entry.
///
/// Ties go to the lowest palette index. Each returned label is therefore a
/// local optimum: no other entry of `palette` is strictly closer.
///
/// # Example
///
/// ```
/// use vq_codec::{quantize, Palette, RasterImage, Rgb};
///
/// let palette = Palette::new(vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// let image = RasterImage::new(2, 1, vec![Rgb::new(20, 20, 20), Rgb::new(240, 230, 250)]).unwrap();
///
/// assert_eq!(quantize(&image, &palette).as_slice(), &[0, 1]);
/// ```
pub fn quantize(image: &RasterImage, palette: &Palette) -> LabelMap {
    let labels = quantize_pixels(image.pixels(), palette, true);
    LabelMap::from_trusted(labels, palette.len())
}

/// Label `pixels` against `palette`, optionally across threads.
///
/// Palettes hold at most 256 entries, so every index fits in a `u8`.
pub(crate) fn quantize_pixels(pixels: &[Rgb], palette: &Palette, parallel: bool) -> Vec<u8> {
    #[cfg(feature = "parallel")]
    if parallel {
        return pixels
            .par_iter()
            .map(|&p| palette.nearest(p).0 as u8)
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    pixels.iter().map(|&p| palette.nearest(p).0 as u8).collect()
}
