//! RasterImage: dimensions plus row-major RGB pixels.

use super::error::ImageError;
use crate::color::Rgb;

/// Number of pixels in a `width` x `height` image.
///
/// The product is formed in `u64` (it cannot wrap for two `u32` factors)
/// and then narrowed to `usize`, which fails on 32-bit targets for very
/// large images.
///
/// # Errors
///
/// [`ImageError::SizeOverflow`] if the count does not fit in `usize`.
pub fn pixel_count(width: u32, height: u32) -> Result<usize, ImageError> {
    let count = u64::from(width) * u64::from(height);
    usize::try_from(count).map_err(|_| ImageError::SizeOverflow { width, height })
}

/// An RGB image with explicit dimensions.
///
/// Invariants, enforced by every constructor:
/// - `width >= 1` and `height >= 1`
/// - `pixels.len() == width * height`
///
/// # Example
///
/// ```
/// use vq_codec::{RasterImage, Rgb};
///
/// let image = RasterImage::filled(3, 2, Rgb::new(10, 20, 30)).unwrap();
/// assert_eq!(image.len(), 6);
/// assert_eq!(image.pixel(2, 1), Some(Rgb::new(10, 20, 30)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl RasterImage {
    /// Create an image from a row-major pixel sequence.
    ///
    /// # Errors
    ///
    /// - [`ImageError::ZeroDimension`] if either dimension is zero
    /// - [`ImageError::SizeOverflow`] if `width * height` overflows `usize`
    /// - [`ImageError::PixelCountMismatch`] if `pixels` has the wrong length
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, ImageError> {
        let expected = checked_dimensions(width, height)?;
        if pixels.len() != expected {
            return Err(ImageError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap pixels whose count is already known to match the dimensions.
    pub(crate) fn from_trusted(width: u32, height: u32, pixels: Vec<Rgb>) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert_eq!(pixels.len() as u64, u64::from(width) * u64::from(height));
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create an image from packed `[R, G, B, R, G, B, ...]` bytes.
    ///
    /// # Errors
    ///
    /// Same as [`RasterImage::new`], with [`ImageError::ByteLengthMismatch`]
    /// in place of the pixel count check.
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, ImageError> {
        let count = checked_dimensions(width, height)?;
        let expected = count
            .checked_mul(3)
            .ok_or(ImageError::SizeOverflow { width, height })?;
        if bytes.len() != expected {
            return Err(ImageError::ByteLengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create an image where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self, ImageError> {
        let count = checked_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; count],
        })
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

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always `false`; zero-sized images are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Row-major pixel slice.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        // In bounds, so the product is below len() and cannot overflow.
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels.get(idx).copied()
    }

    /// Flatten to `[R, G, B, ...]`, length `3 * width * height`.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixels.len() * 3);
        for p in &self.pixels {
            rgb.extend_from_slice(&p.to_bytes());
        }
        rgb
    }

    /// Consume the image and return its pixels.
    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }
}

/// Pixel count of a non-empty `width` x `height` image.
pub(crate) fn checked_dimensions(width: u32, height: u32) -> Result<usize, ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::ZeroDimension { width, height });
    }
    pixel_count(width, height)
}
