//! Reconstruction quality metrics
//!
//! Measures how far a decompressed image drifted from its source. Both
//! metrics treat every channel sample equally.

use thiserror::Error;

use crate::image::RasterImage;

/// Images that cannot be compared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QualityError {
    /// Width or height differ
    #[error("cannot compare a {left_width}x{left_height} image with a {right_width}x{right_height} image")]
    DimensionMismatch {
        /// Width of the first image
        left_width: u32,
        /// Height of the first image
        left_height: u32,
        /// Width of the second image
        right_width: u32,
        /// Height of the second image
        right_height: u32,
    },
}

/// Mean squared error over all `3 * width * height` channel samples.
pub fn mean_squared_error(a: &RasterImage, b: &RasterImage) -> Result<f64, QualityError> {
    if a.width() != b.width() || a.height() != b.height() {
        return Err(QualityError::DimensionMismatch {
            left_width: a.width(),
            left_height: a.height(),
            right_width: b.width(),
            right_height: b.height(),
        });
    }

    let sum: u64 = a
        .pixels()
        .iter()
        .zip(b.pixels())
        .map(|(&p, &q)| u64::from(p.distance_sq(q)))
        .sum();
    Ok(sum as f64 / (a.len() as f64 * 3.0))
}

/// Peak signal-to-noise ratio in decibels, `10 * log10(255² / mse)`.
///
/// Identical images yield `f64::INFINITY`.
///
/// # Example
///
/// ```
/// use vq_codec::quality::psnr;
/// use vq_codec::{RasterImage, Rgb};
///
/// let a = RasterImage::filled(2, 2, Rgb::new(100, 100, 100)).unwrap();
/// let b = RasterImage::filled(2, 2, Rgb::new(110, 100, 100)).unwrap();
///
/// assert!(psnr(&a, &a).unwrap().is_infinite());
/// assert!(psnr(&a, &b).unwrap() > 30.0);
/// ```
pub fn psnr(a: &RasterImage, b: &RasterImage) -> Result<f64, QualityError> {
    let mse = mean_squared_error(a, b)?;
    if mse == 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(10.0 * (255.0 * 255.0 / mse).log10())
}
