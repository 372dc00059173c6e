//! Public entry points: [`compress`], [`decompress`] and the [`Compressor`]
//! builder, plus the unified [`CodecError`].

mod builder;
mod error;

pub use builder::{Compressor, Quantized};
pub use error::CodecError;

use crate::container;
use crate::image::RasterImage;

/// Compress `image` to an artifact with a palette of `palette_size` colors.
///
/// Uses default [`TrainOptions`](crate::TrainOptions) (k-means++ with seed 0),
/// so equal inputs always give equal artifacts.
///
/// # Errors
///
/// [`CodecError::Config`] if `palette_size` is outside `1..=256`.
pub fn compress(image: &RasterImage, palette_size: usize) -> Result<Vec<u8>, CodecError> {
    Compressor::new(palette_size).compress(image)
}

/// Decode an artifact back into a raster by palette lookup.
///
/// # Errors
///
/// [`CodecError::Format`] for any malformed input.
pub fn decompress(bytes: &[u8]) -> Result<RasterImage, CodecError> {
    let indexed = container::decode(bytes)?;
    Ok(indexed.to_raster())
}
