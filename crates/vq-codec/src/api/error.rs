//! Unified error type for the vq-codec public API.
//!
//! [`CodecError`] wraps every error type of the crate into a single enum
//! for convenient `?` propagation in application code.

use thiserror::Error;

use crate::container::{EncodingError, FormatError};
use crate::image::ImageError;
use crate::palette::PaletteError;
use crate::train::ConfigError;

/// Unified error type for the vq-codec public API.
///
/// # Example
///
/// ```
/// use vq_codec::{decompress, CodecError, FormatError};
///
/// let err = decompress(&[0, 0, 0, 1]).unwrap_err();
/// assert!(matches!(err, CodecError::Format(FormatError::TruncatedHeader { actual: 4 })));
/// ```
#[derive(Debug, Error)]
pub enum CodecError {
    /// Invalid palette size or empty input, raised before any work
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid raster dimensions or buffer length
    #[error("image error: {0}")]
    Image(#[from] ImageError),

    /// Palette or label bounds violated
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),

    /// Refused to serialize invalid data
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Malformed artifact
    #[error("format error: {0}")]
    Format(#[from] FormatError),
}
