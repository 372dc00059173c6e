//! Error types for raster construction

use thiserror::Error;

/// Error returned when a [`RasterImage`](super::RasterImage) cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// Width or height is zero
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// Pixel sequence length does not equal `width * height`
    #[error("expected {expected} pixels for the given dimensions, got {actual}")]
    PixelCountMismatch {
        /// `width * height`
        expected: usize,
        /// Pixels supplied
        actual: usize,
    },

    /// Raw byte buffer length does not equal `3 * width * height`
    #[error("expected {expected} RGB bytes for the given dimensions, got {actual}")]
    ByteLengthMismatch {
        /// `3 * width * height`
        expected: usize,
        /// Bytes supplied
        actual: usize,
    },

    /// `width * height` does not fit in the address space
    #[error("image dimensions {width}x{height} overflow the addressable size")]
    SizeOverflow {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}
