//! Container error types.

use thiserror::Error;

/// A byte sequence that is not a well-formed artifact.
///
/// Length variants report whole-artifact byte counts: `expected` is the
/// length the header calls for (up to the end of the section in question),
/// `actual` is the length of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Fewer than 10 bytes available
    #[error("truncated header: need 10 bytes, got {actual}")]
    TruncatedHeader {
        /// Input length
        actual: usize,
    },

    /// Palette size field outside `1..=256`
    #[error("invalid palette size {size} (must be between 1 and 256)")]
    InvalidPaletteSize {
        /// Value of the palette size field
        size: u16,
    },

    /// Width or height field is zero
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions {
        /// Width field
        width: u32,
        /// Height field
        height: u32,
    },

    /// Declared size cannot be addressed on this platform
    #[error("declared size {width}x{height} overflows the addressable size")]
    SizeOverflow {
        /// Width field
        width: u32,
        /// Height field
        height: u32,
    },

    /// Input ends inside the palette section
    #[error("truncated palette: need {expected} bytes, got {actual}")]
    TruncatedPalette {
        /// Header plus palette length
        expected: usize,
        /// Input length
        actual: usize,
    },

    /// Input ends inside the label section
    #[error("truncated labels: need {expected} bytes, got {actual}")]
    TruncatedLabels {
        /// Full artifact length
        expected: usize,
        /// Input length
        actual: usize,
    },

    /// Input continues past the label section
    #[error("trailing bytes: expected {expected} bytes, got {actual}")]
    TrailingBytes {
        /// Full artifact length
        expected: usize,
        /// Input length
        actual: usize,
    },

    /// A label does not index into the palette
    #[error("label {label} at pixel {index} is out of range for a palette of {palette_size}")]
    LabelOutOfRange {
        /// Pixel index
        index: usize,
        /// Label value
        label: u8,
        /// Palette size K
        palette_size: usize,
    },
}

/// Data that cannot be serialized because it breaks an invariant.
///
/// Nothing is written when one of these is returned, except for
/// [`EncodingError::Io`] where the writer itself failed part-way.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// Width or height is zero
    #[error("cannot encode an image with dimensions {width}x{height}")]
    InvalidDimensions {
        /// Width
        width: u32,
        /// Height
        height: u32,
    },

    /// Palette size outside `1..=256`
    #[error("cannot encode a palette of {size} colors (must be between 1 and 256)")]
    InvalidPaletteSize {
        /// Number of colors
        size: usize,
    },

    /// Label count differs from `width * height`
    #[error("expected {expected} labels, got {actual}")]
    LabelCountMismatch {
        /// `width * height`
        expected: usize,
        /// Labels supplied
        actual: usize,
    },

    /// A label does not index into the palette
    #[error("label {label} at pixel {index} is out of range for a palette of {palette_size}")]
    LabelOutOfRange {
        /// Pixel index
        index: usize,
        /// Label value
        label: u8,
        /// Palette size K
        palette_size: usize,
    },

    /// Artifact size cannot be addressed on this platform
    #[error("image {width}x{height} is too large to encode")]
    SizeOverflow {
        /// Width
        width: u32,
        /// Height
        height: u32,
    },

    /// The destination writer failed
    #[error("failed to write artifact: {0}")]
    Io(#[from] std::io::Error),
}
