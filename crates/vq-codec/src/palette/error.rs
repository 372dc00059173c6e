//! Error types for palette and label validation

use thiserror::Error;

/// Error returned when a palette or label map violates its bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// Palette size outside `1..=256`
    #[error("palette must hold between 1 and 256 colors, got {size}")]
    InvalidSize {
        /// Number of colors supplied
        size: usize,
    },

    /// Palette byte buffer is not a multiple of three
    #[error("palette bytes must be a multiple of 3, got {len}")]
    ByteLengthMismatch {
        /// Bytes supplied
        len: usize,
    },

    /// Label count differs from the pixel count
    #[error("expected {expected} labels, got {actual}")]
    LabelCountMismatch {
        /// Pixel count
        expected: usize,
        /// Labels supplied
        actual: usize,
    },

    /// A label does not index into the palette
    #[error("label {label} at index {index} is out of range for a palette of {palette_size}")]
    LabelOutOfRange {
        /// Position of the label
        index: usize,
        /// Label value
        label: u8,
        /// Palette size
        palette_size: usize,
    },
}
