//! Configuration errors raised before any clustering work starts.

use thiserror::Error;

/// Invalid training input or options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Requested palette size outside `1..=256`
    #[error("palette size must be between 1 and 256, got {requested}")]
    InvalidPaletteSize {
        /// Requested number of colors
        requested: usize,
    },

    /// No pixels to cluster
    #[error("cannot train a palette on an empty image")]
    EmptyImage,

    /// Initialization name not recognised
    #[error("unknown initialization '{name}' (expected 'kmeans++' or 'popularity')")]
    UnknownInitialization {
        /// Name as given
        name: String,
    },
}
