//! Training options and initialization strategies.

use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;

/// Palette size used when none is given.
pub const DEFAULT_PALETTE_SIZE: usize = 64;

/// Upper bound on update/assign rounds.
pub const DEFAULT_MAX_ITERATIONS: u32 = 300;

/// How the first K centroids are chosen.
///
/// Both strategies are deterministic: k-means++ draws from a PRNG seeded
/// with [`TrainOptions::seed`], popularity uses no randomness at all.
/// Either way, when the image has no more distinct colors than palette
/// slots, every distinct color becomes a centroid and the remaining slots
/// repeat them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Initialization {
    /// k-means++: first centroid drawn by pixel count, each further one by
    /// `count * distance²` to the nearest centroid chosen so far.
    #[default]
    KMeansPlusPlus,
    /// The K most frequent colors.
    Popularity,
}

impl fmt::Display for Initialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Initialization::KMeansPlusPlus => write!(f, "kmeans++"),
            Initialization::Popularity => write!(f, "popularity"),
        }
    }
}

impl FromStr for Initialization {
    type Err = ConfigError;

    /// Accepts `kmeans++`, `kmeans-plus-plus`, `kmeanspp` and `popularity`
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kmeans++" | "kmeans-plus-plus" | "kmeanspp" => Ok(Initialization::KMeansPlusPlus),
            "popularity" | "popular" => Ok(Initialization::Popularity),
            _ => Err(ConfigError::UnknownInitialization {
                name: s.to_string(),
            }),
        }
    }
}

/// Options for [`train`](super::train).
///
/// # Defaults
///
/// - `palette_size`: 64
/// - `max_iterations`: 300
/// - `seed`: 0
/// - `initialization`: k-means++
/// - `parallel`: `true` (has no effect without the `parallel` feature)
///
/// # Example
///
/// ```
/// use vq_codec::{Initialization, TrainOptions};
///
/// let options = TrainOptions::new(16)
///     .seed(7)
///     .max_iterations(50)
///     .initialization(Initialization::Popularity);
/// assert_eq!(options.palette_size, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainOptions {
    /// Requested palette size K (`1..=256`). Clamped to the pixel count.
    pub palette_size: usize,

    /// Maximum number of update/assign rounds after the initial assignment.
    pub max_iterations: u32,

    /// Seed for k-means++ sampling.
    pub seed: u64,

    /// Centroid initialization strategy.
    pub initialization: Initialization,

    /// Spread the assign and quantize passes across threads.
    pub parallel: bool,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            palette_size: DEFAULT_PALETTE_SIZE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: 0,
            initialization: Initialization::default(),
            parallel: true,
        }
    }
}

impl TrainOptions {
    /// Default options with the given palette size.
    #[inline]
    pub fn new(palette_size: usize) -> Self {
        Self {
            palette_size,
            ..Self::default()
        }
    }

    /// Set the palette size.
    #[inline]
    pub fn palette_size(mut self, palette_size: usize) -> Self {
        self.palette_size = palette_size;
        self
    }

    /// Set the iteration cap.
    #[inline]
    pub fn max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the sampling seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the initialization strategy.
    #[inline]
    pub fn initialization(mut self, initialization: Initialization) -> Self {
        self.initialization = initialization;
        self
    }

    /// Enable or disable multi-threaded passes.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check the palette size.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidPaletteSize`] unless `1 <= palette_size <= 256`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette_size == 0 || self.palette_size > crate::palette::MAX_PALETTE_SIZE {
            return Err(ConfigError::InvalidPaletteSize {
                requested: self.palette_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TrainOptions::default();
        assert_eq!(options.palette_size, 64);
        assert_eq!(options.max_iterations, 300);
        assert_eq!(options.seed, 0);
        assert_eq!(options.initialization, Initialization::KMeansPlusPlus);
        assert!(options.parallel);
    }

    #[test]
    fn test_builder_chain() {
        let options = TrainOptions::new(8)
            .seed(3)
            .max_iterations(5)
            .parallel(false)
            .palette_size(9);
        assert_eq!(options.palette_size, 9);
        assert_eq!(options.seed, 3);
        assert_eq!(options.max_iterations, 5);
        assert!(!options.parallel);
    }

    #[test]
    fn test_validate_bounds() {
        assert!(TrainOptions::new(1).validate().is_ok());
        assert!(TrainOptions::new(256).validate().is_ok());
        assert_eq!(
            TrainOptions::new(0).validate(),
            Err(ConfigError::InvalidPaletteSize { requested: 0 })
        );
        assert_eq!(
            TrainOptions::new(257).validate(),
            Err(ConfigError::InvalidPaletteSize { requested: 257 })
        );
    }

    #[test]
    fn test_initialization_parse() {
        assert_eq!(
            "kmeans++".parse::<Initialization>().unwrap(),
            Initialization::KMeansPlusPlus
        );
        assert_eq!(
            " Popularity ".parse::<Initialization>().unwrap(),
            Initialization::Popularity
        );
        assert_eq!(
            "random".parse::<Initialization>().unwrap_err(),
            ConfigError::UnknownInitialization {
                name: "random".to_string()
            }
        );
        assert_eq!(Initialization::KMeansPlusPlus.to_string(), "kmeans++");
    }
}
