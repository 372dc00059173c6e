//! Compressor builder -- the configurable entry point for compression.

use super::error::CodecError;
use crate::container;
use crate::image::RasterImage;
use crate::output::IndexedImage;
use crate::train::{train, Initialization, TrainOptions};

/// Palette-training compressor.
///
/// Configuration methods consume and return `self`; [`compress`](Self::compress)
/// and [`quantize`](Self::quantize) take `&self`, so one compressor can be
/// reused across images.
///
/// # Example
///
/// ```
/// use vq_codec::{decompress, Compressor, RasterImage, Rgb};
///
/// let image = RasterImage::new(
///     2,
///     2,
///     vec![Rgb::new(0, 0, 0), Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), Rgb::new(255, 255, 255)],
/// )
/// .unwrap();
///
/// let artifact = Compressor::new(2).seed(7).compress(&image).unwrap();
/// assert_eq!(artifact.len(), 20);
/// assert_eq!(decompress(&artifact).unwrap(), image);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Compressor {
    options: TrainOptions,
}

/// A quantized image together with training statistics.
#[derive(Debug, Clone)]
pub struct Quantized {
    /// Palette, labels and dimensions
    pub image: IndexedImage,
    /// Update/assign rounds performed
    pub iterations: u32,
    /// Whether labels stabilised before the iteration cap
    pub converged: bool,
    /// Distinct colors in the source image
    pub distinct_colors: usize,
}

impl Compressor {
    /// Compressor with default options and the given palette size.
    pub fn new(palette_size: usize) -> Self {
        Self {
            options: TrainOptions::new(palette_size),
        }
    }

    /// Compressor with fully specified options.
    pub fn with_options(options: TrainOptions) -> Self {
        Self { options }
    }

    /// Set the k-means++ seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.options = self.options.seed(seed);
        self
    }

    /// Set the iteration cap.
    #[inline]
    pub fn max_iterations(mut self, max_iterations: u32) -> Self {
        self.options = self.options.max_iterations(max_iterations);
        self
    }

    /// Set the initialization strategy.
    #[inline]
    pub fn initialization(mut self, initialization: Initialization) -> Self {
        self.options = self.options.initialization(initialization);
        self
    }

    /// Enable or disable multi-threaded passes.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.options = self.options.parallel(parallel);
        self
    }

    /// Current options.
    #[inline]
    pub fn options(&self) -> &TrainOptions {
        &self.options
    }

    /// Train a palette and label every pixel.
    pub fn quantize(&self, image: &RasterImage) -> Result<Quantized, CodecError> {
        let trained = train(image.pixels(), &self.options)?;
        Ok(Quantized {
            image: IndexedImage::from_trusted(
                image.width(),
                image.height(),
                trained.palette,
                trained.labels,
            ),
            iterations: trained.iterations,
            converged: trained.converged,
            distinct_colors: trained.distinct_colors,
        })
    }

    /// Train, quantize and serialize in one step.
    pub fn compress(&self, image: &RasterImage) -> Result<Vec<u8>, CodecError> {
        let quantized = self.quantize(image)?;
        Ok(container::encode(&quantized.image)?)
    }
}
