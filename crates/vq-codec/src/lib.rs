//! vq-codec: palette quantization and a compact binary container
//!
//! This library reduces a full-color RGB image to a palette of at most 256
//! representative colors plus one palette index per pixel, and serializes
//! the result into a small fixed-layout binary artifact.
//!
//! # Quick Start
//!
//! ```
//! use vq_codec::{compress, decompress, RasterImage, Rgb};
//!
//! let pixels = vec![
//!     Rgb::new(0, 0, 0),
//!     Rgb::new(0, 0, 0),
//!     Rgb::new(255, 255, 255),
//!     Rgb::new(255, 255, 255),
//! ];
//! let image = RasterImage::new(2, 2, pixels).unwrap();
//!
//! let artifact = compress(&image, 2).unwrap();
//! assert_eq!(artifact.len(), 10 + 2 * 3 + 4);
//!
//! let restored = decompress(&artifact).unwrap();
//! assert_eq!(restored, image);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RasterImage ──> train (k-means) ──> Palette + LabelMap ──> container::encode
//!                                                                   │
//!                                                              artifact bytes
//!                                                                   │
//! RasterImage <── IndexedImage::to_raster <── container::decode <───┘
//! ```
//!
//! Compression is lossy only once: the palette and labels chosen by the
//! trainer survive the container unchanged, so decoding always reproduces
//! `palette[labels[i]]` for every pixel.
//!
//! # Determinism
//!
//! Training is reproducible. k-means++ draws from a PRNG seeded through
//! [`TrainOptions::seed`], the color histogram it samples from is sorted,
//! and nearest-color ties always resolve to the lowest palette index. The
//! `parallel` feature (on by default) splits work across threads but
//! yields the same palette and labels as a single-threaded run.
//!
//! # Errors
//!
//! Every fallible function returns a typed error; [`CodecError`] unifies
//! them. Nothing is retried and no default data is substituted.

pub mod api;
pub mod color;
pub mod container;
pub mod image;
pub mod output;
pub mod palette;
pub mod quality;
pub mod train;


pub use api::{compress, decompress, CodecError, Compressor, Quantized};
pub use color::Rgb;
pub use container::{EncodingError, FormatError};
pub use image::{ImageError, RasterImage};
pub use output::IndexedImage;
pub use palette::{LabelMap, Palette, PaletteError};
pub use train::{quantize, train, ConfigError, Initialization, TrainOptions, TrainedPalette};
