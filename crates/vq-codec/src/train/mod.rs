//! Palette training (Lloyd's k-means) and quantization
//!
//! The [`train`] function turns a pixel population into a palette of K
//! representative colors plus one label per pixel. The [`quantize`]
//! function maps pixels onto an existing palette and is also the final
//! step of training.
//!
//! # Algorithm
//!
//! Training runs over a color *histogram* (distinct colors with their pixel
//! counts) rather than over raw pixels. Identical pixels always land in the
//! same cluster, so weighted Lloyd iteration over the histogram produces the
//! same clusters as iterating over every pixel, at a fraction of the cost
//! for typical images.
//!
//! ```text
//! histogram  (distinct colors, sorted by 0xRRGGBB)
//!     |
//!     v
//! initial centroids    (k-means++ seeded by `seed`, or most popular colors)
//!     |
//!     v
//! ┌─> assign   each color -> nearest centroid (ties: lowest index)
//! │     |
//! │   update   centroid = rounded weighted mean of its members
//! │     |      empty centroid -> reseeded with the worst-fitting color
//! │     |
//! │   assign   stop if no label changed, or at max_iterations
//! └─────┘
//!     |
//!     v
//! quantize every pixel against the final centroids
//! ```
//!
//! # Example
//!
//! ```
//! use vq_codec::{train, Rgb, TrainOptions};
//!
//! let pixels = vec![Rgb::new(0, 0, 0), Rgb::new(250, 250, 250), Rgb::new(5, 5, 5)];
//! let trained = train(&pixels, &TrainOptions::new(2)).unwrap();
//!
//! assert_eq!(trained.palette.len(), 2);
//! assert_eq!(trained.labels.as_slice()[0], trained.labels.as_slice()[2]);
//! ```

mod error;
mod histogram;
mod init;
mod kmeans;
mod options;
mod quantize;

pub use error::ConfigError;
pub use histogram::Histogram;
pub use kmeans::{train, TrainedPalette};
pub use options::{Initialization, TrainOptions, DEFAULT_MAX_ITERATIONS, DEFAULT_PALETTE_SIZE};
pub use quantize::quantize;
