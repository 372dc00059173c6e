//! Color type used throughout the codec
//!
//! Only 8-bit-per-channel RGB is supported. The single operation the
//! clustering needs is the squared Euclidean distance between two colors.
//!
//! # Example
//!
//! ```
//! use vq_codec::Rgb;
//!
//! let black = Rgb::new(0, 0, 0);
//! let white = Rgb::new(255, 255, 255);
//! assert_eq!(black.distance_sq(white), 3 * 255 * 255);
//! ```

mod rgb;

pub use rgb::Rgb;
