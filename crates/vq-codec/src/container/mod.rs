//! Binary container for quantized images
//!
//! All multi-byte fields are big-endian and the layout is fixed:
//!
//! | Offset   | Size  | Field                                  |
//! |----------|-------|----------------------------------------|
//! | 0        | 4     | width (`u32`)                          |
//! | 4        | 4     | height (`u32`)                         |
//! | 8        | 2     | palette size K (`u16`, 1..=256)        |
//! | 10       | 3·K   | palette entries, R G B, palette order  |
//! | 10 + 3·K | W·H   | labels, one byte per pixel, row-major  |
//!
//! An artifact is exactly `10 + 3·K + W·H` bytes long. The decoder treats
//! its input as untrusted and rejects anything else with a [`FormatError`];
//! the encoder refuses to write data that breaks an invariant and returns
//! an [`EncodingError`] instead.
//!
//! # Example
//!
//! ```
//! use vq_codec::container::{decode, encode, HEADER_LEN};
//! use vq_codec::{IndexedImage, Palette, Rgb};
//!
//! let palette = Palette::new(vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
//! let image = IndexedImage::new(2, 2, palette, vec![0, 0, 1, 1]).unwrap();
//!
//! let bytes = encode(&image).unwrap();
//! assert_eq!(bytes.len(), HEADER_LEN + 6 + 4);
//! assert_eq!(decode(&bytes).unwrap(), image);
//! ```

mod decoder;
mod encoder;
mod error;
mod header;

pub use decoder::{decode, decode_header};
pub use encoder::{encode, encode_into, encode_parts};
pub use error::{EncodingError, FormatError};
pub use header::{Header, HEADER_LEN};
