//! Raster image buffer
//!
//! [`RasterImage`] carries its dimensions alongside a row-major pixel
//! sequence. All index arithmetic lives here and is overflow-checked.

mod error;
mod raster;

pub use error::ImageError;
pub(crate) use raster::checked_dimensions;
pub use raster::{pixel_count, RasterImage};
