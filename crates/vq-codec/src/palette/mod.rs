//! Palette and label types
//!
//! A [`Palette`] is an ordered set of 1 to 256 colors. A [`LabelMap`] holds
//! one palette index per pixel. Both check their bounds at construction.

mod error;
mod labels;
mod palette;

pub use error::PaletteError;
pub use labels::LabelMap;
pub(crate) use palette::nearest_in;
pub use palette::{Palette, MAX_PALETTE_SIZE};
