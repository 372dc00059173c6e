//! Quantized image representation
//!
//! [`IndexedImage`] is what training produces and what the container
//! stores: dimensions, a palette, and one palette index per pixel. The
//! indexed form is canonical; RGB output is computed on demand.

mod indexed_image;

pub use indexed_image::IndexedImage;
