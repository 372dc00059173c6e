//! vqimg - palette image compressor
//!
//! Reads PNG files, trains a palette with k-means, and stores the result in
//! the compact `.vqimg` container provided by `vq-codec`.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
