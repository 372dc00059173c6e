pub mod config;

pub use config::{AppConfig, CompressionConfig, DecompressionConfig};
