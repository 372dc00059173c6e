use std::path::PathBuf;

use thiserror::Error;
use vq_codec::CodecError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Image I/O error: {0}")]
    ImageIo(#[from] ImageIoError),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ImageIoError {
    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported PNG color type: {0:?}")]
    UnsupportedColorType(png::ColorType),

    #[error("Invalid raster: {0}")]
    Raster(#[from] vq_codec::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
