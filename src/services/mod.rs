pub mod codec_pipeline;
pub mod image_io;

pub use codec_pipeline::{ArtifactInfo, CodecPipeline, CompressionReport, DecompressionReport};
