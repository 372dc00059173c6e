use serde::Serialize;
use std::path::{Path, PathBuf};

use vq_codec::container::{self, Header};
use vq_codec::quality::psnr;
use vq_codec::{Compressor, RasterImage, TrainOptions};

use crate::error::AppError;
use crate::models::AppConfig;
use crate::services::image_io;

/// Summary of a `compress` run
#[derive(Debug, Clone, Serialize)]
pub struct CompressionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Palette size actually stored (requested size clamped to pixel count)
    pub palette_size: usize,
    pub distinct_colors: usize,
    pub iterations: u32,
    pub converged: bool,
    /// Uncompressed RGB size, 3 bytes per pixel
    pub raw_bytes: u64,
    pub artifact_bytes: u64,
    /// PSNR of the reconstruction in dB; `None` when it is exact
    pub psnr_db: Option<f64>,
}

impl CompressionReport {
    /// raw size / artifact size
    pub fn ratio(&self) -> f64 {
        self.raw_bytes as f64 / self.artifact_bytes as f64
    }
}

/// Summary of a `decompress` run
#[derive(Debug, Clone, Serialize)]
pub struct DecompressionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub palette_size: usize,
    pub png_bytes: u64,
    pub indexed_png: bool,
}

/// Header and validity of an artifact file
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactInfo {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub palette_size: u16,
    pub expected_bytes: Option<u64>,
    pub actual_bytes: u64,
    /// Palette entries as `#RRGGBB`, present when the artifact decodes
    pub palette: Vec<String>,
    /// `None` when the artifact is valid, otherwise the decode error
    pub error: Option<String>,
}

/// File-level pipeline: PNG → palette training → artifact, and back.
pub struct CodecPipeline {
    compressor: Compressor,
    indexed_png: bool,
}

impl CodecPipeline {
    pub fn new(options: TrainOptions) -> Self {
        Self {
            compressor: Compressor::with_options(options),
            indexed_png: false,
        }
    }

    /// Build from configuration, validating the training options
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let options = config.compression.to_train_options()?;
        Ok(Self::new(options).indexed_png(config.decompression.indexed_png))
    }

    /// Write palette PNGs on decompression
    pub fn indexed_png(mut self, enabled: bool) -> Self {
        self.indexed_png = enabled;
        self
    }

    pub fn options(&self) -> &TrainOptions {
        self.compressor.options()
    }

    /// Compress an in-memory raster, returning the artifact and a report
    /// without file paths filled in
    pub fn compress_image(&self, image: &RasterImage) -> Result<(Vec<u8>, CompressionReport), AppError> {
        let quantized = self.compressor.quantize(image)?;
        let artifact = container::encode(&quantized.image).map_err(vq_codec::CodecError::from)?;

        let restored = quantized.image.to_raster();
        let psnr_db = psnr(image, &restored)
            .ok()
            .filter(|db| db.is_finite());

        let report = CompressionReport {
            input: PathBuf::new(),
            output: PathBuf::new(),
            width: image.width(),
            height: image.height(),
            palette_size: quantized.image.palette().len(),
            distinct_colors: quantized.distinct_colors,
            iterations: quantized.iterations,
            converged: quantized.converged,
            raw_bytes: image.len() as u64 * 3,
            artifact_bytes: artifact.len() as u64,
            psnr_db,
        };

        if !quantized.converged {
            tracing::warn!(
                iterations = quantized.iterations,
                "Palette training hit the iteration cap before converging"
            );
        }

        Ok((artifact, report))
    }

    /// Read a PNG, compress it and write the artifact
    pub fn compress_file(&self, input: &Path, output: &Path) -> Result<CompressionReport, AppError> {
        let image = image_io::read_png(input)?;
        tracing::info!(
            input = %input.display(),
            width = image.width(),
            height = image.height(),
            palette_size = self.options().palette_size,
            "Compressing"
        );

        let (artifact, mut report) = self.compress_image(&image)?;
        std::fs::write(output, &artifact).map_err(|source| AppError::Write {
            path: output.to_path_buf(),
            source,
        })?;

        report.input = input.to_path_buf();
        report.output = output.to_path_buf();
        tracing::info!(
            output = %output.display(),
            artifact_bytes = report.artifact_bytes,
            iterations = report.iterations,
            "Wrote artifact"
        );
        Ok(report)
    }

    /// Read an artifact, decode it and write a PNG
    pub fn decompress_file(&self, input: &Path, output: &Path) -> Result<DecompressionReport, AppError> {
        let bytes = read_file(input)?;
        let indexed = container::decode(&bytes).map_err(vq_codec::CodecError::from)?;

        let png_bytes = if self.indexed_png {
            image_io::write_indexed_png(output, &indexed)?
        } else {
            image_io::write_png(output, &indexed.to_raster())?
        };

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            width = indexed.width(),
            height = indexed.height(),
            "Decompressed"
        );

        Ok(DecompressionReport {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            width: indexed.width(),
            height: indexed.height(),
            palette_size: indexed.palette().len(),
            png_bytes: png_bytes as u64,
            indexed_png: self.indexed_png,
        })
    }

    /// Describe an artifact file. Fails only when the file cannot be read
    /// or its header is unusable; section errors are reported in the result.
    pub fn inspect_file(path: &Path) -> Result<ArtifactInfo, AppError> {
        let bytes = read_file(path)?;
        let header: Header = container::decode_header(&bytes).map_err(vq_codec::CodecError::from)?;

        let (palette, error) = match container::decode(&bytes) {
            Ok(indexed) => (
                indexed
                    .palette()
                    .colors()
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
                None,
            ),
            Err(e) => (Vec::new(), Some(e.to_string())),
        };

        Ok(ArtifactInfo {
            path: path.to_path_buf(),
            width: header.width,
            height: header.height,
            palette_size: header.palette_size,
            expected_bytes: header.artifact_len().ok().map(|n| n as u64),
            actual_bytes: bytes.len() as u64,
            palette,
            error,
        })
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, AppError> {
    std::fs::read(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vq_codec::Rgb;

    fn two_tone() -> RasterImage {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        RasterImage::new(2, 2, vec![black, black, white, white]).unwrap()
    }

    #[test]
    fn test_compress_image_exact_for_two_colors() {
        let pipeline = CodecPipeline::new(TrainOptions::new(2));
        let (artifact, report) = pipeline.compress_image(&two_tone()).unwrap();

        assert_eq!(artifact.len(), 20);
        assert_eq!(report.artifact_bytes, 20);
        assert_eq!(report.raw_bytes, 12);
        assert_eq!(report.palette_size, 2);
        assert!(report.converged);
        assert_eq!(report.psnr_db, None);
        assert!((report.ratio() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_compress_image_lossy_reports_psnr() {
        let pixels: Vec<Rgb> = (0..64u8).map(|i| Rgb::new(i * 4, i * 2, 255 - i)).collect();
        let image = RasterImage::new(8, 8, pixels).unwrap();
        let pipeline = CodecPipeline::new(TrainOptions::new(4));
        let (_, report) = pipeline.compress_image(&image).unwrap();

        let db = report.psnr_db.expect("quantizing 64 colors to 4 is lossy");
        assert!(db > 10.0 && db.is_finite());
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let mut config = AppConfig::default();
        config.compression.palette_size = 0;
        assert!(matches!(
            CodecPipeline::from_config(&config),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_inspect_reports_trailing_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("padded.vqimg");
        let (mut artifact, _) = CodecPipeline::new(TrainOptions::new(2))
            .compress_image(&two_tone())
            .unwrap();
        artifact.push(0xFF);
        std::fs::write(&path, &artifact).unwrap();

        let info = CodecPipeline::inspect_file(&path).unwrap();
        assert_eq!(info.expected_bytes, Some(20));
        assert_eq!(info.actual_bytes, 21);
        assert!(info.palette.is_empty());
        assert!(info.error.unwrap().contains("trailing bytes"));
    }

    #[test]
    fn test_read_missing_file() {
        let err = CodecPipeline::inspect_file(Path::new("/nonexistent/x.vqimg")).unwrap_err();
        assert!(matches!(err, AppError::Read { .. }));
    }
}
