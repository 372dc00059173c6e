//! PNG file I/O for raster and indexed images.
//!
//! Any 8- or 16-bit PNG is read into an 8-bit RGB [`RasterImage`]: low bit
//! depths and palettes are expanded, 16-bit samples are stripped to 8 bits,
//! grayscale is replicated across channels and alpha is dropped.

use std::io::Cursor;
use std::path::Path;

use vq_codec::{IndexedImage, RasterImage};

use crate::error::ImageIoError;

/// Decode PNG bytes into an RGB raster.
pub fn decode_png(bytes: &[u8]) -> Result<RasterImage, ImageIoError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| ImageIoError::PngDecode(e.to_string()))?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| ImageIoError::PngDecode(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    let rgb: Vec<u8> = match info.color_type {
        png::ColorType::Rgb => data.to_vec(),
        png::ColorType::Rgba => data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v]).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0]])
            .collect(),
        other => return Err(ImageIoError::UnsupportedColorType(other)),
    };

    tracing::debug!(
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        "Decoded PNG"
    );

    Ok(RasterImage::from_rgb_bytes(info.width, info.height, &rgb)?)
}

/// Encode a raster as an 8-bit RGB PNG.
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, ImageIoError> {
    encode(
        image.width(),
        image.height(),
        png::ColorType::Rgb,
        None,
        &image.to_rgb_bytes(),
    )
}

/// Encode an indexed image as an 8-bit palette PNG (PLTE chunk).
///
/// Labels become PNG indices directly, so no color is re-matched.
pub fn encode_indexed_png(image: &IndexedImage) -> Result<Vec<u8>, ImageIoError> {
    let plte = image.palette().to_bytes();
    encode(
        image.width(),
        image.height(),
        png::ColorType::Indexed,
        Some(&plte),
        image.labels(),
    )
}

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<RasterImage, ImageIoError> {
    let bytes = std::fs::read(path)?;
    decode_png(&bytes)
}

/// Encode and write a raster as a PNG file.
pub fn write_png(path: &Path, image: &RasterImage) -> Result<usize, ImageIoError> {
    let bytes = encode_png(image)?;
    std::fs::write(path, &bytes)?;
    Ok(bytes.len())
}

/// Encode and write an indexed image as a palette PNG file.
pub fn write_indexed_png(path: &Path, image: &IndexedImage) -> Result<usize, ImageIoError> {
    let bytes = encode_indexed_png(image)?;
    std::fs::write(path, &bytes)?;
    Ok(bytes.len())
}

fn encode(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    plte: Option<&[u8]>,
    data: &[u8],
) -> Result<Vec<u8>, ImageIoError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        if let Some(plte) = plte {
            encoder.set_palette(plte);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| ImageIoError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(data)
            .map_err(|e| ImageIoError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vq_codec::{Palette, Rgb};

    fn sample() -> RasterImage {
        RasterImage::new(
            3,
            2,
            vec![
                Rgb::new(255, 0, 0),
                Rgb::new(0, 255, 0),
                Rgb::new(0, 0, 255),
                Rgb::new(10, 20, 30),
                Rgb::new(40, 50, 60),
                Rgb::new(70, 80, 90),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_png_round_trip_is_exact() {
        let image = sample();
        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(decode_png(&bytes).unwrap(), image);
    }

    #[test]
    fn test_indexed_png_decodes_to_palette_colors() {
        let palette = Palette::new(vec![Rgb::new(1, 2, 3), Rgb::new(200, 100, 50)]).unwrap();
        let indexed = IndexedImage::new(2, 2, palette, vec![0, 1, 1, 0]).unwrap();

        let bytes = encode_indexed_png(&indexed).unwrap();
        let decoded = decode_png(&bytes).unwrap();
        assert_eq!(decoded, indexed.to_raster());
    }

    #[test]
    fn test_grayscale_png_is_replicated() {
        let bytes = encode(2, 1, png::ColorType::Grayscale, None, &[7, 200]).unwrap();
        let decoded = decode_png(&bytes).unwrap();
        assert_eq!(decoded.pixels(), &[Rgb::new(7, 7, 7), Rgb::new(200, 200, 200)]);
    }

    #[test]
    fn test_rgba_png_drops_alpha() {
        let bytes = encode(1, 1, png::ColorType::Rgba, None, &[9, 8, 7, 0]).unwrap();
        let decoded = decode_png(&bytes).unwrap();
        assert_eq!(decoded.pixels(), &[Rgb::new(9, 8, 7)]);
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = decode_png(b"not a png").unwrap_err();
        assert!(matches!(err, ImageIoError::PngDecode(_)));
    }

    #[test]
    fn test_write_and_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let written = write_png(&path, &sample()).unwrap();
        assert_eq!(written as u64, std::fs::metadata(&path).unwrap().len());
        assert_eq!(read_png(&path).unwrap(), sample());
    }
}
