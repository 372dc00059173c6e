//! Artifact serialization.

use std::io::Write;

use super::error::EncodingError;
use super::header::{Header, HEADER_LEN};
use crate::color::Rgb;
use crate::output::IndexedImage;
use crate::palette::MAX_PALETTE_SIZE;

/// Serialize an indexed image into a new artifact buffer.
///
/// The result is exactly `10 + 3·K + W·H` bytes long.
pub fn encode(image: &IndexedImage) -> Result<Vec<u8>, EncodingError> {
    encode_parts(
        image.width(),
        image.height(),
        image.palette().colors(),
        image.labels(),
    )
}

/// Serialize raw parts, checking every invariant first.
///
/// # Errors
///
/// - [`EncodingError::InvalidDimensions`] if width or height is zero
/// - [`EncodingError::InvalidPaletteSize`] unless `1 <= palette.len() <= 256`
/// - [`EncodingError::SizeOverflow`] if the artifact length overflows `usize`
/// - [`EncodingError::LabelCountMismatch`] if `labels.len() != width * height`
/// - [`EncodingError::LabelOutOfRange`] for the first label `>= palette.len()`
pub fn encode_parts(
    width: u32,
    height: u32,
    palette: &[Rgb],
    labels: &[u8],
) -> Result<Vec<u8>, EncodingError> {
    let (header, total) = validate(width, height, palette, labels)?;

    let mut out = Vec::with_capacity(total);
    write_sections(&mut out, &header, palette, labels)?;
    debug_assert_eq!(out.len(), total);
    Ok(out)
}

/// Serialize an indexed image into `writer`, returning the bytes written.
///
/// Validation happens before the first write.
pub fn encode_into<W: Write>(image: &IndexedImage, writer: &mut W) -> Result<usize, EncodingError> {
    let palette = image.palette().colors();
    let labels = image.labels();
    let (header, total) = validate(image.width(), image.height(), palette, labels)?;
    write_sections(writer, &header, palette, labels)?;
    Ok(total)
}

fn validate(
    width: u32,
    height: u32,
    palette: &[Rgb],
    labels: &[u8],
) -> Result<(Header, usize), EncodingError> {
    if width == 0 || height == 0 {
        return Err(EncodingError::InvalidDimensions { width, height });
    }
    if palette.is_empty() || palette.len() > MAX_PALETTE_SIZE {
        return Err(EncodingError::InvalidPaletteSize {
            size: palette.len(),
        });
    }

    let header = Header {
        width,
        height,
        // At most 256, checked above
        palette_size: palette.len() as u16,
    };
    let overflow = |_| EncodingError::SizeOverflow { width, height };
    let total = header.artifact_len().map_err(overflow)?;
    let pixels = header.pixel_count().map_err(overflow)?;

    if labels.len() != pixels {
        return Err(EncodingError::LabelCountMismatch {
            expected: pixels,
            actual: labels.len(),
        });
    }
    if let Some((index, &label)) = labels
        .iter()
        .enumerate()
        .find(|&(_, &l)| usize::from(l) >= palette.len())
    {
        return Err(EncodingError::LabelOutOfRange {
            index,
            label,
            palette_size: palette.len(),
        });
    }

    debug_assert_eq!(total, HEADER_LEN + palette.len() * 3 + labels.len());
    Ok((header, total))
}

fn write_sections<W: Write>(
    writer: &mut W,
    header: &Header,
    palette: &[Rgb],
    labels: &[u8],
) -> Result<(), EncodingError> {
    writer.write_all(&header.to_bytes())?;
    for color in palette {
        writer.write_all(&color.to_bytes())?;
    }
    writer.write_all(labels)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;

    fn bw() -> Vec<Rgb> {
        vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]
    }

    #[test]
    fn test_exact_bytes() {
        let bytes = encode_parts(2, 1, &[Rgb::new(1, 2, 3)], &[0, 0]).unwrap();
        assert_eq!(
            bytes,
            vec![0, 0, 0, 2, 0, 0, 0, 1, 0, 1, 1, 2, 3, 0, 0]
        );
    }

    #[test]
    fn test_rejects_label_count_mismatch() {
        let err = encode_parts(2, 2, &bw(), &[0, 1, 0]).unwrap_err();
        assert!(matches!(
            err,
            EncodingError::LabelCountMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_rejects_out_of_range_label() {
        let err = encode_parts(2, 1, &bw(), &[1, 2]).unwrap_err();
        assert!(matches!(
            err,
            EncodingError::LabelOutOfRange {
                index: 1,
                label: 2,
                palette_size: 2
            }
        ));
    }

    #[test]
    fn test_rejects_palette_size() {
        assert!(matches!(
            encode_parts(1, 1, &[], &[0]).unwrap_err(),
            EncodingError::InvalidPaletteSize { size: 0 }
        ));
        let too_many = vec![Rgb::default(); 257];
        assert!(matches!(
            encode_parts(1, 1, &too_many, &[0]).unwrap_err(),
            EncodingError::InvalidPaletteSize { size: 257 }
        ));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(
            encode_parts(0, 1, &bw(), &[]).unwrap_err(),
            EncodingError::InvalidDimensions { width: 0, height: 1 }
        ));
    }

    #[test]
    fn test_palette_of_256_stores_size_0x0100() {
        let palette: Vec<Rgb> = (0..=255u8).map(|i| Rgb::new(i, i, i)).collect();
        let labels: Vec<u8> = (0..=255u8).collect();
        let bytes = encode_parts(16, 16, &palette, &labels).unwrap();
        assert_eq!(&bytes[8..10], &[0x01, 0x00]);
        assert_eq!(bytes.len(), 10 + 768 + 256);
    }

    #[test]
    fn test_encode_into_matches_encode() {
        let palette = Palette::new(bw()).unwrap();
        let image = IndexedImage::new(3, 1, palette, vec![1, 0, 1]).unwrap();

        let mut sink = Vec::new();
        let written = encode_into(&image, &mut sink).unwrap();
        assert_eq!(written, sink.len());
        assert_eq!(sink, encode(&image).unwrap());
    }

    #[test]
    fn test_encode_into_reports_writer_failure() {
        struct Failing;
        impl Write for Failing {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let palette = Palette::new(bw()).unwrap();
        let image = IndexedImage::new(1, 1, palette, vec![0]).unwrap();
        assert!(matches!(
            encode_into(&image, &mut Failing).unwrap_err(),
            EncodingError::Io(_)
        ));
    }
}
