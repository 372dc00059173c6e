//! Artifact parsing and validation.

use super::error::FormatError;
use super::header::{Header, HEADER_LEN};
use crate::color::Rgb;
use crate::output::IndexedImage;
use crate::palette::{LabelMap, Palette};

/// Parse only the header of an artifact.
///
/// Section lengths are not checked; use [`decode`] for a full validation.
pub fn decode_header(bytes: &[u8]) -> Result<Header, FormatError> {
    Header::parse(bytes)
}

/// Parse and validate a complete artifact.
///
/// Input is untrusted. Checks run in this order and nothing is allocated
/// until the declared length matches the input length exactly:
///
/// 1. header present, K in `1..=256`, non-zero dimensions
/// 2. `10 + 3·K + W·H` computed without wrapping
/// 3. palette section complete
/// 4. label section complete
/// 5. no trailing bytes
/// 6. every label `< K`
pub fn decode(bytes: &[u8]) -> Result<IndexedImage, FormatError> {
    let header = Header::parse(bytes)?;
    let total = header.artifact_len()?;
    let labels_offset = header.labels_offset();

    if bytes.len() < labels_offset {
        return Err(FormatError::TruncatedPalette {
            expected: labels_offset,
            actual: bytes.len(),
        });
    }
    if bytes.len() < total {
        return Err(FormatError::TruncatedLabels {
            expected: total,
            actual: bytes.len(),
        });
    }
    if bytes.len() > total {
        return Err(FormatError::TrailingBytes {
            expected: total,
            actual: bytes.len(),
        });
    }

    let palette_size = usize::from(header.palette_size);
    let labels = &bytes[labels_offset..];
    if let Some((index, &label)) = labels
        .iter()
        .enumerate()
        .find(|&(_, &l)| usize::from(l) >= palette_size)
    {
        return Err(FormatError::LabelOutOfRange {
            index,
            label,
            palette_size,
        });
    }

    let colors = bytes[HEADER_LEN..labels_offset]
        .chunks_exact(3)
        .map(|c| Rgb::new(c[0], c[1], c[2]))
        .collect();
    let palette = Palette::from_trusted(colors);
    let labels = LabelMap::from_trusted(labels.to_vec(), palette_size);

    tracing::trace!(
        width = header.width,
        height = header.height,
        palette_size,
        "Decoded artifact"
    );

    Ok(IndexedImage::from_trusted(
        header.width,
        header.height,
        palette,
        labels,
    ))
}
