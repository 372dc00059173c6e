//! Fixed 10-byte artifact header.

use super::error::FormatError;
use crate::palette::MAX_PALETTE_SIZE;

/// Header length in bytes.
pub const HEADER_LEN: usize = 10;

/// Parsed artifact header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Palette size K; 256 is stored as `0x0100`
    pub palette_size: u16,
}

impl Header {
    /// Parse and validate the first 10 bytes of `bytes`.
    ///
    /// # Errors
    ///
    /// - [`FormatError::TruncatedHeader`] if fewer than 10 bytes are given
    /// - [`FormatError::InvalidPaletteSize`] unless `1 <= K <= 256`
    /// - [`FormatError::InvalidDimensions`] if width or height is zero
    pub fn parse(bytes: &[u8]) -> Result<Self, FormatError> {
        let Some(raw) = bytes.get(..HEADER_LEN) else {
            return Err(FormatError::TruncatedHeader {
                actual: bytes.len(),
            });
        };

        let width = u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]);
        let height = u32::from_be_bytes([raw[4], raw[5], raw[6], raw[7]]);
        let palette_size = u16::from_be_bytes([raw[8], raw[9]]);

        if palette_size == 0 || usize::from(palette_size) > MAX_PALETTE_SIZE {
            return Err(FormatError::InvalidPaletteSize { size: palette_size });
        }
        if width == 0 || height == 0 {
            return Err(FormatError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            palette_size,
        })
    }

    /// Serialize to the 10 header bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0..4].copy_from_slice(&self.width.to_be_bytes());
        out[4..8].copy_from_slice(&self.height.to_be_bytes());
        out[8..10].copy_from_slice(&self.palette_size.to_be_bytes());
        out
    }

    /// Length of the palette section (3·K).
    #[inline]
    pub fn palette_len(&self) -> usize {
        usize::from(self.palette_size) * 3
    }

    /// Offset of the first label byte (10 + 3·K).
    #[inline]
    pub fn labels_offset(&self) -> usize {
        HEADER_LEN + self.palette_len()
    }

    /// Number of label bytes (W·H).
    ///
    /// # Errors
    ///
    /// [`FormatError::SizeOverflow`] if W·H does not fit in `usize`.
    pub fn pixel_count(&self) -> Result<usize, FormatError> {
        let count = u64::from(self.width) * u64::from(self.height);
        usize::try_from(count).map_err(|_| self.overflow())
    }

    /// Exact artifact length, `10 + 3·K + W·H`.
    ///
    /// Computed in `u64`, where W·H of two `u32` values cannot wrap, and
    /// only then narrowed to `usize`.
    ///
    /// # Errors
    ///
    /// [`FormatError::SizeOverflow`] if the length does not fit in `usize`.
    pub fn artifact_len(&self) -> Result<usize, FormatError> {
        let pixels = u64::from(self.width) * u64::from(self.height);
        let total = pixels
            .checked_add(self.labels_offset() as u64)
            .ok_or_else(|| self.overflow())?;
        usize::try_from(total).map_err(|_| self.overflow())
    }

    fn overflow(&self) -> FormatError {
        FormatError::SizeOverflow {
            width: self.width,
            height: self.height,
        }
    }
}
