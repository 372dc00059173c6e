//! Assertion helpers for tests.

use std::path::Path;

use pretty_assertions::assert_eq;
use vq_codec::container::HEADER_LEN;
use vq_codec::{IndexedImage, RasterImage};

/// Assert the artifact length is exactly header + palette + labels
pub fn assert_artifact_len(bytes: &[u8], width: u32, height: u32, palette_size: usize) {
    let expected = HEADER_LEN + 3 * palette_size + width as usize * height as usize;
    assert_eq!(
        bytes.len(),
        expected,
        "Artifact for {width}x{height} with {palette_size} colors should be {expected} bytes"
    );
}

/// Assert every label names the nearest palette entry for its source pixel
pub fn assert_nearest_labels(original: &RasterImage, indexed: &IndexedImage) {
    let palette = indexed.palette();
    for (i, (&pixel, &label)) in original.pixels().iter().zip(indexed.labels()).enumerate() {
        let (_, best) = palette.nearest(pixel);
        let chosen = palette.get(usize::from(label)).distance_sq(pixel);
        assert_eq!(
            chosen, best,
            "Pixel {i} ({pixel}) labelled {label} at distance {chosen}, nearest is {best}"
        );
    }
}

/// Assert a file starts with the PNG signature
pub fn assert_png_file(path: &Path) {
    let bytes = std::fs::read(path).unwrap();
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']),
        "Expected PNG at {}, got {} bytes starting with {:?}",
        path.display(),
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}
