//! Test images and scratch directories.

use std::path::PathBuf;

use tempfile::TempDir;
use vq_codec::{RasterImage, Rgb};
use vqimg::services::image_io;

/// Horizontal red ramp over a vertical blue ramp, `width * height` distinct-ish colors
pub fn gradient(width: u32, height: u32) -> RasterImage {
    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                Rgb::new(
                    (x * 255 / width.max(2).saturating_sub(1)).min(255) as u8,
                    128,
                    (y * 255 / height.max(2).saturating_sub(1)).min(255) as u8,
                )
            })
        })
        .collect();
    RasterImage::new(width, height, pixels).unwrap()
}

/// Image built from a repeating list of colors
pub fn stripes(width: u32, height: u32, colors: &[Rgb]) -> RasterImage {
    let pixels = (0..width as usize * height as usize)
        .map(|i| colors[i % colors.len()])
        .collect();
    RasterImage::new(width, height, pixels).unwrap()
}

/// The 2x2 image from the format description: black top row, white bottom row
pub fn black_white_2x2() -> RasterImage {
    let black = Rgb::new(0, 0, 0);
    let white = Rgb::new(255, 255, 255);
    RasterImage::new(2, 2, vec![black, black, white, white]).unwrap()
}

/// Scratch directory that lives as long as the test
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `image` as a PNG and return its path
    pub fn png(&self, name: &str, image: &RasterImage) -> PathBuf {
        let path = self.path(name);
        image_io::write_png(&path, image).unwrap();
        path
    }

    /// Write raw bytes and return the path
    pub fn file(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }
}
