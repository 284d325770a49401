#![allow(dead_code)]

use gray_convert::image::RasterImage;
use std::fs;
use std::path::PathBuf;

/// Uniform RGB image in the 8-bit domain.
pub fn solid_rgb(width: usize, height: usize, rgb: [u8; 3]) -> RasterImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let data = (0..width * height).flat_map(|_| rgb).collect();
    RasterImage::from_u8(width, height, 3, data).unwrap()
}

/// Horizontal RGB ramp: red rises left to right, green falls, blue follows rows.
pub fn gradient_rgb(width: usize, height: usize) -> RasterImage {
    assert!(width > 1 && height > 1, "gradient needs at least 2x2 pixels");
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / (width - 1)) as u8;
            let g = 255 - r;
            let b = (y * 255 / (height - 1)) as u8;
            data.extend_from_slice(&[r, g, b]);
        }
    }
    RasterImage::from_u8(width, height, 3, data).unwrap()
}

/// Fresh, empty directory under the system temp dir, unique per test name.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("gray-convert-tests")
        .join(format!("{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write a uniform RGB file; the container follows the extension.
pub fn write_rgb(path: &std::path::Path, width: u32, height: u32, rgb: [u8; 3]) {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb(rgb));
    img.save(path).unwrap();
}
