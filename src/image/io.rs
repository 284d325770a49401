//! I/O helpers for raster input and grayscale output.
//!
//! - `load_image`: read a PNG/JPEG/BMP/GIF into a `RasterImage`, keeping its
//!   channel layout and numeric domain.
//! - `save_grayscale`: write a `GrayImageU8` as a single-channel image.
//! - `gray_output_path`: the sibling `{stem}_gray{ext}` path for a source.
use super::{GrayImageU8, RasterImage};
use crate::error::{Error, Result};
use image::{
    DynamicImage, GrayAlphaImage, GrayImage, ImageFormat, ImageReader, RgbImage, RgbaImage,
};
use log::debug;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions offered by the file picker. Anything else is still attempted.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

const GRAY_SUFFIX: &str = "_gray";

/// Load an image from disk without changing its channel layout.
///
/// The container is detected from the file contents, so missing or wrong
/// extensions still decode. 8-bit formats stay in the `[0, 255]` domain;
/// 16-bit and float formats are mapped to `[0, 1]` floats.
pub fn load_image(path: &Path) -> Result<RasterImage> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let decoded = ImageReader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?
        .decode()
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    let raster = from_dynamic(decoded)?;
    debug!(
        "load_image {} -> {}x{}x{}",
        path.display(),
        raster.w,
        raster.h,
        raster.channels
    );
    Ok(raster)
}

/// Re-express a decoded `DynamicImage` as a `RasterImage`.
pub fn from_dynamic(img: DynamicImage) -> Result<RasterImage> {
    let (w, h) = (img.width() as usize, img.height() as usize);
    match img {
        DynamicImage::ImageLuma8(b) => RasterImage::from_u8(w, h, 1, b.into_raw()),
        DynamicImage::ImageLumaA8(b) => RasterImage::from_u8(w, h, 2, b.into_raw()),
        DynamicImage::ImageRgb8(b) => RasterImage::from_u8(w, h, 3, b.into_raw()),
        DynamicImage::ImageRgba8(b) => RasterImage::from_u8(w, h, 4, b.into_raw()),
        DynamicImage::ImageLuma16(b) => RasterImage::from_f32(w, h, 1, unit_from_u16(b.as_raw())),
        DynamicImage::ImageLumaA16(b) => {
            RasterImage::from_f32(w, h, 2, unit_from_u16(b.as_raw()))
        }
        DynamicImage::ImageRgb16(b) => RasterImage::from_f32(w, h, 3, unit_from_u16(b.as_raw())),
        DynamicImage::ImageRgba16(b) => RasterImage::from_f32(w, h, 4, unit_from_u16(b.as_raw())),
        DynamicImage::ImageRgb32F(b) => RasterImage::from_f32(w, h, 3, b.into_raw()),
        DynamicImage::ImageRgba32F(b) => RasterImage::from_f32(w, h, 4, b.into_raw()),
        other => {
            if other.color().has_alpha() {
                RasterImage::from_f32(w, h, 4, other.into_rgba32f().into_raw())
            } else {
                RasterImage::from_f32(w, h, 3, other.into_rgb32f().into_raw())
            }
        }
    }
}

fn unit_from_u16(raw: &[u16]) -> Vec<f32> {
    raw.iter().map(|&v| f32::from(v) / 65535.0).collect()
}

/// Save an 8-bit grayscale buffer, picking the container from the extension
/// (PNG when the extension names no known format).
///
/// GIF has no single-channel mode, so GIF output carries the gray values in
/// all three color channels.
pub fn save_grayscale(gray: &GrayImageU8, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let buffer = GrayImage::from_raw(
        gray.width() as u32,
        gray.height() as u32,
        gray.as_raw().to_vec(),
    )
    .ok_or_else(|| Error::InvalidBuffer("gray buffer does not match its dimensions".into()))?;
    let format = output_format(path);
    let mut image = DynamicImage::ImageLuma8(buffer);
    if format == ImageFormat::Gif {
        image = DynamicImage::ImageRgba8(image.to_rgba8());
    }
    image
        .save_with_format(path, format)
        .map_err(|source| Error::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("save_grayscale {} ({format:?})", path.display());
    Ok(())
}

/// Build an 8-bit `DynamicImage` with the same channel layout, normalizing
/// float samples first.
pub fn to_dynamic_u8(image: &RasterImage) -> Result<DynamicImage> {
    let (w, h) = (image.w as u32, image.h as u32);
    let data = image.to_u8_samples();
    let built = match image.channels {
        1 => GrayImage::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
        2 => GrayAlphaImage::from_raw(w, h, data).map(DynamicImage::ImageLumaA8),
        3 => RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
        4 => RgbaImage::from_raw(w, h, data).map(DynamicImage::ImageRgba8),
        n => {
            return Err(Error::InvalidBuffer(format!(
                "no 8-bit layout for {n} channels"
            )))
        }
    };
    built.ok_or_else(|| Error::InvalidBuffer("sample count does not match dimensions".into()))
}

/// Save any raster as an 8-bit image, e.g. a preview.
pub fn save_raster(image: &RasterImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    to_dynamic_u8(image)?
        .save_with_format(path, output_format(path))
        .map_err(|source| Error::Encode {
            path: path.to_path_buf(),
            source,
        })
}

fn output_format(path: &Path) -> ImageFormat {
    ImageFormat::from_path(path).unwrap_or(ImageFormat::Png)
}

/// `dir/photo.jpg` -> `dir/photo_gray.jpg`. Paths without an extension just
/// get the suffix.
pub fn gray_output_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_stem().map(OsString::from).unwrap_or_default();
    name.push(GRAY_SUFFIX);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}

/// Case-insensitive check against [`SUPPORTED_EXTENSIONS`].
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_keeps_directory_and_extension() {
        assert_eq!(
            gray_output_path(Path::new("dir/photo.jpeg")),
            PathBuf::from("dir/photo_gray.jpeg")
        );
        assert_eq!(
            gray_output_path(Path::new("photo.png")),
            PathBuf::from("photo_gray.png")
        );
    }

    #[test]
    fn output_path_without_extension() {
        assert_eq!(
            gray_output_path(Path::new("scans/page")),
            PathBuf::from("scans/page_gray")
        );
    }

    #[test]
    fn output_path_only_strips_last_extension() {
        assert_eq!(
            gray_output_path(Path::new("a.b.png")),
            PathBuf::from("a.b_gray.png")
        );
    }

    #[test]
    fn unknown_extensions_are_written_as_png() {
        assert_eq!(output_format(Path::new("scans/page_gray")), ImageFormat::Png);
        assert_eq!(output_format(Path::new("a_gray.gif")), ImageFormat::Gif);
        assert_eq!(output_format(Path::new("b_gray.JPG")), ImageFormat::Jpeg);
    }

    #[test]
    fn extension_filter_is_case_insensitive() {
        assert!(has_supported_extension(Path::new("x/Y.JPG")));
        assert!(has_supported_extension(Path::new("y.gif")));
        assert!(!has_supported_extension(Path::new("notes.txt")));
        assert!(!has_supported_extension(Path::new("README")));
    }

    #[test]
    fn sixteen_bit_input_maps_to_unit_floats() {
        let buf = image::ImageBuffer::<image::Luma<u16>, Vec<u16>>::from_raw(2, 1, vec![0, 65535])
            .unwrap();
        let raster = from_dynamic(DynamicImage::ImageLuma16(buf)).unwrap();
        assert_eq!(raster.channels, 1);
        assert_eq!(raster.get(0, 0, 0), 0.0);
        assert_eq!(raster.get(1, 0, 0), 255.0);
    }

    #[test]
    fn rgba8_keeps_four_channels() {
        let buf = image::RgbaImage::from_raw(1, 1, vec![1, 2, 3, 4]).unwrap();
        let raster = from_dynamic(DynamicImage::ImageRgba8(buf)).unwrap();
        assert_eq!(raster.channels, 4);
        assert_eq!(raster.get(0, 0, 2), 3.0);
    }
}
