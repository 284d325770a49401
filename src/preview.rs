//! Display-size previews.
//!
//! Previews are resampled to a fixed height with the width following the
//! source aspect ratio. Inputs are normalized to 8-bit samples before
//! resampling, so float `[0, 1]` and byte `[0, 255]` sources come out with
//! the same brightness.
use crate::error::{Error, Result};
use crate::image::io::to_dynamic_u8;
use crate::image::RasterImage;
use image::imageops::FilterType;
use log::debug;

/// Height of the preview area in the display.
pub const PREVIEW_HEIGHT: u32 = 300;

/// `(width, height)` of a preview `target_height` pixels tall.
pub fn preview_dimensions(width: usize, height: usize, target_height: u32) -> Result<(u32, u32)> {
    if target_height == 0 {
        return Err(Error::InvalidPreviewHeight);
    }
    if width == 0 || height == 0 {
        return Err(Error::InvalidBuffer(format!(
            "cannot preview a {width}x{height} image"
        )));
    }
    let aspect = width as f64 / height as f64;
    let target_width = (f64::from(target_height) * aspect).round().max(1.0) as u32;
    Ok((target_width, target_height))
}

/// Resample `image` to `target_height` rows with a Lanczos3 filter.
///
/// The result is always in the 8-bit domain and keeps the source channel
/// count.
pub fn scale_for_preview(image: &RasterImage, target_height: u32) -> Result<RasterImage> {
    let (tw, th) = preview_dimensions(image.w, image.h, target_height)?;
    let source = to_dynamic_u8(image)?;
    let resized = source.resize_exact(tw, th, FilterType::Lanczos3);
    debug!(
        "scale_for_preview {}x{} -> {}x{} ({} channels)",
        image.w, image.h, tw, th, image.channels
    );
    RasterImage::from_u8(tw as usize, th as usize, image.channels, resized.into_bytes())
}
