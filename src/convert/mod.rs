//! Weighted RGB → gray conversion.
//!
//! Each output pixel is `ceil(w_r*R + w_g*G + w_b*B)` over the first three
//! channels on the `[0, 255]` scale, with anything above 255 clamped to 255.
//! Channels past the third (alpha) are ignored. The ceiling and the one-sided
//! clamp are part of the output contract; switching to round-to-nearest would
//! shift pixel values.

pub mod coefficients;

use crate::error::{Error, Result};
use crate::image::{GrayImageU8, RasterImage};
use log::debug;

pub use coefficients::{CoefficientSet, Coefficients, LUMA, STANDARD};

const MAX_LEVEL: f64 = 255.0;

/// Convert a color raster to 8-bit grayscale.
///
/// Fails with [`Error::AlreadyGrayscale`] when the input has fewer than three
/// channels. The input is never modified.
pub fn convert(image: &RasterImage, coefficients: Coefficients) -> Result<GrayImageU8> {
    if image.is_grayscale() {
        return Err(Error::AlreadyGrayscale {
            channels: image.channels,
        });
    }
    debug!(
        "convert {}x{}x{} weights=[{}, {}, {}]",
        image.w, image.h, image.channels, coefficients.r, coefficients.g, coefficients.b
    );

    let stride = image.channels;
    let mut out = Vec::with_capacity(image.pixel_count());
    for px in 0..image.pixel_count() {
        let base = px * stride;
        let level = coefficients
            .weigh(
                image.byte_scale(base),
                image.byte_scale(base + 1),
                image.byte_scale(base + 2),
            )
            .ceil();
        out.push(quantize(level));
    }

    GrayImageU8::new(image.w, image.h, out)
        .ok_or_else(|| Error::InvalidBuffer("converted buffer does not match source".into()))
}

/// Convert with one of the predefined weightings.
pub fn convert_with(image: &RasterImage, set: CoefficientSet) -> Result<GrayImageU8> {
    convert(image, set.coefficients())
}

/// Clamp only the high end; non-negative weights on non-negative samples
/// cannot go below zero.
#[inline]
fn quantize(level: f64) -> u8 {
    if level > MAX_LEVEL {
        MAX_LEVEL as u8
    } else {
        level as u8
    }
}

#[cfg(test)]
mod tests;
