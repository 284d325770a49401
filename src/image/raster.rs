//! Owned multi-channel raster in row-major, channel-interleaved layout.
//!
//! Decoders hand back samples in one of two numeric domains: 8-bit integers
//! in `[0, 255]` or floats in `[0, 1]`. `RasterImage` keeps the domain
//! explicit and every consumer goes through [`RasterImage::byte_scale`] or
//! [`RasterImage::to_u8_samples`], so no computation ever sees a mix of the
//! two.
use crate::error::{Error, Result};

/// Sample storage tagged with its numeric domain.
#[derive(Clone, Debug, PartialEq)]
pub enum Samples {
    /// Integers in `[0, 255]`.
    U8(Vec<u8>),
    /// Floats in `[0, 1]`.
    F32(Vec<f32>),
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Samples::U8(v) => v.len(),
            Samples::F32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RasterImage {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Interleaved channels per pixel (1 gray, 2 gray+alpha, 3 RGB, 4 RGBA)
    pub channels: usize,
    samples: Samples,
}

impl RasterImage {
    /// Wrap samples after checking that they cover exactly `w × h × channels`.
    pub fn new(w: usize, h: usize, channels: usize, samples: Samples) -> Result<Self> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidBuffer(format!(
                "dimensions must be positive, got {w}x{h}"
            )));
        }
        if channels == 0 {
            return Err(Error::InvalidBuffer("channel count must be positive".into()));
        }
        let expected = w * h * channels;
        if samples.len() != expected {
            return Err(Error::InvalidBuffer(format!(
                "expected {expected} samples for {w}x{h}x{channels}, got {}",
                samples.len()
            )));
        }
        Ok(Self {
            w,
            h,
            channels,
            samples,
        })
    }

    /// Single-channel 8-bit raster from a buffer whose length is already
    /// known to be `w * h` with positive dimensions.
    pub(crate) fn from_gray_parts(w: usize, h: usize, data: Vec<u8>) -> Self {
        debug_assert!(w > 0 && h > 0 && data.len() == w * h);
        Self {
            w,
            h,
            channels: 1,
            samples: Samples::U8(data),
        }
    }

    pub fn from_u8(w: usize, h: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        Self::new(w, h, channels, Samples::U8(data))
    }

    pub fn from_f32(w: usize, h: usize, channels: usize, data: Vec<f32>) -> Result<Self> {
        Self::new(w, h, channels, Samples::F32(data))
    }

    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    pub fn pixel_count(&self) -> usize {
        self.w * self.h
    }

    /// Fewer than three channels means there is no color to remove.
    #[inline]
    pub fn is_grayscale(&self) -> bool {
        self.channels < 3
    }

    /// Sample at linear index `i`, normalized to the `[0, 255]` scale.
    #[inline]
    pub fn byte_scale(&self, i: usize) -> f64 {
        match &self.samples {
            Samples::U8(v) => f64::from(v[i]),
            Samples::F32(v) => f64::from(v[i]) * 255.0,
        }
    }

    /// Channel `c` of pixel `(x, y)` on the `[0, 255]` scale.
    #[inline]
    pub fn get(&self, x: usize, y: usize, c: usize) -> f64 {
        self.byte_scale((y * self.w + x) * self.channels + c)
    }

    /// All samples as 8-bit integers. Float samples are rounded and clamped.
    pub fn to_u8_samples(&self) -> Vec<u8> {
        match &self.samples {
            Samples::U8(v) => v.clone(),
            Samples::F32(v) => v
                .iter()
                .map(|&s| (f64::from(s) * 255.0).round().clamp(0.0, 255.0) as u8)
                .collect(),
        }
    }

    /// Same pixels re-expressed in the 8-bit domain.
    pub fn normalized_u8(&self) -> RasterImage {
        RasterImage {
            w: self.w,
            h: self.h,
            channels: self.channels,
            samples: Samples::U8(self.to_u8_samples()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_sample_count() {
        let err = RasterImage::from_u8(2, 2, 3, vec![0; 11]).unwrap_err();
        assert!(matches!(err, Error::InvalidBuffer(_)));
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(RasterImage::from_u8(0, 4, 1, Vec::new()).is_err());
        assert!(RasterImage::from_f32(4, 0, 3, Vec::new()).is_err());
    }

    #[test]
    fn float_domain_is_scaled_to_bytes() {
        let img = RasterImage::from_f32(1, 1, 3, vec![1.0, 0.5, 0.0]).unwrap();
        assert_eq!(img.get(0, 0, 0), 255.0);
        assert_eq!(img.get(0, 0, 1), 127.5);
        assert_eq!(img.to_u8_samples(), vec![255, 128, 0]);
    }

    #[test]
    fn normalization_clamps_out_of_range_floats() {
        let img = RasterImage::from_f32(1, 1, 1, vec![1.5]).unwrap();
        assert_eq!(img.normalized_u8().samples(), &Samples::U8(vec![255]));
    }

    #[test]
    fn two_channel_counts_as_grayscale() {
        let img = RasterImage::from_u8(1, 1, 2, vec![10, 255]).unwrap();
        assert!(img.is_grayscale());
    }
}
