//! Single-channel 8-bit grayscale buffers produced by the converter.
use super::raster::RasterImage;

/// Owned 8-bit grayscale buffer, tightly packed (stride == width).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct from raw row-major bytes. Returns `None` for zero dimensions
    /// or when `data` does not hold exactly `width * height` samples.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        let valid = width > 0 && height > 0 && data.len() == width * height;
        valid.then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width)
    }
}

impl From<GrayImageU8> for RasterImage {
    fn from(gray: GrayImageU8) -> Self {
        let GrayImageU8 {
            width,
            height,
            data,
        } = gray;
        RasterImage::from_gray_parts(width, height, data)
    }
}
