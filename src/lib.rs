#![doc = include_str!("../README.md")]

// Core operations
pub mod convert;
pub mod preview;

// Buffers and file I/O
pub mod image;

// Presentation layer and its state
pub mod app;
pub mod config;
pub mod session;

pub mod error;

// --- High-level re-exports -------------------------------------------------

pub use crate::convert::{convert, convert_with, CoefficientSet, Coefficients, LUMA, STANDARD};
pub use crate::error::{Error, Result, Severity};
pub use crate::preview::{preview_dimensions, scale_for_preview, PREVIEW_HEIGHT};
pub use crate::session::{Conversion, LoadedImage, Session};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use gray_convert::prelude::*;
/// use std::path::Path;
///
/// # fn main() -> Result<()> {
/// let img = load_image(Path::new("photo.png"))?;
/// let gray = convert_with(&img, CoefficientSet::Luma)?;
/// save_grayscale(&gray, &gray_output_path(Path::new("photo.png")))?;
/// let preview = scale_for_preview(&img, PREVIEW_HEIGHT)?;
/// println!("preview {}x{}", preview.w, preview.h);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::io::{gray_output_path, load_image, save_grayscale};
    pub use crate::image::{GrayImageU8, RasterImage};
    pub use crate::{convert, convert_with, scale_for_preview, PREVIEW_HEIGHT};
    pub use crate::{CoefficientSet, Coefficients, Error, Result};
}
