//! State carried between user actions.
//!
//! A `Session` holds the most recently loaded image and the path it came
//! from. Every operation either succeeds or returns an error with the loaded
//! image left exactly as it was.
use crate::convert::{self, CoefficientSet};
use crate::error::{Error, Result};
use crate::image::io::{gray_output_path, load_image, save_grayscale};
use crate::image::{GrayImageU8, RasterImage};
use crate::preview::scale_for_preview;
use log::debug;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct LoadedImage {
    pub path: PathBuf,
    pub image: RasterImage,
}

/// Outcome of a successful conversion.
#[derive(Clone, Debug)]
pub struct Conversion {
    pub gray: GrayImageU8,
    pub output_path: PathBuf,
    pub method: CoefficientSet,
}

#[derive(Debug, Default)]
pub struct Session {
    loaded: Option<LoadedImage>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loaded(&self) -> Option<&LoadedImage> {
        self.loaded.as_ref()
    }

    /// Decode `path` and make it the current image.
    pub fn load(&mut self, path: &Path) -> Result<&LoadedImage> {
        let image = load_image(path)?;
        let loaded = self.loaded.insert(LoadedImage {
            path: path.to_path_buf(),
            image,
        });
        Ok(&*loaded)
    }

    /// Convert the current image and write it next to the source.
    ///
    /// Nothing is written when the image is already grayscale.
    pub fn convert(&self, method: CoefficientSet) -> Result<Conversion> {
        let loaded = self.loaded.as_ref().ok_or(Error::NoImageLoaded)?;
        let gray = convert::convert_with(&loaded.image, method)?;
        let output_path = gray_output_path(&loaded.path);
        save_grayscale(&gray, &output_path)?;
        debug!(
            "Session::convert {} -> {} ({})",
            loaded.path.display(),
            output_path.display(),
            method.label()
        );
        Ok(Conversion {
            gray,
            output_path,
            method,
        })
    }

    /// Preview of the current (original) image.
    pub fn preview(&self, target_height: u32) -> Result<RasterImage> {
        let loaded = self.loaded.as_ref().ok_or(Error::NoImageLoaded)?;
        scale_for_preview(&loaded.image, target_height)
    }
}

impl Conversion {
    pub fn preview(&self, target_height: u32) -> Result<RasterImage> {
        scale_for_preview(&RasterImage::from(self.gray.clone()), target_height)
    }
}
