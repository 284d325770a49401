use std::path::PathBuf;
use thiserror::Error;

/// How a failure should be surfaced to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not load image '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image is already grayscale ({channels} channel(s))")]
    AlreadyGrayscale { channels: usize },

    #[error("Select an image first")]
    NoImageLoaded,

    #[error("Could not save image '{}': {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Preview height must be positive")]
    InvalidPreviewHeight,

    #[error("Invalid coefficients [{r}, {g}, {b}]: weights must be finite and non-negative")]
    InvalidCoefficients { r: f64, g: f64, b: f64 },

    #[error("Invalid image buffer: {0}")]
    InvalidBuffer(String),
}

impl Error {
    /// `AlreadyGrayscale` and `NoImageLoaded` are warnings, everything else is
    /// an error.
    pub fn severity(&self) -> Severity {
        match self {
            Error::AlreadyGrayscale { .. } | Error::NoImageLoaded => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
