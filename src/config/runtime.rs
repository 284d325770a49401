use crate::convert::CoefficientSet;
use crate::error::{Error, Result};
use crate::preview::PREVIEW_HEIGHT;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the terminal frontend writes the most recent preview.
    pub preview_image: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Image to convert. Absent means the frontend prompts for one.
    pub input: Option<PathBuf>,
    pub use_luma: bool,
    pub preview_height: u32,
    pub output: OutputConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            input: None,
            use_luma: false,
            preview_height: PREVIEW_HEIGHT,
            output: OutputConfig::default(),
        }
    }
}

impl RuntimeConfig {
    pub fn method(&self) -> CoefficientSet {
        CoefficientSet::from_luma_toggle(self.use_luma)
    }
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_config(contents: &str) -> std::result::Result<RuntimeConfig, serde_json::Error> {
    serde_json::from_str(contents)
}
