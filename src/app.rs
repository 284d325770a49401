//! Presentation driver.
//!
//! `App` owns a [`Session`] plus the "use Luma coefficients" toggle and runs
//! the two user actions (select an image, convert it) against an injected
//! [`Frontend`]. The frontend supplies file selection, shows messages and
//! renders previews; it never touches image data itself.
use crate::convert::CoefficientSet;
use crate::error::{Error, Result, Severity};
use crate::image::io::has_supported_extension;
use crate::image::RasterImage;
use crate::preview::PREVIEW_HEIGHT;
use crate::session::Session;
use log::{debug, warn};
use std::path::PathBuf;

/// A message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Report {
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, message)
    }

    pub fn from_error(err: &Error) -> Self {
        let severity = err.severity();
        let title = match severity {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        };
        Self::new(severity, title, err.to_string())
    }
}

/// Capabilities the driver needs from a user interface.
pub trait Frontend {
    /// Ask the user for an image. `None` means the selection was cancelled.
    fn pick_file(&mut self) -> Option<PathBuf>;
    fn report(&mut self, report: &Report);
    /// Show a preview produced by [`crate::preview::scale_for_preview`].
    fn display(&mut self, preview: &RasterImage);
}

pub struct App<F: Frontend> {
    frontend: F,
    session: Session,
    use_luma: bool,
    preview_height: u32,
}

impl<F: Frontend> App<F> {
    pub fn new(frontend: F) -> Self {
        Self {
            frontend,
            session: Session::new(),
            use_luma: false,
            preview_height: PREVIEW_HEIGHT,
        }
    }

    pub fn with_preview_height(mut self, preview_height: u32) -> Self {
        self.preview_height = preview_height;
        self
    }

    pub fn set_use_luma(&mut self, use_luma: bool) {
        self.use_luma = use_luma;
    }

    pub fn use_luma(&self) -> bool {
        self.use_luma
    }

    pub fn method(&self) -> CoefficientSet {
        CoefficientSet::from_luma_toggle(self.use_luma)
    }

    /// Conversion is only offered once an image has loaded.
    pub fn convert_enabled(&self) -> bool {
        self.session.loaded().is_some()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn into_frontend(self) -> F {
        self.frontend
    }

    /// Pick, load and preview an image. Returns whether a new image is loaded.
    pub fn select_image(&mut self) -> bool {
        let Some(path) = self.frontend.pick_file() else {
            debug!("App::select_image cancelled");
            return false;
        };
        if !has_supported_extension(&path) {
            warn!(
                "{} has an unlisted extension, attempting to decode anyway",
                path.display()
            );
        }
        if let Err(err) = self.session.load(&path) {
            self.fail(&err);
            return false;
        }
        let preview = self.session.preview(self.preview_height);
        self.show(preview);
        true
    }

    /// Convert the loaded image with the current toggle, save it and show it.
    /// Returns the written path on success.
    pub fn convert(&mut self) -> Option<PathBuf> {
        let conversion = match self.session.convert(self.method()) {
            Ok(conversion) => conversion,
            Err(err) => {
                self.fail(&err);
                return None;
            }
        };
        self.frontend.report(&Report::info(
            "Success",
            format!(
                "Image converted with the {} method.\nSaved to: {}",
                conversion.method.label(),
                conversion.output_path.display()
            ),
        ));
        self.show(conversion.preview(self.preview_height));
        Some(conversion.output_path)
    }

    fn show(&mut self, preview: Result<RasterImage>) {
        match preview {
            Ok(preview) => self.frontend.display(&preview),
            Err(err) => self.fail(&err),
        }
    }

    fn fail(&mut self, err: &Error) {
        if err.severity() == Severity::Warning {
            warn!("{err}");
        } else {
            debug!("App error: {err}");
        }
        self.frontend.report(&Report::from_error(err));
    }
}
