use gray_convert::app::{App, Frontend, Report};
use gray_convert::config::load_config;
use gray_convert::image::io::{save_raster, SUPPORTED_EXTENSIONS};
use gray_convert::image::RasterImage;
use gray_convert::Severity;
use log::info;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Terminal stand-in for the file picker, message boxes and preview label.
struct TerminalFrontend {
    input: Option<PathBuf>,
    preview_out: Option<PathBuf>,
}

impl Frontend for TerminalFrontend {
    fn pick_file(&mut self) -> Option<PathBuf> {
        if let Some(path) = self.input.take() {
            return Some(path);
        }
        print!("Image path ({} or any file): ", SUPPORTED_EXTENSIONS.join(", "));
        io::stdout().flush().ok()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok()?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            eprintln!("No image selected");
            return None;
        }
        Some(PathBuf::from(trimmed))
    }

    fn report(&mut self, report: &Report) {
        match report.severity {
            Severity::Info => println!("{}: {}", report.title, report.message),
            Severity::Warning | Severity::Error => {
                eprintln!("{}: {}", report.title, report.message)
            }
        }
    }

    fn display(&mut self, preview: &RasterImage) {
        info!("preview {}x{}", preview.w, preview.h);
        let Some(path) = &self.preview_out else {
            return;
        };
        match save_raster(preview, path) {
            Ok(()) => println!(
                "Saved {}x{} preview to {}",
                preview.w,
                preview.h,
                path.display()
            ),
            Err(err) => eprintln!("Error: {err}"),
        }
    }
}

/// How a run ended when nothing went wrong outside the app itself.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Converted(PathBuf),
    /// The app already told the user why it stopped.
    Reported,
}

fn main() {
    env_logger::init();
    match run() {
        Ok(Outcome::Converted(_)) => {}
        Ok(Outcome::Reported) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<Outcome, String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    run_with_config(Path::new(&config_path))
}

fn run_with_config(config_path: &Path) -> Result<Outcome, String> {
    let config = load_config(config_path).map_err(|e| e.to_string())?;

    let frontend = TerminalFrontend {
        input: config.input.clone(),
        preview_out: config.output.preview_image.clone(),
    };
    let mut app = App::new(frontend).with_preview_height(config.preview_height);
    app.set_use_luma(config.use_luma);

    if !app.select_image() {
        return Ok(Outcome::Reported);
    }
    Ok(app.convert().map_or(Outcome::Reported, Outcome::Converted))
}

fn usage() -> String {
    "Usage: gray_convert <config.json>".to_string()
}
