//! Export command: typeset LaTeX and write a PNG without entering the TUI.

use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::snapshot::{self, SnapshotOptions};
use crate::models::RgbColor;
use crate::render::{RenderMode, Renderer};

/// Typeset a LaTeX expression and save it as a PNG image
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// LaTeX source to typeset
    #[arg(value_name = "TEX", required_unless_present = "file", conflicts_with = "file")]
    pub source: Option<String>,

    /// Read the LaTeX source from a file instead
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output path (defaults to the configured export directory and filename)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Text color as a hex string, e.g. "#1E90FF"
    #[arg(long, value_name = "HEX")]
    pub color: Option<String>,

    /// Typeset in inline (text) style instead of display style
    #[arg(long)]
    pub inline: bool,

    /// Background color as a hex string, or "transparent"
    #[arg(long, value_name = "HEX")]
    pub background: Option<String>,

    /// Scale factor applied to the typeset size
    #[arg(long, value_name = "FACTOR")]
    pub zoom: Option<f32>,
}

impl ExportArgs {
    /// Executes the export command, returning the written path.
    pub fn execute(&self) -> CliResult<PathBuf> {
        let (config, _) = Config::load_or_default();

        let source = self.load_source()?;
        let color = match &self.color {
            Some(hex) => RgbColor::from_hex(hex).map_err(|e| CliError::data(format!("{e:#}")))?,
            None => RgbColor::from_hex(&config.editor.default_color)
                .map_err(|e| CliError::data(format!("Bad default_color in config: {e:#}")))?,
        };
        let background = self.parse_background()?;

        let mode = if self.inline {
            RenderMode::Inline
        } else {
            RenderMode::Display
        };

        // Headless export surfaces render failures instead of substituting
        // the error fragment: a script wants a nonzero exit, not a PNG of
        // an error notice.
        let renderer = Renderer::mathjax();
        let fragment = renderer
            .try_fragment(&source, mode, color)
            .map_err(|e| CliError::data(format!("Invalid LaTeX: {e}")))?;

        let options = SnapshotOptions {
            background,
            zoom: self.zoom.unwrap_or(config.export.zoom),
        };
        let snap = snapshot::capture(&fragment, &options)
            .map_err(|e| CliError::io(format!("Capture failed: {e}")))?;
        let png = snap
            .encode_png()
            .map_err(|e| CliError::io(format!("Capture failed: {e}")))?;

        let path = self.output.clone().unwrap_or_else(|| {
            config
                .export
                .resolved_output_dir()
                .join(&config.export.filename)
        });
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    CliError::io(format!("Failed to create {}: {e}", parent.display()))
                })?;
            }
        }
        fs::write(&path, png)
            .map_err(|e| CliError::io(format!("Failed to write {}: {e}", path.display())))?;

        Ok(path)
    }

    fn load_source(&self) -> CliResult<String> {
        if let Some(path) = &self.file {
            let text = fs::read_to_string(path)
                .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))?;
            let text = text.trim_end().to_string();
            if text.is_empty() {
                return Err(CliError::data(format!("{} is empty", path.display())));
            }
            return Ok(text);
        }
        // clap enforces that exactly one of source/file is present
        Ok(self.source.clone().unwrap_or_default())
    }

    fn parse_background(&self) -> CliResult<Option<RgbColor>> {
        match self.background.as_deref() {
            None => Ok(None),
            Some(s) if s.eq_ignore_ascii_case("transparent") => Ok(None),
            Some(hex) => RgbColor::from_hex(hex)
                .map(Some)
                .map_err(|e| CliError::data(format!("{e:#}"))),
        }
    }
}
