//! Image export: PNG file save and clipboard copy.
//!
//! The [`ExportAdapter`] captures the current rendered fragment through
//! the snapshot capability and delivers the result to one of two sinks:
//! a PNG file under a fixed filename, or the system clipboard as an
//! image. Both paths report failures to the caller; neither can crash
//! the application.

pub mod clipboard;
pub mod snapshot;

pub use clipboard::{ClipboardSink, SystemClipboard};
pub use snapshot::{Snapshot, SnapshotOptions};

use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::ExportConfig;
use crate::render::Fragment;

/// Snapshot or file-delivery failure during image export.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The fragment could not be parsed by the rasterizer.
    #[error("rendered fragment is not valid SVG: {0}")]
    InvalidFragment(String),
    /// The fragment has no drawable area.
    #[error("rendered fragment has an empty bounding box")]
    EmptySurface,
    /// The pixel surface could not be allocated.
    #[error("could not allocate a {width}x{height} capture surface")]
    Allocation {
        /// Requested surface width in pixels.
        width: u32,
        /// Requested surface height in pixels.
        height: u32,
    },
    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    Encode(String),
    /// Writing the image file failed.
    #[error("failed to write image file: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure during clipboard export: either the capture itself or the
/// clipboard write.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The snapshot failed before reaching the clipboard.
    #[error(transparent)]
    Capture(#[from] CaptureError),
    /// No clipboard is available in this terminal/runtime.
    #[error("clipboard is unavailable: {0}")]
    Unavailable(String),
    /// The clipboard rejected the image.
    #[error("clipboard rejected the image: {0}")]
    Write(String),
}

/// Captures rendered fragments and delivers them to the file or
/// clipboard sink.
pub struct ExportAdapter {
    output_dir: PathBuf,
    filename: String,
    options: SnapshotOptions,
    clipboard: Box<dyn ClipboardSink>,
}

impl ExportAdapter {
    /// Creates an adapter from the export configuration, writing to the
    /// OS clipboard.
    #[must_use]
    pub fn new(config: &ExportConfig) -> Self {
        Self::with_clipboard(config, Box::new(SystemClipboard))
    }

    /// Creates an adapter with a custom clipboard sink (used by tests).
    #[must_use]
    pub fn with_clipboard(config: &ExportConfig, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            output_dir: config.resolved_output_dir(),
            filename: config.filename.clone(),
            options: SnapshotOptions {
                background: None,
                zoom: config.zoom,
            },
            clipboard,
        }
    }

    /// The path file exports are written to.
    #[must_use]
    pub fn target_path(&self) -> PathBuf {
        self.output_dir.join(&self.filename)
    }

    /// Captures `fragment` and writes it as a PNG under the fixed
    /// filename. Returns the written path.
    pub fn export_to_file(&self, fragment: &Fragment) -> Result<PathBuf, CaptureError> {
        let snap = snapshot::capture(fragment, &self.options)?;
        let png = snap.encode_png()?;
        fs::create_dir_all(&self.output_dir)?;
        let path = self.target_path();
        fs::write(&path, png)?;
        Ok(path)
    }

    /// Captures `fragment` and writes it to the system clipboard as an
    /// image.
    pub fn export_to_clipboard(&mut self, fragment: &Fragment) -> Result<(), ClipboardError> {
        let snap = snapshot::capture(fragment, &self.options)?;
        let rgba = snap.to_rgba();
        self.clipboard.write_image(snap.width(), snap.height(), &rgba)
    }
}
