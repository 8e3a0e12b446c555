//! Clipboard sink for exported images.
//!
//! The sink is a trait so the failure path is testable without a
//! windowing system; the production implementation goes through the OS
//! clipboard via `arboard`.

use std::borrow::Cow;

use super::ClipboardError;

/// Accepts a raster image for the system clipboard.
pub trait ClipboardSink {
    /// Writes straight-RGBA pixels as an image clipboard entry.
    fn write_image(&mut self, width: u32, height: u32, rgba: &[u8]) -> Result<(), ClipboardError>;
}

/// Clipboard sink backed by the OS clipboard.
///
/// A fresh clipboard handle is opened per write; some platforms
/// invalidate handles when the owning window changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_image(&mut self, width: u32, height: u32, rgba: &[u8]) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        let image = arboard::ImageData {
            width: width as usize,
            height: height as usize,
            bytes: Cow::Borrowed(rgba),
        };
        clipboard
            .set_image(image)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
