//! Typeset preview pane.
//!
//! Rasterizes the current fragment and paints it into the terminal two
//! pixel rows per cell with `▀`, foreground for the top row and
//! background for the bottom. The error fragment is shown as a plain
//! warning label instead of pixels.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use resvg::tiny_skia::Pixmap;

use crate::export::snapshot;
use crate::models::RgbColor;
use crate::render::Fragment;
use crate::tui::Theme;

/// Cached rasterization keyed by fragment content and pane size.
struct RasterCache {
    key: u64,
    pixmap: Pixmap,
}

/// Preview pane with a one-entry raster cache.
pub struct PreviewPane {
    cache: Option<RasterCache>,
}

impl PreviewPane {
    /// Creates an empty preview pane.
    #[must_use]
    pub const fn new() -> Self {
        Self { cache: None }
    }

    /// Renders `fragment` into `area`.
    pub fn render(&mut self, f: &mut Frame, area: Rect, fragment: &Fragment, theme: &Theme) {
        let block = Block::default()
            .title(" Preview ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.surface))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if fragment.is_error() {
            let label = Paragraph::new(Line::from(Span::styled(
                "Invalid LaTeX",
                Style::default().fg(theme.warning).add_modifier(Modifier::BOLD),
            )))
            .centered()
            .style(Style::default().bg(theme.background));
            let row = Rect {
                x: inner.x,
                y: inner.y + inner.height / 2,
                width: inner.width,
                height: 1,
            };
            f.render_widget(label, row);
            return;
        }

        let width = u32::from(inner.width);
        let height = u32::from(inner.height) * 2;
        match self.rasterized(fragment, width, height) {
            Ok(()) => {}
            Err(e) => {
                let label = Paragraph::new(Line::from(Span::styled(
                    format!("Preview unavailable: {e}"),
                    Style::default().fg(theme.text_muted),
                )))
                .centered()
                .style(Style::default().bg(theme.background));
                f.render_widget(label, inner);
                return;
            }
        }
        // Populated just above
        let pixmap = &self.cache.as_ref().unwrap().pixmap;

        let canvas = theme.canvas;
        let mut lines: Vec<Line> = Vec::with_capacity(inner.height as usize);
        for cell_row in 0..inner.height {
            let mut spans: Vec<Span> = Vec::with_capacity(inner.width as usize);
            for cell_col in 0..inner.width {
                let x = u32::from(cell_col);
                let top = blended_pixel(pixmap, x, u32::from(cell_row) * 2, canvas);
                let bottom = blended_pixel(pixmap, x, u32::from(cell_row) * 2 + 1, canvas);
                spans.push(Span::styled(
                    "▀",
                    Style::default()
                        .fg(top.to_ratatui_color())
                        .bg(bottom.to_ratatui_color()),
                ));
            }
            lines.push(Line::from(spans));
        }
        f.render_widget(Paragraph::new(lines), inner);
    }

    /// Ensures the cache holds a raster of `fragment` at the given size.
    fn rasterized(
        &mut self,
        fragment: &Fragment,
        width: u32,
        height: u32,
    ) -> Result<(), crate::export::CaptureError> {
        let key = cache_key(fragment, width, height);
        if self.cache.as_ref().is_some_and(|c| c.key == key) {
            return Ok(());
        }
        let pixmap = snapshot::rasterize_fit(fragment, width, height)?;
        self.cache = Some(RasterCache { key, pixmap });
        Ok(())
    }
}

impl Default for PreviewPane {
    fn default() -> Self {
        Self::new()
    }
}

fn cache_key(fragment: &Fragment, width: u32, height: u32) -> u64 {
    let mut hasher = DefaultHasher::new();
    fragment.as_svg().hash(&mut hasher);
    width.hash(&mut hasher);
    height.hash(&mut hasher);
    hasher.finish()
}

/// Composites one raster pixel over the canvas color.
fn blended_pixel(pixmap: &Pixmap, x: u32, y: u32, canvas: RgbColor) -> RgbColor {
    let Some(pixel) = pixmap.pixel(x, y) else {
        return canvas;
    };
    let c = pixel.demultiply();
    let alpha = u16::from(c.alpha());
    let blend = |src: u8, bg: u8| -> u8 {
        ((u16::from(src) * alpha + u16::from(bg) * (255 - alpha)) / 255) as u8
    };
    RgbColor::new(
        blend(c.red(), canvas.r),
        blend(c.green(), canvas.g),
        blend(c.blue(), canvas.b),
    )
}
