//! Snapshot capability: rendered fragment -> raster -> encoded PNG.
//!
//! Rasterization is delegated to the external SVG stack (`usvg` parse,
//! `resvg` render, `tiny-skia` pixel surface).

use resvg::tiny_skia::{Color, Pixmap, Transform};
use usvg::TreeParsing;

use super::CaptureError;
use crate::models::RgbColor;
use crate::render::Fragment;

/// Options for capturing a fragment as an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotOptions {
    /// Solid background, or `None` for transparent.
    pub background: Option<RgbColor>,
    /// Scale factor applied to the fragment's natural size.
    pub zoom: f32,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            background: None,
            zoom: crate::constants::DEFAULT_EXPORT_ZOOM,
        }
    }
}

/// A captured raster of a rendered fragment.
pub struct Snapshot {
    pixmap: Pixmap,
}

impl Snapshot {
    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Encodes the raster as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, CaptureError> {
        self.pixmap
            .encode_png()
            .map_err(|e| CaptureError::Encode(e.to_string()))
    }

    /// The raster as straight (non-premultiplied) RGBA bytes, the layout
    /// clipboard consumers expect.
    #[must_use]
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixmap.pixels().len() * 4);
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            bytes.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        bytes
    }
}

/// Captures `fragment` at its natural size scaled by `options.zoom`.
pub fn capture(fragment: &Fragment, options: &SnapshotOptions) -> Result<Snapshot, CaptureError> {
    let tree = parse_fragment(fragment)?;
    let rtree = resvg::Tree::from_usvg(&tree);

    // rtree.size is the resolved display size; the viewBox may use much
    // larger internal units (MathJax does)
    let size = rtree.size;
    let zoom = if options.zoom > 0.0 { options.zoom } else { 1.0 };
    let width = (size.width() * zoom).ceil() as u32;
    let height = (size.height() * zoom).ceil() as u32;
    if width == 0 || height == 0 {
        return Err(CaptureError::EmptySurface);
    }

    let mut pixmap = Pixmap::new(width, height).ok_or(CaptureError::Allocation { width, height })?;
    if let Some(bg) = options.background {
        pixmap.fill(Color::from_rgba8(bg.r, bg.g, bg.b, 255));
    }

    rtree.render(Transform::from_scale(zoom, zoom), &mut pixmap.as_mut());
    Ok(Snapshot { pixmap })
}

/// Rasterizes `fragment` scaled to fit inside `max_width` x `max_height`,
/// centered. Used by the terminal preview pane.
pub fn rasterize_fit(
    fragment: &Fragment,
    max_width: u32,
    max_height: u32,
) -> Result<Pixmap, CaptureError> {
    if max_width == 0 || max_height == 0 {
        return Err(CaptureError::EmptySurface);
    }

    let tree = parse_fragment(fragment)?;
    let rtree = resvg::Tree::from_usvg(&tree);

    let size = rtree.size;
    if size.width() <= 0.0 || size.height() <= 0.0 {
        return Err(CaptureError::EmptySurface);
    }

    let mut pixmap = Pixmap::new(max_width, max_height).ok_or(CaptureError::Allocation {
        width: max_width,
        height: max_height,
    })?;

    let scale_x = max_width as f32 / size.width();
    let scale_y = max_height as f32 / size.height();
    let scale = scale_x.min(scale_y);

    let offset_x = (max_width as f32 - size.width() * scale) / 2.0;
    let offset_y = (max_height as f32 - size.height() * scale) / 2.0;
    let transform = Transform::from_scale(scale, scale).post_translate(offset_x, offset_y);

    rtree.render(transform, &mut pixmap.as_mut());
    Ok(pixmap)
}

fn parse_fragment(fragment: &Fragment) -> Result<usvg::Tree, CaptureError> {
    let options = usvg::Options::default();
    usvg::Tree::from_data(fragment.as_svg().as_bytes(), &options)
        .map_err(|e| CaptureError::InvalidFragment(e.to_string()))
}
