//! Render capability wrapper.
//!
//! Typesetting is delegated to an external math-rendering library
//! (MathJax via the `mathjax_svg` crate). This module wraps that
//! capability behind [`MathEngine`] and converts failures into the fixed
//! error [`Fragment`], so rendering never fails past this boundary.

pub mod fragment;

pub use fragment::Fragment;

use std::fmt;
use thiserror::Error;

use crate::models::RgbColor;

/// Typesetting style for a piece of markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Block-level, centered typesetting (the main preview).
    Display,
    /// Small-scale inline typesetting (palette previews).
    Inline,
}

/// Failure reported by the external math-rendering library.
#[derive(Debug, Clone, Error)]
#[error("math typesetting failed: {message}")]
pub struct RenderError {
    message: String,
}

impl RenderError {
    /// Creates a render error with the engine's diagnostic message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The external typesetting capability: LaTeX markup in, SVG markup out.
pub trait MathEngine {
    /// Typesets `source` in the given mode, returning raw SVG markup.
    fn typeset(&self, source: &str, mode: RenderMode) -> Result<String, RenderError>;
}

/// MathJax-backed engine, the production implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct MathJax;

impl MathEngine for MathJax {
    fn typeset(&self, source: &str, mode: RenderMode) -> Result<String, RenderError> {
        let result = match mode {
            RenderMode::Display => mathjax_svg::convert_to_svg(source),
            RenderMode::Inline => mathjax_svg::convert_to_svg_inline(source),
        };
        result.map_err(|e| RenderError::new(e.to_string()))
    }
}

/// Render capability wrapper producing trusted [`Fragment`]s.
///
/// The fallible engine sits behind this wrapper; callers that display
/// fragments use [`Renderer::fragment`]/[`Renderer::fragment_colored`],
/// which never fail. The headless CLI uses [`Renderer::try_fragment`] to
/// surface the underlying error instead.
pub struct Renderer {
    engine: Box<dyn MathEngine>,
}

impl Renderer {
    /// Creates a renderer backed by MathJax.
    #[must_use]
    pub fn mathjax() -> Self {
        Self::with_engine(Box::new(MathJax))
    }

    /// Creates a renderer with a custom engine (used by tests).
    #[must_use]
    pub fn with_engine(engine: Box<dyn MathEngine>) -> Self {
        Self { engine }
    }

    /// Renders `source` to a fragment; failures yield the fixed error fragment.
    #[must_use]
    pub fn fragment(&self, source: &str, mode: RenderMode) -> Fragment {
        match self.engine.typeset(source, mode) {
            Ok(svg) => Fragment::typeset(svg),
            Err(_) => Fragment::invalid(),
        }
    }

    /// Renders `source` with the display color applied; failures yield the
    /// fixed error fragment (which keeps its own warning color).
    #[must_use]
    pub fn fragment_colored(&self, source: &str, mode: RenderMode, color: RgbColor) -> Fragment {
        match self.engine.typeset(source, mode) {
            Ok(svg) => Fragment::typeset(apply_color(&svg, color)),
            Err(_) => Fragment::invalid(),
        }
    }

    /// Renders `source` with the display color applied, surfacing the
    /// engine error instead of substituting the error fragment.
    pub fn try_fragment(
        &self,
        source: &str,
        mode: RenderMode,
        color: RgbColor,
    ) -> Result<Fragment, RenderError> {
        let svg = self.engine.typeset(source, mode)?;
        Ok(Fragment::typeset(apply_color(&svg, color)))
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer").finish_non_exhaustive()
    }
}

/// Resolves MathJax's `currentColor` references to a concrete color.
fn apply_color(svg: &str, color: RgbColor) -> String {
    svg.replace("currentColor", &color.to_hex())
}
