//! Trusted, already-typeset markup fragments.
//!
//! A [`Fragment`] can only be constructed inside the render module, so
//! arbitrary strings can never be smuggled into the display or export
//! paths as markup.

/// Fixed fragment shown when the render capability reports a failure.
///
/// Kept deliberately plain: a small standalone SVG with a warning-red
/// "Invalid LaTeX" label, matching what the preview and export surfaces
/// can both consume.
const INVALID_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="160" height="24" viewBox="0 0 160 24">"#,
    r##"<text x="4" y="17" font-family="monospace" font-size="14" fill="#CC3333">"##,
    "Invalid LaTeX",
    "</text></svg>"
);

/// A unit of trusted, displayable typeset markup (SVG).
///
/// Produced only by [`Renderer`](super::Renderer); the constructors are
/// private to the render module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    svg: String,
    error: bool,
}

impl Fragment {
    /// Wraps markup produced by the render capability.
    pub(super) fn typeset(svg: String) -> Self {
        Self { svg, error: false }
    }

    /// The fixed error fragment substituted when rendering fails.
    pub(super) fn invalid() -> Self {
        Self {
            svg: INVALID_SVG.to_string(),
            error: true,
        }
    }

    /// The SVG markup of this fragment.
    #[must_use]
    pub fn as_svg(&self) -> &str {
        &self.svg
    }

    /// Whether this is the fixed error fragment.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_fragment_is_fixed() {
        let a = Fragment::invalid();
        let b = Fragment::invalid();
        assert!(a.is_error());
        assert_eq!(a, b);
        assert!(a.as_svg().contains("Invalid LaTeX"));
    }

    #[test]
    fn test_typeset_fragment_is_not_error() {
        let fragment = Fragment::typeset("<svg/>".to_string());
        assert!(!fragment.is_error());
        assert_eq!(fragment.as_svg(), "<svg/>");
    }
}
