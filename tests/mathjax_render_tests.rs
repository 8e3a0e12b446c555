//! Tests against the real math-rendering capability.
//!
//! The first render boots the embedded MathJax runtime, so these are
//! slower than the stub-engine tests.

use texpad::models::RgbColor;
use texpad::render::{RenderMode, Renderer};

#[test]
fn test_alpha_renders_inline_to_svg() {
    let renderer = Renderer::mathjax();
    let fragment = renderer.fragment("\\alpha", RenderMode::Inline);
    assert!(!fragment.is_error());
    assert!(fragment.as_svg().contains("<svg"));
}

#[test]
fn test_rendering_is_deterministic() {
    let renderer = Renderer::mathjax();
    let first = renderer.fragment("\\int_a^b f(x)\\, dx", RenderMode::Display);
    let second = renderer.fragment("\\int_a^b f(x)\\, dx", RenderMode::Display);
    assert!(!first.is_error());
    assert_eq!(first, second);
}

#[test]
fn test_display_and_inline_modes_differ() {
    let renderer = Renderer::mathjax();
    let display = renderer.fragment("\\sum_{n=1}^{\\infty} \\frac{1}{n^s}", RenderMode::Display);
    let inline = renderer.fragment("\\sum_{n=1}^{\\infty} \\frac{1}{n^s}", RenderMode::Inline);
    assert!(!display.is_error());
    assert!(!inline.is_error());
    // Display style lays out limits differently; the markup must differ
    assert_ne!(display, inline);
}

#[test]
fn test_palette_snippets_all_render() {
    let renderer = Renderer::mathjax();
    let library = texpad::templates::TemplateLibrary::load().unwrap();
    for category in library.categories() {
        for snippet in &category.snippets {
            let preview = library.preview_of(&renderer, snippet);
            assert!(!preview.is_error(), "snippet failed to render: {snippet}");
        }
    }
}
