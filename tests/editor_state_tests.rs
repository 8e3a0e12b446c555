//! Integration tests for editor state: text editing, selection, color,
//! and the derived rendering with its error fallback.

use texpad::editor::EditorState;
use texpad::models::RgbColor;
use texpad::render::{MathEngine, RenderError, RenderMode, Renderer};

struct EchoEngine;

impl MathEngine for EchoEngine {
    fn typeset(&self, source: &str, mode: RenderMode) -> Result<String, RenderError> {
        let tag = match mode {
            RenderMode::Display => "display",
            RenderMode::Inline => "inline",
        };
        Ok(format!(r#"<svg fill="currentColor">{tag}:{source}</svg>"#))
    }
}

struct FailingEngine;

impl MathEngine for FailingEngine {
    fn typeset(&self, _source: &str, _mode: RenderMode) -> Result<String, RenderError> {
        Err(RenderError::new("Missing close brace"))
    }
}

fn editor(text: &str) -> EditorState {
    EditorState::new(
        Renderer::with_engine(Box::new(EchoEngine)),
        text,
        RgbColor::new(0, 0, 0),
    )
}

#[test]
fn test_rendered_uses_display_mode() {
    let mut ed = editor("\\alpha");
    assert!(ed.rendered().as_svg().contains("display:\\alpha"));
}

#[test]
fn test_rendered_applies_display_color() {
    let mut ed = editor("x");
    ed.set_color(RgbColor::new(30, 144, 255));
    assert!(ed.rendered().as_svg().contains("#1E90FF"));
    assert!(!ed.rendered().as_svg().contains("currentColor"));
}

#[test]
fn test_color_change_invalidates_cache() {
    let mut ed = editor("x");
    let black = ed.rendered().clone();
    ed.set_color(RgbColor::new(255, 0, 0));
    let red = ed.rendered().clone();
    assert_ne!(black, red);
}

#[test]
fn test_render_failure_yields_error_fragment_and_never_panics() {
    let mut ed = EditorState::new(
        Renderer::with_engine(Box::new(FailingEngine)),
        "\\badcommand{",
        RgbColor::default(),
    );
    let fragment = ed.rendered().clone();
    assert!(fragment.is_error());
    assert!(fragment.as_svg().contains("Invalid LaTeX"));

    // Still recoverable: the next edit re-renders
    ed.set_text("also bad");
    assert!(ed.rendered().is_error());
}

#[test]
fn test_template_activation_semantics() {
    // Activating snippet Q on text T yields T + "\n" + Q and leaves the
    // display color untouched
    let mut ed = editor("T");
    ed.set_color(RgbColor::new(10, 20, 30));
    ed.append_snippet("\\alpha");
    assert_eq!(ed.text(), "T\n\\alpha");
    assert_eq!(ed.color(), RgbColor::new(10, 20, 30));
}

#[test]
fn test_set_text_resets_caret_and_selection() {
    let mut ed = editor("abc");
    ed.select_all();
    ed.set_text("xy");
    assert_eq!(ed.caret(), 2);
    assert_eq!(ed.selection(), None);
}

#[test]
fn test_shift_arrow_selection() {
    let mut ed = editor("hello");
    ed.move_home(false);
    ed.move_right(true);
    ed.move_right(true);
    ed.move_right(true);
    assert_eq!(ed.selection(), Some((0, 3)));
    // Moving without select collapses the selection
    ed.move_left(false);
    assert_eq!(ed.selection(), None);
}

#[test]
fn test_multiline_navigation() {
    let mut ed = editor("ab\ncdef\ng");
    assert_eq!(ed.line_count(), 3);
    assert_eq!(ed.caret_position(), (2, 1));
    ed.move_up(false);
    assert_eq!(ed.caret_position(), (1, 1));
    ed.move_end(false);
    assert_eq!(ed.caret_position(), (1, 4));
    ed.move_up(false);
    // Column clamps to the shorter first line
    assert_eq!(ed.caret_position(), (0, 2));
}

#[test]
fn test_backspace_joins_lines() {
    let mut ed = editor("ab\ncd");
    ed.move_home(false);
    ed.backspace();
    assert_eq!(ed.text(), "abcd");
}
