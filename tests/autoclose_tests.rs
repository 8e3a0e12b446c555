//! Integration tests for the bracket auto-closing rule.
//!
//! Covers the two normative forms:
//! - empty selection at caret `p`: `text[..p] + pair + text[p..]`, caret `p + 1`
//! - selection `[s, e)`: the pair wraps exactly that range, caret `s + 1`

use texpad::editor::autoclose;
use texpad::editor::EditorState;
use texpad::models::RgbColor;
use texpad::render::{MathEngine, RenderError, RenderMode, Renderer};

struct EchoEngine;

impl MathEngine for EchoEngine {
    fn typeset(&self, source: &str, _mode: RenderMode) -> Result<String, RenderError> {
        Ok(format!("<svg>{source}</svg>"))
    }
}

fn editor(text: &str) -> EditorState {
    EditorState::new(
        Renderer::with_engine(Box::new(EchoEngine)),
        text,
        RgbColor::default(),
    )
}

#[test]
fn test_empty_selection_insertion_property() {
    // Property: caret at p, key '{' -> text[..p] + "{}" + text[p..], caret p + 1
    let text = "abcdef";
    for p in 0..=text.len() {
        let result = autoclose::apply(text, p, p, '{').unwrap();
        let expected = format!("{}{{}}{}", &text[..p], &text[p..]);
        assert_eq!(result.text, expected, "caret at {p}");
        assert_eq!(result.caret, p + 1, "caret at {p}");
    }
}

#[test]
fn test_selection_wrap_property() {
    // Property: selection [s, e), key '(' -> text[..s] + "(" + text[s..e] + ")" + text[e..],
    // caret s + 1
    let text = "x+y=z";
    for s in 0..text.len() {
        for e in s + 1..=text.len() {
            let result = autoclose::apply(text, s, e, '(').unwrap();
            let expected = format!("{}({}){}", &text[..s], &text[s..e], &text[e..]);
            assert_eq!(result.text, expected, "selection [{s},{e})");
            assert_eq!(result.caret, s + 1, "selection [{s},{e})");
        }
    }
}

#[test]
fn test_all_three_pairs() {
    for (open, expected) in [('(', "()"), ('{', "{}"), ('[', "[]")] {
        let result = autoclose::apply("", 0, 0, open).unwrap();
        assert_eq!(result.text, expected);
        assert_eq!(result.caret, 1);
    }
}

#[test]
fn test_closing_brackets_are_not_intercepted() {
    for key in [')', '}', ']', 'a', '\\', '$', ' '] {
        assert!(autoclose::apply("abc", 1, 1, key).is_none(), "key {key:?}");
    }
}

#[test]
fn test_editor_autoclose_typing_sequence() {
    // Typing "\frac{" then content exercises the common LaTeX flow
    let mut ed = editor("\\frac");
    assert!(ed.auto_close('{'));
    assert_eq!(ed.text(), "\\frac{}");
    assert_eq!(ed.caret(), 6);
    ed.insert_char('a');
    assert_eq!(ed.text(), "\\frac{a}");
    assert_eq!(ed.caret(), 7);
}

#[test]
fn test_editor_wraps_selection_and_collapses_it() {
    let mut ed = editor("a+b");
    ed.select_all();
    assert!(ed.auto_close('['));
    assert_eq!(ed.text(), "[a+b]");
    assert_eq!(ed.caret(), 1);
    assert_eq!(ed.selection(), None);
}

#[test]
fn test_editor_autoclose_with_greek_source() {
    // Char-index arithmetic must hold for multi-byte text
    let mut ed = editor("\\alpha α");
    assert!(ed.auto_close('('));
    assert_eq!(ed.text(), "\\alpha α()");
    assert_eq!(ed.caret(), 9);
}
