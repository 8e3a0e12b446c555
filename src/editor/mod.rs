//! Editor state: source text, caret/selection, display color, and the
//! derived rendered fragment.
//!
//! [`EditorState`] is the single owner of everything the editing surface
//! mutates. It is constructed once per session and passed by reference;
//! there is no module-level mutable state.

pub mod autoclose;

use crate::models::RgbColor;
use crate::render::{Fragment, RenderMode, Renderer};

/// Last computed render, kept so a redraw without changes is free.
struct CachedRender {
    text: String,
    color: RgbColor,
    fragment: Fragment,
}

/// Owns the current source text, caret/selection and display color, and
/// derives the rendered fragment on demand.
pub struct EditorState {
    text: String,
    /// Caret position as a char index into `text`.
    caret: usize,
    /// Selection anchor (char index); `None` when nothing is selected.
    anchor: Option<usize>,
    color: RgbColor,
    renderer: Renderer,
    cached: Option<CachedRender>,
}

impl EditorState {
    /// Creates editor state seeded with `text`, caret at the end.
    #[must_use]
    pub fn new(renderer: Renderer, text: impl Into<String>, color: RgbColor) -> Self {
        let text = text.into();
        let caret = text.chars().count();
        Self {
            text,
            caret,
            anchor: None,
            color,
            renderer,
            cached: None,
        }
    }

    /// Current source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret position (char index).
    #[must_use]
    pub const fn caret(&self) -> usize {
        self.caret
    }

    /// Current display color.
    #[must_use]
    pub const fn color(&self) -> RgbColor {
        self.color
    }

    /// The render capability wrapper this editor uses.
    #[must_use]
    pub const fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Length of the text in chars.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Normalized selection range `(start, end)`; `None` when empty.
    #[must_use]
    pub fn selection(&self) -> Option<(usize, usize)> {
        let anchor = self.anchor?;
        if anchor == self.caret {
            return None;
        }
        Some((anchor.min(self.caret), anchor.max(self.caret)))
    }

    /// Replaces the whole source text; caret moves to the end and the
    /// selection is cleared.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.caret = self.char_len();
        self.anchor = None;
    }

    /// Sets the display color.
    pub fn set_color(&mut self, color: RgbColor) {
        self.color = color;
    }

    /// The rendered fragment for the current text and color, in display
    /// (block) mode. Render failures yield the fixed error fragment;
    /// this never fails. Recomputed only when text or color changed.
    pub fn rendered(&mut self) -> &Fragment {
        let stale = match &self.cached {
            Some(c) => c.text != self.text || c.color != self.color,
            None => true,
        };
        if stale {
            let fragment =
                self.renderer
                    .fragment_colored(&self.text, RenderMode::Display, self.color);
            self.cached = Some(CachedRender {
                text: self.text.clone(),
                color: self.color,
                fragment,
            });
        }
        // Populated just above when stale
        &self.cached.as_ref().unwrap().fragment
    }

    /// Appends a palette snippet: the text becomes `text + "\n" + snippet`.
    /// The display color is untouched.
    pub fn append_snippet(&mut self, snippet: &str) {
        self.text.push('\n');
        self.text.push_str(snippet);
        self.caret = self.char_len();
        self.anchor = None;
    }

    /// Applies the bracket auto-close rule for `key`. Returns `true` when
    /// the keystroke was intercepted (and the text mutated), `false` when
    /// it should fall through to plain insertion.
    pub fn auto_close(&mut self, key: char) -> bool {
        let (start, end) = self.selection().unwrap_or((self.caret, self.caret));
        match autoclose::apply(&self.text, start, end, key) {
            Some(closed) => {
                self.text = closed.text;
                self.caret = closed.caret;
                self.anchor = None;
                true
            }
            None => false,
        }
    }

    /// Inserts a character at the caret, replacing any selection.
    pub fn insert_char(&mut self, c: char) {
        let (start, end) = self.selection().unwrap_or((self.caret, self.caret));
        self.replace_range(start, end, &c.to_string());
        self.caret = start + 1;
        self.anchor = None;
    }

    /// Inserts a line break at the caret, replacing any selection.
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Deletes the selection, or the char before the caret.
    pub fn backspace(&mut self) {
        if let Some((start, end)) = self.selection() {
            self.replace_range(start, end, "");
            self.caret = start;
        } else if self.caret > 0 {
            self.replace_range(self.caret - 1, self.caret, "");
            self.caret -= 1;
        }
        self.anchor = None;
    }

    /// Deletes the selection, or the char after the caret.
    pub fn delete(&mut self) {
        if let Some((start, end)) = self.selection() {
            self.replace_range(start, end, "");
            self.caret = start;
        } else if self.caret < self.char_len() {
            self.replace_range(self.caret, self.caret + 1, "");
        }
        self.anchor = None;
    }

    /// Moves the caret one char left; extends the selection when `select`.
    pub fn move_left(&mut self, select: bool) {
        self.update_anchor(select);
        self.caret = self.caret.saturating_sub(1);
        self.collapse_if_unselected(select);
    }

    /// Moves the caret one char right; extends the selection when `select`.
    pub fn move_right(&mut self, select: bool) {
        self.update_anchor(select);
        self.caret = (self.caret + 1).min(self.char_len());
        self.collapse_if_unselected(select);
    }

    /// Moves the caret one display line up.
    pub fn move_up(&mut self, select: bool) {
        self.update_anchor(select);
        let (row, col) = self.caret_position();
        if row > 0 {
            self.caret = self.position_to_caret(row - 1, col);
        } else {
            self.caret = 0;
        }
        self.collapse_if_unselected(select);
    }

    /// Moves the caret one display line down.
    pub fn move_down(&mut self, select: bool) {
        self.update_anchor(select);
        let (row, col) = self.caret_position();
        if row + 1 < self.line_count() {
            self.caret = self.position_to_caret(row + 1, col);
        } else {
            self.caret = self.char_len();
        }
        self.collapse_if_unselected(select);
    }

    /// Moves the caret to the start of the current line.
    pub fn move_home(&mut self, select: bool) {
        self.update_anchor(select);
        let (row, _) = self.caret_position();
        self.caret = self.position_to_caret(row, 0);
        self.collapse_if_unselected(select);
    }

    /// Moves the caret to the end of the current line.
    pub fn move_end(&mut self, select: bool) {
        self.update_anchor(select);
        let (row, _) = self.caret_position();
        self.caret = self.position_to_caret(row, usize::MAX);
        self.collapse_if_unselected(select);
    }

    /// Selects the entire text.
    pub fn select_all(&mut self) {
        self.anchor = Some(0);
        self.caret = self.char_len();
    }

    /// Clears the selection without moving the caret.
    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// Caret position as `(row, col)` in display lines.
    #[must_use]
    pub fn caret_position(&self) -> (usize, usize) {
        let mut row = 0;
        let mut col = 0;
        for (i, c) in self.text.chars().enumerate() {
            if i == self.caret {
                break;
            }
            if c == '\n' {
                row += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (row, col)
    }

    /// Number of display lines (at least 1).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.text.chars().filter(|&c| c == '\n').count() + 1
    }

    fn update_anchor(&mut self, select: bool) {
        if select {
            if self.anchor.is_none() {
                self.anchor = Some(self.caret);
            }
        } else {
            self.anchor = None;
        }
    }

    fn collapse_if_unselected(&mut self, select: bool) {
        if !select {
            self.anchor = None;
        }
    }

    /// Caret char index for a `(row, col)` position, clamping `col` to
    /// the line length.
    fn position_to_caret(&self, row: usize, col: usize) -> usize {
        let mut index = 0;
        for (current_row, line) in self.text.split('\n').enumerate() {
            let line_len = line.chars().count();
            if current_row == row {
                return index + col.min(line_len);
            }
            index += line_len + 1;
        }
        self.char_len()
    }

    /// Replaces the char range `[start, end)` with `replacement`.
    fn replace_range(&mut self, start: usize, end: usize, replacement: &str) {
        let byte_start = self.byte_index(start);
        let byte_end = self.byte_index(end);
        self.text.replace_range(byte_start..byte_end, replacement);
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }
}
