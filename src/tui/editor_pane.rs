//! Editing surface widget: source text with caret and selection.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::editor::EditorState;
use crate::tui::Theme;

/// Renders the source text pane.
pub struct EditorPane;

impl EditorPane {
    /// Renders `editor`'s text with selection highlight and a visible
    /// caret cell. Scrolls vertically to keep the caret row on screen.
    pub fn render(f: &mut Frame, area: Rect, editor: &EditorState, focused: bool, theme: &Theme) {
        let border_style = if focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.surface)
        };
        let block = Block::default()
            .title(" LaTeX Source ")
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let selection = editor.selection();
        let (caret_row, _) = editor.caret_position();
        let visible = inner.height as usize;
        let scroll = caret_row.saturating_sub(visible.saturating_sub(1));

        let text_style = Style::default().fg(theme.text).bg(theme.background);
        let selected_style = Style::default().fg(theme.text).bg(theme.highlight_bg);
        let caret_style = Style::default()
            .fg(theme.background)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD);

        let mut lines: Vec<Line> = Vec::new();
        let mut char_index = 0;
        for (row, raw_line) in editor.text().split('\n').enumerate() {
            if row < scroll || row >= scroll + visible {
                // Row is scrolled out; still advance the char index
                char_index += raw_line.chars().count() + 1;
                continue;
            }

            let mut spans: Vec<Span> = Vec::new();
            // Trailing space gives the caret a cell at end of line
            for c in raw_line.chars().chain(std::iter::once(' ')) {
                let in_selection =
                    selection.is_some_and(|(start, end)| char_index >= start && char_index < end);
                let style = if focused && char_index == editor.caret() {
                    caret_style
                } else if in_selection {
                    selected_style
                } else {
                    text_style
                };
                spans.push(Span::styled(c.to_string(), style));
                char_index += 1;
            }
            lines.push(Line::from(spans));
        }

        let paragraph = Paragraph::new(lines).style(Style::default().bg(theme.background));
        f.render_widget(paragraph, inner);
    }
}
