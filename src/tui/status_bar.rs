//! Status bar widget: status/notice line, color indicator, and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Renders the status message (or error), the current display color,
    /// and the global key hints.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let color = state.editor.color();

        let status_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled(
                    " ✗ ",
                    Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
                ),
                Span::styled(error.clone(), Style::default().fg(theme.error)),
            ])
        } else {
            let fg = state.status_color_override.unwrap_or(theme.text_secondary);
            Line::from(vec![
                Span::styled(format!(" {}", state.status_message), Style::default().fg(fg)),
                Span::raw("   "),
                Span::styled("██", Style::default().fg(color.to_ratatui_color())),
                Span::styled(
                    format!(" {}", color.to_hex()),
                    Style::default().fg(theme.text_muted),
                ),
            ])
        };

        let hint_line = Line::from(vec![
            Span::styled("Tab", Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)),
            Span::raw(" Focus  "),
            Span::styled("^K", Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)),
            Span::raw(" Color  "),
            Span::styled("^E", Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)),
            Span::raw(" Save PNG  "),
            Span::styled("^Y", Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)),
            Span::raw(" Copy Image  "),
            Span::styled("^Q", Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)),
            Span::raw(" Quit"),
        ]);

        let paragraph = Paragraph::new(vec![status_line, hint_line])
            .style(Style::default().fg(theme.text_muted).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.surface))
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(paragraph, area);
    }
}
