//! Template palette sidebar.
//!
//! Shows the snippet categories as tabs and the current category's
//! snippets as a list. Activating a snippet appends it to the editor's
//! source text (handled by the parent via [`PaletteEvent`]).

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::render::Fragment;
use crate::templates::TemplateLibrary;
use crate::tui::Theme;

/// Event emitted by the palette sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEvent {
    /// User activated a snippet; the payload is the snippet source.
    SnippetActivated(String),
}

/// Palette sidebar state: current category tab and snippet selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteSidebar {
    /// Selected category index
    pub category: usize,
    /// Selected snippet index within the category
    pub selected: usize,
}

impl PaletteSidebar {
    /// Creates a sidebar with the first category and snippet selected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            category: 0,
            selected: 0,
        }
    }

    /// The currently selected snippet, if the selection is valid.
    #[must_use]
    pub fn selected_snippet<'a>(&self, library: &'a TemplateLibrary) -> Option<&'a str> {
        library
            .categories()
            .get(self.category)?
            .snippets
            .get(self.selected)
            .map(String::as_str)
    }

    /// Handles a key event while the palette has focus.
    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        library: &TemplateLibrary,
    ) -> Option<PaletteEvent> {
        let category_count = library.categories().len();
        if category_count == 0 {
            return None;
        }
        let snippet_count = library.categories()[self.category].snippets.len();

        match key.code {
            KeyCode::Left => {
                self.category = if self.category == 0 {
                    category_count - 1
                } else {
                    self.category - 1
                };
                self.selected = 0;
                None
            }
            KeyCode::Right => {
                self.category = (self.category + 1) % category_count;
                self.selected = 0;
                None
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                if self.selected + 1 < snippet_count {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Enter => self
                .selected_snippet(library)
                .map(|snippet| PaletteEvent::SnippetActivated(snippet.to_string())),
            _ => None,
        }
    }

    /// Renders the sidebar. `previews` is the eagerly rendered inline
    /// preview per snippet, parallel to the library's categories; a
    /// snippet whose preview is the error fragment is flagged.
    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        library: &TemplateLibrary,
        previews: &[Vec<Fragment>],
        focused: bool,
        theme: &Theme,
    ) {
        let border_style = if focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.surface)
        };
        let block = Block::default()
            .title(" Templates ")
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);
        if inner.height < 3 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Category tabs
                Constraint::Min(1),    // Snippet list
                Constraint::Length(1), // Help text
            ])
            .split(inner);

        // Category tabs
        let mut tab_spans: Vec<Span> = Vec::new();
        for (i, category) in library.categories().iter().enumerate() {
            let style = if i == self.category {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_muted)
            };
            tab_spans.push(Span::styled(format!(" {} ", category.name), style));
        }
        f.render_widget(
            Paragraph::new(Line::from(tab_spans)).style(Style::default().bg(theme.background)),
            chunks[0],
        );

        // Snippet list for the current category
        let category = &library.categories()[self.category];
        let category_previews = previews.get(self.category);
        let items: Vec<ListItem> = category
            .snippets
            .iter()
            .enumerate()
            .map(|(i, snippet)| {
                let broken = category_previews
                    .and_then(|p| p.get(i))
                    .is_some_and(Fragment::is_error);
                let style = if broken {
                    Style::default().fg(theme.error)
                } else {
                    Style::default().fg(theme.text)
                };
                ListItem::new(Line::from(Span::styled(snippet.clone(), style)))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("► ");
        let mut list_state = ListState::default();
        list_state.select(Some(
            self.selected.min(category.snippets.len().saturating_sub(1)),
        ));
        f.render_stateful_widget(list, chunks[1], &mut list_state);

        // Help text
        let help = Paragraph::new(Line::from(vec![
            Span::styled("◄►", Style::default().fg(theme.primary)),
            Span::raw(" Category  "),
            Span::styled("↑↓", Style::default().fg(theme.primary)),
            Span::raw(" Select  "),
            Span::styled("Enter", Style::default().fg(theme.success)),
            Span::raw(" Insert"),
        ]))
        .style(Style::default().fg(theme.text_muted).bg(theme.background));
        f.render_widget(help, chunks[2]);
    }
}
