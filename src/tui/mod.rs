//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod color_picker;
pub mod component;
pub mod editor_pane;
pub mod handlers;
pub mod palette;
pub mod preview;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::editor::EditorState;
use crate::export::ExportAdapter;
use crate::models::RgbColor;
use crate::render::{Fragment, Renderer};
use crate::templates::TemplateLibrary;

// Re-export TUI components
pub use color_picker::ColorPicker;
pub use component::{Component, ComponentEvent};
pub use editor_pane::EditorPane;
pub use palette::{PaletteEvent, PaletteSidebar};
pub use preview::PreviewPane;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Which pane receives plain keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The source text editing surface
    Editor,
    /// The template palette sidebar
    Palette,
}

/// Popup component currently owning the keyboard.
pub enum ActiveComponent {
    /// The display color picker
    ColorPicker(ColorPicker),
}

/// Application state for a TUI session.
///
/// Constructed once per session and passed by reference everywhere;
/// there are no module-level mutable globals.
pub struct AppState {
    /// Editor state: source text, caret/selection, display color
    pub editor: EditorState,
    /// The embedded template palette
    pub library: TemplateLibrary,
    /// Eagerly rendered inline previews, parallel to the palette categories
    pub snippet_previews: Vec<Vec<Fragment>>,
    /// Palette sidebar selection state
    pub palette: PaletteSidebar,
    /// Preview pane raster cache
    pub preview: PreviewPane,
    /// Image export adapter
    pub export: ExportAdapter,
    /// Active color theme
    pub theme: Theme,
    /// Application configuration
    pub config: Config,
    /// Which pane has focus
    pub focus: Focus,
    /// Popup component, if one is open
    pub active_component: Option<ActiveComponent>,
    /// Status bar message
    pub status_message: String,
    /// Optional status message color (used for warnings)
    pub status_color_override: Option<ratatui::style::Color>,
    /// Error message overlayed in the status bar
    pub error_message: Option<String>,
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState`, writing exports to the OS clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded template palette fails to load.
    pub fn new(config: Config, renderer: Renderer, source: String, color: RgbColor) -> Result<Self> {
        let export = ExportAdapter::new(&config.export);
        Self::with_export(config, renderer, source, color, export)
    }

    /// Creates a new `AppState` with a custom export adapter (used by tests).
    pub fn with_export(
        config: Config,
        renderer: Renderer,
        source: String,
        color: RgbColor,
        export: ExportAdapter,
    ) -> Result<Self> {
        let library = TemplateLibrary::load().context("Failed to load template palette")?;

        // Palette previews are rendered eagerly and independently, so a
        // malformed snippet cannot affect the editor's render cycle
        let snippet_previews: Vec<Vec<Fragment>> = library
            .categories()
            .iter()
            .map(|category| {
                category
                    .snippets
                    .iter()
                    .map(|snippet| library.preview_of(&renderer, snippet))
                    .collect()
            })
            .collect();

        let theme = Theme::from_mode(config.ui.theme_mode);
        let editor = EditorState::new(renderer, source, color);

        Ok(Self {
            editor,
            library,
            snippet_previews,
            palette: PaletteSidebar::new(),
            preview: PreviewPane::new(),
            export,
            theme,
            config,
            focus: Focus::Editor,
            active_component: None,
            status_message: "Type LaTeX; the preview follows. Tab for templates".to_string(),
            status_color_override: None,
            error_message: None,
            should_quit: false,
        })
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
        self.status_color_override = None;
    }

    /// Set status message with custom foreground color (used for warnings)
    pub fn set_status_with_style(
        &mut self,
        message: impl Into<String>,
        color: ratatui::style::Color,
    ) {
        self.status_message = message.into();
        self.error_message = None;
        self.status_color_override = Some(color);
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Toggle focus between the editor and the palette
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Editor => Focus::Palette,
            Focus::Palette => Focus::Editor,
        };
    }

    /// Open the color picker popup seeded with the current color
    pub fn open_color_picker(&mut self) {
        let picker = ColorPicker::new(self.editor.color());
        self.active_component = Some(ActiveComponent::ColorPicker(picker));
    }

    /// Close the currently active popup
    pub fn close_component(&mut self) {
        self.active_component = None;
    }

    /// Captures the current rendering and saves it as a PNG file.
    /// Failures are reported in the status bar.
    pub fn export_file(&mut self) {
        let fragment = self.editor.rendered().clone();
        match self.export.export_to_file(&fragment) {
            Ok(path) => self.set_status(format!("Saved {}", path.display())),
            Err(e) => self.set_error(format!("Export failed: {e}")),
        }
    }

    /// Captures the current rendering and copies it to the system
    /// clipboard. Failures are a recoverable notice, not an error.
    pub fn export_clipboard(&mut self) {
        let warning = self.theme.warning;
        let fragment = self.editor.rendered().clone();
        match self.export.export_to_clipboard(&fragment) {
            Ok(()) => self.set_status("Image copied to clipboard"),
            Err(e) => self.set_status_with_style(
                format!("Clipboard copy failed: {e}. Try a different terminal."),
                warning,
            ),
        }
    }

    /// The fragment the preview pane should show: the selected palette
    /// snippet while the palette has focus, the editor rendering otherwise.
    fn preview_fragment(&mut self) -> Fragment {
        if self.focus == Focus::Palette {
            let preview = self
                .snippet_previews
                .get(self.palette.category)
                .and_then(|previews| previews.get(self.palette.selected));
            if let Some(fragment) = preview {
                return fragment.clone();
            }
        }
        self.editor.rendered().clone()
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto follows the OS setting)
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handlers::handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &mut AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_main_content(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);

    // Render popup if active
    if let Some(ActiveComponent::ColorPicker(picker)) = &state.active_component {
        let area = f.area();
        picker.render(f, area, &state.theme);
    }
}

/// Render title bar
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = Line::from(vec![
        Span::styled(format!(" {APP_NAME} "), Style::default().fg(state.theme.primary)),
        Span::styled(
            "- LaTeX equation editor",
            Style::default().fg(state.theme.text_muted),
        ),
    ]);
    let widget = Paragraph::new(title)
        .style(Style::default().bg(state.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(state.theme.surface))
                .style(Style::default().bg(state.theme.background)),
        );
    f.render_widget(widget, area);
}

/// Render palette sidebar, editor pane and preview pane
fn render_main_content(f: &mut Frame, area: Rect, state: &mut AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(34), Constraint::Min(30)])
        .split(area);

    state.palette.render(
        f,
        columns[0],
        &state.library,
        &state.snippet_previews,
        state.focus == Focus::Palette,
        &state.theme,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Min(6)])
        .split(columns[1]);

    EditorPane::render(
        f,
        rows[0],
        &state.editor,
        state.focus == Focus::Editor,
        &state.theme,
    );

    let fragment = state.preview_fragment();
    state.preview.render(f, rows[1], &fragment, &state.theme);
}

#[cfg(test)]
pub mod test_support {
    //! Shared fixtures for TUI tests: a deterministic engine and a
    //! clipboard sink that always fails.

    use super::*;
    use crate::export::{ClipboardError, ClipboardSink, ExportAdapter};
    use crate::render::{MathEngine, RenderError, RenderMode};

    /// Minimal valid SVG the stub engine returns for any input.
    pub const TEST_SVG: &str = concat!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="20" viewBox="0 0 40 20">"#,
        r#"<rect x="0" y="0" width="40" height="20" fill="currentColor"/></svg>"#
    );

    struct RectEngine;

    impl MathEngine for RectEngine {
        fn typeset(&self, _source: &str, _mode: RenderMode) -> Result<String, RenderError> {
            Ok(TEST_SVG.to_string())
        }
    }

    struct UnavailableClipboard;

    impl ClipboardSink for UnavailableClipboard {
        fn write_image(
            &mut self,
            _width: u32,
            _height: u32,
            _rgba: &[u8],
        ) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("no clipboard in tests".into()))
        }
    }

    /// An `AppState` with deterministic rendering and no OS dependencies.
    pub fn test_app_state(source: &str) -> AppState {
        let config = Config::default();
        let renderer = Renderer::with_engine(Box::new(RectEngine));
        let export =
            ExportAdapter::with_clipboard(&config.export, Box::new(UnavailableClipboard));
        AppState::with_export(
            config,
            renderer,
            source.to_string(),
            RgbColor::default(),
            export,
        )
        .expect("test app state")
    }
}
