//! Component trait pattern for TUI components.
//!
//! Popup components are self-contained: they manage their own state,
//! handle keyboard input, and emit events the parent consumes.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::models::RgbColor;
use crate::tui::Theme;

/// A component that can be rendered and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something
    /// to the parent, `None` if input was handled internally.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Events emitted by popup components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentEvent {
    /// User selected a display color
    ColorSelected(RgbColor),
    /// User cancelled without making changes
    Cancelled,
}
