//! Color picker dialog for selecting the display color.
//!
//! Supports two modes:
//! - Swatch mode: select from a curated set of colors
//! - Custom RGB mode: fine-tune with per-channel sliders

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::models::RgbColor;
use crate::tui::component::{Component, ComponentEvent};
use crate::tui::Theme;

/// RGB channel being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RgbChannel {
    Red,
    Green,
    Blue,
}

/// Mode of the color picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PickerMode {
    /// Selecting from the curated swatches
    #[default]
    Swatches,
    /// Fine-tuning with RGB sliders
    CustomRgb,
}

/// Curated swatches, two rows of eight.
const SWATCHES: [(&str, RgbColor); 16] = [
    ("White", RgbColor::new(255, 255, 255)),
    ("Silver", RgbColor::new(192, 192, 192)),
    ("Gray", RgbColor::new(128, 128, 128)),
    ("Black", RgbColor::new(0, 0, 0)),
    ("Red", RgbColor::new(220, 50, 47)),
    ("Orange", RgbColor::new(255, 140, 0)),
    ("Yellow", RgbColor::new(255, 200, 0)),
    ("Green", RgbColor::new(64, 160, 43)),
    ("Teal", RgbColor::new(42, 161, 152)),
    ("Cyan", RgbColor::new(0, 200, 255)),
    ("Blue", RgbColor::new(38, 139, 210)),
    ("Navy", RgbColor::new(0, 60, 130)),
    ("Purple", RgbColor::new(108, 113, 196)),
    ("Magenta", RgbColor::new(211, 54, 130)),
    ("Pink", RgbColor::new(255, 130, 170)),
    ("Brown", RgbColor::new(150, 100, 50)),
];

const SWATCH_COLS: usize = 8;

/// Color picker popup component.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    mode: PickerMode,
    selected: usize,
    r: u8,
    g: u8,
    b: u8,
    active_channel: RgbChannel,
}

impl ColorPicker {
    /// Creates a picker initialized with the current display color.
    #[must_use]
    pub fn new(color: RgbColor) -> Self {
        let selected = SWATCHES
            .iter()
            .position(|(_, c)| *c == color)
            .unwrap_or(0);
        Self {
            mode: PickerMode::Swatches,
            selected,
            r: color.r,
            g: color.g,
            b: color.b,
            active_channel: RgbChannel::Red,
        }
    }

    /// The color currently being edited.
    #[must_use]
    pub const fn current_color(&self) -> RgbColor {
        RgbColor::new(self.r, self.g, self.b)
    }

    fn sync_from_swatch(&mut self) {
        let (_, color) = SWATCHES[self.selected];
        self.r = color.r;
        self.g = color.g;
        self.b = color.b;
    }

    fn adjust_channel(&mut self, delta: i16) {
        let value = match self.active_channel {
            RgbChannel::Red => &mut self.r,
            RgbChannel::Green => &mut self.g,
            RgbChannel::Blue => &mut self.b,
        };
        *value = (i16::from(*value) + delta).clamp(0, 255) as u8;
    }

    fn handle_swatch_input(&mut self, key: KeyEvent) -> Option<ComponentEvent> {
        match key.code {
            KeyCode::Left => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
                self.sync_from_swatch();
                None
            }
            KeyCode::Right => {
                if self.selected + 1 < SWATCHES.len() {
                    self.selected += 1;
                }
                self.sync_from_swatch();
                None
            }
            KeyCode::Up => {
                if self.selected >= SWATCH_COLS {
                    self.selected -= SWATCH_COLS;
                }
                self.sync_from_swatch();
                None
            }
            KeyCode::Down => {
                if self.selected + SWATCH_COLS < SWATCHES.len() {
                    self.selected += SWATCH_COLS;
                }
                self.sync_from_swatch();
                None
            }
            KeyCode::Enter => Some(ComponentEvent::ColorSelected(self.current_color())),
            _ => None,
        }
    }

    fn handle_custom_input(&mut self, key: KeyEvent) -> Option<ComponentEvent> {
        let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
            16
        } else {
            1
        };
        match key.code {
            KeyCode::Up => {
                self.active_channel = match self.active_channel {
                    RgbChannel::Red => RgbChannel::Blue,
                    RgbChannel::Green => RgbChannel::Red,
                    RgbChannel::Blue => RgbChannel::Green,
                };
                None
            }
            KeyCode::Down => {
                self.active_channel = match self.active_channel {
                    RgbChannel::Red => RgbChannel::Green,
                    RgbChannel::Green => RgbChannel::Blue,
                    RgbChannel::Blue => RgbChannel::Red,
                };
                None
            }
            KeyCode::Left => {
                self.adjust_channel(-step);
                None
            }
            KeyCode::Right => {
                self.adjust_channel(step);
                None
            }
            KeyCode::Enter => Some(ComponentEvent::ColorSelected(self.current_color())),
            _ => None,
        }
    }

    fn render_swatches(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines = Vec::new();
        for (row_index, row) in SWATCHES.chunks(SWATCH_COLS).enumerate() {
            let mut spans = vec![Span::raw(" ")];
            for (col_index, (_, color)) in row.iter().enumerate() {
                let index = row_index * SWATCH_COLS + col_index;
                let block_style = Style::default().fg(color.to_ratatui_color());
                if index == self.selected {
                    spans.push(Span::styled(
                        "▐██▌",
                        block_style.add_modifier(Modifier::BOLD),
                    ));
                } else {
                    spans.push(Span::styled(" ██ ", block_style));
                }
            }
            lines.push(Line::from(spans));
            lines.push(Line::default());
        }

        let (name, _) = SWATCHES[self.selected];
        lines.push(Line::from(vec![
            Span::styled(" Selected: ", Style::default().fg(theme.text_muted)),
            Span::styled(
                format!("{name} {}", self.current_color().to_hex()),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ]));

        let paragraph =
            Paragraph::new(lines).style(Style::default().bg(theme.background).fg(theme.text));
        f.render_widget(paragraph, area);
    }

    fn render_custom(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // R
                Constraint::Length(2), // G
                Constraint::Length(2), // B
                Constraint::Length(1), // preview
            ])
            .split(area);

        let channels = [
            (RgbChannel::Red, "R", self.r),
            (RgbChannel::Green, "G", self.g),
            (RgbChannel::Blue, "B", self.b),
        ];
        for (i, (channel, label, value)) in channels.into_iter().enumerate() {
            let active = channel == self.active_channel;
            let style = if active {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_secondary)
            };
            let gauge = Gauge::default()
                .block(Block::default().title(Span::styled(
                    format!("{label} {value:3}"),
                    style,
                )))
                .gauge_style(style)
                .ratio(f64::from(value) / 255.0)
                .label("");
            f.render_widget(gauge, chunks[i]);
        }

        let preview = Paragraph::new(Line::from(vec![
            Span::styled(" ██████ ", Style::default().fg(self.current_color().to_ratatui_color())),
            Span::styled(
                self.current_color().to_hex(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ]))
        .style(Style::default().bg(theme.background));
        f.render_widget(preview, chunks[3]);
    }
}

impl Component for ColorPicker {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => Some(ComponentEvent::Cancelled),
            KeyCode::Tab => {
                self.mode = match self.mode {
                    PickerMode::Swatches => PickerMode::CustomRgb,
                    PickerMode::CustomRgb => PickerMode::Swatches,
                };
                None
            }
            _ => match self.mode {
                PickerMode::Swatches => self.handle_swatch_input(key),
                PickerMode::CustomRgb => self.handle_custom_input(key),
            },
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(44, 12, area);

        f.render_widget(Clear, popup);
        let background = Block::default().style(Style::default().bg(theme.background));
        f.render_widget(background, popup);

        let title = match self.mode {
            PickerMode::Swatches => " Text Color - Swatches ",
            PickerMode::CustomRgb => " Text Color - Custom RGB ",
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(1)])
            .split(inner);

        match self.mode {
            PickerMode::Swatches => self.render_swatches(f, chunks[0], theme),
            PickerMode::CustomRgb => self.render_custom(f, chunks[0], theme),
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(theme.primary)),
            Span::raw(" Adjust  "),
            Span::styled("Tab", Style::default().fg(theme.primary)),
            Span::raw(" Mode  "),
            Span::styled("Enter", Style::default().fg(theme.success)),
            Span::raw(" Apply  "),
            Span::styled("Esc", Style::default().fg(theme.error)),
            Span::raw(" Cancel"),
        ]))
        .style(Style::default().fg(theme.text_muted).bg(theme.background));
        f.render_widget(help, chunks[1]);
    }
}

/// Fixed-size centered rect (width in cells, height in rows).
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_confirms_swatch() {
        let mut picker = ColorPicker::new(RgbColor::new(255, 255, 255));
        let event = picker.handle_input(key(KeyCode::Enter));
        assert_eq!(
            event,
            Some(ComponentEvent::ColorSelected(RgbColor::new(255, 255, 255)))
        );
    }

    #[test]
    fn test_escape_cancels() {
        let mut picker = ColorPicker::new(RgbColor::default());
        assert_eq!(
            picker.handle_input(key(KeyCode::Esc)),
            Some(ComponentEvent::Cancelled)
        );
    }

    #[test]
    fn test_swatch_navigation_tracks_color() {
        let mut picker = ColorPicker::new(RgbColor::new(255, 255, 255));
        picker.handle_input(key(KeyCode::Right));
        assert_eq!(picker.current_color(), RgbColor::new(192, 192, 192));
        picker.handle_input(key(KeyCode::Down));
        assert_eq!(picker.current_color(), RgbColor::new(0, 200, 255));
    }

    #[test]
    fn test_custom_mode_adjusts_channels() {
        let mut picker = ColorPicker::new(RgbColor::new(0, 0, 0));
        picker.handle_input(key(KeyCode::Tab));
        picker.handle_input(key(KeyCode::Right));
        assert_eq!(picker.current_color(), RgbColor::new(1, 0, 0));
        // Shift steps by 16
        picker.handle_input(KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT));
        assert_eq!(picker.current_color(), RgbColor::new(17, 0, 0));
        // Channel values clamp at the bottom
        picker.handle_input(KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT));
        picker.handle_input(KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT));
        assert_eq!(picker.current_color(), RgbColor::new(0, 0, 0));
    }

    #[test]
    fn test_channel_cycling() {
        let mut picker = ColorPicker::new(RgbColor::new(0, 0, 0));
        picker.handle_input(key(KeyCode::Tab));
        picker.handle_input(key(KeyCode::Down)); // Red -> Green
        picker.handle_input(key(KeyCode::Right));
        assert_eq!(picker.current_color(), RgbColor::new(0, 1, 0));
    }
}
