//! Keyboard input dispatch for the main screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::component::{Component, ComponentEvent};
use super::palette::PaletteEvent;
use super::{ActiveComponent, AppState, Focus};

/// Handles a key event. Returns `true` when the application should quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // A popup owns the keyboard while open
    if state.active_component.is_some() {
        handle_component_input(state, key);
        return Ok(false);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => return Ok(true),
            KeyCode::Char('k') => {
                state.open_color_picker();
                return Ok(false);
            }
            KeyCode::Char('e') => {
                state.export_file();
                return Ok(false);
            }
            KeyCode::Char('y') => {
                state.export_clipboard();
                return Ok(false);
            }
            KeyCode::Char('a') if state.focus == Focus::Editor => {
                state.editor.select_all();
                return Ok(false);
            }
            _ => return Ok(false),
        }
    }

    if key.code == KeyCode::Tab {
        state.toggle_focus();
        return Ok(false);
    }

    match state.focus {
        Focus::Editor => handle_editor_input(state, key),
        Focus::Palette => handle_palette_input(state, key),
    }
    Ok(false)
}

fn handle_component_input(state: &mut AppState, key: KeyEvent) {
    let Some(ActiveComponent::ColorPicker(picker)) = state.active_component.as_mut() else {
        return;
    };
    match picker.handle_input(key) {
        Some(ComponentEvent::ColorSelected(color)) => {
            state.editor.set_color(color);
            state.close_component();
            state.set_status(format!("Text color set to {}", color.to_hex()));
        }
        Some(ComponentEvent::Cancelled) => {
            state.close_component();
            state.set_status("Color unchanged");
        }
        None => {}
    }
}

fn handle_editor_input(state: &mut AppState, key: KeyEvent) {
    let select = key.modifiers.contains(KeyModifiers::SHIFT);
    let editor = &mut state.editor;
    match key.code {
        KeyCode::Char(c) => {
            // Bracket keys are intercepted and inserted as a pair with
            // the caret landing between them
            if !editor.auto_close(c) {
                editor.insert_char(c);
            }
            state.clear_error();
        }
        KeyCode::Enter => {
            editor.insert_newline();
            state.clear_error();
        }
        KeyCode::Backspace => {
            editor.backspace();
            state.clear_error();
        }
        KeyCode::Delete => {
            editor.delete();
            state.clear_error();
        }
        KeyCode::Left => editor.move_left(select),
        KeyCode::Right => editor.move_right(select),
        KeyCode::Up => editor.move_up(select),
        KeyCode::Down => editor.move_down(select),
        KeyCode::Home => editor.move_home(select),
        KeyCode::End => editor.move_end(select),
        KeyCode::Esc => editor.clear_selection(),
        _ => {}
    }
}

fn handle_palette_input(state: &mut AppState, key: KeyEvent) {
    if let Some(event) = state.palette.handle_input(key, &state.library) {
        match event {
            PaletteEvent::SnippetActivated(snippet) => {
                state.editor.append_snippet(&snippet);
                state.set_status("Template inserted");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::test_app_state;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_ctrl_q_quits() {
        let mut state = test_app_state("x");
        assert!(handle_key_event(&mut state, ctrl('q')).unwrap());
        assert!(handle_key_event(&mut state, ctrl('c')).unwrap());
    }

    #[test]
    fn test_typing_inserts_and_autocloses() {
        let mut state = test_app_state("");
        handle_key_event(&mut state, key(KeyCode::Char('x'))).unwrap();
        handle_key_event(&mut state, key(KeyCode::Char('{'))).unwrap();
        assert_eq!(state.editor.text(), "x{}");
        assert_eq!(state.editor.caret(), 2);
        handle_key_event(&mut state, key(KeyCode::Char('y'))).unwrap();
        assert_eq!(state.editor.text(), "x{y}");
    }

    #[test]
    fn test_tab_toggles_focus() {
        let mut state = test_app_state("x");
        assert_eq!(state.focus, Focus::Editor);
        handle_key_event(&mut state, key(KeyCode::Tab)).unwrap();
        assert_eq!(state.focus, Focus::Palette);
        handle_key_event(&mut state, key(KeyCode::Tab)).unwrap();
        assert_eq!(state.focus, Focus::Editor);
    }

    #[test]
    fn test_palette_enter_appends_snippet() {
        let mut state = test_app_state("T");
        handle_key_event(&mut state, key(KeyCode::Tab)).unwrap();
        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
        assert_eq!(state.editor.text(), "T\n\\int_a^b f(x)\\, dx");
    }

    #[test]
    fn test_color_picker_flow() {
        let mut state = test_app_state("x");
        handle_key_event(&mut state, ctrl('k')).unwrap();
        assert!(state.active_component.is_some());
        // Keystrokes go to the picker, not the editor
        handle_key_event(&mut state, key(KeyCode::Char('z'))).unwrap();
        assert_eq!(state.editor.text(), "x");
        // Confirm the initial swatch
        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
        assert!(state.active_component.is_none());
    }

    #[test]
    fn test_clipboard_failure_is_a_notice_not_an_error() {
        let mut state = test_app_state("x");
        // The test clipboard sink always fails
        handle_key_event(&mut state, ctrl('y')).unwrap();
        assert!(state.error_message.is_none());
        assert!(state.status_message.contains("Clipboard copy failed"));
    }
}
