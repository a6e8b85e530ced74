//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::view::history::field_for_key;

use super::state::{AppState, InputMode, PopupState};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match state.popup {
        PopupState::QuitConfirm => return handle_quit_confirm(state, key),
        PopupState::Help { .. } => return handle_help(state, key),
        PopupState::None => {}
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Search => handle_search_mode(state, key),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let PopupState::Help { ref mut scroll } = state.popup else {
        return KeyAction::None;
    };
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => state.popup = PopupState::None,
        KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
        KeyCode::Home | KeyCode::Char('g') => *scroll = 0,
        _ => {}
    }
    KeyAction::None
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }

        KeyCode::Char('?') => state.popup = PopupState::Help { scroll: 0 },
        KeyCode::Char('/') => {
            state.input_mode = InputMode::Search;
            state.search_input = state.view.search_term.clone();
        }

        // Pages
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => state.next_page(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => state.prev_page(),
        KeyCode::Home | KeyCode::Char('g') => state.first_page(),
        KeyCode::End | KeyCode::Char('G') => state.last_page(),

        // Rows
        KeyCode::Up | KeyCode::Char('k') => state.select_up(),
        KeyCode::Down | KeyCode::Char('j') => state.select_down(),

        // Sort column hotkeys
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(field) = field_for_key(c) {
                state.toggle_sort(field);
            }
        }
        _ => {}
    }
    KeyAction::None
}

/// Handles keys in search mode. The term is applied as it is typed.
fn handle_search_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        KeyCode::Esc => {
            state.input_mode = InputMode::Normal;
            state.search_input.clear();
            state.apply_search_input();
        }
        KeyCode::Enter => state.input_mode = InputMode::Normal,
        KeyCode::Backspace => {
            state.search_input.pop();
            state.apply_search_input();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.search_input.push(c);
            state.apply_search_input();
        }
        _ => {}
    }
    KeyAction::None
}
