//! Input handling and keybindings.
//!
//! Routes key events to the filter engine and the details controller. Every
//! filter application goes through [`AppState::apply_filter`], which decides
//! between a structural rebuild and a cosmetic visibility pass.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::filter::Filter;
use crate::model::ExporterIdx;

use super::state::{AppState, DetailsState, InputMode, PopupState};

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
    if matches!(state.popup, PopupState::QuitConfirm) {
        return handle_quit_confirm(state, key);
    }
    if matches!(state.popup, PopupState::Help { .. }) {
        return handle_help(state, key);
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::PickUnique { selected } => handle_pick_unique(state, key, selected),
        InputMode::PickBetter { a, selected } => handle_pick_better(state, key, a, selected),
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
    let PopupState::Help { scroll } = &mut state.popup else {
        return KeyAction::None;
    };
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
        KeyCode::PageUp => *scroll = scroll.saturating_sub(10),
        KeyCode::PageDown => *scroll = scroll.saturating_add(10),
        KeyCode::Home => *scroll = 0,
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            state.popup = PopupState::None;
        }
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
            KeyAction::None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Cell navigation
        KeyCode::Up | KeyCode::Char('k') => {
            state.move_up();
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.move_down();
            KeyAction::None
        }
        KeyCode::Left | KeyCode::Char('h') => {
            state.move_left();
            KeyAction::None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.move_right();
            KeyAction::None
        }
        KeyCode::PageUp => {
            state.page_up(10);
            KeyAction::None
        }
        KeyCode::PageDown => {
            state.page_down(10);
            KeyAction::None
        }
        KeyCode::Home => {
            state.home();
            KeyAction::None
        }
        KeyCode::End => {
            state.end();
            KeyAction::None
        }

        // Details panel
        KeyCode::Enter => {
            state.toggle_details();
            KeyAction::None
        }

        // Filter pickers
        KeyCode::Char('u') | KeyCode::Char('U') => {
            if state.registry.exporter_count() == 0 {
                state.set_status("No platforms to filter by");
            } else {
                // Preselect the currently filtered platform when one is set.
                let selected = match state.filter {
                    Filter::Unique { exporter } => exporter.0,
                    _ => 0,
                };
                state.input_mode = InputMode::PickUnique { selected };
            }
            KeyAction::None
        }
        KeyCode::Char('b') | KeyCode::Char('B') => {
            if state.registry.exporter_count() < 2 {
                state.set_status("Comparison needs at least two platforms");
            } else {
                let selected = match state.filter {
                    Filter::Better { a, .. } => a.0,
                    _ => 0,
                };
                state.input_mode = InputMode::PickBetter { a: None, selected };
            }
            KeyAction::None
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            state.apply_filter(Filter::None);
            KeyAction::None
        }

        // Help
        KeyCode::Char('?') => {
            state.popup = PopupState::Help { scroll: 0 };
            KeyAction::None
        }

        KeyCode::Esc => {
            state.status_message = None;
            if state.details != DetailsState::Collapsed {
                state.details = DetailsState::Collapsed;
            }
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

/// Cycles `selected` through the exporter list, or jumps via a digit key.
/// Returns `None` for keys the picker does not consume as navigation.
fn picker_navigation(key: KeyEvent, selected: usize, count: usize) -> Option<usize> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some((selected + count - 1) % count),
        KeyCode::Right | KeyCode::Char('l') => Some((selected + 1) % count),
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
            let idx = (c as usize) - ('1' as usize);
            if idx < count { Some(idx) } else { Some(selected) }
        }
        _ => None,
    }
}

fn handle_pick_unique(state: &mut AppState, key: KeyEvent, selected: usize) -> KeyAction {
    let count = state.registry.exporter_count();
    if let Some(selected) = picker_navigation(key, selected, count) {
        state.input_mode = InputMode::PickUnique { selected };
        return KeyAction::None;
    }
    match key.code {
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
            state.apply_filter(Filter::Unique {
                exporter: ExporterIdx(selected),
            });
        }
        KeyCode::Esc => {
            state.input_mode = InputMode::Normal;
        }
        _ => {}
    }
    KeyAction::None
}

fn handle_pick_better(
    state: &mut AppState,
    key: KeyEvent,
    a: Option<usize>,
    selected: usize,
) -> KeyAction {
    let count = state.registry.exporter_count();
    if let Some(selected) = picker_navigation(key, selected, count) {
        state.input_mode = InputMode::PickBetter { a, selected };
        return KeyAction::None;
    }
    match key.code {
        KeyCode::Enter => match a {
            None => {
                state.input_mode = InputMode::PickBetter {
                    a: Some(selected),
                    selected,
                };
            }
            // An identical pair is a malformed selection, not an error:
            // the filter stays inactive until a distinct pair is chosen.
            Some(first) if first == selected => {
                state.set_status("Pick two distinct platforms");
            }
            Some(first) => {
                state.input_mode = InputMode::Normal;
                state.status_message = None;
                state.apply_filter(Filter::Better {
                    a: ExporterIdx(first),
                    b: ExporterIdx(selected),
                });
            }
        },
        KeyCode::Esc => {
            state.input_mode = InputMode::Normal;
            state.status_message = None;
        }
        _ => {}
    }
    KeyAction::None
}
