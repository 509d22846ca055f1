//! Main rendering logic for the TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{AppState, PopupState};
use super::style::Styles;
use super::widgets::{render_header, render_help, render_matrix, render_quit_confirm};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Min(5),    // Matrix
        Constraint::Length(1), // Key hints
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_matrix(frame, chunks[1], state);
    render_hints(frame, chunks[2]);

    // Popups rendered last to overlay everything.
    match &mut state.popup {
        PopupState::Help { scroll } => render_help(frame, area, scroll),
        PopupState::QuitConfirm => render_quit_confirm(frame, area),
        PopupState::None => {}
    }
}

/// One-line key hint footer.
fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled("↑↓←→", Styles::help_key()),
        Span::styled(" move  ", Styles::help()),
        Span::styled("Enter", Styles::help_key()),
        Span::styled(" details  ", Styles::help()),
        Span::styled("u", Styles::help_key()),
        Span::styled(" unique  ", Styles::help()),
        Span::styled("b", Styles::help_key()),
        Span::styled(" compare  ", Styles::help()),
        Span::styled("c", Styles::help_key()),
        Span::styled(" clear  ", Styles::help()),
        Span::styled("?", Styles::help_key()),
        Span::styled(" help  ", Styles::help()),
        Span::styled("q", Styles::help_key()),
        Span::styled(" quit", Styles::help()),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}
