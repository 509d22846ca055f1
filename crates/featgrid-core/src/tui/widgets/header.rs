//! Header bar: load time, document source, and the filter control surface.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode};
use crate::tui::style::Styles;

/// Renders the header bar.
///
/// The right-hand side is the filter control surface: the active picker
/// prompt, a status message, or the active filter description, in that
/// priority order. It is derived from state on every frame, never cached.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Length(22), // Load time
        Constraint::Min(20),    // Source
        Constraint::Length(48), // Filter/picker/status
    ])
    .split(area);

    let time_str = state.loaded_at.format("%Y-%m-%d %H:%M:%S").to_string();
    frame.render_widget(Paragraph::new(time_str).style(Styles::header()), chunks[0]);

    let source = format!(" featgrid — {}", state.source);
    frame.render_widget(Paragraph::new(source).style(Styles::header()), chunks[1]);

    let (right, style) = if let Some(prompt) = picker_prompt(state) {
        (prompt, Styles::prompt())
    } else if let Some(msg) = &state.status_message {
        (msg.clone(), Styles::prompt())
    } else if let Some(desc) = state.filter.describe(&state.registry) {
        (format!("filter: {}", desc), Styles::header())
    } else {
        (String::new(), Styles::header())
    };
    frame.render_widget(Paragraph::new(right).style(style), chunks[2]);
}

/// Prompt text while a platform picker is active.
fn picker_prompt(state: &AppState) -> Option<String> {
    let name = |idx: usize| state.registry.exporters()[idx].name.as_str();
    match state.input_mode {
        InputMode::Normal => None,
        InputMode::PickUnique { selected } => {
            Some(format!("Unique to ◂ {} ▸  Enter apply, Esc cancel", name(selected)))
        }
        InputMode::PickBetter { a: None, selected } => {
            Some(format!("Compare ◂ {} ▸ better than …", name(selected)))
        }
        InputMode::PickBetter { a: Some(a), selected } => {
            Some(format!("{} better than ◂ {} ▸", name(a), name(selected)))
        }
    }
}
