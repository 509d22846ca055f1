//! TUI widgets.

mod header;
mod help;
mod matrix;
mod quit_confirm;

pub use header::render_header;
pub use help::render_help;
pub use matrix::render_matrix;
pub use quit_confirm::render_quit_confirm;

use ratatui::layout::{Constraint, Layout, Rect};

/// Returns a centered rect of given percentage within `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
