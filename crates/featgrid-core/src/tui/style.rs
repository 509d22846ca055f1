//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::model::Status;

/// Color palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;

    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    pub const CATEGORY: Color = Color::Cyan;

    // Status accents, matching the web palette of the data source
    // (green / amber / red / light gray).
    pub const SUPPORTED: Color = Color::Green;
    pub const PARTIAL: Color = Color::Yellow;
    pub const UNSUPPORTED: Color = Color::Red;
    pub const UNKNOWN: Color = Color::Gray;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Column header style.
    pub fn column_header() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Category header row style.
    pub fn category() -> Style {
        Style::default()
            .fg(Theme::CATEGORY)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected cell style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Picker/status prompt style in the header bar.
    pub fn prompt() -> Style {
        Style::default()
            .fg(Theme::FG)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Help text style.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help key style (highlighted keys in help line).
    pub fn help_key() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Accent style for a support status.
    pub fn status(status: Status) -> Style {
        let color = match status {
            Status::Supported => Theme::SUPPORTED,
            Status::Partial => Theme::PARTIAL,
            Status::Unsupported => Theme::UNSUPPORTED,
            Status::Unknown => Theme::UNKNOWN,
        };
        Style::default().fg(color)
    }
}
