//! Help popup listing the keybindings.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered_rect;
use crate::tui::style::Styles;

fn section(name: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("── {} ──", name),
        Style::default().fg(Color::Yellow),
    ))
}

fn binding(keys: &str, action: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:<16}", keys), Styles::help_key()),
        Span::styled(action.to_string(), Styles::help()),
    ])
}

/// Renders the scrollable help popup.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().fg(Color::White).bg(Color::Black));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let content = vec![
        section("Navigation"),
        binding("↑/↓/←/→, hjkl", "move between cells"),
        binding("PgUp/PgDn", "page up/down"),
        binding("Home/End", "first/last row"),
        Line::from(""),
        section("Details"),
        binding("Enter", "expand or collapse details for the cell"),
        binding("Esc", "collapse details"),
        Line::from(""),
        section("Filters"),
        binding("u", "features unique to one platform"),
        binding("b", "platform A better than platform B"),
        binding("c", "clear the active filter"),
        binding("←/→, 1-9", "choose a platform inside a picker"),
        binding("Enter / Esc", "apply / cancel the picker"),
        Line::from(""),
        section("Other"),
        binding("?", "toggle this help"),
        binding("q", "quit"),
    ];

    let max_scroll = content.len().saturating_sub(inner.height as usize);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content).scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, inner);
}
