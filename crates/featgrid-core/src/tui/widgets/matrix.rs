//! Matrix grid widget: column headers with scores, category rows, support
//! cells, and the inline details panel.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::state::{AppState, CellCursor, CellRef};
use crate::tui::style::{Styles, Theme};
use crate::view::MatrixRow;

/// Renders the compatibility grid with a pinned two-line column header.
pub fn render_matrix(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let block = Block::default()
        .title(" Compatibility Matrix ")
        .borders(Borders::ALL)
        .style(Styles::default());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.registry.exporter_count() == 0 || state.view.rows.is_empty() {
        frame.render_widget(Paragraph::new("No compatibility data"), inner);
        return;
    }

    let cols = state.visible_columns();
    let name_w = name_column_width(state);
    let col_ws: Vec<usize> = cols.iter().map(|&c| column_width(state, c)).collect();
    let total_width = name_w + col_ws.iter().sum::<usize>();

    // Pinned header: exporter names, then their scores.
    let mut name_spans = vec![Span::styled(pad_left("FEATURE", name_w), Styles::dim())];
    let mut score_spans = vec![Span::raw(" ".repeat(name_w))];
    for (&c, &w) in cols.iter().zip(&col_ws) {
        let col = &state.view.header[c];
        name_spans.push(Span::styled(pad_center(&col.name, w), Styles::column_header()));
        score_spans.push(Span::styled(pad_center(&col.score.display(), w), Styles::dim()));
    }
    let header_lines = vec![Line::from(name_spans), Line::from(score_spans)];

    // Body: category headers, feature rows, and the details panel right
    // after its owning row. The panel itself is never filtered out.
    let mut body: Vec<Line> = Vec::new();
    let mut cursor_line = None;
    for (row_idx, row) in state.view.rows.iter().enumerate() {
        let visible = state.visibility.row(row_idx);
        match row {
            MatrixRow::CategoryHeader { label, .. } => {
                if visible {
                    body.push(Line::from(Span::styled(
                        pad_left(label, total_width),
                        Styles::category(),
                    )));
                }
            }
            MatrixRow::Feature { feature, name, cells } => {
                if visible {
                    let mut spans = vec![Span::raw(pad_left(name, name_w))];
                    for (&c, &w) in cols.iter().zip(&col_ws) {
                        let cell = cells[c];
                        let text = match cell.status {
                            Some(status) => format!(
                                "{}{}",
                                status.glyph(),
                                if cell.has_notes { "*" } else { "" }
                            ),
                            None => String::new(),
                        };
                        let mut style = match cell.status {
                            Some(status) => Styles::status(status),
                            None => Styles::default(),
                        };
                        let expanded_here = state.details.expanded()
                            == Some(CellRef { feature: *feature, exporter: cell.exporter });
                        if expanded_here {
                            style = style.add_modifier(Modifier::UNDERLINED);
                        }
                        let under_cursor = state.cursor
                            == Some(CellCursor { row: row_idx, column: cell.exporter });
                        if under_cursor {
                            style = style.bg(Theme::SELECTED_BG).add_modifier(Modifier::BOLD);
                            cursor_line = Some(body.len());
                        }
                        spans.push(Span::styled(pad_center(&text, w), style));
                    }
                    body.push(Line::from(spans));
                }
                if let Some(cell_ref) = state.details.expanded()
                    && cell_ref.feature == *feature
                {
                    body.extend(details_lines(state, cell_ref));
                }
            }
        }
    }

    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(inner);
    frame.render_widget(Paragraph::new(header_lines), chunks[0]);

    // Keep the cursor row inside the viewport.
    let visible_h = chunks[1].height as usize;
    if let Some(line) = cursor_line {
        if line < state.scroll_offset {
            state.scroll_offset = line;
        } else if visible_h > 0 && line >= state.scroll_offset + visible_h {
            state.scroll_offset = line + 1 - visible_h;
        }
    }
    let max_scroll = body.len().saturating_sub(visible_h);
    if state.scroll_offset > max_scroll {
        state.scroll_offset = max_scroll;
    }

    let paragraph = Paragraph::new(body).scroll((state.scroll_offset as u16, 0));
    frame.render_widget(paragraph, chunks[1]);
}

/// Details panel lines for one cell: status heading, optional notes, and the
/// three-way github line (absent entry field: omitted; blank: muted notice;
/// filled: the link itself).
fn details_lines(state: &AppState, cell: CellRef) -> Vec<Line<'static>> {
    let Some(entry) = state.registry.entry(cell.feature, cell.exporter) else {
        return Vec::new();
    };
    let exporter = state.registry.exporter(cell.exporter);
    let accent = Styles::status(entry.status);
    let bar = || Span::styled("▌ ", accent);

    let mut lines = vec![Line::from(vec![
        bar(),
        Span::styled(
            format!(
                "{} {} on {}",
                entry.status.glyph(),
                entry.status.label(),
                exporter.name
            ),
            accent.add_modifier(Modifier::BOLD),
        ),
    ])];

    if entry.has_notes() {
        let notes = entry.notes.as_deref().unwrap_or_default().trim().to_string();
        lines.push(Line::from(vec![bar(), Span::raw(format!("* {}", notes))]));
    }

    match entry.github.as_deref().map(str::trim) {
        None => {}
        Some("") => lines.push(Line::from(vec![
            bar(),
            Span::styled(
                "No bug report or feature request has been filed to address this issue."
                    .to_string(),
                Styles::dim(),
            ),
        ])),
        Some(link) => lines.push(Line::from(vec![
            bar(),
            Span::raw(format!("github: {}", link)),
        ])),
    }

    lines
}

/// Width of the leading feature-name column.
fn name_column_width(state: &AppState) -> usize {
    let longest = state
        .view
        .rows
        .iter()
        .filter_map(|row| match row {
            MatrixRow::Feature { name, .. } => Some(name.chars().count()),
            MatrixRow::CategoryHeader { .. } => None,
        })
        .max()
        .unwrap_or(0);
    longest.clamp(7, 32) + 2
}

/// Width of one exporter column.
fn column_width(state: &AppState, column: usize) -> usize {
    let col = &state.view.header[column];
    col.name
        .chars()
        .count()
        .max(col.score.display().chars().count())
        .max(3)
        + 2
}

fn pad_left(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.push_str(&" ".repeat(width - len));
    out
}

fn pad_center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.chars().take(width).collect();
    }
    let left = (width - len) / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(width - len - left))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExporterIdx, FeatureId, Registry, SupportDocument};

    fn state_with(support: &str) -> AppState {
        let json = format!(
            r#"{{
                "exporters": [{{"id": "a", "name": "Alpha"}}],
                "categories": [{{"name": "X", "features": [
                    {{"name": "F", "support": {support}}}
                ]}}]
            }}"#
        );
        let doc: SupportDocument = serde_json::from_str(&json).unwrap();
        AppState::new(Registry::from_document(doc), "test".to_string())
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    const CELL: CellRef = CellRef {
        feature: FeatureId(0),
        exporter: ExporterIdx(0),
    };

    #[test]
    fn blank_github_renders_the_not_filed_notice() {
        let state = state_with(r#"{"a": {"status": "supported", "github": ""}}"#);
        let lines = details_lines(&state, CELL);

        assert_eq!(lines.len(), 2);
        assert!(line_text(&lines[0]).contains("Supported on Alpha"));
        assert!(line_text(&lines[1]).contains("No bug report or feature request"));
    }

    #[test]
    fn absent_github_omits_the_line_entirely() {
        let state = state_with(r#"{"a": {"status": "partial", "notes": "half done"}}"#);
        let lines = details_lines(&state, CELL);

        assert_eq!(lines.len(), 2);
        assert!(line_text(&lines[0]).contains("Partially Supported on Alpha"));
        assert!(line_text(&lines[1]).contains("half done"));
        assert!(!lines.iter().any(|l| line_text(l).contains("github")));
    }

    #[test]
    fn filled_github_renders_the_link() {
        let state =
            state_with(r#"{"a": {"status": "unsupported", "github": "https://example.com/42"}}"#);
        let lines = details_lines(&state, CELL);

        assert_eq!(lines.len(), 2);
        assert!(line_text(&lines[1]).contains("github: https://example.com/42"));
    }

    #[test]
    fn blank_notes_are_not_rendered() {
        let state = state_with(r#"{"a": {"status": "supported", "notes": "   "}}"#);
        let lines = details_lines(&state, CELL);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn missing_entry_yields_no_panel() {
        let state = state_with(r#"{}"#);
        assert!(details_lines(&state, CELL).is_empty());
    }
}
