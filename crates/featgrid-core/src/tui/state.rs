//! Application state: the active filter, the built table, the cell cursor,
//! and the details controller.
//!
//! All interaction state lives here and is mutated only by the key handlers
//! in [`super::input`]; rendering reads it. The details panel and the filter
//! control surface are both derived from this state every frame, so they can
//! never disagree with it.

use chrono::{DateTime, Local};

use crate::filter::{Filter, FilterTransition, Visibility, compute_visibility};
use crate::model::{ExporterIdx, FeatureId, Registry};
use crate::view::{MatrixRow, MatrixView, build_matrix_view};

/// Reference to one interactive cell of the current table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub feature: FeatureId,
    pub exporter: ExporterIdx,
}

/// The details controller: at most one panel, bound to one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailsState {
    #[default]
    Collapsed,
    Expanded(CellRef),
}

impl DetailsState {
    pub fn expanded(self) -> Option<CellRef> {
        match self {
            DetailsState::Collapsed => None,
            DetailsState::Expanded(cell) => Some(cell),
        }
    }
}

/// Cell cursor: a feature row (index into `view.rows`) plus exporter column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCursor {
    pub row: usize,
    pub column: ExporterIdx,
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Picking the platform for the "unique to" filter.
    PickUnique { selected: usize },
    /// Picking the two platforms for the comparison filter, A then B.
    PickBetter { a: Option<usize>, selected: usize },
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
}

impl PopupState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Main application state.
#[derive(Debug)]
pub struct AppState {
    /// Loaded document, read-only.
    pub registry: Registry,
    /// Where the document came from, for the header bar.
    pub source: String,
    /// When the document was loaded.
    pub loaded_at: DateTime<Local>,
    /// The single active filter.
    pub filter: Filter,
    /// Built table structure; rebuilt only on structural filter changes.
    pub view: MatrixView,
    /// Row/column visibility mask over `view`.
    pub visibility: Visibility,
    /// Cell cursor; `None` when no cell is reachable under the filter.
    pub cursor: Option<CellCursor>,
    /// Details controller state.
    pub details: DetailsState,
    pub input_mode: InputMode,
    pub popup: PopupState,
    /// Temporary message shown in the header bar.
    pub status_message: Option<String>,
    /// Vertical scroll of the matrix area, adjusted during render.
    pub scroll_offset: usize,
}

impl AppState {
    pub fn new(registry: Registry, source: String) -> Self {
        let filter = Filter::None;
        let view = build_matrix_view(&registry, filter);
        let visibility = compute_visibility(&view, &registry, filter);
        let mut state = Self {
            registry,
            source,
            loaded_at: Local::now(),
            filter,
            view,
            visibility,
            cursor: None,
            details: DetailsState::default(),
            input_mode: InputMode::default(),
            popup: PopupState::default(),
            status_message: None,
            scroll_offset: 0,
        };
        state.resolve_cursor();
        state
    }

    /// Applies a filter through the single dispatch point. Structural
    /// transitions rebuild the table; cosmetic ones only re-run the
    /// visibility pass over the existing structure.
    pub fn apply_filter(&mut self, new: Filter) {
        let transition = Filter::transition(self.filter, new);
        self.filter = new;
        match transition {
            FilterTransition::Structural => self.rebuild(),
            FilterTransition::Cosmetic => {
                self.visibility = compute_visibility(&self.view, &self.registry, self.filter);
            }
        }
        self.resolve_cursor();
    }

    /// Rebuilds the table structure wholesale. Collapses any expanded
    /// details panel: its underlying row no longer reliably exists, and the
    /// controller never re-anchors.
    pub fn rebuild(&mut self) {
        self.view = build_matrix_view(&self.registry, self.filter);
        self.visibility = compute_visibility(&self.view, &self.registry, self.filter);
        self.details = DetailsState::Collapsed;
    }

    /// Toggles the details panel for the cursor cell.
    ///
    /// Cells without a support entry are not interactive. Re-activating the
    /// expanded cell collapses it; activating any other valid cell replaces
    /// the panel (exclusive disclosure).
    pub fn toggle_details(&mut self) {
        let Some(cell) = self.cursor_cell() else {
            return;
        };
        if self.registry.entry(cell.feature, cell.exporter).is_none() {
            return;
        }
        self.details = match self.details {
            DetailsState::Expanded(current) if current == cell => DetailsState::Collapsed,
            _ => DetailsState::Expanded(cell),
        };
    }

    /// The cell under the cursor, if any.
    pub fn cursor_cell(&self) -> Option<CellRef> {
        let cursor = self.cursor?;
        match self.view.rows.get(cursor.row)? {
            MatrixRow::Feature { feature, .. } => Some(CellRef {
                feature: *feature,
                exporter: cursor.column,
            }),
            MatrixRow::CategoryHeader { .. } => None,
        }
    }

    /// Indices of visible feature rows, in table order.
    pub fn visible_feature_rows(&self) -> Vec<usize> {
        self.view
            .rows
            .iter()
            .enumerate()
            .filter(|(i, row)| {
                matches!(row, MatrixRow::Feature { .. }) && self.visibility.row(*i)
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Positions of visible exporter columns, in document order.
    pub fn visible_columns(&self) -> Vec<usize> {
        (0..self.registry.exporter_count())
            .filter(|&i| self.visibility.column(ExporterIdx(i)))
            .collect()
    }

    /// Snaps the cursor onto a visible cell after the filter changed, or
    /// clears it when nothing is reachable.
    pub fn resolve_cursor(&mut self) {
        let rows = self.visible_feature_rows();
        let cols = self.visible_columns();
        if rows.is_empty() || cols.is_empty() {
            self.cursor = None;
            return;
        }

        let current = self.cursor.unwrap_or(CellCursor {
            row: rows[0],
            column: ExporterIdx(cols[0]),
        });
        let row = if rows.contains(&current.row) {
            current.row
        } else {
            // Nearest visible feature row below, else the last visible one.
            *rows.iter().find(|&&r| r > current.row).unwrap_or(&rows[rows.len() - 1])
        };
        let column = if cols.contains(&current.column.0) {
            current.column
        } else {
            ExporterIdx(cols[0])
        };
        self.cursor = Some(CellCursor { row, column });
    }

    pub fn move_up(&mut self) {
        self.move_rows(-1);
    }

    pub fn move_down(&mut self) {
        self.move_rows(1);
    }

    pub fn page_up(&mut self, n: usize) {
        self.move_rows(-(n as isize));
    }

    pub fn page_down(&mut self, n: usize) {
        self.move_rows(n as isize);
    }

    pub fn home(&mut self) {
        let rows = self.visible_feature_rows();
        if let (Some(&first), Some(cursor)) = (rows.first(), self.cursor.as_mut()) {
            cursor.row = first;
        }
    }

    pub fn end(&mut self) {
        let rows = self.visible_feature_rows();
        if let (Some(&last), Some(cursor)) = (rows.last(), self.cursor.as_mut()) {
            cursor.row = last;
        }
    }

    fn move_rows(&mut self, delta: isize) {
        let rows = self.visible_feature_rows();
        let Some(cursor) = self.cursor.as_mut() else {
            return;
        };
        let Some(pos) = rows.iter().position(|&r| r == cursor.row) else {
            return;
        };
        let target = pos.saturating_add_signed(delta).min(rows.len() - 1);
        cursor.row = rows[target];
    }

    pub fn move_left(&mut self) {
        self.move_columns(-1);
    }

    pub fn move_right(&mut self) {
        self.move_columns(1);
    }

    fn move_columns(&mut self, delta: isize) {
        let cols = self.visible_columns();
        let Some(cursor) = self.cursor.as_mut() else {
            return;
        };
        let Some(pos) = cols.iter().position(|&c| c == cursor.column.0) else {
            return;
        };
        let target = pos.saturating_add_signed(delta).min(cols.len() - 1);
        cursor.column = ExporterIdx(cols[target]);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
