//! Table builder: derives the matrix structure from the registry and the
//! active filter. Deterministic in both inputs; visibility is applied
//! separately so the structure survives cosmetic filter changes.

use crate::filter::Filter;
use crate::model::{ExporterIdx, FeatureId, Registry, Status};
use crate::score::{Score, score};

/// One exporter column of the header, annotated with its score.
#[derive(Debug, Clone)]
pub struct HeaderColumn {
    pub exporter: ExporterIdx,
    pub name: String,
    /// Opaque style hook, carried through for non-TUI frontends.
    pub icon: Option<String>,
    pub score: Score,
}

/// One support cell. `status: None` means the document has no entry for the
/// pair: the cell renders empty and offers no interaction.
#[derive(Debug, Clone, Copy)]
pub struct MatrixCell {
    pub exporter: ExporterIdx,
    pub status: Option<Status>,
    pub has_notes: bool,
}

impl MatrixCell {
    pub fn is_interactive(self) -> bool {
        self.status.is_some()
    }
}

/// One body row: either a spanning category label or a feature with its
/// cells. Feature rows carry their stable id for filter and details lookups.
#[derive(Debug, Clone)]
pub enum MatrixRow {
    CategoryHeader {
        category: usize,
        label: String,
        /// Logical span, mirroring [`MatrixView::span`].
        span: usize,
    },
    Feature {
        feature: FeatureId,
        name: String,
        cells: Vec<MatrixCell>,
    },
}

/// The complete table structure ready for a frontend.
#[derive(Debug, Clone)]
pub struct MatrixView {
    pub header: Vec<HeaderColumn>,
    pub rows: Vec<MatrixRow>,
    /// Logical column count for spanning cells (category headers, details
    /// panel). Fixed at 3 while a comparison filter is active.
    pub span: usize,
}

/// Builds the table structure for `filter`. Every category and feature is
/// present regardless of the filter; only the span depends on it.
pub fn build_matrix_view(registry: &Registry, filter: Filter) -> MatrixView {
    let span = filter.logical_columns(registry.exporter_count());

    let header = registry
        .exporters()
        .iter()
        .enumerate()
        .map(|(i, exporter)| {
            let idx = ExporterIdx(i);
            HeaderColumn {
                exporter: idx,
                name: exporter.name.clone(),
                icon: exporter.icon.clone(),
                score: score(registry, idx),
            }
        })
        .collect();

    let mut rows = Vec::new();
    for (cat_idx, category) in registry.categories().iter().enumerate() {
        rows.push(MatrixRow::CategoryHeader {
            category: cat_idx,
            label: category.name.clone(),
            span,
        });
        for &feature_id in &category.features {
            let feature = registry.feature(feature_id);
            let cells = (0..registry.exporter_count())
                .map(|i| {
                    let idx = ExporterIdx(i);
                    let entry = feature.entry(idx);
                    MatrixCell {
                        exporter: idx,
                        status: entry.map(|e| e.status),
                        has_notes: entry.is_some_and(|e| e.has_notes()),
                    }
                })
                .collect();
            rows.push(MatrixRow::Feature {
                feature: feature_id,
                name: feature.name.clone(),
                cells,
            });
        }
    }

    MatrixView { header, rows, span }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Registry, SupportDocument};

    fn registry(json: &str) -> Registry {
        Registry::from_document(serde_json::from_str::<SupportDocument>(json).unwrap())
    }

    fn sample() -> Registry {
        registry(
            r#"{
                "exporters": [{"id": "a", "name": "Alpha"}, {"id": "b", "name": "Beta"}],
                "categories": [
                    {"name": "Geometry", "features": [
                        {"name": "Meshes", "support": {
                            "a": {"status": "supported", "notes": "full"},
                            "b": {"status": "partial"}
                        }},
                        {"name": "Curves", "support": {"a": {"status": "unsupported"}}}
                    ]},
                    {"name": "Animation", "features": [
                        {"name": "Skinning", "support": {}}
                    ]}
                ]
            }"#,
        )
    }

    #[test]
    fn header_follows_document_order_with_scores() {
        let registry = sample();
        let view = build_matrix_view(&registry, Filter::None);

        let names: Vec<&str> = view.header.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);
        assert_eq!(view.header[0].score, Score { supported: 1, total: 2 });
        assert_eq!(view.header[1].score, Score { supported: 0, total: 1 });
    }

    #[test]
    fn rows_interleave_category_headers_and_features_in_order() {
        let registry = sample();
        let view = build_matrix_view(&registry, Filter::None);

        let kinds: Vec<&str> = view
            .rows
            .iter()
            .map(|r| match r {
                MatrixRow::CategoryHeader { label, .. } => label.as_str(),
                MatrixRow::Feature { name, .. } => name.as_str(),
            })
            .collect();
        assert_eq!(kinds, vec!["Geometry", "Meshes", "Curves", "Animation", "Skinning"]);
    }

    #[test]
    fn span_is_three_while_comparing_regardless_of_exporter_count() {
        for count in [2usize, 5, 10] {
            let exporters: Vec<String> = (0..count)
                .map(|i| format!(r#"{{"id": "e{i}", "name": "E{i}"}}"#))
                .collect();
            let json = format!(
                r#"{{"exporters": [{}], "categories": [{{"name": "C", "features": [{{"name": "F"}}]}}]}}"#,
                exporters.join(",")
            );
            let registry = registry(&json);

            let better = Filter::Better { a: ExporterIdx(0), b: ExporterIdx(1) };
            let view = build_matrix_view(&registry, better);
            assert_eq!(view.span, 3);
            match &view.rows[0] {
                MatrixRow::CategoryHeader { span, .. } => assert_eq!(*span, 3),
                _ => panic!("first row must be the category header"),
            }

            let view = build_matrix_view(&registry, Filter::None);
            assert_eq!(view.span, 1 + count);
        }
    }

    #[test]
    fn cells_carry_status_and_notes_marker() {
        let registry = sample();
        let view = build_matrix_view(&registry, Filter::None);

        let MatrixRow::Feature { cells, .. } = &view.rows[1] else {
            panic!("row 1 must be the Meshes feature");
        };
        assert_eq!(cells[0].status, Some(Status::Supported));
        assert!(cells[0].has_notes);
        assert_eq!(cells[1].status, Some(Status::Partial));
        assert!(!cells[1].has_notes);
    }

    #[test]
    fn missing_entries_yield_empty_non_interactive_cells() {
        let registry = sample();
        let view = build_matrix_view(&registry, Filter::None);

        let MatrixRow::Feature { cells, .. } = &view.rows[4] else {
            panic!("row 4 must be the Skinning feature");
        };
        assert!(cells.iter().all(|c| c.status.is_none()));
        assert!(cells.iter().all(|c| !c.is_interactive()));
    }
}
