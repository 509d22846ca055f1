//! Filter engine: the single active filter descriptor, feature matching,
//! row/column visibility, and the structural-vs-cosmetic transition contract.

use crate::model::{ExporterIdx, FeatureRecord, Registry, Status};
use crate::view::{MatrixRow, MatrixView};

/// The active filter. At most one is in effect at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Every feature matches; all columns visible.
    #[default]
    None,
    /// Features supported on exactly this exporter and no other.
    Unique { exporter: ExporterIdx },
    /// Features where `a`'s status outranks `b`'s.
    Better { a: ExporterIdx, b: ExporterIdx },
}

/// Classification of a filter change, decided by [`Filter::transition`].
///
/// Structural changes alter the logical column count and require a full
/// rebuild of the table structure; cosmetic changes only need a new
/// visibility pass over the existing structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTransition {
    Structural,
    Cosmetic,
}

impl Filter {
    pub fn is_better(self) -> bool {
        matches!(self, Filter::Better { .. })
    }

    /// Classifies a change from `old` to `new`.
    ///
    /// Entering or leaving the comparison mode changes the fixed column
    /// count baked into category-header and details spans, so it is
    /// structural; everything else (including swapping which exporter is
    /// compared) is cosmetic.
    pub fn transition(old: Filter, new: Filter) -> FilterTransition {
        if old.is_better() != new.is_better() {
            FilterTransition::Structural
        } else {
            FilterTransition::Cosmetic
        }
    }

    /// Logical column count for spanning cells (category headers, details
    /// panel): fixed at 3 while comparing, feature column + one per
    /// exporter otherwise.
    pub fn logical_columns(self, exporter_count: usize) -> usize {
        if self.is_better() { 3 } else { 1 + exporter_count }
    }

    /// Whether `feature` passes this filter.
    pub fn matches(self, feature: &FeatureRecord) -> bool {
        match self {
            Filter::None => true,
            Filter::Unique { exporter } => {
                let target_supported = feature
                    .entry(exporter)
                    .is_some_and(|e| e.status == Status::Supported);
                if !target_supported {
                    return false;
                }
                feature.support.iter().enumerate().all(|(idx, entry)| {
                    idx == exporter.0
                        || entry.as_ref().is_none_or(|e| e.status != Status::Supported)
                })
            }
            Filter::Better { a, b } => match (feature.entry(a), feature.entry(b)) {
                (Some(ea), Some(eb)) => ea.status.rank() > eb.status.rank(),
                _ => false,
            },
        }
    }

    /// Whether the given exporter column is shown. Comparison mode shows
    /// only the two named columns; every other filter shows all of them.
    pub fn column_visible(self, column: ExporterIdx) -> bool {
        match self {
            Filter::Better { a, b } => column == a || column == b,
            _ => true,
        }
    }

    /// Short human description for the filter bar, `None` when inactive.
    pub fn describe(self, registry: &Registry) -> Option<String> {
        match self {
            Filter::None => None,
            Filter::Unique { exporter } => {
                Some(format!("unique to {}", registry.exporter(exporter).name))
            }
            Filter::Better { a, b } => Some(format!(
                "{} better than {}",
                registry.exporter(a).name,
                registry.exporter(b).name
            )),
        }
    }
}

/// Visibility mask over a built [`MatrixView`]. Rows align with
/// `view.rows`, columns with exporter positions. The structure itself is
/// never mutated, so indices stay stable across filter changes.
#[derive(Debug, Clone)]
pub struct Visibility {
    pub rows: Vec<bool>,
    pub columns: Vec<bool>,
}

impl Visibility {
    pub fn row(&self, index: usize) -> bool {
        self.rows.get(index).copied().unwrap_or(false)
    }

    pub fn column(&self, column: ExporterIdx) -> bool {
        self.columns.get(column.0).copied().unwrap_or(false)
    }
}

/// Computes the visibility pass for `filter` over a built view.
///
/// Category headers are never hidden; ordinary feature rows are hidden when
/// they fail [`Filter::matches`]. The expanded details panel is not part of
/// the row structure and is never subject to filtering.
pub fn compute_visibility(view: &MatrixView, registry: &Registry, filter: Filter) -> Visibility {
    let rows = view
        .rows
        .iter()
        .map(|row| match row {
            MatrixRow::CategoryHeader { .. } => true,
            MatrixRow::Feature { feature, .. } => filter.matches(registry.feature(*feature)),
        })
        .collect();
    let columns = (0..registry.exporter_count())
        .map(|i| filter.column_visible(ExporterIdx(i)))
        .collect();
    Visibility { rows, columns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FeatureId, Registry, SupportDocument};
    use crate::view::build_matrix_view;

    fn registry(json: &str) -> Registry {
        Registry::from_document(serde_json::from_str::<SupportDocument>(json).unwrap())
    }

    /// Two exporters A and B, one category X, one feature F with
    /// A=supported, B=unsupported.
    fn two_exporter_registry() -> Registry {
        registry(
            r#"{
                "exporters": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}],
                "categories": [{"name": "X", "features": [
                    {"name": "F", "support": {
                        "a": {"status": "supported"},
                        "b": {"status": "unsupported"}
                    }}
                ]}]
            }"#,
        )
    }

    const A: ExporterIdx = ExporterIdx(0);
    const B: ExporterIdx = ExporterIdx(1);

    #[test]
    fn no_filter_matches_everything() {
        let registry = two_exporter_registry();
        for feature in registry.features() {
            assert!(Filter::None.matches(feature));
        }
    }

    #[test]
    fn unique_and_better_scenario() {
        let registry = two_exporter_registry();
        let f = registry.feature(FeatureId(0));

        assert!(Filter::Unique { exporter: A }.matches(f));
        assert!(!Filter::Unique { exporter: B }.matches(f));
        assert!(Filter::Better { a: A, b: B }.matches(f));
        assert!(!Filter::Better { a: B, b: A }.matches(f));
    }

    #[test]
    fn unique_excludes_features_with_two_supporters() {
        let registry = registry(
            r#"{
                "exporters": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}],
                "categories": [{"name": "X", "features": [
                    {"name": "F", "support": {
                        "a": {"status": "supported"},
                        "b": {"status": "supported"}
                    }}
                ]}]
            }"#,
        );
        let f = registry.feature(FeatureId(0));
        assert!(!Filter::Unique { exporter: A }.matches(f));
        assert!(!Filter::Unique { exporter: B }.matches(f));
    }

    #[test]
    fn unique_treats_missing_entries_as_non_supporters() {
        let registry = registry(
            r#"{
                "exporters": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}],
                "categories": [{"name": "X", "features": [
                    {"name": "F", "support": {"a": {"status": "supported"}}}
                ]}]
            }"#,
        );
        assert!(Filter::Unique { exporter: A }.matches(registry.feature(FeatureId(0))));
    }

    #[test]
    fn better_never_matches_with_a_missing_entry() {
        let registry = registry(
            r#"{
                "exporters": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}],
                "categories": [{"name": "X", "features": [
                    {"name": "F", "support": {"a": {"status": "supported"}}}
                ]}]
            }"#,
        );
        let f = registry.feature(FeatureId(0));
        assert!(!Filter::Better { a: A, b: B }.matches(f));
        assert!(!Filter::Better { a: B, b: A }.matches(f));
    }

    #[test]
    fn better_is_antisymmetric_when_both_entries_exist() {
        let registry = registry(
            r#"{
                "exporters": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}],
                "categories": [{"name": "X", "features": [
                    {"name": "F1", "support": {"a": {"status": "supported"}, "b": {"status": "partial"}}},
                    {"name": "F2", "support": {"a": {"status": "partial"}, "b": {"status": "partial"}}},
                    {"name": "F3", "support": {"a": {"status": "unknown"}, "b": {"status": "unsupported"}}}
                ]}]
            }"#,
        );
        for feature in registry.features() {
            let ab = Filter::Better { a: A, b: B }.matches(feature);
            let ba = Filter::Better { a: B, b: A }.matches(feature);
            assert!(!(ab && ba), "better must not match both directions");
        }
    }

    #[test]
    fn logical_columns_fixed_at_three_while_comparing() {
        let better = Filter::Better { a: A, b: B };
        for count in [2, 5, 10] {
            assert_eq!(better.logical_columns(count), 3);
            assert_eq!(Filter::None.logical_columns(count), 1 + count);
            assert_eq!(Filter::Unique { exporter: A }.logical_columns(count), 1 + count);
        }
    }

    #[test]
    fn transition_classification() {
        let unique_a = Filter::Unique { exporter: A };
        let unique_b = Filter::Unique { exporter: B };
        let better = Filter::Better { a: A, b: B };
        let better_swapped = Filter::Better { a: B, b: A };

        assert_eq!(Filter::transition(Filter::None, better), FilterTransition::Structural);
        assert_eq!(Filter::transition(better, Filter::None), FilterTransition::Structural);
        assert_eq!(Filter::transition(unique_a, better), FilterTransition::Structural);

        assert_eq!(Filter::transition(Filter::None, unique_a), FilterTransition::Cosmetic);
        assert_eq!(Filter::transition(unique_a, unique_b), FilterTransition::Cosmetic);
        assert_eq!(Filter::transition(better, better_swapped), FilterTransition::Cosmetic);
        assert_eq!(Filter::transition(Filter::None, Filter::None), FilterTransition::Cosmetic);
    }

    #[test]
    fn comparison_hides_all_but_the_named_columns() {
        let registry = registry(
            r#"{
                "exporters": [
                    {"id": "a", "name": "A"}, {"id": "b", "name": "B"},
                    {"id": "c", "name": "C"}, {"id": "d", "name": "D"}
                ],
                "categories": []
            }"#,
        );
        let filter = Filter::Better { a: ExporterIdx(1), b: ExporterIdx(3) };
        let view = build_matrix_view(&registry, filter);
        let vis = compute_visibility(&view, &registry, filter);
        assert_eq!(vis.columns, vec![false, true, false, true]);

        let vis_none = compute_visibility(&view, &registry, Filter::None);
        assert!(vis_none.columns.iter().all(|&v| v));
    }

    #[test]
    fn category_headers_survive_filtering() {
        let registry = two_exporter_registry();
        let filter = Filter::Unique { exporter: B };
        let view = build_matrix_view(&registry, filter);
        let vis = compute_visibility(&view, &registry, filter);

        // Row 0 is the category header, row 1 the lone (unmatched) feature.
        assert!(vis.row(0));
        assert!(!vis.row(1));
    }
}
