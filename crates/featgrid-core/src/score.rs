//! Per-exporter aggregate support score, shown under each column header.

use crate::model::{ExporterIdx, Registry, Status};

/// Capability count for one exporter: `supported` of `total` scored features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub supported: usize,
    pub total: usize,
}

impl Score {
    /// Header annotation, e.g. `7/12`.
    pub fn display(self) -> String {
        format!("{}/{}", self.supported, self.total)
    }
}

/// Counts every feature with an entry for `exporter`: entries with a known
/// status count toward `total`, supported ones toward `supported`.
pub fn score(registry: &Registry, exporter: ExporterIdx) -> Score {
    let mut score = Score::default();
    for feature in registry.features() {
        if let Some(entry) = feature.entry(exporter) {
            if entry.status != Status::Unknown {
                score.total += 1;
                if entry.status == Status::Supported {
                    score.supported += 1;
                }
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Registry, SupportDocument};

    fn registry(json: &str) -> Registry {
        Registry::from_document(serde_json::from_str::<SupportDocument>(json).unwrap())
    }

    #[test]
    fn counts_known_statuses_only() {
        let registry = registry(
            r#"{
                "exporters": [{"id": "a", "name": "A"}],
                "categories": [{"name": "C", "features": [
                    {"name": "F1", "support": {"a": {"status": "supported"}}},
                    {"name": "F2", "support": {"a": {"status": "partial"}}},
                    {"name": "F3", "support": {"a": {"status": "unsupported"}}},
                    {"name": "F4", "support": {"a": {"status": "unknown"}}},
                    {"name": "F5", "support": {}}
                ]}]
            }"#,
        );
        let s = score(&registry, ExporterIdx(0));
        assert_eq!(s, Score { supported: 1, total: 3 });
        assert!(s.supported <= s.total);
    }

    #[test]
    fn exporter_with_no_scored_features_is_zero_over_zero() {
        let registry = registry(
            r#"{
                "exporters": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}],
                "categories": [{"name": "C", "features": [
                    {"name": "F1", "support": {"a": {"status": "supported"}}},
                    {"name": "F2", "support": {"a": {"status": "unknown"}}}
                ]}]
            }"#,
        );
        assert_eq!(score(&registry, ExporterIdx(1)), Score { supported: 0, total: 0 });
        assert_eq!(score(&registry, ExporterIdx(1)).display(), "0/0");
    }
}
