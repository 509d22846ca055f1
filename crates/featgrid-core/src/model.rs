//! Support document model and the loaded registry.
//!
//! The document is deserialized once and converted into a [`Registry`] that
//! assigns stable positional identities to exporters, categories, and
//! features. All interaction paths address cells by these identities; nothing
//! downstream resolves by name.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use tracing::{debug, warn};

/// Support level of one feature on one exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Supported,
    Partial,
    Unsupported,
    Unknown,
}

impl Status {
    /// Total order used by the "better than" comparison.
    pub fn rank(self) -> u8 {
        match self {
            Status::Supported => 3,
            Status::Partial => 2,
            Status::Unsupported => 1,
            Status::Unknown => 0,
        }
    }

    /// Human label shown in the details panel.
    pub fn label(self) -> &'static str {
        match self {
            Status::Supported => "Supported",
            Status::Partial => "Partially Supported",
            Status::Unsupported => "Unsupported",
            Status::Unknown => "Unknown",
        }
    }

    /// Single-cell glyph shown in the grid.
    pub fn glyph(self) -> &'static str {
        match self {
            Status::Supported => "✓",
            Status::Partial => "~",
            Status::Unsupported => "✗",
            Status::Unknown => "?",
        }
    }
}

/// Support details for one (feature, exporter) pair.
///
/// `github: None` means no tracking issue is recorded at all; `Some("")`
/// means tracking was considered but no link has been filed. The two render
/// differently, so the distinction must survive deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SupportEntry {
    pub status: Status,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

impl SupportEntry {
    /// True when notes are present and not just whitespace.
    pub fn has_notes(&self) -> bool {
        self.notes.as_deref().is_some_and(|n| !n.trim().is_empty())
    }
}

/// A platform/tool whose support is tracked (one column of the matrix).
#[derive(Debug, Clone, Deserialize)]
pub struct Exporter {
    pub id: String,
    pub name: String,
    /// Opaque style hook for non-terminal frontends; ignored by the TUI.
    #[serde(default)]
    pub icon: Option<String>,
}

/// One feature as it appears in the document.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub name: String,
    /// Sparse map keyed by exporter id; absent entries mean "not applicable".
    #[serde(default)]
    pub support: HashMap<String, SupportEntry>,
}

/// A named, ordered group of features.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// The raw document as fetched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupportDocument {
    #[serde(default)]
    pub exporters: Vec<Exporter>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Stable identity of a feature, assigned at load in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureId(pub usize);

/// Position of an exporter column, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExporterIdx(pub usize);

/// One feature with its support map resolved to exporter positions.
#[derive(Debug, Clone)]
pub struct FeatureRecord {
    pub id: FeatureId,
    pub name: String,
    /// Index of the owning category.
    pub category: usize,
    /// Position within the owning category's declared order.
    pub index_in_category: usize,
    /// Entry per exporter column; `None` means no entry in the document.
    pub support: Vec<Option<SupportEntry>>,
}

impl FeatureRecord {
    pub fn entry(&self, exporter: ExporterIdx) -> Option<&SupportEntry> {
        self.support.get(exporter.0).and_then(|e| e.as_ref())
    }
}

/// One category with its member features by id.
#[derive(Debug, Clone)]
pub struct CategoryRecord {
    pub name: String,
    pub features: Vec<FeatureId>,
}

/// The loaded document, read-only after construction.
#[derive(Debug)]
pub struct Registry {
    exporters: Vec<Exporter>,
    categories: Vec<CategoryRecord>,
    features: Vec<FeatureRecord>,
}

impl Registry {
    /// Flattens the document, resolving support keys to exporter positions
    /// and assigning positional ids.
    pub fn from_document(doc: SupportDocument) -> Self {
        let exporter_pos: HashMap<&str, usize> = doc
            .exporters
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.as_str(), i))
            .collect();
        if exporter_pos.len() != doc.exporters.len() {
            warn!("support document contains duplicate exporter ids");
        }

        let mut seen_names: HashSet<&str> = HashSet::new();
        let mut categories = Vec::with_capacity(doc.categories.len());
        let mut features = Vec::new();

        for (cat_idx, category) in doc.categories.iter().enumerate() {
            let mut members = Vec::with_capacity(category.features.len());
            for (feat_idx, feature) in category.features.iter().enumerate() {
                if !seen_names.insert(feature.name.as_str()) {
                    // Legal but ambiguous under name-based lookup; identity
                    // here is positional, so only worth a warning.
                    warn!(feature = %feature.name, "duplicate feature name in document");
                }

                let mut support: Vec<Option<SupportEntry>> = vec![None; doc.exporters.len()];
                for (key, entry) in &feature.support {
                    match exporter_pos.get(key.as_str()) {
                        Some(&pos) => support[pos] = Some(entry.clone()),
                        None => {
                            debug!(exporter = %key, feature = %feature.name,
                                "support entry references unknown exporter id");
                        }
                    }
                }

                let id = FeatureId(features.len());
                members.push(id);
                features.push(FeatureRecord {
                    id,
                    name: feature.name.clone(),
                    category: cat_idx,
                    index_in_category: feat_idx,
                    support,
                });
            }
            categories.push(CategoryRecord {
                name: category.name.clone(),
                features: members,
            });
        }

        Self {
            exporters: doc.exporters,
            categories,
            features,
        }
    }

    pub fn exporters(&self) -> &[Exporter] {
        &self.exporters
    }

    pub fn exporter(&self, idx: ExporterIdx) -> &Exporter {
        &self.exporters[idx.0]
    }

    pub fn exporter_count(&self) -> usize {
        self.exporters.len()
    }

    pub fn categories(&self) -> &[CategoryRecord] {
        &self.categories
    }

    pub fn features(&self) -> &[FeatureRecord] {
        &self.features
    }

    pub fn feature(&self, id: FeatureId) -> &FeatureRecord {
        &self.features[id.0]
    }

    /// Support entry for one cell, `None` for not-applicable cells.
    pub fn entry(&self, feature: FeatureId, exporter: ExporterIdx) -> Option<&SupportEntry> {
        self.features[feature.0].entry(exporter)
    }
}
