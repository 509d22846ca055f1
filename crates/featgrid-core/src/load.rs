//! One-shot document loading.
//!
//! The support document is fetched exactly once, before the event loop
//! starts; a failure here is terminal for the session.

use std::fs;

use thiserror::Error;
use tracing::info;

use crate::model::{Registry, SupportDocument};

/// Failure of the initial document load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("request for '{url}' failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to parse support document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads the support document from a local path or an http(s) URL and
/// builds the registry.
pub fn load_document(source: &str) -> Result<Registry, LoadError> {
    let text = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_url(source)?
    } else {
        fs::read_to_string(source).map_err(|source_err| LoadError::Io {
            path: source.to_string(),
            source: source_err,
        })?
    };

    let doc: SupportDocument = serde_json::from_str(&text)?;
    info!(
        exporters = doc.exporters.len(),
        categories = doc.categories.len(),
        "loaded support document"
    );
    Ok(Registry::from_document(doc))
}

fn fetch_url(url: &str) -> Result<String, LoadError> {
    let map_err = |source: reqwest::Error| LoadError::Http {
        url: url.to_string(),
        source,
    };
    reqwest::blocking::get(url)
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text())
        .map_err(map_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "exporters": [{{"id": "a", "name": "A"}}],
                "categories": [{{"name": "C", "features": [{{"name": "F"}}]}}]
            }}"#
        )
        .unwrap();

        let registry = load_document(file.path().to_str().unwrap()).unwrap();
        assert_eq!(registry.exporter_count(), 1);
        assert_eq!(registry.features().len(), 1);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = load_document(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_document("/nonexistent/featgrid-data.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
