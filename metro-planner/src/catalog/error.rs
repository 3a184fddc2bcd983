//! Catalog error types.

use std::path::PathBuf;

use crate::domain::StationId;

/// Errors that can occur while loading or building the station catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog contents are not valid JSON station records
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two records share the same station id
    #[error("duplicate station id: {0}")]
    DuplicateStation(StationId),
}
