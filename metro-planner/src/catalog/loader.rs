//! JSON catalog loading.
//!
//! The catalog file is a JSON array of flat station records, listed in
//! running order line by line.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Coordinate, Station};

use super::StationCatalog;
use super::error::CatalogError;

/// One station as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: String,
    pub name: String,
    pub line: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<StationRecord> for Station {
    fn from(record: StationRecord) -> Self {
        Station::new(
            record.id,
            record.name,
            record.line,
            Coordinate::new(record.lat, record.lon),
        )
    }
}

/// Parses a catalog from a JSON string.
pub fn parse_catalog(json: &str) -> Result<StationCatalog, CatalogError> {
    let records: Vec<StationRecord> = serde_json::from_str(json)?;
    StationCatalog::new(records.into_iter().map(Station::from).collect())
}

/// Reads and parses a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<StationCatalog, CatalogError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&contents)?;
    info!(
        path = %path.display(),
        stations = catalog.len(),
        lines = catalog.lines().len(),
        "Loaded station catalog"
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineId, StationId};
    use tempfile::tempdir;

    const SAMPLE: &str = r#"[
        {"id": "1-1", "name": "Louvre - Rivoli", "line": "1", "lat": 48.8609, "lon": 2.3409},
        {"id": "1-2", "name": "Châtelet", "line": "1", "lat": 48.8584, "lon": 2.3470},
        {"id": "4-1", "name": "Châtelet", "line": "4", "lat": 48.8589, "lon": 2.3474}
    ]"#;

    #[test]
    fn parse_sample() {
        let catalog = parse_catalog(SAMPLE).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.line_stations(&LineId::new("1")).len(), 2);
        let chatelet = catalog.station(&StationId::new("4-1")).unwrap();
        assert_eq!(chatelet.name, "Châtelet");
        assert_eq!(chatelet.location, Coordinate::new(48.8589, 2.3474));
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stations.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.lines().len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_catalog("/nonexistent/path/stations.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/path/stations.json"));
    }

    #[test]
    fn malformed_json_rejected() {
        let err = parse_catalog(r#"[{"id": "1-1"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let json = r#"[
            {"id": "x", "name": "A", "line": "1", "lat": 0.0, "lon": 0.0},
            {"id": "x", "name": "B", "line": "2", "lat": 0.0, "lon": 0.0}
        ]"#;
        let err = parse_catalog(json).unwrap_err();
        assert_eq!(err.to_string(), "duplicate station id: x");
    }

    #[test]
    fn bundled_sample_catalog_parses() {
        let json = include_str!("../../data/stations.json");
        let catalog = parse_catalog(json).unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.line(&LineId::new("14")).is_some());
    }
}
