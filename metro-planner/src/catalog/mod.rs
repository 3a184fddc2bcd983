//! Station catalog.
//!
//! The catalog is loaded once at startup and never mutated afterwards. It
//! keeps stations in network order and groups them into lines; the order of
//! stations inside a line is what defines which stops are adjacent.

mod error;
mod loader;
mod nearest;

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{LineId, Station, StationId};

pub use error::CatalogError;
pub use loader::{StationRecord, load_catalog, parse_catalog};
pub use nearest::find_nearest_station;

/// All stations of one line, in running order.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    id: LineId,
    stations: Vec<Station>,
}

impl Line {
    pub fn id(&self) -> &LineId {
        &self.id
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Position of a station within this line.
    pub fn position(&self, id: &StationId) -> Option<usize> {
        self.stations.iter().position(|s| &s.id == id)
    }
}

/// Immutable, ordered collection of stations.
///
/// Lines are kept in order of first appearance; stations within a line in
/// catalog order.
#[derive(Debug, Clone, Default)]
pub struct StationCatalog {
    stations: Vec<Station>,
    lines: Vec<Line>,
    line_index: HashMap<LineId, usize>,
    by_id: HashMap<StationId, usize>,
}

impl StationCatalog {
    /// Builds a catalog from stations in network order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateStation` if two records share an id.
    pub fn new(stations: Vec<Station>) -> Result<Self, CatalogError> {
        let mut lines: Vec<Line> = Vec::new();
        let mut line_index = HashMap::new();
        let mut by_id = HashMap::with_capacity(stations.len());

        for (idx, station) in stations.iter().enumerate() {
            if by_id.insert(station.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateStation(station.id.clone()));
            }

            let slot = *line_index.entry(station.line.clone()).or_insert_with(|| {
                lines.push(Line {
                    id: station.line.clone(),
                    stations: Vec::new(),
                });
                lines.len() - 1
            });
            lines[slot].stations.push(station.clone());
        }

        debug!(
            stations = stations.len(),
            lines = lines.len(),
            "Built station catalog"
        );

        Ok(Self {
            stations,
            lines,
            line_index,
            by_id,
        })
    }

    /// All stations in catalog order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// All lines in order of first appearance.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Looks up a line by identifier.
    pub fn line(&self, id: &LineId) -> Option<&Line> {
        self.line_index.get(id).map(|&idx| &self.lines[idx])
    }

    /// Stations of a line in running order, empty if the line is unknown.
    pub fn line_stations(&self, id: &LineId) -> &[Station] {
        self.line(id).map(Line::stations).unwrap_or(&[])
    }

    /// Looks up a station by id.
    pub fn station(&self, id: &StationId) -> Option<&Station> {
        self.by_id.get(id).map(|&idx| &self.stations[idx])
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
