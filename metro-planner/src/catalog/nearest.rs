//! Nearest-station search.

use crate::domain::{Coordinate, Station};
use crate::planner::PlannerError;

use super::StationCatalog;

/// Finds the station closest to `point`.
///
/// Linear scan in catalog order; on equal distances the earlier station
/// wins. Returns the station and its distance in kilometers.
///
/// # Errors
///
/// Returns `PlannerError::EmptyCatalog` if `stations` is empty.
pub fn find_nearest_station(
    point: Coordinate,
    stations: &[Station],
) -> Result<(&Station, f64), PlannerError> {
    let mut best: Option<(&Station, f64)> = None;

    for station in stations {
        let d = point.distance_km(&station.location);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((station, d)),
        }
    }

    best.ok_or(PlannerError::EmptyCatalog)
}

impl StationCatalog {
    /// Finds the catalog station closest to `point`.
    pub fn nearest_station(&self, point: Coordinate) -> Result<(&Station, f64), PlannerError> {
        find_nearest_station(point, self.stations())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn st(id: &str, lat: f64, lon: f64) -> Station {
        Station::new(id, id, "1", Coordinate::new(lat, lon))
    }

    #[test]
    fn empty_catalog_is_an_error() {
        let err = find_nearest_station(Coordinate::new(48.85, 2.35), &[]).unwrap_err();
        assert_eq!(err, PlannerError::EmptyCatalog);
    }

    #[test]
    fn exact_match_has_zero_distance() {
        let stations = vec![st("a", 48.80, 2.30), st("b", 48.85, 2.35), st("c", 48.90, 2.40)];

        let (station, d) = find_nearest_station(Coordinate::new(48.85, 2.35), &stations).unwrap();
        assert_eq!(station.id.as_str(), "b");
        assert_eq!(d, 0.0);
    }

    #[test]
    fn picks_closest() {
        let stations = vec![st("far", 48.95, 2.50), st("near", 48.851, 2.351)];

        let (station, d) = find_nearest_station(Coordinate::new(48.85, 2.35), &stations).unwrap();
        assert_eq!(station.id.as_str(), "near");
        assert!(d < 0.2);
    }

    #[test]
    fn ties_go_to_first_in_catalog_order() {
        // Same coordinates, different ids
        let stations = vec![st("first", 48.86, 2.36), st("second", 48.86, 2.36)];

        let (station, _) = find_nearest_station(Coordinate::new(48.85, 2.35), &stations).unwrap();
        assert_eq!(station.id.as_str(), "first");
    }

    #[test]
    fn catalog_method_delegates() {
        let catalog =
            StationCatalog::new(vec![st("a", 48.80, 2.30), st("b", 48.85, 2.35)]).unwrap();
        let (station, _) = catalog.nearest_station(Coordinate::new(48.849, 2.349)).unwrap();
        assert_eq!(station.id.as_str(), "b");

        let empty = StationCatalog::default();
        assert!(empty.nearest_station(Coordinate::new(0.0, 0.0)).is_err());
    }
}
