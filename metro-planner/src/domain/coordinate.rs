//! Geographic coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 position in degrees.
///
/// No range validation is performed: callers are expected to hand in
/// finite latitudes and longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        distance_km(self.lat, self.lon, other.lat, other.lon)
    }
}

/// Haversine distance between two points, in kilometers.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_to_self() {
        let chatelet = Coordinate::new(48.8584, 2.3470);
        assert_eq!(chatelet.distance_km(&chatelet), 0.0);
    }

    #[test]
    fn paris_to_london() {
        // Roughly 344 km as the crow flies
        let paris = Coordinate::new(48.8566, 2.3522);
        let london = Coordinate::new(51.5074, -0.1278);

        let d = paris.distance_km(&london);
        assert!((d - 343.5).abs() < 2.0, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = distance_km(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111.19).abs() < 0.01, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = Coordinate::new(48.8738, 2.2950);
        let b = Coordinate::new(48.8443, 2.3740);
        assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 1e-12);
    }
}
