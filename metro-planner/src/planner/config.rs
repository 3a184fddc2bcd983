//! Planner configuration.

/// Configuration parameters for route planning.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Two stations on different lines closer than this (km) are treated
    /// as one interchange even when their names differ.
    pub transfer_radius_km: f64,

    /// Assumed spacing between stations (km), used to turn straight-line
    /// distance into a hop estimate for approximate legs.
    pub fallback_station_spacing_km: f64,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(transfer_radius_km: f64, fallback_station_spacing_km: f64) -> Self {
        Self {
            transfer_radius_km,
            fallback_station_spacing_km,
        }
    }

    /// Estimated hops to cover `distance_km` in a straight line.
    ///
    /// Never less than 1.
    pub fn estimated_hops(&self, distance_km: f64) -> u32 {
        let hops = (distance_km / self.fallback_station_spacing_km).round();
        if hops.is_finite() && hops >= 1.0 {
            hops as u32
        } else {
            1
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            transfer_radius_km: 0.3,
            fallback_station_spacing_km: 0.5, // 500 m between stops
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.transfer_radius_km, 0.3);
        assert_eq!(config.fallback_station_spacing_km, 0.5);
    }

    #[test]
    fn custom_config() {
        let config = PlannerConfig::new(0.2, 0.8);

        assert_eq!(config.transfer_radius_km, 0.2);
        assert_eq!(config.fallback_station_spacing_km, 0.8);
    }

    #[test]
    fn estimated_hops() {
        let config = PlannerConfig::default();

        assert_eq!(config.estimated_hops(0.0), 1);
        assert_eq!(config.estimated_hops(0.2), 1);
        assert_eq!(config.estimated_hops(1.0), 2);
        assert_eq!(config.estimated_hops(2.3), 5);
        assert_eq!(config.estimated_hops(f64::NAN), 1);
    }
}
