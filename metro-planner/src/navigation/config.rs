//! Navigation thresholds.

/// Distances (km) at which the tracker considers a landmark reached.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationConfig {
    /// Distance to the first station that counts as boarding.
    pub boarding_radius_km: f64,

    /// Distance to a leg's last stop that counts as leaving the leg.
    pub leg_end_radius_km: f64,

    /// Distance to the final destination that counts as arrival.
    pub arrival_radius_km: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            boarding_radius_km: 0.05,
            leg_end_radius_km: 0.1,
            arrival_radius_km: 0.05,
        }
    }
}
