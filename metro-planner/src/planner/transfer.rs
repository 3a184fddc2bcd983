//! Interchange discovery between two lines.
//!
//! Catalogs are the size of one city's network, so every station pair
//! across the two lines is checked.

use crate::domain::Station;

use super::config::PlannerConfig;
use super::line::line_hops;

/// A change of line between two consecutive legs.
#[derive(Debug, Clone, Copy)]
pub struct Transfer<'a> {
    /// Where the traveler leaves the first line.
    pub departure_side: &'a Station,
    /// Where the traveler boards the second line.
    pub arrival_side: &'a Station,
    /// Hops ridden on the first line to reach the interchange.
    pub hops_from_origin: u32,
    /// Hops ridden on the second line after the interchange.
    pub hops_to_destination: u32,
}

impl Transfer<'_> {
    /// Total hops on both sides of the interchange.
    pub fn total_hops(&self) -> u32 {
        self.hops_from_origin + self.hops_to_destination
    }
}

/// Whether two stations on different lines form an interchange.
///
/// Matching names always count; otherwise the stations must be closer than
/// the configured transfer radius.
pub fn is_interchange(a: &Station, b: &Station, config: &PlannerConfig) -> bool {
    a.name == b.name || a.distance_km(b) < config.transfer_radius_km
}

/// Every interchange pair from `left` onto `right`, in catalog order.
pub fn interchanges<'a>(
    left: &'a [Station],
    right: &'a [Station],
    config: &PlannerConfig,
) -> impl Iterator<Item = (&'a Station, &'a Station)> {
    left.iter().flat_map(move |candidate| {
        right
            .iter()
            .filter(move |other| is_interchange(candidate, other, config))
            .map(move |other| (candidate, other))
    })
}

/// Finds the cheapest interchange from `origin_line` onto `target_line`.
///
/// Cost is the hops from `origin` to the interchange plus the hops from the
/// interchange to `destination`. Ties keep the first pair encountered.
pub fn find_transfer<'a>(
    origin: &'a Station,
    origin_line: &'a [Station],
    target_line: &'a [Station],
    destination: &'a Station,
    config: &PlannerConfig,
) -> Option<Transfer<'a>> {
    let mut best: Option<Transfer<'a>> = None;

    for (candidate, other) in interchanges(origin_line, target_line, config) {
        let transfer = Transfer {
            departure_side: candidate,
            arrival_side: other,
            hops_from_origin: line_hops(origin, candidate, origin_line),
            hops_to_destination: line_hops(other, destination, target_line),
        };

        if best.is_none_or(|b| transfer.total_hops() < b.total_hops()) {
            best = Some(transfer);
        }
    }

    best
}
