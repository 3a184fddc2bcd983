//! Route leg type.
//!
//! A `Leg` is one uninterrupted ride on a single line, from boarding to
//! alighting, together with the polyline of stops it passes.

use super::{Coordinate, LineId, Station};

/// A single ride on one line.
///
/// # Invariants
///
/// - `hops >= 1`, so no leg ever contributes zero travel time
/// - `path` is non-empty; its first point is the boarding station and its
///   last point the alighting station
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    line: LineId,
    from_name: String,
    to_name: String,
    hops: u32,
    path: Vec<Coordinate>,
}

impl Leg {
    /// Builds a leg from `from` to `to` on `line`.
    ///
    /// `hops` is clamped to at least 1. An empty `path` is replaced with the
    /// straight segment between the two stations.
    pub fn new(
        line: LineId,
        from: &Station,
        to: &Station,
        hops: u32,
        path: Vec<Coordinate>,
    ) -> Self {
        let path = if path.is_empty() {
            vec![from.location, to.location]
        } else {
            path
        };

        Self {
            line,
            from_name: from.name.clone(),
            to_name: to.name.clone(),
            hops: hops.max(1),
            path,
        }
    }

    /// A straight two-point leg with no known intermediate stops.
    pub fn straight(line: LineId, from: &Station, to: &Station, hops: u32) -> Self {
        Self::new(line, from, to, hops, vec![from.location, to.location])
    }

    /// The line ridden on this leg.
    pub fn line(&self) -> &LineId {
        &self.line
    }

    /// Name of the boarding station.
    pub fn from_name(&self) -> &str {
        &self.from_name
    }

    /// Name of the alighting station.
    pub fn to_name(&self) -> &str {
        &self.to_name
    }

    /// Number of station-to-station segments traversed.
    pub fn hops(&self) -> u32 {
        self.hops
    }

    /// Stop coordinates in travel order, both ends included.
    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    /// Where the leg is boarded.
    pub fn first_coordinate(&self) -> Coordinate {
        self.path[0]
    }

    /// Where the leg is left.
    pub fn last_coordinate(&self) -> Coordinate {
        self.path[self.path.len() - 1]
    }
}
