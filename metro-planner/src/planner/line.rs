//! Stops between two stations of the same line.
//!
//! A line is an ordered list of stations; the stops between two of them
//! are a contiguous slice of that list, not a graph traversal.

use tracing::warn;

use crate::domain::Station;

/// Stations passed when riding from `from` to `to` along `line_stations`.
///
/// The result always starts with `from` and ends with `to`, reversed as
/// needed when travelling against catalog order. If either station is not
/// on the line, the result degrades to `[from, to]`.
pub fn intermediate_stations<'a>(
    from: &'a Station,
    to: &'a Station,
    line_stations: &'a [Station],
) -> Vec<&'a Station> {
    let from_idx = line_stations.iter().position(|s| s.id == from.id);
    let to_idx = line_stations.iter().position(|s| s.id == to.id);

    let (Some(from_idx), Some(to_idx)) = (from_idx, to_idx) else {
        warn!(
            from = %from.id,
            to = %to.id,
            line = %from.line,
            "Station missing from its line, using straight segment"
        );
        return vec![from, to];
    };

    let (lo, hi) = (from_idx.min(to_idx), from_idx.max(to_idx));
    let mut stops: Vec<&Station> = line_stations[lo..=hi].iter().collect();
    if from_idx > to_idx {
        stops.reverse();
    }
    stops
}

/// Hops covered by a list of stops. Always at least 1.
pub fn hop_count(intermediates: &[&Station]) -> u32 {
    intermediates.len().saturating_sub(1).max(1) as u32
}

/// Hops between two stations of the same line.
pub fn line_hops(from: &Station, to: &Station, line_stations: &[Station]) -> u32 {
    hop_count(&intermediate_stations(from, to, line_stations))
}
