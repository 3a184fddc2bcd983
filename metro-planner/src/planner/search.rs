//! Route construction.
//!
//! Routes are tried in strict priority order: a direct ride, one
//! interchange, two interchanges through a third line, and finally an
//! approximate route that always succeeds.

use tracing::debug;

use crate::catalog::{StationCatalog, find_nearest_station};
use crate::domain::{Coordinate, Leg, Route, Station};

use super::config::PlannerConfig;
use super::line::{hop_count, intermediate_stations, line_hops};
use super::transfer::{find_transfer, interchanges};

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlannerError {
    /// No station to resolve a coordinate against
    #[error("station catalog is empty")]
    EmptyCatalog,
}

/// Two request points and the stations they resolve to.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedEndpoints<'a> {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub from: &'a Station,
    pub to: &'a Station,
}

impl ResolvedEndpoints<'_> {
    /// Stamps the requested points onto a station-to-station route.
    pub fn attach(&self, route: Route) -> Route {
        route.with_endpoints(self.origin, self.destination)
    }
}

/// Route planner over a static catalog.
///
/// Holds only shared references, so one catalog can serve any number of
/// concurrent planners.
pub struct Planner<'a> {
    catalog: &'a StationCatalog,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(catalog: &'a StationCatalog, config: &'a PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Resolves two points to their nearest stations.
    pub fn resolve_endpoints(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<ResolvedEndpoints<'a>, PlannerError> {
        let (from, walk_in) = self.catalog.nearest_station(origin)?;
        let (to, walk_out) = self.catalog.nearest_station(destination)?;

        debug!(
            from = %from.id,
            to = %to.id,
            walk_in_km = walk_in,
            walk_out_km = walk_out,
            "Resolved route endpoints"
        );

        Ok(ResolvedEndpoints {
            origin,
            destination,
            from,
            to,
        })
    }

    /// Plans a route between two arbitrary points.
    ///
    /// Both points are resolved to their nearest stations; the returned
    /// route keeps the requested points as its walking endpoints.
    pub fn plan_between(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Route, PlannerError> {
        let ends = self.resolve_endpoints(origin, destination)?;
        Ok(ends.attach(self.plan_route(ends.from, ends.to)))
    }

    /// Plans a route between two stations. Never fails.
    pub fn plan_route(&self, from: &Station, to: &Station) -> Route {
        let route = if from.line == to.line {
            self.direct(from, to)
        } else if let Some(route) = self.single_transfer(from, to) {
            route
        } else if let Some(route) = self.double_transfer(from, to) {
            route
        } else {
            self.approximate(from, to)
        };

        debug!(
            from = %from.id,
            to = %to.id,
            kind = %route.kind(),
            hops = route.total_hops(),
            minutes = route.estimated_minutes(),
            "Planned route"
        );

        route
    }

    fn direct(&self, from: &Station, to: &Station) -> Route {
        Route::direct(self.ride(from, to))
    }

    fn single_transfer(&self, from: &Station, to: &Station) -> Option<Route> {
        let origin_line = self.catalog.line_stations(&from.line);
        let dest_line = self.catalog.line_stations(&to.line);

        let transfer = find_transfer(from, origin_line, dest_line, to, self.config)?;

        Some(Route::single_transfer(
            self.ride(from, transfer.departure_side),
            self.ride(transfer.arrival_side, to),
        ))
    }

    /// Cheapest ride through any third line. Every entry onto the middle
    /// line is scored against every exit from it.
    fn double_transfer(&self, from: &Station, to: &Station) -> Option<Route> {
        let origin_line = self.catalog.line_stations(&from.line);
        let dest_line = self.catalog.line_stations(&to.line);

        // (cost, [leave origin line, board mid, leave mid, board dest line])
        let mut best: Option<(u32, [&Station; 4])> = None;

        for mid in self.catalog.lines() {
            if mid.id() == &from.line || mid.id() == &to.line {
                continue;
            }

            let exits: Vec<_> = interchanges(mid.stations(), dest_line, self.config).collect();
            if exits.is_empty() {
                continue;
            }

            for (leave_origin, board_mid) in interchanges(origin_line, mid.stations(), self.config)
            {
                let to_mid = line_hops(from, leave_origin, origin_line);

                for &(leave_mid, board_dest) in &exits {
                    let total = to_mid
                        + line_hops(board_mid, leave_mid, mid.stations())
                        + line_hops(board_dest, to, dest_line);

                    if best.is_none_or(|(cost, _)| total < cost) {
                        best = Some((total, [leave_origin, board_mid, leave_mid, board_dest]));
                    }
                }
            }
        }

        let (_, [leave_origin, board_mid, leave_mid, board_dest]) = best?;
        Some(Route::double_transfer(
            self.ride(from, leave_origin),
            self.ride(board_mid, leave_mid),
            self.ride(board_dest, to),
        ))
    }

    /// Rides the origin line as close to the destination as it gets, then
    /// covers the remaining gap with a straight-line estimate.
    fn approximate(&self, from: &Station, to: &Station) -> Route {
        let origin_line = self.catalog.line_stations(&from.line);
        let exit = find_nearest_station(to.location, origin_line)
            .map(|(station, _)| station)
            .unwrap_or(from);

        let gap_km = exit.distance_km(to);
        let estimate = Leg::straight(
            to.line.clone(),
            exit,
            to,
            self.config.estimated_hops(gap_km),
        );

        debug!(
            from = %from.id,
            to = %to.id,
            exit = %exit.id,
            gap_km,
            "No interchange found, estimating final leg"
        );

        Route::approximate(self.ride(from, exit), estimate)
    }

    /// A leg along `from`'s line.
    fn ride(&self, from: &Station, to: &Station) -> Leg {
        let line_stations = self.catalog.line_stations(&from.line);
        let stops = intermediate_stations(from, to, line_stations);

        Leg::new(
            from.line.clone(),
            from,
            to,
            hop_count(&stops),
            stops.iter().map(|s| s.location).collect(),
        )
    }
}
