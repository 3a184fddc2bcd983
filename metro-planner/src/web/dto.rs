//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, Leg, Route, Station};
use crate::navigation::{NavigationStep, NavigationTracker};

/// Query for the nearest station.
#[derive(Debug, Deserialize)]
pub struct NearestStationQuery {
    pub lat: f64,
    pub lon: f64,
}

/// A station in responses.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,
    pub name: String,
    pub line: String,
    pub lat: f64,
    pub lon: f64,
}

impl StationResult {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
            line: station.line.to_string(),
            lat: station.location.lat,
            lon: station.location.lon,
        }
    }
}

/// Response for nearest-station lookup.
#[derive(Debug, Serialize)]
pub struct NearestStationResponse {
    pub station: StationResult,

    /// Straight-line distance from the query point
    pub distance_km: f64,
}

/// Request to plan a route between two points.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
}

/// One leg of a planned route.
#[derive(Debug, Serialize)]
pub struct LegResult {
    /// Line identifier
    pub line: String,

    /// Boarding station name
    pub from: String,

    /// Alighting station name
    pub to: String,

    /// Station-to-station hops
    pub hops: u32,

    /// Stop coordinates in travel order
    pub path: Vec<Coordinate>,
}

impl LegResult {
    pub fn from_leg(leg: &Leg) -> Self {
        Self {
            line: leg.line().to_string(),
            from: leg.from_name().to_string(),
            to: leg.to_name().to_string(),
            hops: leg.hops(),
            path: leg.path().to_vec(),
        }
    }
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// How the route was built ("direct", ..., "approximate")
    pub kind: String,

    /// True when the last leg is a straight-line estimate
    pub approximate: bool,

    pub legs: Vec<LegResult>,

    pub total_hops: u32,

    pub transfers: u32,

    /// Estimated travel time in minutes
    pub estimated_minutes: u32,

    /// Walking start point
    pub origin: Coordinate,

    /// Walking end point
    pub destination: Coordinate,
}

impl RouteResult {
    pub fn from_route(route: &Route) -> Self {
        Self {
            kind: route.kind().to_string(),
            approximate: route.is_approximate(),
            legs: route.legs().iter().map(LegResult::from_leg).collect(),
            total_hops: route.total_hops(),
            transfers: route.transfers(),
            estimated_minutes: route.estimated_minutes(),
            origin: route.origin(),
            destination: route.destination(),
        }
    }
}

/// Navigation progress snapshot.
#[derive(Debug, Serialize)]
pub struct ProgressResult {
    /// 0 walking in, 1..=legs riding, legs+1 walking out, legs+2 arrived
    pub step_index: usize,

    pub step: NavigationStep,

    pub arrived: bool,

    /// Whether the last position moved the step forward
    pub advanced: bool,
}

impl ProgressResult {
    pub fn from_tracker(tracker: &NavigationTracker, advanced: bool) -> Self {
        Self {
            step_index: tracker.current_step_index(),
            step: tracker.current_step(),
            arrived: tracker.is_arrived(),
            advanced,
        }
    }
}

/// Response when a navigation session starts or its route is replaced.
#[derive(Debug, Serialize)]
pub struct NavigationSessionResponse {
    pub session_id: u64,
    pub route: RouteResult,
    pub progress: ProgressResult,
}

/// A position fix posted by the device.
#[derive(Debug, Deserialize)]
pub struct PositionUpdateRequest {
    pub lat: f64,
    pub lon: f64,

    /// Fix time; defaults to the time the request is received
    pub timestamp: Option<DateTime<Utc>>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
