//! Domain types for the metro route planner.
//!
//! Value types shared by the catalog, the planner and the navigation
//! tracker. Legs and routes enforce their invariants at construction time,
//! so code that receives them can trust their shape.

mod coordinate;
mod leg;
mod route;
mod station;

pub use coordinate::{Coordinate, EARTH_RADIUS_KM, distance_km};
pub use leg::Leg;
pub use route::{MINUTES_PER_HOP, Route, RouteKind, TRANSFER_PENALTY_MINUTES};
pub use station::{LineId, Station, StationId};
