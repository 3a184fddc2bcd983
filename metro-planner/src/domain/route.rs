//! Route types.
//!
//! A `Route` is the ordered list of legs from the origin station to the
//! destination station, plus the walking endpoints the traveler asked for.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Coordinate, Leg};

/// Minutes charged for every station-to-station hop.
pub const MINUTES_PER_HOP: u32 = 2;

/// Fixed minutes charged for every change of line.
pub const TRANSFER_PENALTY_MINUTES: u32 = 5;

/// How a route was constructed.
///
/// `Approximate` routes end with a straight-line leg that does not follow
/// any real line and should be caveated when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    Direct,
    SingleTransfer,
    DoubleTransfer,
    Approximate,
}

impl RouteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteKind::Direct => "direct",
            RouteKind::SingleTransfer => "single_transfer",
            RouteKind::DoubleTransfer => "double_transfer",
            RouteKind::Approximate => "approximate",
        }
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A planned itinerary.
///
/// # Invariants
///
/// - At least one leg
/// - `estimated_minutes() == 2 * total_hops() + 5 * transfers()`
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    kind: RouteKind,
    legs: Vec<Leg>,
    origin: Coordinate,
    destination: Coordinate,
}

impl Route {
    /// A single-leg route on one line.
    pub fn direct(leg: Leg) -> Self {
        Self::from_first(RouteKind::Direct, leg, Vec::new())
    }

    /// Two legs joined at one interchange.
    pub fn single_transfer(first: Leg, second: Leg) -> Self {
        Self::from_first(RouteKind::SingleTransfer, first, vec![second])
    }

    /// Three legs through an intermediate line.
    pub fn double_transfer(first: Leg, middle: Leg, last: Leg) -> Self {
        Self::from_first(RouteKind::DoubleTransfer, first, vec![middle, last])
    }

    /// A ride followed by a straight-line estimate to the destination.
    pub fn approximate(ride: Leg, estimate: Leg) -> Self {
        Self::from_first(RouteKind::Approximate, ride, vec![estimate])
    }

    /// The walking endpoints default to the first and last stop; see
    /// [`Route::with_endpoints`].
    fn from_first(kind: RouteKind, first: Leg, rest: Vec<Leg>) -> Self {
        let origin = first.first_coordinate();
        let mut legs = Vec::with_capacity(rest.len() + 1);
        legs.push(first);
        legs.extend(rest);
        let destination = legs[legs.len() - 1].last_coordinate();

        Self {
            kind,
            legs,
            origin,
            destination,
        }
    }

    /// Replaces the walking endpoints with the traveler's requested points.
    pub fn with_endpoints(mut self, origin: Coordinate, destination: Coordinate) -> Self {
        self.origin = origin;
        self.destination = destination;
        self
    }

    pub fn kind(&self) -> RouteKind {
        self.kind
    }

    pub fn is_approximate(&self) -> bool {
        self.kind == RouteKind::Approximate
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// The first leg. Always present.
    pub fn first_leg(&self) -> &Leg {
        &self.legs[0]
    }

    /// Where the traveler starts walking from.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Where the traveler finally wants to be.
    pub fn destination(&self) -> Coordinate {
        self.destination
    }

    /// Sum of hops over all legs.
    pub fn total_hops(&self) -> u32 {
        self.legs.iter().map(Leg::hops).sum()
    }

    /// Number of changes of line.
    pub fn transfers(&self) -> u32 {
        (self.legs.len() - 1) as u32
    }

    /// Estimated travel time in minutes.
    pub fn estimated_minutes(&self) -> u32 {
        MINUTES_PER_HOP * self.total_hops() + TRANSFER_PENALTY_MINUTES * self.transfers()
    }
}
