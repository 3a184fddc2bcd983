//! Navigation progress state machine.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Coordinate, Leg, Route};

use super::config::NavigationConfig;

/// Where the traveler is along the route.
///
/// Steps only ever move forward within one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "leg", rename_all = "snake_case")]
pub enum NavigationStep {
    /// Walking to the first station.
    WalkingToOrigin,
    /// Riding leg `n`, counted from 1.
    OnLeg(usize),
    /// Walking from the last station to the destination.
    WalkingToDestination,
    /// Journey complete.
    Arrived,
}

impl NavigationStep {
    /// Integer view of the step for a route with `leg_count` legs:
    /// `0`, `1..=leg_count`, `leg_count + 1`, `leg_count + 2`.
    pub fn index(&self, leg_count: usize) -> usize {
        match self {
            NavigationStep::WalkingToOrigin => 0,
            NavigationStep::OnLeg(n) => *n,
            NavigationStep::WalkingToDestination => leg_count + 1,
            NavigationStep::Arrived => leg_count + 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationStep::WalkingToOrigin => "walking_to_origin",
            NavigationStep::OnLeg(_) => "on_leg",
            NavigationStep::WalkingToDestination => "walking_to_destination",
            NavigationStep::Arrived => "arrived",
        }
    }
}

impl fmt::Display for NavigationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationStep::OnLeg(n) => write!(f, "on_leg({n})"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// A timestamped position from the device location service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionFix {
    pub coordinate: Coordinate,
    pub timestamp: DateTime<Utc>,
}

impl PositionFix {
    pub fn new(coordinate: Coordinate, timestamp: DateTime<Utc>) -> Self {
        Self {
            coordinate,
            timestamp,
        }
    }
}

/// Tracks progress along one active route.
#[derive(Debug, Clone)]
pub struct NavigationTracker {
    route: Arc<Route>,
    step: NavigationStep,
    config: NavigationConfig,
    last_fix_at: Option<DateTime<Utc>>,
}

impl NavigationTracker {
    /// Starts tracking `route` from the walk to its first station.
    pub fn new(route: Arc<Route>, config: NavigationConfig) -> Self {
        Self {
            route,
            step: NavigationStep::WalkingToOrigin,
            config,
            last_fix_at: None,
        }
    }

    /// Swaps in a new route and restarts from the walk to its first station.
    pub fn replace_route(&mut self, route: Arc<Route>) {
        debug!(legs = route.leg_count(), "Navigation route replaced");
        self.route = route;
        self.step = NavigationStep::WalkingToOrigin;
        self.last_fix_at = None;
    }

    pub fn route(&self) -> &Arc<Route> {
        &self.route
    }

    pub fn current_step(&self) -> NavigationStep {
        self.step
    }

    /// Integer view of the current step; see [`NavigationStep::index`].
    pub fn current_step_index(&self) -> usize {
        self.step.index(self.route.leg_count())
    }

    pub fn is_arrived(&self) -> bool {
        self.step == NavigationStep::Arrived
    }

    /// The leg being ridden, if any.
    pub fn current_leg(&self) -> Option<&Leg> {
        match self.step {
            NavigationStep::OnLeg(n) => self.route.legs().get(n - 1),
            _ => None,
        }
    }

    /// Feeds one position. Returns the new step if it moved.
    ///
    /// At most one step is taken per call, even when the position already
    /// satisfies later thresholds.
    pub fn advance(&mut self, position: Coordinate) -> Option<NavigationStep> {
        let next = self.next_step(position)?;

        debug!(
            from = %self.step,
            to = %next,
            lat = position.lat,
            lon = position.lon,
            "Navigation step advanced"
        );
        self.step = next;
        Some(next)
    }

    /// Feeds one timestamped fix.
    ///
    /// Fixes older than the last accepted one are dropped without touching
    /// the step.
    pub fn record_fix(&mut self, fix: &PositionFix) -> Option<NavigationStep> {
        if let Some(last) = self.last_fix_at
            && fix.timestamp < last
        {
            debug!(
                fix_at = %fix.timestamp,
                last_at = %last,
                "Dropping out-of-order position fix"
            );
            return None;
        }

        self.last_fix_at = Some(fix.timestamp);
        self.advance(fix.coordinate)
    }

    fn next_step(&self, position: Coordinate) -> Option<NavigationStep> {
        let legs = self.route.legs();

        match self.step {
            NavigationStep::WalkingToOrigin => {
                let boarding = self.route.first_leg().first_coordinate();
                (position.distance_km(&boarding) < self.config.boarding_radius_km)
                    .then_some(NavigationStep::OnLeg(1))
            }
            NavigationStep::OnLeg(n) => {
                let leg = legs.get(n.checked_sub(1)?)?;
                if position.distance_km(&leg.last_coordinate()) >= self.config.leg_end_radius_km {
                    return None;
                }
                if n == legs.len() {
                    Some(NavigationStep::WalkingToDestination)
                } else {
                    Some(NavigationStep::OnLeg(n + 1))
                }
            }
            NavigationStep::WalkingToDestination => {
                let destination = self.route.destination();
                (position.distance_km(&destination) < self.config.arrival_radius_km)
                    .then_some(NavigationStep::Arrived)
            }
            NavigationStep::Arrived => None,
        }
    }
}
