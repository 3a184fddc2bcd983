//! Live navigation along a planned route.
//!
//! A tracker is fed the route once and then every position fix the host
//! receives. It moves forward one step at a time as the traveler reaches
//! the boarding station, the end of each leg and finally the destination.
//!
//! Trackers are single-writer: hosts receiving fixes asynchronously must
//! serialize calls into one tracker.

mod config;
mod progress;

pub use config::NavigationConfig;
pub use progress::{NavigationStep, NavigationTracker, PositionFix};
