//! Route planner over a static station catalog.
//!
//! This module answers: "how do I get from this station to that one?"
//!
//! The search is a bounded brute force over interchange candidates: a
//! direct ride, one change, two changes via any third line, and a
//! straight-line approximation when nothing else resolves.

mod config;
mod line;
mod search;
mod transfer;


pub use config::PlannerConfig;
pub use line::{hop_count, intermediate_stations, line_hops};
pub use search::{Planner, PlannerError, ResolvedEndpoints};
pub use transfer::{Transfer, find_transfer, interchanges, is_interchange};
