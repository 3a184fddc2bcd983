//! Metro route planner server.
//!
//! Plans station-to-station itineraries over a static metro catalog with
//! up to two changes of line, and tracks a traveler's progress along the
//! planned route from live position fixes.

pub mod cache;
pub mod catalog;
pub mod domain;
pub mod navigation;
pub mod planner;
pub mod web;
