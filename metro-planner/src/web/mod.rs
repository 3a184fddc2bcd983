//! Web layer for the metro route planner.
//!
//! Provides HTTP endpoints for nearest-station lookup, route planning and
//! live navigation sessions.

mod dto;
mod routes;
mod sessions;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use sessions::{NavigationSessions, SessionHandle, SessionId};
pub use state::AppState;
