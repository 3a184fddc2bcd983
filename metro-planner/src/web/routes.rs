//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use chrono::Utc;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{Coordinate, Route};
use crate::navigation::{NavigationTracker, PositionFix};
use crate::planner::PlannerError;

use super::dto::*;
use super::sessions::SessionId;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations/nearest", get(nearest_station))
        .route("/route/plan", post(plan_route))
        .route("/navigation", post(start_navigation))
        .route("/navigation/:id", delete(end_navigation))
        .route("/navigation/:id/position", post(update_position))
        .route("/navigation/:id/route", put(replace_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Nearest catalog station to a point.
async fn nearest_station(
    State(state): State<AppState>,
    Query(query): Query<NearestStationQuery>,
) -> Result<Json<NearestStationResponse>, AppError> {
    let point = validate_coordinate(Coordinate::new(query.lat, query.lon))?;
    let (station, distance_km) = state.catalog.nearest_station(point)?;

    Ok(Json(NearestStationResponse {
        station: StationResult::from_station(station),
        distance_km,
    }))
}

/// Plan a route between two points.
async fn plan_route(
    State(state): State<AppState>,
    Json(req): Json<PlanRouteRequest>,
) -> Result<Json<RouteResult>, AppError> {
    let route = plan(&state, req.origin, req.destination).await?;
    Ok(Json(RouteResult::from_route(&route)))
}

/// Plan a route and start tracking progress along it.
async fn start_navigation(
    State(state): State<AppState>,
    Json(req): Json<PlanRouteRequest>,
) -> Result<(StatusCode, Json<NavigationSessionResponse>), AppError> {
    let route = plan(&state, req.origin, req.destination).await?;
    let tracker = NavigationTracker::new(route.clone(), (*state.navigation_config).clone());
    let progress = ProgressResult::from_tracker(&tracker, false);

    let session_id = state.sessions.start(tracker).await;

    Ok((
        StatusCode::CREATED,
        Json(NavigationSessionResponse {
            session_id,
            route: RouteResult::from_route(&route),
            progress,
        }),
    ))
}

/// Feed one position fix into a session.
async fn update_position(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    Json(req): Json<PositionUpdateRequest>,
) -> Result<Json<ProgressResult>, AppError> {
    let session = state.sessions.get(id).await.ok_or_else(|| session_not_found(id))?;

    let fix = PositionFix::new(
        validate_coordinate(Coordinate::new(req.lat, req.lon))?,
        req.timestamp.unwrap_or_else(Utc::now),
    );

    let mut tracker = session.lock().await;
    let advanced = tracker.record_fix(&fix).is_some();

    Ok(Json(ProgressResult::from_tracker(&tracker, advanced)))
}

/// Replan a session towards a new destination, restarting its progress.
async fn replace_route(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    Json(req): Json<PlanRouteRequest>,
) -> Result<Json<NavigationSessionResponse>, AppError> {
    let session = state.sessions.get(id).await.ok_or_else(|| session_not_found(id))?;
    let route = plan(&state, req.origin, req.destination).await?;

    let mut tracker = session.lock().await;
    tracker.replace_route(route.clone());

    Ok(Json(NavigationSessionResponse {
        session_id: id,
        route: RouteResult::from_route(&route),
        progress: ProgressResult::from_tracker(&tracker, false),
    }))
}

/// Stop navigating and discard the session.
async fn end_navigation(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> Result<StatusCode, AppError> {
    if state.sessions.end(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(id))
    }
}

/// Resolves both points to stations and plans between them, reusing cached
/// station-to-station routes.
async fn plan(
    state: &AppState,
    origin: Coordinate,
    destination: Coordinate,
) -> Result<Arc<Route>, AppError> {
    let origin = validate_coordinate(origin)?;
    let destination = validate_coordinate(destination)?;

    let planner = state.planner();
    let route = state.routes.plan_between(&planner, origin, destination).await?;

    Ok(Arc::new(route))
}

/// Rejects coordinates the planner is not defined for.
fn validate_coordinate(c: Coordinate) -> Result<Coordinate, AppError> {
    let valid = c.lat.is_finite()
        && c.lon.is_finite()
        && (-90.0..=90.0).contains(&c.lat)
        && (-180.0..=180.0).contains(&c.lon);

    if valid {
        Ok(c)
    } else {
        Err(AppError::BadRequest {
            message: format!("Invalid coordinate: {}, {}", c.lat, c.lon),
        })
    }
}

fn session_not_found(id: SessionId) -> AppError {
    AppError::NotFound {
        message: format!("Navigation session {id} not found"),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<PlannerError> for AppError {
    fn from(e: PlannerError) -> Self {
        match e {
            PlannerError::EmptyCatalog => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "Request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
