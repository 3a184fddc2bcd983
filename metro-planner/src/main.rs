use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use metro_planner::cache::CacheConfig;
use metro_planner::catalog::load_catalog;
use metro_planner::navigation::NavigationConfig;
use metro_planner::planner::PlannerConfig;
use metro_planner::web::{AppState, create_router};

/// Catalog used when `METRO_CATALOG_PATH` is not set.
const DEFAULT_CATALOG_PATH: &str = "data/stations.json";

/// Address used when `METRO_BIND_ADDR` is not set.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("metro_planner=info,tower_http=info")),
        )
        .init();

    let catalog_path =
        std::env::var("METRO_CATALOG_PATH").unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string());
    let addr: SocketAddr = std::env::var("METRO_BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .expect("METRO_BIND_ADDR must be a socket address");

    // Load the station catalog (fail fast if unavailable)
    let catalog = load_catalog(&catalog_path).expect("Failed to load station catalog");

    // Build app state
    let state = AppState::new(
        catalog,
        PlannerConfig::default(),
        NavigationConfig::default(),
        &CacheConfig::default(),
    );

    let app = create_router(state);

    info!(%addr, "Metro planner listening");
    info!("  GET    /health");
    info!("  GET    /api/stations/nearest?lat=&lon=");
    info!("  POST   /route/plan");
    info!("  POST   /navigation");
    info!("  POST   /navigation/:id/position");
    info!("  PUT    /navigation/:id/route");
    info!("  DELETE /navigation/:id");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
