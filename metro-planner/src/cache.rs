//! Caching layer for planned routes.
//!
//! Planning is deterministic over a static catalog, so a route between two
//! stations can be reused until the entry expires. Keys are station pairs;
//! callers re-apply their own walking endpoints to the cached route.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::{Coordinate, Route, Station, StationId};
use crate::planner::{Planner, PlannerError};

/// Cache key: (origin station, destination station).
type RouteKey = (StationId, StationId);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,

    /// Navigation sessions with no position update for this long are dropped.
    pub session_idle_timeout: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 10_000,
            session_idle_timeout: Duration::from_secs(30 * 60),
        }
    }
}

/// Cache of station-to-station routes.
pub struct RouteCache {
    routes: MokaCache<RouteKey, Arc<Route>>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Returns the cached route between two stations, planning it on a miss.
    pub async fn get_or_plan(
        &self,
        planner: &Planner<'_>,
        from: &Station,
        to: &Station,
    ) -> Arc<Route> {
        let key = (from.id.clone(), to.id.clone());

        if let Some(route) = self.routes.get(&key).await {
            trace!(from = %from.id, to = %to.id, "Route cache hit");
            return route;
        }

        let route = Arc::new(planner.plan_route(from, to));
        self.routes.insert(key, route.clone()).await;
        route
    }

    /// Resolves two points to stations and returns the route between them,
    /// carrying the requested points as walking endpoints.
    pub async fn plan_between(
        &self,
        planner: &Planner<'_>,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Route, PlannerError> {
        let ends = planner.resolve_endpoints(origin, destination)?;
        let route = self.get_or_plan(planner, ends.from, ends.to).await;
        Ok(ends.attach(Route::clone(&route)))
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}
