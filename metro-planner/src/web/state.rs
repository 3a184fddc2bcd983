//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, RouteCache};
use crate::catalog::StationCatalog;
use crate::navigation::NavigationConfig;
use crate::planner::{Planner, PlannerConfig};

use super::sessions::NavigationSessions;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Station catalog, loaded once at startup
    pub catalog: Arc<StationCatalog>,

    /// Route planner configuration
    pub planner_config: Arc<PlannerConfig>,

    /// Navigation thresholds for new sessions
    pub navigation_config: Arc<NavigationConfig>,

    /// Station-to-station route cache
    pub routes: Arc<RouteCache>,

    /// Active navigation sessions
    pub sessions: Arc<NavigationSessions>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        catalog: StationCatalog,
        planner_config: PlannerConfig,
        navigation_config: NavigationConfig,
        cache_config: &CacheConfig,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            planner_config: Arc::new(planner_config),
            navigation_config: Arc::new(navigation_config),
            routes: Arc::new(RouteCache::new(cache_config)),
            sessions: Arc::new(NavigationSessions::new(cache_config)),
        }
    }

    /// A planner over the shared catalog.
    pub fn planner(&self) -> Planner<'_> {
        Planner::new(&self.catalog, &self.planner_config)
    }
}
