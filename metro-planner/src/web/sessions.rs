//! Live navigation sessions.
//!
//! Each session owns one tracker behind its own mutex, so position updates
//! for a session are applied one at a time while different sessions
//! proceed independently. Clients cancel by simply going quiet, so sessions
//! expire after an idle period.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use moka::future::Cache as MokaCache;
use tokio::sync::Mutex;
use tracing::info;

use crate::cache::CacheConfig;
use crate::navigation::NavigationTracker;

/// Session identifier handed to clients.
pub type SessionId = u64;

/// Shared handle to one session's tracker.
pub type SessionHandle = Arc<Mutex<NavigationTracker>>;

/// Registry of active navigation sessions.
pub struct NavigationSessions {
    next_id: AtomicU64,
    sessions: MokaCache<SessionId, SessionHandle>,
}

impl NavigationSessions {
    pub fn new(config: &CacheConfig) -> Self {
        let sessions = MokaCache::builder()
            .time_to_idle(config.session_idle_timeout)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            next_id: AtomicU64::new(0),
            sessions,
        }
    }

    /// Registers a tracker and returns its session id.
    pub async fn start(&self, tracker: NavigationTracker) -> SessionId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let legs = tracker.route().leg_count();

        self.sessions.insert(id, Arc::new(Mutex::new(tracker))).await;
        info!(session = id, legs, "Navigation session started");

        id
    }

    /// Looks up a session. Counts as activity for idle expiry.
    pub async fn get(&self, id: SessionId) -> Option<SessionHandle> {
        self.sessions.get(&id).await
    }

    /// Ends a session. Returns false if it did not exist or had expired.
    pub async fn end(&self, id: SessionId) -> bool {
        let removed = self.sessions.remove(&id).await.is_some();
        if removed {
            info!(session = id, "Navigation session ended");
        }
        removed
    }

    pub async fn len(&self) -> u64 {
        self.sessions.run_pending_tasks().await;
        self.sessions.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::{Coordinate, Leg, LineId, Route, Station};
    use crate::navigation::{NavigationConfig, NavigationStep};

    fn tracker() -> NavigationTracker {
        let a = Station::new("a", "Bastille", "1", Coordinate::new(48.8531, 2.3691));
        let b = Station::new("b", "Nation", "1", Coordinate::new(48.8483, 2.3959));
        let route = Route::direct(Leg::straight(LineId::new("1"), &a, &b, 3));
        NavigationTracker::new(Arc::new(route), NavigationConfig::default())
    }

    #[tokio::test]
    async fn start_get_end() {
        let sessions = NavigationSessions::new(&CacheConfig::default());
        assert!(sessions.is_empty().await);

        let id = sessions.start(tracker()).await;
        let other = sessions.start(tracker()).await;
        assert_ne!(id, other);
        assert_eq!(sessions.len().await, 2);

        let handle = sessions.get(id).await.unwrap();
        {
            let mut t = handle.lock().await;
            assert_eq!(
                t.advance(Coordinate::new(48.8531, 2.3691)),
                Some(NavigationStep::OnLeg(1))
            );
        }

        // Same tracker behind the handle
        let again = sessions.get(id).await.unwrap();
        assert_eq!(again.lock().await.current_step_index(), 1);

        assert!(sessions.end(id).await);
        assert!(!sessions.end(id).await);
        assert!(sessions.get(id).await.is_none());
        assert_eq!(sessions.len().await, 1);
    }

    #[tokio::test]
    async fn idle_session_expires() {
        let config = CacheConfig {
            session_idle_timeout: Duration::from_millis(50),
            ..CacheConfig::default()
        };
        let sessions = NavigationSessions::new(&config);

        let id = sessions.start(tracker()).await;
        assert!(sessions.get(id).await.is_some());

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(sessions.get(id).await.is_none());
        assert!(sessions.is_empty().await);
        assert!(!sessions.end(id).await);
    }
}
