//! Session-scoped agent cache with idle expiry
//!
//! Maps a session id to a live agent instance. Entries are refreshed on
//! every access and evicted once idle longer than the TTL, either lazily on
//! access or by the periodic sweep. An expired entry is never handed out.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::BoxFuture;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

type AgentFactory<A> = Box<dyn Fn(&str) -> BoxFuture<'static, crate::Result<A>> + Send + Sync>;

struct Entry<A> {
    agent: Arc<A>,
    last_accessed: Instant,
}

/// Cache of per-session agent instances with TTL
pub struct SessionCache<A> {
    entries: Mutex<HashMap<String, Entry<A>>>,
    ttl: Duration,
    factory: AgentFactory<A>,
}

impl<A: Send + Sync + 'static> SessionCache<A> {
    /// Create a cache that builds missing agents with the given factory
    pub fn new<F>(ttl: Duration, factory: F) -> Self
    where
        F: Fn(&str) -> BoxFuture<'static, crate::Result<A>> + Send + Sync + 'static,
    {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            factory: Box::new(factory),
        }
    }

    /// Get the agent for a session, constructing one if absent or expired.
    ///
    /// Returns the agent and whether it was created by this call. A hit
    /// refreshes the entry's last-accessed time. A factory error propagates
    /// and leaves no entry behind.
    pub async fn get_or_create(&self, session_id: &str) -> crate::Result<(Arc<A>, bool)> {
        let mut entries = self.entries.lock().await;

        if let Some(entry) = entries.get_mut(session_id) {
            if entry.last_accessed.elapsed() <= self.ttl {
                entry.last_accessed = Instant::now();
                return Ok((entry.agent.clone(), false));
            }
            debug!("Agent for session {} has expired", session_id);
            entries.remove(session_id);
        }

        info!("Creating new agent for session {}", session_id);
        // The map lock is held across construction so a racing request for
        // the same session cannot build a second agent.
        let agent = Arc::new((self.factory)(session_id).await?);
        entries.insert(
            session_id.to_string(),
            Entry {
                agent: agent.clone(),
                last_accessed: Instant::now(),
            },
        );
        Ok((agent, true))
    }

    /// Remove every entry idle longer than the TTL, returning the count
    pub async fn evict_expired(&self) -> usize {
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.last_accessed.elapsed() <= self.ttl);
        let evicted = before - entries.len();
        if evicted > 0 {
            info!("Evicted {} expired session(s)", evicted);
        }
        evicted
    }

    /// Current number of cached sessions
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Whether the cache holds no sessions
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

/// Spawn the periodic eviction sweep for a cache
pub fn run_sweeper<A: Send + Sync + 'static>(
    cache: Arc<SessionCache<A>>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // the first tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let evicted = cache.evict_expired().await;
            debug!(
                "Session sweep complete: evicted {}, size {}",
                evicted,
                cache.len().await
            );
        }
    })
}
