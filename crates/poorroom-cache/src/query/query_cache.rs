//! In-memory query cache.
//!
//! Holds the last successful result of each query together with the time it
//! was fetched. The cache is an explicit service: callers own an
//! `Arc<QueryCache>` and pass it to whoever needs it.

use dashmap::DashMap;
use std::any::Any;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::keys::QueryKey;

/// Query cache configuration
#[derive(Debug, Clone)]
pub struct QueryCacheConfig {
    /// How long a result is served without refetching
    pub stale_time: Duration,
}

impl Default for QueryCacheConfig {
    fn default() -> Self {
        Self {
            stale_time: Duration::from_secs(60),
        }
    }
}

impl From<&poorroom_common::QueryConfig> for QueryCacheConfig {
    fn from(config: &poorroom_common::QueryConfig) -> Self {
        Self {
            stale_time: config.stale_time(),
        }
    }
}

type Erased = Arc<dyn Any + Send + Sync>;

#[derive(Clone)]
struct CacheEntry {
    value: Erased,
    fetched_at: Instant,
}

/// Keyed store of query results
pub struct QueryCache {
    entries: DashMap<QueryKey, CacheEntry>,
    config: QueryCacheConfig,
}

impl std::fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCache")
            .field("entries", &self.entries.len())
            .field("stale_time", &self.config.stale_time)
            .finish()
    }
}

/// Shared query cache handle
pub type SharedQueryCache = Arc<QueryCache>;

/// Create a query cache wrapped in Arc
#[must_use]
pub fn create_shared_cache(config: QueryCacheConfig) -> SharedQueryCache {
    Arc::new(QueryCache::new(config))
}

impl QueryCache {
    #[must_use]
    pub fn new(config: QueryCacheConfig) -> Self {
        Self {
            entries: DashMap::new(),
            config,
        }
    }

    pub fn stale_time(&self) -> Duration {
        self.config.stale_time
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Whether a cached value exists and is still fresh
    pub fn is_fresh(&self, key: &QueryKey) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| self.entry_is_fresh(&entry))
    }

    fn entry_is_fresh(&self, entry: &CacheEntry) -> bool {
        entry.fetched_at.elapsed() < self.config.stale_time
    }

    /// Fresh cached value, if any
    ///
    /// A value stored under the key with a different type counts as a miss.
    pub fn get<T>(&self, key: &QueryKey) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        let entry = self.entries.get(key)?;
        if !self.entry_is_fresh(&entry) {
            return None;
        }
        entry.value.clone().downcast::<T>().ok()
    }

    /// Cached value regardless of age
    pub fn peek<T>(&self, key: &QueryKey) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        let value = self.entries.get(key)?.value.clone();
        value.downcast::<T>().ok()
    }

    /// Store a value, replacing any previous entry
    pub fn set<T>(&self, key: QueryKey, value: T) -> Arc<T>
    where
        T: Any + Send + Sync,
    {
        let value = Arc::new(value);
        let erased: Erased = value.clone();
        self.entries.insert(
            key,
            CacheEntry {
                value: erased,
                fetched_at: Instant::now(),
            },
        );
        value
    }

    /// Return the fresh cached value or run `fetcher` and cache its result
    ///
    /// Errors are returned unchanged and never cached.
    pub async fn fetch<T, E, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<Arc<T>, E>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(hit) = self.get::<T>(&key) {
            debug!(key = %key, "Query cache hit");
            return Ok(hit);
        }

        debug!(key = %key, "Query cache miss");
        let value = fetcher().await?;
        Ok(self.set(key, value))
    }

    /// Drop one entry
    pub fn invalidate(&self, key: &QueryKey) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            debug!(key = %key, "Query invalidated");
        }
        removed
    }

    /// Drop every entry under `prefix`, returning how many were removed
    pub fn invalidate_prefix(&self, prefix: &QueryKey) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before.saturating_sub(self.entries.len());
        debug!(prefix = %prefix, removed, "Queries invalidated");
        removed
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(QueryCacheConfig::default())
    }
}
