//! Query handle
//!
//! A query pairs a cache key with a fetcher and tracks the state of its last
//! run. Fresh cached data is served without calling the fetcher.

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use parking_lot::RwLock;
use poorroom_cache::{QueryKey, SharedQueryCache};
use poorroom_common::{ClientError, ClientResult};
use tracing::{debug, warn};

/// Observable state of a query
#[derive(Debug)]
pub enum QueryState<T> {
    Idle,
    Loading,
    Success(Arc<T>),
    Error(ClientError),
}

impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Loading => Self::Loading,
            Self::Success(data) => Self::Success(Arc::clone(data)),
            Self::Error(err) => Self::Error(err.clone()),
        }
    }
}

impl<T> QueryState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn data(&self) -> Option<Arc<T>> {
        match self {
            Self::Success(data) => Some(Arc::clone(data)),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

type Fetcher<T> = Box<dyn Fn() -> BoxFuture<'static, ClientResult<T>> + Send + Sync>;

/// Cached query over one key
pub struct Query<T> {
    key: QueryKey,
    cache: SharedQueryCache,
    fetcher: Fetcher<T>,
    state: RwLock<QueryState<T>>,
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query").field("key", &self.key).finish_non_exhaustive()
    }
}

impl<T> Query<T>
where
    T: Any + Send + Sync,
{
    pub fn new<F, Fut>(key: QueryKey, cache: SharedQueryCache, fetcher: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ClientResult<T>> + Send + 'static,
    {
        Self {
            key,
            cache,
            fetcher: Box::new(move || fetcher().boxed()),
            state: RwLock::new(QueryState::Idle),
        }
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// State after the last `fetch`
    pub fn state(&self) -> QueryState<T> {
        self.state.read().clone()
    }

    pub fn data(&self) -> Option<Arc<T>> {
        self.state.read().data()
    }

    /// Serve fresh cached data or run the fetcher
    pub async fn fetch(&self) -> ClientResult<Arc<T>> {
        if let Some(hit) = self.cache.get::<T>(&self.key) {
            *self.state.write() = QueryState::Success(Arc::clone(&hit));
            return Ok(hit);
        }

        *self.state.write() = QueryState::Loading;
        let result = self.cache.fetch(self.key.clone(), || (self.fetcher)()).await;

        *self.state.write() = match &result {
            Ok(data) => QueryState::Success(Arc::clone(data)),
            Err(err) => {
                warn!(key = %self.key, error = %err, "Query failed");
                QueryState::Error(err.clone())
            }
        };

        result
    }

    /// Drop the cached entry and fetch again
    pub async fn refetch(&self) -> ClientResult<Arc<T>> {
        debug!(key = %self.key, "Refetching query");
        self.cache.invalidate(&self.key);
        self.fetch().await
    }
}
