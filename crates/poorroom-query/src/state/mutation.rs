//! Mutation handle
//!
//! Runs one write against the API and, on success, drops the cached queries
//! it made stale. Mutations never retry.

use std::fmt;
use std::future::Future;

use futures::future::{BoxFuture, FutureExt};
use parking_lot::Mutex;
use poorroom_cache::{QueryKey, SharedQueryCache};
use poorroom_common::{ClientError, ClientResult};
use tracing::{debug, warn};

/// Observable status of a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

impl MutationStatus {
    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }

    pub fn is_error(self) -> bool {
        self == Self::Error
    }
}

/// Cache entries to drop after a successful mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalidation {
    /// Exactly this key
    Key(QueryKey),
    /// Every key under this prefix
    Prefix(QueryKey),
}

type MutateFn<A, T> = Box<dyn Fn(A) -> BoxFuture<'static, ClientResult<T>> + Send + Sync>;
type InvalidateFn<A> = Box<dyn Fn(&A) -> Vec<Invalidation> + Send + Sync>;

/// Write operation with cache invalidation
pub struct Mutation<A, T> {
    name: &'static str,
    cache: SharedQueryCache,
    mutate_fn: MutateFn<A, T>,
    invalidates: InvalidateFn<A>,
    status: Mutex<MutationStatus>,
    last_error: Mutex<Option<ClientError>>,
}

impl<A, T> fmt::Debug for Mutation<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutation")
            .field("name", &self.name)
            .field("status", &*self.status.lock())
            .finish_non_exhaustive()
    }
}

impl<A, T> Mutation<A, T> {
    pub fn new<M, Fut, I>(name: &'static str, cache: SharedQueryCache, mutate_fn: M, invalidates: I) -> Self
    where
        M: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ClientResult<T>> + Send + 'static,
        I: Fn(&A) -> Vec<Invalidation> + Send + Sync + 'static,
    {
        Self {
            name,
            cache,
            mutate_fn: Box::new(move |args| mutate_fn(args).boxed()),
            invalidates: Box::new(invalidates),
            status: Mutex::new(MutationStatus::Idle),
            last_error: Mutex::new(None),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn status(&self) -> MutationStatus {
        *self.status.lock()
    }

    /// Error of the last failed run, cleared by the next run
    pub fn last_error(&self) -> Option<ClientError> {
        self.last_error.lock().clone()
    }

    /// Run the mutation once
    pub async fn mutate(&self, args: A) -> ClientResult<T> {
        let invalidations = (self.invalidates)(&args);

        *self.status.lock() = MutationStatus::Pending;
        *self.last_error.lock() = None;

        match (self.mutate_fn)(args).await {
            Ok(output) => {
                for invalidation in &invalidations {
                    self.apply(invalidation);
                }
                *self.status.lock() = MutationStatus::Success;
                debug!(mutation = self.name, invalidated = invalidations.len(), "Mutation succeeded");
                Ok(output)
            }
            Err(err) => {
                warn!(mutation = self.name, error = %err, "Mutation failed");
                *self.status.lock() = MutationStatus::Error;
                *self.last_error.lock() = Some(err.clone());
                Err(err)
            }
        }
    }

    fn apply(&self, invalidation: &Invalidation) {
        match invalidation {
            Invalidation::Key(key) => {
                self.cache.invalidate(key);
            }
            Invalidation::Prefix(prefix) => {
                self.cache.invalidate_prefix(prefix);
            }
        }
    }
}
