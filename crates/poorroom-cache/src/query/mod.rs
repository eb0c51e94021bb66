//! Query cache module.
//!
//! Provides the in-memory store that backs every read query.

mod query_cache;

pub use query_cache::{create_shared_cache, QueryCache, QueryCacheConfig, SharedQueryCache};
