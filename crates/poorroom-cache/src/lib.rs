//! # poorroom-cache
//!
//! Query cache layer: cache keys, freshness, and invalidation.
//!
//! ## Features
//!
//! - **Query Keys**: Segment-based keys with per-resource factories
//! - **Query Cache**: Type-erased store with a stale time
//! - **Invalidation**: By exact key or by key prefix
//!
//! ## Example
//!
//! ```ignore
//! use poorroom_cache::{create_shared_cache, ChallengeKeys, QueryCacheConfig};
//!
//! let cache = create_shared_cache(QueryCacheConfig::default());
//!
//! let challenge = cache
//!     .fetch(ChallengeKeys::detail(id), || api.challenges().get(id))
//!     .await?;
//!
//! // After joining, drop the stale detail
//! cache.invalidate(&ChallengeKeys::detail(id));
//! ```

pub mod keys;
pub mod query;

// Re-export key types
pub use keys::{
    ChallengeKeys, MyPageKeys, QueryKey, UserKeys, CHALLENGE_ROOT, MYPAGE_ROOT, USER_ROOT,
};

// Re-export cache types
pub use query::{create_shared_cache, QueryCache, QueryCacheConfig, SharedQueryCache};
