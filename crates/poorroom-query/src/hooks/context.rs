//! Query context - dependency container for query hooks
//!
//! Holds the REST client and the shared query cache. Every hook borrows it.

use poorroom_cache::{create_shared_cache, QueryCacheConfig, SharedQueryCache};
use poorroom_client::ApiClient;
use poorroom_common::{ClientConfig, ClientResult};

use super::challenge::ChallengeQueries;
use super::emoji::EmojiQueries;
use super::user::UserQueries;

/// Query context; cheap to clone
#[derive(Debug, Clone)]
pub struct QueryContext {
    api: ApiClient,
    cache: SharedQueryCache,
}

impl QueryContext {
    pub fn new(api: ApiClient, cache: SharedQueryCache) -> Self {
        Self { api, cache }
    }

    /// Build a client and a fresh cache from config
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let api = ApiClient::from_config(config)?;
        let cache = create_shared_cache(QueryCacheConfig::from(&config.query));
        Ok(Self::new(api, cache))
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn cache(&self) -> &SharedQueryCache {
        &self.cache
    }

    // =========================================================================
    // Hooks
    // =========================================================================

    pub fn challenges(&self) -> ChallengeQueries<'_> {
        ChallengeQueries::new(self)
    }

    pub fn users(&self) -> UserQueries<'_> {
        UserQueries::new(self)
    }

    pub fn emojis(&self) -> EmojiQueries<'_> {
        EmojiQueries::new(self)
    }
}
