//! Challenge service
//!
//! Search, fetch, and join challenges.

use poorroom_common::ClientResult;
use poorroom_core::{
    ChallengeFilter, ChallengeId, ChallengeResponse, ChallengeSearchResponse, DomainError,
};
use reqwest::Method;
use tracing::{info, instrument};

use crate::http::ApiClient;
use crate::response::AckResponse;
use crate::routes;

/// Challenge service
pub struct ChallengeService<'a> {
    api: &'a ApiClient,
}

impl<'a> ChallengeService<'a> {
    /// Create a new ChallengeService
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Search challenges matching a filter
    #[instrument(skip(self))]
    pub async fn search(&self, filter: &ChallengeFilter) -> ClientResult<ChallengeSearchResponse> {
        let request = self
            .api
            .request(Method::GET, routes::CHALLENGE_SEARCH)
            .query(&filter.normalized());
        self.api.send_json(request).await
    }

    /// Fetch one challenge
    #[instrument(skip(self))]
    pub async fn get(&self, id: ChallengeId) -> ClientResult<ChallengeResponse> {
        let request = self.api.request(Method::GET, &routes::challenge(id));
        self.api.send_json(request).await
    }

    /// Join a challenge
    ///
    /// A missing id is rejected before any request is sent.
    #[instrument(skip(self))]
    pub async fn join(&self, id: Option<ChallengeId>) -> ClientResult<AckResponse> {
        let id = id.ok_or(DomainError::MissingIdentity("challenge id"))?;

        let request = self.api.request(Method::POST, &routes::join_challenge(id));
        let response = self.api.send_ack(request).await?;

        info!(challenge_id = %id, "Joined challenge");

        Ok(response)
    }
}
