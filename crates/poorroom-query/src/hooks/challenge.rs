//! Challenge queries
//!
//! Detail and list queries plus the join mutation.

use std::sync::Arc;

use poorroom_cache::{ChallengeKeys, MyPageKeys};
use poorroom_client::AckResponse;
use poorroom_core::{ChallengeFilter, ChallengeId, ChallengeResponse, ChallengeSearchResponse};

use super::context::QueryContext;
use crate::state::{Invalidation, Mutation, Query};

/// Challenge queries
pub struct ChallengeQueries<'a> {
    ctx: &'a QueryContext,
}

impl<'a> ChallengeQueries<'a> {
    /// Create a new ChallengeQueries
    pub fn new(ctx: &'a QueryContext) -> Self {
        Self { ctx }
    }

    /// One challenge, keyed by id
    pub fn detail(&self, id: ChallengeId) -> Query<ChallengeResponse> {
        let api = self.ctx.api().clone();
        Query::new(
            ChallengeKeys::detail(id),
            Arc::clone(self.ctx.cache()),
            move || {
                let api = api.clone();
                async move { api.challenges().get(id).await }
            },
        )
    }

    /// Search results, keyed by the normalized filter set
    pub fn list(&self, filter: &ChallengeFilter) -> Query<ChallengeSearchResponse> {
        let api = self.ctx.api().clone();
        let owned = filter.clone();
        Query::new(
            ChallengeKeys::list(filter),
            Arc::clone(self.ctx.cache()),
            move || {
                let api = api.clone();
                let filter = owned.clone();
                async move { api.challenges().search(&filter).await }
            },
        )
    }

    /// Join a challenge
    ///
    /// The id may be absent while the page is still resolving it; running the
    /// mutation then fails validation without a request.
    pub fn join(&self, id: Option<ChallengeId>) -> Mutation<(), AckResponse> {
        let api = self.ctx.api().clone();
        Mutation::new(
            "join_challenge",
            Arc::clone(self.ctx.cache()),
            move |()| {
                let api = api.clone();
                async move { api.challenges().join(id).await }
            },
            move |_: &()| match id {
                Some(id) => vec![
                    Invalidation::Key(ChallengeKeys::detail(id)),
                    Invalidation::Key(MyPageKeys::challenges()),
                ],
                None => Vec::new(),
            },
        )
    }
}
