//! User queries
//!
//! Signed-in user info, "my page", joined challenges, and the profile and
//! leave mutations.

use std::sync::Arc;

use poorroom_cache::{ChallengeKeys, MyPageKeys, UserKeys};
use poorroom_client::AckResponse;
use poorroom_core::{
    ChallengeId, UserChallengeListResult, UserProfileResponse, UserResponse, UserUpdateRequest,
};

use super::context::QueryContext;
use crate::state::{Invalidation, Mutation, Query};

/// User queries
pub struct UserQueries<'a> {
    ctx: &'a QueryContext,
}

impl<'a> UserQueries<'a> {
    /// Create a new UserQueries
    pub fn new(ctx: &'a QueryContext) -> Self {
        Self { ctx }
    }

    pub fn info(&self) -> Query<UserProfileResponse> {
        let api = self.ctx.api().clone();
        Query::new(UserKeys::info(), Arc::clone(self.ctx.cache()), move || {
            let api = api.clone();
            async move { api.users().info().await }
        })
    }

    pub fn my_page(&self) -> Query<UserResponse> {
        let api = self.ctx.api().clone();
        Query::new(MyPageKeys::all(), Arc::clone(self.ctx.cache()), move || {
            let api = api.clone();
            async move { api.users().profile().await }
        })
    }

    pub fn my_challenges(&self) -> Query<UserChallengeListResult> {
        let api = self.ctx.api().clone();
        Query::new(MyPageKeys::challenges(), Arc::clone(self.ctx.cache()), move || {
            let api = api.clone();
            async move { api.users().challenges().await }
        })
    }

    /// Update nickname and profile image
    pub fn update_profile(&self) -> Mutation<UserUpdateRequest, AckResponse> {
        let api = self.ctx.api().clone();
        Mutation::new(
            "update_profile",
            Arc::clone(self.ctx.cache()),
            move |update: UserUpdateRequest| {
                let api = api.clone();
                async move { api.users().update_profile(&update).await }
            },
            |_: &UserUpdateRequest| {
                vec![
                    Invalidation::Key(MyPageKeys::all()),
                    Invalidation::Key(UserKeys::info()),
                ]
            },
        )
    }

    /// Leave a joined challenge
    pub fn leave_challenge(&self) -> Mutation<ChallengeId, AckResponse> {
        let api = self.ctx.api().clone();
        Mutation::new(
            "leave_challenge",
            Arc::clone(self.ctx.cache()),
            move |id: ChallengeId| {
                let api = api.clone();
                async move { api.users().leave_challenge(id).await }
            },
            |id: &ChallengeId| {
                vec![
                    Invalidation::Key(MyPageKeys::challenges()),
                    Invalidation::Key(ChallengeKeys::detail(*id)),
                ]
            },
        )
    }
}
