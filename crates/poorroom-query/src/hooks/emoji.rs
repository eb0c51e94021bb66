//! Emoji mutations
//!
//! Add and remove a reaction on a feed record. Neither retries or touches the
//! query cache; the feed keeps its own optimistic counts.

use std::sync::Arc;

use async_trait::async_trait;
use poorroom_client::AckResponse;
use poorroom_common::ClientError;
use poorroom_core::{DomainError, EmojiType, ReactionMutator, ReactionResult, RecordId};

use super::context::QueryContext;
use crate::state::{Mutation, MutationStatus};

type ReactionArgs = (RecordId, EmojiType);

/// Emoji queries
pub struct EmojiQueries<'a> {
    ctx: &'a QueryContext,
}

impl<'a> EmojiQueries<'a> {
    /// Create a new EmojiQueries
    pub fn new(ctx: &'a QueryContext) -> Self {
        Self { ctx }
    }

    pub fn add_reaction(&self) -> Mutation<ReactionArgs, AckResponse> {
        let api = self.ctx.api().clone();
        Mutation::new(
            "add_reaction",
            Arc::clone(self.ctx.cache()),
            move |(record_id, emoji): ReactionArgs| {
                let api = api.clone();
                async move { api.emojis().add(record_id, emoji).await }
            },
            |_: &ReactionArgs| Vec::new(),
        )
    }

    pub fn remove_reaction(&self) -> Mutation<ReactionArgs, AckResponse> {
        let api = self.ctx.api().clone();
        Mutation::new(
            "remove_reaction",
            Arc::clone(self.ctx.cache()),
            move |(record_id, emoji): ReactionArgs| {
                let api = api.clone();
                async move { api.emojis().remove(record_id, emoji).await }
            },
            |_: &ReactionArgs| Vec::new(),
        )
    }

    /// Both mutations behind the reaction port used by the feed
    pub fn mutator(&self) -> EmojiMutations {
        EmojiMutations {
            add: self.add_reaction(),
            remove: self.remove_reaction(),
        }
    }
}

/// Add/remove reaction mutations as a [`ReactionMutator`]
#[derive(Debug)]
pub struct EmojiMutations {
    add: Mutation<ReactionArgs, AckResponse>,
    remove: Mutation<ReactionArgs, AckResponse>,
}

impl EmojiMutations {
    pub fn add_status(&self) -> MutationStatus {
        self.add.status()
    }

    pub fn remove_status(&self) -> MutationStatus {
        self.remove.status()
    }
}

#[async_trait]
impl ReactionMutator for EmojiMutations {
    async fn add_reaction(&self, record_id: RecordId, emoji: EmojiType) -> ReactionResult<()> {
        self.add
            .mutate((record_id, emoji))
            .await
            .map(drop)
            .map_err(|err| reaction_error(record_id, err))
    }

    async fn remove_reaction(&self, record_id: RecordId, emoji: EmojiType) -> ReactionResult<()> {
        self.remove
            .mutate((record_id, emoji))
            .await
            .map(drop)
            .map_err(|err| reaction_error(record_id, err))
    }
}

/// A 404 means the record itself is gone
fn reaction_error(record_id: RecordId, err: ClientError) -> DomainError {
    match err.status_code() {
        Some(404) => DomainError::RecordNotFound(record_id),
        _ => DomainError::from(err),
    }
}
