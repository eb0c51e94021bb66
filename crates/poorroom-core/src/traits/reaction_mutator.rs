//! Reaction mutation port
//!
//! The feed layer decides *what* to send; an implementation of this trait
//! decides *how* it reaches the server.

use async_trait::async_trait;

use crate::entities::EmojiType;
use crate::error::DomainError;
use crate::reactions::ReactionCommand;
use crate::value_objects::RecordId;

/// Result type for reaction mutations
pub type ReactionResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait ReactionMutator: Send + Sync {
    /// Record the current user's reaction on a feed record
    async fn add_reaction(&self, record_id: RecordId, emoji: EmojiType) -> ReactionResult<()>;

    /// Withdraw the current user's reaction from a feed record
    async fn remove_reaction(&self, record_id: RecordId, emoji: EmojiType) -> ReactionResult<()>;

    /// Dispatch a command produced by [`crate::ReactionSet::toggle`]
    async fn apply(&self, record_id: RecordId, command: ReactionCommand) -> ReactionResult<()> {
        match command {
            ReactionCommand::Add(emoji) => self.add_reaction(record_id, emoji).await,
            ReactionCommand::Remove(emoji) => self.remove_reaction(record_id, emoji).await,
        }
    }
}
