//! Feed board
//!
//! Keeps one reaction machine per mounted feed record using DashMap for
//! thread-safe access.

use std::sync::Arc;

use dashmap::DashMap;
use poorroom_core::{ChallengeId, EmojiType, FeedRecord, ReactionMutator, ReactionResult, ReactionSet, RecordId};
use tokio::task::JoinHandle;

use crate::reaction::ReactionMachine;
use crate::view::FeedItemView;

/// Mounted feed records of one challenge room
pub struct FeedBoard {
    challenge_id: ChallengeId,
    machines: DashMap<RecordId, Arc<ReactionMachine>>,
    mutator: Arc<dyn ReactionMutator>,
}

impl FeedBoard {
    pub fn new(challenge_id: ChallengeId, mutator: Arc<dyn ReactionMutator>) -> Self {
        Self {
            challenge_id,
            machines: DashMap::new(),
            mutator,
        }
    }

    /// Create a new feed board wrapped in Arc
    pub fn new_shared(challenge_id: ChallengeId, mutator: Arc<dyn ReactionMutator>) -> Arc<Self> {
        Arc::new(Self::new(challenge_id, mutator))
    }

    pub fn challenge_id(&self) -> ChallengeId {
        self.challenge_id
    }

    /// Mount a record
    ///
    /// A record that is already mounted keeps its machine, so optimistic
    /// state survives a refetch of the feed.
    pub fn mount(&self, record: FeedRecord) -> FeedItemView {
        let record_id = record.record_id;
        let machine = self
            .machines
            .entry(record_id)
            .or_insert_with(|| {
                tracing::debug!(record_id = %record_id, "Feed record mounted");
                Arc::new(ReactionMachine::new(record_id, &record.emoji_info, Arc::clone(&self.mutator)))
            })
            .clone();

        FeedItemView::new(self.challenge_id, record, machine)
    }

    /// Unmount a record, detaching its machine
    pub fn unmount(&self, record_id: RecordId) -> bool {
        if let Some((_, machine)) = self.machines.remove(&record_id) {
            machine.detach();
            tracing::debug!(record_id = %record_id, "Feed record unmounted");
            true
        } else {
            false
        }
    }

    pub fn get(&self, record_id: RecordId) -> Option<Arc<ReactionMachine>> {
        self.machines.get(&record_id).map(|r| r.clone())
    }

    /// Route a click to the record's machine; unknown records are ignored
    pub fn click(&self, record_id: RecordId, emoji: EmojiType) -> Option<JoinHandle<ReactionResult<()>>> {
        let Some(machine) = self.get(record_id) else {
            tracing::debug!(record_id = %record_id, "Click on unmounted record ignored");
            return None;
        };
        machine.on_reaction_click(emoji)
    }

    pub fn reactions(&self, record_id: RecordId) -> Option<ReactionSet> {
        self.get(record_id).map(|machine| machine.reactions())
    }

    pub fn record_ids(&self) -> Vec<RecordId> {
        self.machines.iter().map(|r| *r.key()).collect()
    }

    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }

    /// Unmount everything
    pub fn clear(&self) {
        for entry in &self.machines {
            entry.value().detach();
        }
        self.machines.clear();
    }
}

impl std::fmt::Debug for FeedBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedBoard")
            .field("challenge_id", &self.challenge_id)
            .field("mounted", &self.machines.len())
            .finish_non_exhaustive()
    }
}
