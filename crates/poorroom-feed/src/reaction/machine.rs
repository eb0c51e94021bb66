//! Optimistic reaction state machine
//!
//! One machine per mounted feed record. A click updates the local
//! [`ReactionSet`] right away and sends the implied mutation on a spawned
//! task; a failed mutation puts the set back to how it was before the click.

use std::sync::Arc;

use parking_lot::Mutex;
use poorroom_core::{
    EmojiInfo, EmojiType, ReactionMutator, ReactionResult, ReactionSet, ReactionSnapshot, RecordId,
};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

struct MachineState {
    current: ReactionSet,
    /// Snapshot taken by the latest click
    rollback: Option<ReactionSnapshot>,
    in_flight: usize,
    live: bool,
}

/// Reaction state of one feed record
pub struct ReactionMachine {
    record_id: RecordId,
    state: Arc<Mutex<MachineState>>,
    mutator: Arc<dyn ReactionMutator>,
}

impl std::fmt::Debug for ReactionMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ReactionMachine")
            .field("record_id", &self.record_id)
            .field("current", &state.current)
            .field("in_flight", &state.in_flight)
            .field("live", &state.live)
            .finish()
    }
}

impl ReactionMachine {
    /// Create a machine seeded from the server's summary
    pub fn new(record_id: RecordId, info: &EmojiInfo, mutator: Arc<dyn ReactionMutator>) -> Self {
        Self {
            record_id,
            state: Arc::new(Mutex::new(MachineState {
                current: ReactionSet::from_info(info),
                rollback: None,
                in_flight: 0,
                live: true,
            })),
            mutator,
        }
    }

    pub fn record_id(&self) -> RecordId {
        self.record_id
    }

    /// Current (possibly optimistic) reactions
    pub fn reactions(&self) -> ReactionSet {
        self.state.lock().current
    }

    /// Snapshot the latest click will roll back to
    pub fn rollback_snapshot(&self) -> Option<ReactionSnapshot> {
        self.state.lock().rollback
    }

    pub fn in_flight(&self) -> usize {
        self.state.lock().in_flight
    }

    pub fn is_live(&self) -> bool {
        self.state.lock().live
    }

    /// Handle a click on an emoji slot
    ///
    /// Returns the handle of the spawned mutation, or `None` when the click
    /// changes nothing (comment slot). Must be called inside a tokio runtime.
    /// Failures are logged and rolled back; they are never returned to the
    /// caller other than through the handle.
    pub fn on_reaction_click(&self, emoji: EmojiType) -> Option<JoinHandle<ReactionResult<()>>> {
        let command = {
            let mut state = self.state.lock();
            if !state.live {
                debug!(record_id = %self.record_id, emoji = %emoji, "Click on detached record ignored");
                return None;
            }

            let snapshot = state.current.snapshot();
            let Some(command) = state.current.toggle(emoji) else {
                debug!(record_id = %self.record_id, emoji = %emoji, "Click ignored");
                return None;
            };

            if state.in_flight > 0 {
                debug!(
                    record_id = %self.record_id,
                    in_flight = state.in_flight,
                    "Overwriting rollback snapshot while a mutation is in flight"
                );
            }
            state.rollback = Some(snapshot);
            state.in_flight += 1;
            command
        };

        debug!(record_id = %self.record_id, ?command, "Optimistic reaction applied");

        let state = Arc::clone(&self.state);
        let mutator = Arc::clone(&self.mutator);
        let record_id = self.record_id;

        Some(tokio::spawn(async move {
            let result = mutator.apply(record_id, command).await;

            {
                let mut state = state.lock();
                state.in_flight = state.in_flight.saturating_sub(1);

                if let Err(err) = &result {
                    if !state.live {
                        debug!(record_id = %record_id, error = %err, "Rollback dropped for detached record");
                    } else if let Some(snapshot) = state.rollback {
                        state.current.restore(&snapshot);
                        warn!(record_id = %record_id, ?command, error = %err, "Reaction failed, rolled back");
                    }
                }

                if state.in_flight == 0 {
                    state.rollback = None;
                }
            }

            result
        }))
    }

    /// Mark the record as unmounted
    ///
    /// Pending mutations still complete, but their rollbacks are dropped and
    /// further clicks are ignored.
    pub fn detach(&self) {
        self.state.lock().live = false;
        debug!(record_id = %self.record_id, "Reaction machine detached");
    }
}
