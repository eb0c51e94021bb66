//! Reaction state shared by the feed layer

mod reaction_set;

pub use reaction_set::{ReactionCommand, ReactionSet, ReactionSlot, ReactionSnapshot};
