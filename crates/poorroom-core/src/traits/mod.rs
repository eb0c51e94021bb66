//! Ports the domain layer needs from the outside

mod reaction_mutator;

pub use reaction_mutator::{ReactionMutator, ReactionResult};
