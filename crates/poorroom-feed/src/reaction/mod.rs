//! Reaction state per feed record

pub mod machine;

pub use machine::ReactionMachine;
