//! Query and mutation handles

pub mod mutation;
pub mod query;

pub use mutation::{Invalidation, Mutation, MutationStatus};
pub use query::{Query, QueryState};
