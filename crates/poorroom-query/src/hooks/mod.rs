//! Query hooks
//!
//! Each resource gets a borrowing hook struct that builds [`Query`] and
//! [`Mutation`] handles bound to its cache keys.
//!
//! [`Query`]: crate::state::Query
//! [`Mutation`]: crate::state::Mutation

pub mod challenge;
pub mod context;
pub mod emoji;
pub mod user;

pub use challenge::ChallengeQueries;
pub use context::QueryContext;
pub use emoji::{EmojiMutations, EmojiQueries};
pub use user::UserQueries;
