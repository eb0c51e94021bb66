//! # poorroom-query
//!
//! Query layer: cached reads and invalidating writes over the REST client.
//!
//! ## Example
//!
//! ```ignore
//! use poorroom_query::QueryContext;
//!
//! let ctx = QueryContext::from_config(&config)?;
//!
//! let detail = ctx.challenges().detail(id);
//! let challenge = detail.fetch().await?;
//!
//! // Joining drops the cached detail and "my challenges"
//! ctx.challenges().join(Some(id)).mutate(()).await?;
//! ```

pub mod hooks;
pub mod state;

pub use hooks::{ChallengeQueries, EmojiMutations, EmojiQueries, QueryContext, UserQueries};
pub use state::{Invalidation, Mutation, MutationStatus, Query, QueryState};
