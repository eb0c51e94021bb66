//! # poorroom-feed
//!
//! Feed of other participants' records with optimistic emoji reactions.
//!
//! ## Features
//!
//! - **Reaction Machine**: Local toggle first, mutation on a spawned task,
//!   rollback on failure
//! - **Feed Board**: One machine per mounted record
//! - **Feed Item View**: Currency, Korean time label, detail link, badges

pub mod board;
pub mod reaction;
pub mod view;

pub use board::FeedBoard;
pub use reaction::ReactionMachine;
pub use view::{format_currency, korean_time_label, FeedItemModel, FeedItemView};
