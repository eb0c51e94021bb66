//! Integration test utilities for the poor room client
//!
//! This crate serves a stub REST API and provides fixtures for driving the
//! client, query, and feed layers against it end to end.

pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
