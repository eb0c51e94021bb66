//! # poorroom-client
//!
//! HTTP service layer for the challenge API, built on `reqwest`.
//!
//! Every operation returns the parsed envelope on success and a
//! [`poorroom_common::ClientError`] on failure. Nothing is retried or cached
//! here; caching lives in `poorroom-query`.

pub mod dto;
pub mod http;
pub mod response;
pub mod routes;
pub mod services;

pub use http::ApiClient;
pub use response::AckResponse;
pub use services::{ChallengeService, EmojiService, ImageService, UserService};
