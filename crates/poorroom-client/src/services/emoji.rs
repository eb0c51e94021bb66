//! Emoji reaction service
//!
//! Adds and removes the current user's reaction on a feed record.

use poorroom_common::ClientResult;
use poorroom_core::{DomainError, EmojiType, RecordId};
use reqwest::Method;
use tracing::{info, instrument};

use crate::dto::EmojiRequest;
use crate::http::ApiClient;
use crate::response::AckResponse;
use crate::routes;

/// Emoji service
pub struct EmojiService<'a> {
    api: &'a ApiClient,
}

impl<'a> EmojiService<'a> {
    /// Create a new EmojiService
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    fn body(emoji: EmojiType) -> ClientResult<EmojiRequest> {
        if emoji.is_mood() {
            Ok(EmojiRequest { emoji })
        } else {
            Err(DomainError::NotSelectable(emoji).into())
        }
    }

    /// Add reaction to a record
    #[instrument(skip(self))]
    pub async fn add(&self, record_id: RecordId, emoji: EmojiType) -> ClientResult<AckResponse> {
        let body = Self::body(emoji)?;
        let request = self
            .api
            .request(Method::POST, &routes::record_emoji(record_id))
            .json(&body);
        let response = self.api.send_ack(request).await?;

        info!(record_id = %record_id, emoji = %emoji, "Reaction added");

        Ok(response)
    }

    /// Remove reaction from a record
    #[instrument(skip(self))]
    pub async fn remove(&self, record_id: RecordId, emoji: EmojiType) -> ClientResult<AckResponse> {
        let body = Self::body(emoji)?;
        let request = self
            .api
            .request(Method::DELETE, &routes::record_emoji(record_id))
            .json(&body);
        let response = self.api.send_ack(request).await?;

        info!(record_id = %record_id, emoji = %emoji, "Reaction removed");

        Ok(response)
    }
}
