//! Feed item view
//!
//! Renders one record of another participant together with its live
//! reaction slots.

use std::sync::Arc;

use poorroom_core::{ChallengeId, EmojiType, FeedRecord, ReactionResult, ReactionSlot};
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::info;

use super::format::{format_currency, korean_time_label};
use crate::reaction::ReactionMachine;

/// Everything needed to draw one feed item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItemModel {
    pub nickname: String,
    pub profile_img_url: String,
    pub title: String,
    pub content: String,
    /// Author's running total, e.g. `12,000원`
    pub current_charge: String,
    pub price: String,
    pub record_img_url: Option<String>,
    /// Empty when the record date cannot be parsed
    pub time_label: String,
    pub detail_link: String,
    pub reactions: [ReactionSlot; 4],
}

/// One mounted feed item
#[derive(Debug, Clone)]
pub struct FeedItemView {
    challenge_id: ChallengeId,
    record: FeedRecord,
    machine: Arc<ReactionMachine>,
}

impl FeedItemView {
    pub fn new(challenge_id: ChallengeId, record: FeedRecord, machine: Arc<ReactionMachine>) -> Self {
        Self {
            challenge_id,
            record,
            machine,
        }
    }

    pub fn record(&self) -> &FeedRecord {
        &self.record
    }

    pub fn machine(&self) -> &Arc<ReactionMachine> {
        &self.machine
    }

    pub fn detail_link(&self) -> String {
        format!("/my-poor-room/{}/{}", self.challenge_id, self.record.record_id)
    }

    pub fn render(&self) -> FeedItemModel {
        let record = &self.record;

        FeedItemModel {
            nickname: record.nickname.clone(),
            profile_img_url: record.profile_img_url.clone(),
            title: record.title.clone(),
            content: record.content.clone(),
            current_charge: format_currency(record.current_charge),
            price: format_currency(record.price),
            record_img_url: record.record_img_url.clone().filter(|url| !url.is_empty()),
            time_label: record.recorded_at().map(korean_time_label).unwrap_or_default(),
            detail_link: self.detail_link(),
            reactions: *self.machine.reactions().slots(),
        }
    }

    pub fn on_reaction_click(&self, emoji: EmojiType) -> Option<JoinHandle<ReactionResult<()>>> {
        self.machine.on_reaction_click(emoji)
    }

    /// Navigation target when the item body is clicked
    pub fn open_detail(&self) -> String {
        let link = self.detail_link();
        info!(record_id = %self.record.record_id, link = %link, "Opening record detail");
        link
    }
}
