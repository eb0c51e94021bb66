//! Feed record entity - one spending entry posted in a challenge room

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::emoji::EmojiInfo;
use crate::value_objects::RecordId;

/// A record written by another participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedRecord {
    pub record_id: RecordId,
    /// Amount spent on this record
    pub price: i64,
    /// Author's running total in the challenge
    pub current_charge: i64,
    pub nickname: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// ISO-8601, with or without an offset
    pub record_date: String,
    #[serde(default)]
    pub profile_img_url: String,
    #[serde(default)]
    pub emoji_info: EmojiInfo,
    #[serde(default)]
    pub record_img_url: Option<String>,
}

impl FeedRecord {
    /// Wall-clock time the record was written, as the author saw it
    ///
    /// Offsets are discarded: the UI shows the time the way the server
    /// wrote it.
    pub fn recorded_at(&self) -> Option<NaiveDateTime> {
        let raw = self.record_date.trim();
        if let Ok(dt) = DateTime::<FixedOffset>::parse_from_rfc3339(raw) {
            return Some(dt.naive_local());
        }
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    }

    pub fn has_image(&self) -> bool {
        self.record_img_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}
