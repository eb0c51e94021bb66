//! Request bodies that only exist on the wire

use poorroom_core::EmojiType;
use serde::Serialize;

/// Body of the add/remove reaction calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmojiRequest {
    #[serde(rename = "type")]
    pub emoji: EmojiType,
}
