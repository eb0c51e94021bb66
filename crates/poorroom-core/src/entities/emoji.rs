//! Emoji reaction types and the per-record summary the server sends

use serde::{Deserialize, Serialize};
use std::fmt;

/// Emoji slot on a feed record
///
/// Three mood reactions are mutually exclusive per user. `Comment` is only a
/// counter of replies and can never be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmojiType {
    #[serde(rename = "CRAZY")]
    Crazy,
    #[serde(rename = "REGRETFUL")]
    Regretful,
    #[serde(rename = "WELLDONE")]
    WellDone,
    #[serde(rename = "comment")]
    Comment,
}

impl EmojiType {
    /// All slots in display order
    pub const ALL: [EmojiType; 4] = [Self::Crazy, Self::Regretful, Self::WellDone, Self::Comment];

    /// Wire name of this emoji
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Crazy => "CRAZY",
            Self::Regretful => "REGRETFUL",
            Self::WellDone => "WELLDONE",
            Self::Comment => "comment",
        }
    }

    /// Whether this is a selectable mood reaction
    #[inline]
    pub const fn is_mood(&self) -> bool {
        !matches!(self, Self::Comment)
    }

    /// Position of this slot in [`EmojiType::ALL`]
    #[inline]
    pub const fn index(&self) -> usize {
        match self {
            Self::Crazy => 0,
            Self::Regretful => 1,
            Self::WellDone => 2,
            Self::Comment => 3,
        }
    }
}

impl fmt::Display for EmojiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EmojiType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CRAZY" => Ok(Self::Crazy),
            "REGRETFUL" => Ok(Self::Regretful),
            "WELLDONE" => Ok(Self::WellDone),
            "comment" => Ok(Self::Comment),
            _ => Err(format!("Invalid emoji type: {s}")),
        }
    }
}

/// Reaction summary of one feed record as delivered by the server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiInfo {
    #[serde(rename = "CRAZY", default)]
    pub crazy: u32,
    #[serde(rename = "REGRETFUL", default)]
    pub regretful: u32,
    #[serde(rename = "WELLDONE", default)]
    pub well_done: u32,
    #[serde(rename = "comment", default)]
    pub comment: u32,
    /// The emoji the current user picked, if any
    #[serde(default)]
    pub selected: Option<EmojiType>,
}

impl EmojiInfo {
    /// Count for a given slot
    pub fn count(&self, emoji: EmojiType) -> u32 {
        match emoji {
            EmojiType::Crazy => self.crazy,
            EmojiType::Regretful => self.regretful,
            EmojiType::WellDone => self.well_done,
            EmojiType::Comment => self.comment,
        }
    }
}
