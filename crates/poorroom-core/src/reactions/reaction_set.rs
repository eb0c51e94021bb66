//! Client-side reaction state of one feed record
//!
//! Four fixed slots in display order: CRAZY, REGRETFUL, WELLDONE, comment.
//! At most one mood slot is selected; the comment slot is never touched by
//! clicks.

use serde::Serialize;

use crate::entities::{EmojiInfo, EmojiType};

/// One emoji slot as displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReactionSlot {
    pub emoji: EmojiType,
    pub count: u32,
    pub selected: bool,
}

/// Server call implied by a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionCommand {
    Add(EmojiType),
    Remove(EmojiType),
}

impl ReactionCommand {
    pub fn emoji(&self) -> EmojiType {
        match self {
            Self::Add(emoji) | Self::Remove(emoji) => *emoji,
        }
    }

    pub fn is_add(&self) -> bool {
        matches!(self, Self::Add(_))
    }
}

/// Reaction slots of one feed record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReactionSet {
    slots: [ReactionSlot; 4],
}

/// Frozen copy of a [`ReactionSet`], taken right before an optimistic update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionSnapshot(ReactionSet);

impl ReactionSnapshot {
    pub fn as_set(&self) -> &ReactionSet {
        &self.0
    }
}

impl ReactionSet {
    /// Build from the server's summary
    ///
    /// A `selected` value of `comment` selects nothing.
    pub fn from_info(info: &EmojiInfo) -> Self {
        let slots = EmojiType::ALL.map(|emoji| ReactionSlot {
            emoji,
            count: info.count(emoji),
            selected: emoji.is_mood() && info.selected == Some(emoji),
        });
        Self { slots }
    }

    pub fn slots(&self) -> &[ReactionSlot; 4] {
        &self.slots
    }

    pub fn slot(&self, emoji: EmojiType) -> &ReactionSlot {
        &self.slots[emoji.index()]
    }

    pub fn count(&self, emoji: EmojiType) -> u32 {
        self.slot(emoji).count
    }

    pub fn is_selected(&self, emoji: EmojiType) -> bool {
        self.slot(emoji).selected
    }

    /// Currently selected mood reaction
    pub fn selected(&self) -> Option<EmojiType> {
        self.slots.iter().find(|s| s.selected).map(|s| s.emoji)
    }

    /// Apply a click and return the server call it implies
    ///
    /// - comment: nothing changes, `None`
    /// - selected slot: unselect and decrement, `Remove`
    /// - other mood slot: select and increment, unselect and decrement the
    ///   previous pick without a separate call, `Add`
    pub fn toggle(&mut self, emoji: EmojiType) -> Option<ReactionCommand> {
        if !emoji.is_mood() {
            return None;
        }

        let idx = emoji.index();
        if self.slots[idx].selected {
            let slot = &mut self.slots[idx];
            slot.selected = false;
            slot.count = slot.count.saturating_sub(1);
            return Some(ReactionCommand::Remove(emoji));
        }

        for slot in &mut self.slots {
            if slot.emoji == emoji {
                slot.selected = true;
                slot.count = slot.count.saturating_add(1);
            } else if slot.selected {
                slot.selected = false;
                slot.count = slot.count.saturating_sub(1);
            }
        }
        Some(ReactionCommand::Add(emoji))
    }

    pub fn snapshot(&self) -> ReactionSnapshot {
        ReactionSnapshot(*self)
    }

    pub fn restore(&mut self, snapshot: &ReactionSnapshot) {
        *self = snapshot.0;
    }
}

impl From<&EmojiInfo> for ReactionSet {
    fn from(info: &EmojiInfo) -> Self {
        Self::from_info(info)
    }
}
