//! Feed item views and display formatting

pub mod feed_item;
pub mod format;

pub use feed_item::{FeedItemModel, FeedItemView};
pub use format::{format_currency, korean_time_label};
