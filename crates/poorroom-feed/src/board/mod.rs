//! Mounted feed records

pub mod feed_board;

pub use feed_board::FeedBoard;
