//! Per-resource services
//!
//! Each operation issues exactly one REST call (profile update with a new
//! image is the exception: presign, upload, then patch).

mod challenge;
mod emoji;
mod image;
mod user;

pub use challenge::ChallengeService;
pub use emoji::EmojiService;
pub use image::ImageService;
pub use user::UserService;
