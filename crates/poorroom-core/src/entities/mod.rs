//! Domain entities - core business objects

mod challenge;
mod emoji;
mod envelope;
mod feed;
mod user;

pub use challenge::{
    Challenge, ChallengeDuration, ChallengeFilter, ChallengeResponse, ChallengeSearchResponse,
    ChallengeSearchResult, ChallengeStatus, ChallengeSummary, ParticipatedChallenges, Status,
    UserChallenge, UserChallengeListResult,
};
pub use emoji::{EmojiInfo, EmojiType};
pub use envelope::{ApiEnvelope, ApiMeta};
pub use feed::FeedRecord;
pub use user::{
    ImageFile, MyPage, PresignedUrlInfo, PresignedUrlRequest, Profile, ProfileImage,
    ProfileUpdateBody, UserInfo, UserProfileResponse, UserResponse, UserUpdateRequest,
};
