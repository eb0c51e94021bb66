//! # poorroom-core
//!
//! Domain layer containing entities, value objects, reaction state, and ports.
//! This crate has zero dependencies on infrastructure (HTTP client, cache, runtime).

pub mod entities;
pub mod error;
pub mod reactions;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ApiEnvelope, ApiMeta, Challenge, ChallengeDuration, ChallengeFilter, ChallengeResponse,
    ChallengeSearchResponse, ChallengeSearchResult, ChallengeStatus, ChallengeSummary, EmojiInfo,
    EmojiType, FeedRecord, ImageFile, MyPage, ParticipatedChallenges, PresignedUrlInfo,
    PresignedUrlRequest, Profile, ProfileImage, ProfileUpdateBody, Status, UserChallenge,
    UserChallengeListResult, UserInfo, UserProfileResponse, UserResponse, UserUpdateRequest,
};
pub use error::DomainError;
pub use reactions::{ReactionCommand, ReactionSet, ReactionSlot, ReactionSnapshot};
pub use traits::{ReactionMutator, ReactionResult};
pub use value_objects::{ChallengeId, IdParseError, RecordId};
