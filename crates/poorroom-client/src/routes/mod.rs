//! REST paths consumed by the client
//!
//! | Method | Path                          |
//! |--------|-------------------------------|
//! | GET    | /challenge/search?<filters>   |
//! | GET    | /challenge/{id}               |
//! | POST   | /challenge/join/{id}          |
//! | GET    | /user/info                    |
//! | GET    | /mypage                       |
//! | PATCH  | /mypage/profile               |
//! | GET    | /mypage/challenges            |
//! | DELETE | /mypage/challenge/{id}        |
//! | POST   | /image/presigned-url          |
//! | POST   | /feed/{record_id}/emoji       |
//! | DELETE | /feed/{record_id}/emoji       |

use poorroom_core::{ChallengeId, RecordId};

pub const CHALLENGE_SEARCH: &str = "/challenge/search";
pub const USER_INFO: &str = "/user/info";
pub const MYPAGE: &str = "/mypage";
pub const MYPAGE_PROFILE: &str = "/mypage/profile";
pub const MYPAGE_CHALLENGES: &str = "/mypage/challenges";
pub const PRESIGNED_URL: &str = "/image/presigned-url";

pub fn challenge(id: ChallengeId) -> String {
    format!("/challenge/{id}")
}

pub fn join_challenge(id: ChallengeId) -> String {
    format!("/challenge/join/{id}")
}

pub fn leave_challenge(id: ChallengeId) -> String {
    format!("/mypage/challenge/{id}")
}

pub fn record_emoji(record_id: RecordId) -> String {
    format!("/feed/{record_id}/emoji")
}
