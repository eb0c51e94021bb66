//! Query key module.

mod query_key;

pub use query_key::{
    ChallengeKeys, MyPageKeys, QueryKey, UserKeys, CHALLENGE_ROOT, MYPAGE_ROOT, USER_ROOT,
};
