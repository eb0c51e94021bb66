//! Query key definitions.
//!
//! Defines the key naming conventions for cached queries. Keys are ordered
//! segment lists so that invalidating a prefix (e.g. `["challenge"]`) drops
//! every query underneath it.

use poorroom_core::{ChallengeFilter, ChallengeId};
use std::fmt;

/// Root segment for challenge queries
pub const CHALLENGE_ROOT: &str = "challenge";
/// Root segment for the signed-in user's info
pub const USER_ROOT: &str = "user";
/// Root segment for "my page" queries
pub const MYPAGE_ROOT: &str = "mypage";

/// Cache key of one query
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    /// Create a key with a single root segment
    #[must_use]
    pub fn root(segment: impl Into<String>) -> Self {
        Self(vec![segment.into()])
    }

    /// Append a segment
    #[must_use]
    pub fn push(mut self, segment: impl ToString) -> Self {
        self.0.push(segment.to_string());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether `prefix` covers this key
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(","))
    }
}

impl<S: Into<String>> FromIterator<S> for QueryKey {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Key factory for challenge queries
pub struct ChallengeKeys;

impl ChallengeKeys {
    #[must_use]
    pub fn all() -> QueryKey {
        QueryKey::root(CHALLENGE_ROOT)
    }

    #[must_use]
    pub fn details() -> QueryKey {
        Self::all().push("detail")
    }

    #[must_use]
    pub fn detail(id: ChallengeId) -> QueryKey {
        Self::details().push(id)
    }

    #[must_use]
    pub fn lists() -> QueryKey {
        Self::all().push("list")
    }

    /// List key derived from the normalized filter, so equivalent filters
    /// share one cache entry. Each name and value is its own segment.
    #[must_use]
    pub fn list(filter: &ChallengeFilter) -> QueryKey {
        filter
            .normalized()
            .into_iter()
            .fold(Self::lists(), |key, (k, v)| key.push(k).push(v))
    }
}

/// Key factory for user queries
pub struct UserKeys;

impl UserKeys {
    #[must_use]
    pub fn all() -> QueryKey {
        QueryKey::root(USER_ROOT)
    }

    #[must_use]
    pub fn info() -> QueryKey {
        Self::all().push("info")
    }
}

/// Key factory for "my page" queries
pub struct MyPageKeys;

impl MyPageKeys {
    /// Also the key of the full profile query
    #[must_use]
    pub fn all() -> QueryKey {
        QueryKey::root(MYPAGE_ROOT)
    }

    #[must_use]
    pub fn challenges() -> QueryKey {
        Self::all().push("challenges")
    }
}
