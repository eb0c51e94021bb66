//! Challenge entities - the savings/spending "rooms" users join

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::envelope::ApiEnvelope;
use crate::value_objects::ChallengeId;

/// Progress state of a challenge from the user's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Proceeding,
    Success,
    Completed,
}

impl Status {
    /// Display label shown in the UI
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Proceeding => "참가중",
            Self::Success => "성공",
            Self::Completed => "완료",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of the user's challenges in each [`Status`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ChallengeStatus {
    #[serde(default)]
    pub proceeding: u32,
    #[serde(default)]
    pub success: u32,
    #[serde(default)]
    pub completed: u32,
}

impl ChallengeStatus {
    pub fn count(&self, status: Status) -> u32 {
        match status {
            Status::Proceeding => self.proceeding,
            Status::Success => self.success,
            Status::Completed => self.completed,
        }
    }

    pub fn total(&self) -> u32 {
        self.proceeding
            .saturating_add(self.success)
            .saturating_add(self.completed)
    }
}

/// Challenge period
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDuration {
    /// Length in days
    pub period: u32,
    pub start_at: String,
    pub end_at: String,
}

/// A challenge the current user participates in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserChallenge {
    pub challenge_id: ChallengeId,
    pub title: String,
    pub img_url: String,
    pub active: bool,
    pub duration: ChallengeDuration,
    pub available_count: u32,
    pub participant_count: u32,
    pub status: Status,
    #[serde(default)]
    pub status_tag: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl UserChallenge {
    /// Remaining seats in the challenge
    pub fn remaining_seats(&self) -> u32 {
        self.available_count.saturating_sub(self.participant_count)
    }
}

/// Challenge detail
///
/// Only the fields the client reads are typed; everything else the server
/// sends is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub challenge_id: ChallengeId,
    pub title: String,
    #[serde(default)]
    pub img_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<ChallengeDuration>,
    #[serde(default)]
    pub available_count: u32,
    #[serde(default)]
    pub participant_count: u32,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeSummary {
    pub challenge_id: ChallengeId,
    pub title: String,
    #[serde(default)]
    pub img_url: Option<String>,
    #[serde(default)]
    pub duration: Option<ChallengeDuration>,
    #[serde(default)]
    pub available_count: u32,
    #[serde(default)]
    pub participant_count: u32,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Search result page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeSearchResult {
    #[serde(default, alias = "content")]
    pub challenges: Vec<ChallengeSummary>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

/// Challenges joined by the current user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipatedChallenges {
    #[serde(default)]
    pub participated_challenges: Vec<UserChallenge>,
}

pub type ChallengeResponse = ApiEnvelope<Challenge>;
pub type ChallengeSearchResponse = ApiEnvelope<ChallengeSearchResult>;
pub type UserChallengeListResult = ApiEnvelope<ParticipatedChallenges>;

/// Free-form search criteria sent as query parameters
///
/// Keys are kept sorted so that two filters with the same criteria compare
/// equal regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChallengeFilter(BTreeMap<String, String>);

impl ChallengeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a criterion, replacing any previous value for the key
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.normalized().is_empty()
    }

    /// Criteria sorted by key, with blank values dropped
    pub fn normalized(&self) -> Vec<(&str, &str)> {
        self.0
            .iter()
            .map(|(k, v)| (k.as_str(), v.trim()))
            .filter(|(k, v)| !k.is_empty() && !v.is_empty())
            .collect()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for ChallengeFilter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filter = Self::new();
        for (k, v) in iter {
            filter.insert(k, v);
        }
        filter
    }
}
