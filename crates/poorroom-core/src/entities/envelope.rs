//! Response envelope shared by every endpoint: `{ "result": <payload>, ... }`

use serde::{Deserialize, Serialize};

/// Metadata the server places next to `result`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

/// Generic API response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub result: T,
    #[serde(flatten)]
    pub meta: ApiMeta,
}

impl<T> ApiEnvelope<T> {
    pub fn new(result: T) -> Self {
        Self {
            result,
            meta: ApiMeta::default(),
        }
    }

    /// Drop the metadata and keep the payload
    pub fn into_result(self) -> T {
        self.result
    }
}
