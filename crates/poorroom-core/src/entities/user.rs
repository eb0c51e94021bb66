//! User profile entities and the profile update request

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::challenge::ChallengeStatus;
use super::envelope::ApiEnvelope;

/// Public profile of the current user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub img_url: String,
}

/// Full "my page" payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyPage {
    pub profile: Profile,
    #[serde(default)]
    pub notification: bool,
    #[serde(default)]
    pub user_challenge_result: ChallengeStatus,
}

/// Lightweight info about the signed-in user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default, alias = "nickName")]
    pub nickname: String,
    #[serde(default)]
    pub img_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

pub type UserResponse = ApiEnvelope<MyPage>;
pub type UserProfileResponse = ApiEnvelope<UserInfo>;

/// Image picked by the user, not uploaded yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Profile image: either a freshly picked file or the current hosted URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileImage {
    pub image: Option<ImageFile>,
    pub image_url: String,
}

/// Profile update as entered by the user
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct UserUpdateRequest {
    #[validate(length(min = 1, max = 20, message = "Nickname must be 1-20 characters"))]
    pub nick_name: String,

    pub profile_image: Option<ProfileImage>,
}

impl UserUpdateRequest {
    pub fn new(nick_name: impl Into<String>) -> Self {
        Self {
            nick_name: nick_name.into(),
            profile_image: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: ProfileImage) -> Self {
        self.profile_image = Some(image);
        self
    }

    /// New file to upload, if one was picked
    pub fn new_image(&self) -> Option<&ImageFile> {
        self.profile_image.as_ref().and_then(|p| p.image.as_ref())
    }

    /// Already hosted image URL, if any
    pub fn current_image_url(&self) -> Option<&str> {
        self.profile_image
            .as_ref()
            .map(|p| p.image_url.as_str())
            .filter(|url| !url.is_empty())
    }
}

/// Body of `PATCH /mypage/profile`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateBody {
    pub nick_name: String,
    pub profile_img_url: Option<String>,
}

/// Body of the presigned URL request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUrlRequest {
    pub file_name: String,
    #[serde(rename = "type")]
    pub content_type: String,
}

/// Upload target plus the URL the image will be served from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUrlInfo {
    #[serde(default)]
    pub presigned_url: String,
    #[serde(default)]
    pub img_url: String,
}

impl PresignedUrlInfo {
    /// Both URLs are present, so an upload can proceed
    pub fn is_usable(&self) -> bool {
        !self.presigned_url.is_empty() && !self.img_url.is_empty()
    }
}
