//! User service
//!
//! Current user info, "my page" profile and challenges, profile updates.

use poorroom_common::ClientResult;
use poorroom_core::{
    ChallengeId, ProfileUpdateBody, UserChallengeListResult, UserProfileResponse, UserResponse,
    UserUpdateRequest,
};
use reqwest::Method;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::http::ApiClient;
use crate::response::AckResponse;
use crate::routes;

/// User service
pub struct UserService<'a> {
    api: &'a ApiClient,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Get info about the signed-in user
    #[instrument(skip(self))]
    pub async fn info(&self) -> ClientResult<UserProfileResponse> {
        let request = self.api.request(Method::GET, routes::USER_INFO);
        self.api.send_json(request).await
    }

    /// Get the full "my page" profile
    #[instrument(skip(self))]
    pub async fn profile(&self) -> ClientResult<UserResponse> {
        let request = self.api.request(Method::GET, routes::MYPAGE);
        self.api.send_json(request).await
    }

    /// List challenges the user joined
    #[instrument(skip(self))]
    pub async fn challenges(&self) -> ClientResult<UserChallengeListResult> {
        let request = self.api.request(Method::GET, routes::MYPAGE_CHALLENGES);
        self.api.send_json(request).await
    }

    /// Leave a joined challenge
    #[instrument(skip(self))]
    pub async fn leave_challenge(&self, id: ChallengeId) -> ClientResult<AckResponse> {
        let request = self.api.request(Method::DELETE, &routes::leave_challenge(id));
        let response = self.api.send_ack(request).await?;

        info!(challenge_id = %id, "Left challenge");

        Ok(response)
    }

    /// Update nickname and profile image
    ///
    /// A newly picked image is uploaded through a presigned URL first and the
    /// profile then points at the hosted copy; otherwise the current image URL
    /// is kept.
    #[instrument(skip(self, update), fields(nick_name = %update.nick_name))]
    pub async fn update_profile(&self, update: &UserUpdateRequest) -> ClientResult<AckResponse> {
        update.validate()?;

        let mut profile_img_url = update.current_image_url().map(str::to_string);

        if let Some(file) = update.new_image() {
            let images = self.api.images();
            let target = images.create_presigned_url(file).await?;

            if target.is_usable() {
                images.upload(&target.presigned_url, file).await?;
                profile_img_url = Some(target.img_url);
            } else {
                warn!("Presigned URL response incomplete, keeping current image");
            }
        }

        let body = ProfileUpdateBody {
            nick_name: update.nick_name.clone(),
            profile_img_url,
        };
        let request = self.api.request(Method::PATCH, routes::MYPAGE_PROFILE).json(&body);
        let response = self.api.send_ack(request).await?;

        info!("Profile updated");

        Ok(response)
    }
}
