//! Image upload service
//!
//! Uploads go straight to object storage through a presigned URL issued by
//! the API.

use poorroom_common::{ClientError, ClientResult};
use poorroom_core::{ApiEnvelope, ImageFile, PresignedUrlInfo, PresignedUrlRequest};
use reqwest::Method;
use tracing::{debug, instrument};

use crate::http::ApiClient;
use crate::routes;

/// Image service
pub struct ImageService<'a> {
    api: &'a ApiClient,
}

impl<'a> ImageService<'a> {
    /// Create a new ImageService
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Ask the API for an upload target for this file
    #[instrument(skip(self, file), fields(file_name = %file.file_name, content_type = %file.content_type))]
    pub async fn create_presigned_url(&self, file: &ImageFile) -> ClientResult<PresignedUrlInfo> {
        let body = PresignedUrlRequest {
            file_name: file.file_name.clone(),
            content_type: file.content_type.clone(),
        };
        let request = self.api.request(Method::POST, routes::PRESIGNED_URL).json(&body);
        let response: ApiEnvelope<PresignedUrlInfo> = self.api.send_json(request).await?;
        Ok(response.into_result())
    }

    /// PUT the raw bytes to a presigned URL, with the file's content type
    #[instrument(skip(self, file), fields(size = file.len()))]
    pub async fn upload(&self, presigned_url: &str, file: &ImageFile) -> ClientResult<()> {
        if file.is_empty() {
            return Err(ClientError::validation("cannot upload an empty image"));
        }
        if presigned_url.is_empty() {
            return Err(ClientError::validation("presigned URL is empty"));
        }

        let request = self
            .api
            .external(Method::PUT, presigned_url, &file.content_type)
            .body(file.bytes.clone());
        self.api.send_empty(request).await?;

        debug!("Image uploaded");
        Ok(())
    }
}
