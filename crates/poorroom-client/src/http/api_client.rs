//! REST API client
//!
//! Thin wrapper over `reqwest` that adds the base URL and bearer token and
//! maps every failure into [`ClientError`]. No retries, no caching.

use std::sync::Arc;

use poorroom_common::{ApiConfig, ClientConfig, ClientError, ClientResult};
use reqwest::{header::CONTENT_TYPE, Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::response::{decode_ack, decode_body, AckResponse};
use crate::services::{ChallengeService, EmojiService, ImageService, UserService};

/// Map a transport-level failure
fn transport_error(err: reqwest::Error) -> ClientError {
    if err.is_decode() {
        ClientError::decode(err)
    } else if err.is_builder() {
        ClientError::Config(err.to_string())
    } else {
        ClientError::network(err)
    }
}

/// Shared REST client; cheap to clone
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: Arc<ApiConfig>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("authenticated", &self.config.access_token.is_some())
            .finish()
    }
}

impl ApiClient {
    /// Create a client for the given API settings
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self {
            http,
            config: Arc::new(config.clone()),
        })
    }

    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Self::new(&config.api)
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // =========================================================================
    // Resource services
    // =========================================================================

    pub fn challenges(&self) -> ChallengeService<'_> {
        ChallengeService::new(self)
    }

    pub fn users(&self) -> UserService<'_> {
        UserService::new(self)
    }

    pub fn images(&self) -> ImageService<'_> {
        ImageService::new(self)
    }

    pub fn emojis(&self) -> EmojiService<'_> {
        EmojiService::new(self)
    }

    // =========================================================================
    // Request plumbing
    // =========================================================================

    /// Request against the API, authenticated when a token is configured
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.config.url(path));
        match &self.config.access_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Request to an absolute URL outside the API (object storage); never
    /// carries the bearer token
    pub(crate) fn external(&self, method: Method, url: &str, content_type: &str) -> RequestBuilder {
        self.http.request(method, url).header(CONTENT_TYPE, content_type)
    }

    async fn execute(&self, builder: RequestBuilder) -> ClientResult<(u16, Vec<u8>)> {
        let request = builder.build().map_err(transport_error)?;
        let method = request.method().clone();
        let url = request.url().clone();

        debug!(%method, %url, "Sending request");

        let response = self.http.execute(request).await.map_err(|e| {
            warn!(%method, %url, error = %e, "Request failed without response");
            transport_error(e)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport_error)?.to_vec();

        if (200..300).contains(&status) {
            debug!(%method, %url, status, "Request succeeded");
        } else {
            warn!(%method, %url, status, "Request returned error status");
        }

        Ok((status, body))
    }

    /// Send and decode a JSON payload
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let (status, body) = self.execute(builder).await?;
        decode_body(status, &body)
    }

    /// Send a mutation whose payload is not inspected
    pub(crate) async fn send_ack(&self, builder: RequestBuilder) -> ClientResult<AckResponse> {
        let (status, body) = self.execute(builder).await?;
        decode_ack(status, &body)
    }

    /// Send and only check the status
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> ClientResult<()> {
        let (status, body) = self.execute(builder).await?;
        crate::response::check_status(status, &body)
    }
}
