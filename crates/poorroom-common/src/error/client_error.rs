//! Client error types
//!
//! Unified error taxonomy for every call the client makes.

use poorroom_core::DomainError;
use std::fmt;
use validator::ValidationErrors;

/// Client-wide error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    /// No response was received (connect failure, timeout, broken transport)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Malformed caller input, rejected before any request is sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// 2xx response whose body could not be parsed
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The client could not be constructed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status code, when the server answered
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get error code string
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Network(_) => "NETWORK_ERROR",
            Self::HttpStatus { .. } => "HTTP_STATUS_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Check if the server rejected the request (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_some_and(|s| (400..500).contains(&s))
    }

    /// Check if the server failed (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_some_and(|s| (500..600).contains(&s))
    }

    #[must_use]
    pub fn network(msg: impl fmt::Display) -> Self {
        Self::Network(msg.to_string())
    }

    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    #[must_use]
    pub fn decode(msg: impl fmt::Display) -> Self {
        Self::Decode(msg.to_string())
    }

    #[must_use]
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }
}

impl From<ValidationErrors> for ClientError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<DomainError> for ClientError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError(msg) => Self::Validation(msg),
            DomainError::MissingIdentity(_) | DomainError::NotSelectable(_) => {
                Self::Validation(err.to_string())
            }
            DomainError::RecordNotFound(_) => Self::HttpStatus {
                status: 404,
                body: err.to_string(),
            },
            DomainError::ReactionRejected { status, body } => Self::HttpStatus { status, body },
            DomainError::RemoteError(msg) => Self::Network(msg),
        }
    }
}

impl From<ClientError> for DomainError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Validation(msg) => DomainError::ValidationError(msg),
            ClientError::HttpStatus { status, body } => DomainError::ReactionRejected { status, body },
            other => DomainError::RemoteError(other.to_string()),
        }
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
