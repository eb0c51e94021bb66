//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::EmojiType;
use crate::value_objects::RecordId;

/// Domain layer errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Feed record not found: {0}")]
    RecordNotFound(RecordId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Missing required identity: {0}")]
    MissingIdentity(&'static str),

    #[error("Emoji cannot be selected: {0}")]
    NotSelectable(EmojiType),

    // =========================================================================
    // Remote Errors (wrapped)
    // =========================================================================
    #[error("Reaction rejected by server: HTTP {status}: {body}")]
    ReactionRejected { status: u16, body: String },

    #[error("Remote service error: {0}")]
    RemoteError(String),
}

impl DomainError {
    /// Get an error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::RecordNotFound(_) => "UNKNOWN_RECORD",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingIdentity(_) => "MISSING_IDENTITY",
            Self::NotSelectable(_) => "NOT_SELECTABLE",
            Self::ReactionRejected { .. } => "REACTION_REJECTED",
            Self::RemoteError(_) => "REMOTE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::MissingIdentity(_) | Self::NotSelectable(_)
        )
    }
}
