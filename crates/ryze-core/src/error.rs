//! Error types for Ryze Core
//!
//! Provides error handling for:
//! - Missing or empty caller input
//! - Unknown deployment identifiers
//! - Packaging and deployment storage failures

use ryze_artifact::ArtifactError;
use ryze_composition::PatchError;

/// Main Ryze error type
#[derive(Debug, thiserror::Error)]
pub enum RyzeError {
    /// Required input missing or empty
    #[error("{0}")]
    InvalidInput(String),

    /// No deployment with this identifier
    #[error("deployment not found: {0}")]
    NotFound(String),

    /// Packaging or storage failed
    #[error("packaging failed: {0}")]
    Packaging(#[from] PackagingError),

    /// Unexpected failure (e.g. a panicked worker)
    #[error("internal error: {0}")]
    Internal(String),
}

impl RyzeError {
    /// Create an invalid input error
    #[inline]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Check if the caller is at fault (not retryable)
    #[inline]
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::NotFound(_))
    }

    /// Check if error is a missing deployment
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<PatchError> for RyzeError {
    fn from(err: PatchError) -> Self {
        if err.is_missing_input() {
            Self::invalid_input("prompt and artifact required")
        } else {
            Self::Internal(err.to_string())
        }
    }
}

impl From<ArtifactError> for RyzeError {
    fn from(err: ArtifactError) -> Self {
        match err {
            ArtifactError::Empty => Self::invalid_input("prompt and artifact required"),
        }
    }
}

/// Packaging and deployment storage errors
#[derive(Debug, thiserror::Error)]
pub enum PackagingError {
    /// Storage I/O failed
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Deployment metadata could not be (de)serialized
    #[error("metadata serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Identifier is not a valid deployment id
    #[error("invalid deployment id: {0:?}")]
    InvalidId(String),
}
