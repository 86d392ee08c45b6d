//! Error types for port operations.

/// Errors from the remote video-generation service.
///
/// Message text is preserved verbatim from the service so callers can
/// classify authentication-class failures by signature.
#[derive(Debug, Clone, thiserror::Error)]
pub enum VideoGenError {
    #[error("Generation request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Service unavailable")]
    Unavailable,
}

/// Errors from the credential host boundary.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CredentialError {
    #[error("Credential host error: {0}")]
    Host(String),
}

/// Errors from local media materialization.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MediaStoreError {
    #[error("Failed to store media: {0}")]
    Storage(String),
}
