//! External service port traits (video generation, credential host, media store).

use async_trait::async_trait;
use paleocam_domain::MediaRef;

use super::error::{CredentialError, MediaStoreError, VideoGenError};

// =============================================================================
// Video Generation Types
// =============================================================================

/// Parameters for one generation request.
///
/// Everything except the prompt is fixed configuration: a single output at
/// the target resolution and aspect ratio.
#[derive(Debug, Clone)]
pub struct VideoJobRequest {
    pub prompt: String,
    pub model: String,
    pub sample_count: u32,
    pub resolution: String,
    pub aspect_ratio: String,
}

/// Remote job state as the orchestrator understands it.
///
/// `name` identifies the operation for refresh calls; `result_uri` is only
/// populated once `done` is true, and may still be absent when the service
/// finished without producing output.
#[derive(Debug, Clone)]
pub struct VideoJob {
    pub name: String,
    pub done: bool,
    pub result_uri: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoGenPort: Send + Sync {
    /// Submit a generation request and return the in-flight job.
    async fn create_job(&self, request: VideoJobRequest) -> Result<VideoJob, VideoGenError>;

    /// Re-query the job's status, returning a refreshed handle.
    async fn refresh_job(&self, job: &VideoJob) -> Result<VideoJob, VideoGenError>;

    /// Download the bytes at a result locator (authenticated fetch).
    async fn fetch_bytes(&self, uri: &str) -> Result<Vec<u8>, VideoGenError>;
}

// =============================================================================
// Credential Host
// =============================================================================

/// Boundary to the hosting environment's credential selector.
///
/// The interactive flow reports nothing beyond "completed"; whether a
/// usable credential was actually selected has to be re-queried.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialHostPort: Send + Sync {
    async fn has_selected_credential(&self) -> Result<bool, CredentialError>;
    async fn open_select_credential(&self) -> Result<(), CredentialError>;
}

// =============================================================================
// Media Store
// =============================================================================

/// Materializes fetched bytes into a local, session-scoped media handle.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaStorePort: Send + Sync {
    async fn store(&self, bytes: &[u8], file_name: &str) -> Result<MediaRef, MediaStoreError>;
}
