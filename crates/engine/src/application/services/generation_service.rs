//! Generation orchestration - the asynchronous footage-recovery cycle.
//!
//! Owns the one-job-at-a-time state machine: submit the prompt to the remote
//! service, poll the job at a fixed interval until it completes, resolve the
//! result locator, fetch the bytes, materialize a local media handle, and
//! hand the finished artifact to the gallery. Jobs are human-interactive
//! (minutes-scale) and strictly sequential, so the poll is a fixed interval
//! rather than backoff.
//!
//! Status projections published along the way are advisory display strings;
//! transitions never depend on them.

use std::sync::Arc;
use std::time::Duration;

use paleocam_domain::{Artifact, ArtifactId};
use tokio::sync::{watch, Mutex};
use tokio_util::sync::CancellationToken;

use crate::application::services::credential_service::CredentialService;
use crate::application::services::gallery_service::GalleryService;
use crate::infrastructure::ports::{
    ClockPort, MediaStorePort, RandomPort, VideoGenPort, VideoJobRequest,
};

/// Remote failures carrying this signature mean the selected key/project is
/// unusable, not that the job itself went wrong.
const AUTH_FAILURE_SIGNATURE: &str = "Requested entity was not found";

/// Every request asks for exactly one output clip.
const SAMPLE_COUNT: u32 = 1;

const STEP_ACCESSING: &str = "Accessing archival server...";
const STEP_SUBMITTING: &str = "Initializing neural render...";
const STEP_PROCESSING: &str = "Processing classified footage (approx 1-2 mins)...";
const STEP_RESOLVING: &str = "Fetching secure download link...";
const STEP_FETCHING: &str = "Recovering raw footage...";
const STEP_SUCCEEDED: &str = "Footage recovered.";

/// The single user-facing notice for any failed cycle.
const FAILURE_NOTICE: &str = "Error generating video. Please check your API key and try again.";

/// Cosmetic messages shown while a job renders. Purely informational.
const POLL_MESSAGES: [&str; 5] = [
    "Decompressing raw camera sensor data...",
    "Synchronizing audio artifacts...",
    "Applying motion-blur physics...",
    "Reconstructing prehistoric atmosphere...",
    "Finalizing exposure fluctuations...",
];

/// Pick a cosmetic progress message from a random draw. Total for any draw.
fn poll_message(random: &dyn RandomPort) -> &'static str {
    let draw = random.gen_range(0, POLL_MESSAGES.len() as i32 - 1);
    POLL_MESSAGES[draw.unsigned_abs() as usize % POLL_MESSAGES.len()]
}

/// Phases of one recovery cycle.
///
/// `Succeeded` and `Failed` are terminal for a cycle; the machine then
/// returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Idle,
    Submitting,
    Polling,
    Resolving,
    Fetching,
    Succeeded,
    Failed,
}

impl GenerationPhase {
    /// Whether a cycle is currently in flight.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            Self::Submitting | Self::Polling | Self::Resolving | Self::Fetching
        )
    }
}

/// Snapshot published to the shell: current phase plus an advisory
/// human-readable message.
#[derive(Debug, Clone)]
pub struct StatusProjection {
    pub phase: GenerationPhase,
    pub message: String,
}

impl StatusProjection {
    fn idle() -> Self {
        Self {
            phase: GenerationPhase::Idle,
            message: String::new(),
        }
    }
}

/// Failures of one recovery cycle.
///
/// All variants are caught at this boundary; none propagate into the gallery
/// or scenario state, and every failure returns the machine to `Idle`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerationError {
    #[error("A recovery cycle is already running")]
    CycleInProgress,
    #[error("Submission rejected: {0}")]
    SubmissionFailed(String),
    #[error("Status refresh failed: {0}")]
    PollFailed(String),
    #[error("Job completed without a result locator")]
    NoResultProduced,
    #[error("Footage retrieval failed: {0}")]
    FetchFailed(String),
    #[error("Recovery cycle cancelled")]
    Cancelled,
}

impl GenerationError {
    /// Whether the remote rejection means the credential itself is unusable.
    pub fn is_authentication_failure(&self) -> bool {
        match self {
            Self::SubmissionFailed(message)
            | Self::PollFailed(message)
            | Self::FetchFailed(message) => message.contains(AUTH_FAILURE_SIGNATURE),
            _ => false,
        }
    }
}

/// Configuration for the generation cycle.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Remote model identifier.
    pub model: String,
    /// Fixed wait between status polls.
    pub poll_interval: Duration,
    pub resolution: String,
    pub aspect_ratio: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "veo-3.1-fast-generate-preview".to_string(),
            poll_interval: Duration::from_secs(8),
            resolution: "1080p".to_string(),
            aspect_ratio: "16:9".to_string(),
        }
    }
}

/// Service driving one generation job at a time.
pub struct GenerationService {
    video_gen: Arc<dyn VideoGenPort>,
    media_store: Arc<dyn MediaStorePort>,
    gallery: Arc<GalleryService>,
    credentials: Arc<CredentialService>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
    config: GenerationConfig,
    // Held for the duration of a cycle; try_lock failure is the
    // single-flight rejection.
    cycle: Mutex<()>,
    status: watch::Sender<StatusProjection>,
}

impl GenerationService {
    pub fn new(
        video_gen: Arc<dyn VideoGenPort>,
        media_store: Arc<dyn MediaStorePort>,
        gallery: Arc<GalleryService>,
        credentials: Arc<CredentialService>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let (status, _) = watch::channel(StatusProjection::idle());
        Self {
            video_gen,
            media_store,
            gallery,
            credentials,
            clock,
            random,
            config: GenerationConfig::default(),
            cycle: Mutex::new(()),
            status,
        }
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    /// Subscribe to status projections for progress display.
    pub fn subscribe(&self) -> watch::Receiver<StatusProjection> {
        self.status.subscribe()
    }

    pub fn is_generating(&self) -> bool {
        self.status.borrow().phase.is_active()
    }

    /// Run one full recovery cycle for the given prompt.
    ///
    /// Only one cycle may run at a time; a trigger while a cycle is in
    /// flight is rejected without creating a second job. The cancellation
    /// token is honored before each wait and before each status refresh.
    pub async fn generate(
        &self,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> Result<Artifact, GenerationError> {
        let Ok(_cycle) = self.cycle.try_lock() else {
            tracing::debug!("Generation trigger rejected: cycle already in flight");
            return Err(GenerationError::CycleInProgress);
        };

        let result = self.run_cycle(prompt, cancel).await;

        match &result {
            Ok(artifact) => {
                tracing::info!(artifact_id = %artifact.id, file_name = %artifact.file_name, "Recovery cycle complete");
                self.publish(GenerationPhase::Succeeded, STEP_SUCCEEDED);
            }
            Err(error) => {
                if error.is_authentication_failure() {
                    tracing::warn!("Authentication-class failure; demoting credential");
                    self.credentials.demote();
                }
                tracing::error!(%error, "Recovery cycle failed");
                self.publish(GenerationPhase::Failed, FAILURE_NOTICE);
            }
        }

        // Terminal phases are per-cycle; the machine always settles back to
        // Idle with no automatic retry.
        self.publish(GenerationPhase::Idle, "");
        result
    }

    async fn run_cycle(
        &self,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> Result<Artifact, GenerationError> {
        self.publish(GenerationPhase::Submitting, STEP_ACCESSING);
        if cancel.is_cancelled() {
            return Err(GenerationError::Cancelled);
        }

        self.publish(GenerationPhase::Submitting, STEP_SUBMITTING);
        let request = VideoJobRequest {
            prompt: prompt.to_string(),
            model: self.config.model.clone(),
            sample_count: SAMPLE_COUNT,
            resolution: self.config.resolution.clone(),
            aspect_ratio: self.config.aspect_ratio.clone(),
        };

        let mut job = self
            .video_gen
            .create_job(request)
            .await
            .map_err(|e| GenerationError::SubmissionFailed(e.to_string()))?;
        tracing::info!(job = %job.name, "Generation job submitted");

        self.publish(GenerationPhase::Polling, STEP_PROCESSING);
        while !job.done {
            tokio::select! {
                _ = cancel.cancelled() => return Err(GenerationError::Cancelled),
                _ = tokio::time::sleep(self.config.poll_interval) => {}
            }
            if cancel.is_cancelled() {
                return Err(GenerationError::Cancelled);
            }

            job = self
                .video_gen
                .refresh_job(&job)
                .await
                .map_err(|e| GenerationError::PollFailed(e.to_string()))?;
            self.publish(GenerationPhase::Polling, poll_message(self.random.as_ref()));
        }

        self.publish(GenerationPhase::Resolving, STEP_RESOLVING);
        let uri = job.result_uri.ok_or(GenerationError::NoResultProduced)?;

        self.publish(GenerationPhase::Fetching, STEP_FETCHING);
        let bytes = self
            .video_gen
            .fetch_bytes(&uri)
            .await
            .map_err(|e| GenerationError::FetchFailed(e.to_string()))?;

        let file_name = format!("LEAK_ARCHIVE_{}.mp4", self.random.gen_range(1000, 9999));
        let media = self
            .media_store
            .store(&bytes, &file_name)
            .await
            .map_err(|e| GenerationError::FetchFailed(e.to_string()))?;

        let artifact = Artifact::new(
            ArtifactId::from_uuid(self.random.gen_uuid()),
            media,
            prompt,
            self.clock.now(),
            file_name,
        );
        self.gallery.add(artifact.clone()).await;

        Ok(artifact)
    }

    fn publish(&self, phase: GenerationPhase, message: impl Into<String>) {
        let projection = StatusProjection {
            phase,
            message: message.into(),
        };
        tracing::debug!(phase = ?projection.phase, message = %projection.message, "Generation status");
        self.status.send_replace(projection);
    }
}
