//! Application state and composition.
//!
//! `App` wires the adapters into the services and exposes the surface the
//! presentation shell talks to: scenario selection, the generation trigger,
//! credential handling, status subscription, and gallery snapshots.

use std::sync::Arc;

use paleocam_domain::{build_prompt, Artifact, Behavior, Lighting, ScenarioSelection, Subject};
use tokio::sync::{watch, RwLock};
use tokio_util::sync::CancellationToken;

use crate::application::services::{
    CredentialService, GalleryService, GenerationConfig, GenerationError, GenerationService,
    StatusProjection,
};
use crate::infrastructure::ports::{
    ClockPort, CredentialError, CredentialHostPort, MediaStorePort, RandomPort, VideoGenPort,
};

/// Main application state.
pub struct App {
    scenario: RwLock<ScenarioSelection>,
    credentials: Arc<CredentialService>,
    generation: Arc<GenerationService>,
    gallery: Arc<GalleryService>,
    // Session-level token; an in-flight cycle observes it at each poll tick,
    // so tearing the session down never leaves a background poll running.
    cancel: CancellationToken,
}

impl App {
    pub fn new(
        video_gen: Arc<dyn VideoGenPort>,
        media_store: Arc<dyn MediaStorePort>,
        credential_host: Arc<dyn CredentialHostPort>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
        config: GenerationConfig,
    ) -> Self {
        let gallery = Arc::new(GalleryService::new());
        let credentials = Arc::new(CredentialService::new(credential_host));
        let generation = Arc::new(
            GenerationService::new(
                video_gen,
                media_store,
                gallery.clone(),
                credentials.clone(),
                clock,
                random,
            )
            .with_config(config),
        );

        Self {
            scenario: RwLock::new(ScenarioSelection::default()),
            credentials,
            generation,
            gallery,
            cancel: CancellationToken::new(),
        }
    }

    // =========================================================================
    // Credential gate
    // =========================================================================

    /// Ask the host whether a credential is already selected.
    pub async fn refresh_credential(&self) -> Result<bool, CredentialError> {
        self.credentials.refresh().await
    }

    /// Run the host's interactive credential-selection flow.
    pub async fn request_credential(&self) -> Result<bool, CredentialError> {
        self.credentials.request_credential().await
    }

    pub fn credential_selected(&self) -> bool {
        self.credentials.is_selected()
    }

    // =========================================================================
    // Scenario config
    // =========================================================================

    pub async fn select_subject(&self, subject: Subject) {
        self.scenario.write().await.subject = subject;
    }

    pub async fn select_behavior(&self, behavior: Behavior) {
        self.scenario.write().await.behavior = behavior;
    }

    pub async fn select_lighting(&self, lighting: Lighting) {
        self.scenario.write().await.lighting = lighting;
    }

    pub async fn scenario(&self) -> ScenarioSelection {
        *self.scenario.read().await
    }

    // =========================================================================
    // Generation
    // =========================================================================

    /// Build the prompt from the current selection and run one recovery
    /// cycle. Rejected while a cycle is already in flight.
    pub async fn trigger_generation(&self) -> Result<Artifact, GenerationError> {
        let prompt = build_prompt(&self.scenario().await);
        self.generation.generate(&prompt, &self.cancel).await
    }

    pub fn is_generating(&self) -> bool {
        self.generation.is_generating()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<StatusProjection> {
        self.generation.subscribe()
    }

    // =========================================================================
    // Gallery
    // =========================================================================

    pub async fn gallery_snapshot(&self) -> Vec<Artifact> {
        self.gallery.list().await
    }

    /// Cancel any in-flight cycle; called when the session ends.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedClock, FixedRandom};
    use crate::infrastructure::ports::{
        MockCredentialHostPort, MockMediaStorePort, MockVideoGenPort, VideoJob,
    };
    use chrono::{TimeZone, Utc};
    use paleocam_domain::MediaRef;
    use std::time::Duration;

    fn test_app(video_gen: MockVideoGenPort) -> App {
        let mut media_store = MockMediaStorePort::new();
        media_store
            .expect_store()
            .returning(|_, name| Ok(MediaRef::new(format!("/tmp/{name}"))));

        let mut host = MockCredentialHostPort::new();
        host.expect_has_selected_credential().returning(|| Ok(true));

        App::new(
            Arc::new(video_gen),
            Arc::new(media_store),
            Arc::new(host),
            Arc::new(FixedClock(
                Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0)
                    .single()
                    .expect("valid date"),
            )),
            Arc::new(FixedRandom(2500)),
            GenerationConfig {
                poll_interval: Duration::from_millis(10),
                ..GenerationConfig::default()
            },
        )
    }

    #[tokio::test(start_paused = true)]
    async fn trigger_builds_prompt_from_current_selection() {
        let mut video_gen = MockVideoGenPort::new();
        video_gen
            .expect_create_job()
            .withf(|request| {
                request.prompt.contains("Velociraptor")
                    && request.prompt.contains("Engaged in a territorial display")
                    && request.sample_count == 1
            })
            .times(1)
            .returning(|_| {
                Ok(VideoJob {
                    name: "operations/test".to_string(),
                    done: true,
                    result_uri: Some("https://svc/x".to_string()),
                })
            });
        video_gen
            .expect_fetch_bytes()
            .returning(|_| Ok(vec![0u8]));

        let app = test_app(video_gen);
        app.refresh_credential().await.expect("host query");
        app.select_subject(Subject::Velociraptor).await;
        app.select_behavior(Behavior::TerritorialDisplay).await;

        let artifact = app.trigger_generation().await.expect("cycle succeeds");
        assert!(artifact.prompt.contains("Velociraptor"));

        let snapshot = app.gallery_snapshot().await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, artifact.id);
    }
}
