//! PaleoCam Engine - headless entry point.
//!
//! Composes the real adapters, reads the scenario from the environment, and
//! runs a single footage-recovery cycle.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod application;
mod infrastructure;

use app::App;
use application::services::GenerationConfig;
use infrastructure::{
    clock::{SystemClock, SystemRandom},
    credential_host::EnvCredentialHost,
    media_store::SessionMediaStore,
    veo::VeoClient,
};
use paleocam_domain::{Behavior, Lighting, Subject};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paleocam_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PaleoCam Engine");

    // Load configuration
    let api_key = std::env::var("PALEOCAM_API_KEY")
        .or_else(|_| std::env::var("API_KEY"))
        .unwrap_or_default();
    let base_url = std::env::var("PALEOCAM_API_BASE_URL")
        .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".into());
    let poll_secs: u64 = std::env::var("PALEOCAM_POLL_INTERVAL_SECS")
        .unwrap_or_else(|_| "8".into())
        .parse()
        .unwrap_or(8);

    let mut config = GenerationConfig {
        poll_interval: Duration::from_secs(poll_secs),
        ..GenerationConfig::default()
    };
    if let Ok(model) = std::env::var("PALEOCAM_MODEL") {
        config.model = model;
    }

    let video_gen = Arc::new(VeoClient::new(&base_url, &api_key));
    let media_store = Arc::new(SessionMediaStore::new()?);
    let credential_host = Arc::new(EnvCredentialHost::new(api_key));

    let app = App::new(
        video_gen,
        media_store,
        credential_host,
        Arc::new(SystemClock),
        Arc::new(SystemRandom),
        config,
    );

    if !app.refresh_credential().await? {
        tracing::error!("No API credential selected; set PALEOCAM_API_KEY and retry");
        return Ok(());
    }

    // Scenario from environment; unknown values keep the defaults.
    if let Ok(raw) = std::env::var("PALEOCAM_SUBJECT") {
        match Subject::from_str(&raw) {
            Some(subject) => app.select_subject(subject).await,
            None => tracing::warn!(value = %raw, "Unknown subject; keeping default"),
        }
    }
    if let Ok(raw) = std::env::var("PALEOCAM_BEHAVIOR") {
        match Behavior::from_str(&raw) {
            Some(behavior) => app.select_behavior(behavior).await,
            None => tracing::warn!(value = %raw, "Unknown behavior; keeping default"),
        }
    }
    if let Ok(raw) = std::env::var("PALEOCAM_LIGHTING") {
        match Lighting::from_str(&raw) {
            Some(lighting) => app.select_lighting(lighting).await,
            None => tracing::warn!(value = %raw, "Unknown lighting; keeping default"),
        }
    }

    // Relay status projections to the log while the cycle runs.
    let mut status = app.subscribe_status();
    let watcher = tokio::spawn(async move {
        while status.changed().await.is_ok() {
            let projection = status.borrow_and_update().clone();
            if !projection.message.is_empty() {
                tracing::info!(phase = ?projection.phase, "{}", projection.message);
            }
        }
    });

    let selection = app.scenario().await;
    tracing::info!(
        subject = %selection.subject,
        behavior = %selection.behavior,
        lighting = %selection.lighting,
        "Recovering footage"
    );

    match app.trigger_generation().await {
        Ok(artifact) => {
            tracing::info!(
                file_name = %artifact.file_name,
                media = %artifact.media,
                "Recovered footage ready"
            );
        }
        Err(error) => {
            tracing::error!(%error, "Recovery failed");
            if !app.credential_selected() {
                tracing::warn!("Credential was demoted; re-authenticate before retrying");
            }
        }
    }

    app.shutdown();
    watcher.abort();

    let archive = app.gallery_snapshot().await;
    tracing::info!(count = archive.len(), "Session archive");

    Ok(())
}
