//! Result gallery - the in-memory archive of recovered footage.
//!
//! Ordered newest-first, prepend-only. Artifacts are never updated or
//! removed; the collection lives and dies with the session.

use std::collections::VecDeque;

use paleocam_domain::Artifact;
use tokio::sync::RwLock;

/// In-memory gallery of completed artifacts.
pub struct GalleryService {
    items: RwLock<VecDeque<Artifact>>,
}

impl GalleryService {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(VecDeque::new()),
        }
    }

    /// Prepend a completed artifact. Never fails.
    pub async fn add(&self, artifact: Artifact) {
        let mut items = self.items.write().await;
        tracing::debug!(artifact_id = %artifact.id, file_name = %artifact.file_name, "Artifact added to gallery");
        items.push_front(artifact);
    }

    /// Read-only snapshot, newest-first.
    pub async fn list(&self) -> Vec<Artifact> {
        let items = self.items.read().await;
        items.iter().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl Default for GalleryService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use paleocam_domain::{ArtifactId, MediaRef};

    fn test_artifact(file_name: &str) -> Artifact {
        Artifact::new(
            ArtifactId::new(),
            MediaRef::new(format!("/tmp/{file_name}")),
            "test prompt",
            Utc::now(),
            file_name,
        )
    }

    #[tokio::test]
    async fn snapshot_is_newest_first() {
        let gallery = GalleryService::new();
        gallery.add(test_artifact("a.mp4")).await;
        gallery.add(test_artifact("b.mp4")).await;
        gallery.add(test_artifact("c.mp4")).await;

        let snapshot = gallery.list().await;
        let names: Vec<&str> = snapshot.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(names, vec!["c.mp4", "b.mp4", "a.mp4"]);
    }

    #[tokio::test]
    async fn snapshot_is_detached_from_later_additions() {
        let gallery = GalleryService::new();
        gallery.add(test_artifact("a.mp4")).await;

        let snapshot = gallery.list().await;
        gallery.add(test_artifact("b.mp4")).await;

        assert_eq!(snapshot.len(), 1);
        assert_eq!(gallery.len().await, 2);
    }
}
