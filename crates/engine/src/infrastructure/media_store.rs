//! Session-scoped media storage.
//!
//! Fetched footage is written into a temporary directory that lives exactly
//! as long as the store itself, matching the session-lifetime guarantee of
//! artifact media handles. Nothing is released early; dropping the store
//! removes the directory and every handle with it.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use paleocam_domain::MediaRef;
use tempfile::TempDir;

use crate::infrastructure::ports::{MediaStoreError, MediaStorePort};

/// Media store backed by a per-session temporary directory.
pub struct SessionMediaStore {
    root: TempDir,
    // Suggested file names carry a small random suffix and may collide;
    // a monotonic prefix keeps every stored handle unique.
    sequence: AtomicU64,
}

impl SessionMediaStore {
    pub fn new() -> Result<Self, MediaStoreError> {
        let root = TempDir::new().map_err(|e| MediaStoreError::Storage(e.to_string()))?;
        Ok(Self {
            root,
            sequence: AtomicU64::new(0),
        })
    }
}

#[async_trait]
impl MediaStorePort for SessionMediaStore {
    async fn store(&self, bytes: &[u8], file_name: &str) -> Result<MediaRef, MediaStoreError> {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        let path = self.root.path().join(format!("{seq:04}_{file_name}"));

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| MediaStoreError::Storage(e.to_string()))?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "Stored media locally");
        Ok(MediaRef::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_bytes_and_returns_readable_handle() {
        let store = SessionMediaStore::new().expect("temp dir");
        let media = store
            .store(b"not really mp4 bytes", "LEAK_ARCHIVE_4242.mp4")
            .await
            .expect("store succeeds");

        let written = tokio::fs::read(media.path()).await.expect("file readable");
        assert_eq!(written, b"not really mp4 bytes");
    }

    #[tokio::test]
    async fn identical_file_names_get_distinct_handles() {
        let store = SessionMediaStore::new().expect("temp dir");
        let first = store.store(b"a", "LEAK_ARCHIVE_1000.mp4").await.expect("store");
        let second = store.store(b"b", "LEAK_ARCHIVE_1000.mp4").await.expect("store");

        assert_ne!(first.path(), second.path());
    }
}
