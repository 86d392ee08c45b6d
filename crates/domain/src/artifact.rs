//! Artifact entity - a completed piece of recovered footage.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::ids::ArtifactId;

/// Opaque handle to locally retrievable media bytes.
///
/// Valid for the lifetime of the session; callers must not assume the
/// underlying storage survives beyond it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef(PathBuf);

impl MediaRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl std::fmt::Display for MediaRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// A completed generation result held by the gallery.
///
/// Created only by a successful generation cycle and never mutated
/// afterwards. `id` is unique across the gallery.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub id: ArtifactId,
    /// Local, session-scoped media handle for playback/download.
    pub media: MediaRef,
    /// The exact prompt that produced this footage.
    pub prompt: String,
    pub created_at: DateTime<Utc>,
    /// Suggested file name for download (distinguishes each run).
    pub file_name: String,
}

impl Artifact {
    pub fn new(
        id: ArtifactId,
        media: MediaRef,
        prompt: impl Into<String>,
        created_at: DateTime<Utc>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            media,
            prompt: prompt.into(),
            created_at,
            file_name: file_name.into(),
        }
    }
}
