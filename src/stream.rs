//! Opaque media stream handles
//!
//! A granted stream is owned by the host environment; this crate only
//! ever holds the handle long enough to hand it to a display surface.
//! Teardown of the underlying hardware resource is the host's concern.

use uuid::Uuid;

/// Kind of media carried by a granted stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Live video source
    Video,
    /// Live audio source
    Audio,
}

/// Opaque handle to a live media source granted by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaStream {
    /// Stable handle identifier
    id: String,
    /// Kind of media the host granted
    kind: MediaKind,
}

impl MediaStream {
    /// Create a handle for a granted source of the given kind
    pub fn new(kind: MediaKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
        }
    }

    /// Create a handle for a granted video source
    pub fn video() -> Self {
        Self::new(MediaKind::Video)
    }

    /// Get the handle identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the kind of media this handle refers to
    pub fn kind(&self) -> MediaKind {
        self.kind
    }
}
