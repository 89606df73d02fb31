//! Display surfaces and surface lookup
//!
//! A display surface is a visual element capable of rendering a live
//! video stream. Surfaces are resolved through an injected registry
//! rather than ambient document state, so the binder can be exercised
//! in isolation.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::stream::MediaStream;

/// Well-known identifier of the webcam display surface
pub const WEBCAM_SURFACE_ID: &str = "webcam-stream";

/// A visual element that can accept a live media source
pub trait DisplaySurface: Send + Sync {
    /// Identifier this surface is registered under
    fn id(&self) -> &str;

    /// Set the live rendering source for this surface
    fn set_source(&self, stream: MediaStream);

    /// Get the currently bound source, if any
    fn source(&self) -> Option<MediaStream>;
}

/// In-memory display surface
///
/// Stands in for a host-environment video element; rendering itself is
/// the host's concern, this type only tracks the bound source.
pub struct VideoSurface {
    id: String,
    source: RwLock<Option<MediaStream>>,
}

impl VideoSurface {
    /// Create a surface registered under the given identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: RwLock::new(None),
        }
    }
}

impl DisplaySurface for VideoSurface {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_source(&self, stream: MediaStream) {
        *self.source.write() = Some(stream);
    }

    fn source(&self) -> Option<MediaStream> {
        self.source.read().clone()
    }
}

/// Lookup of display surfaces by string identifier
pub trait SurfaceRegistry: Send + Sync {
    /// Resolve a surface by identifier; `None` when no surface is
    /// registered under it
    fn lookup(&self, surface_id: &str) -> Option<Arc<dyn DisplaySurface>>;
}

/// In-memory surface registry
pub struct InMemorySurfaceRegistry {
    surfaces: RwLock<HashMap<String, Arc<dyn DisplaySurface>>>,
}

impl InMemorySurfaceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            surfaces: RwLock::new(HashMap::new()),
        }
    }

    /// Register a surface under its own identifier, replacing any
    /// previous registration
    pub fn insert(&self, surface: Arc<dyn DisplaySurface>) {
        self.surfaces
            .write()
            .insert(surface.id().to_string(), surface);
    }
}

impl Default for InMemorySurfaceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceRegistry for InMemorySurfaceRegistry {
    fn lookup(&self, surface_id: &str) -> Option<Arc<dyn DisplaySurface>> {
        self.surfaces.read().get(surface_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        let registry = InMemorySurfaceRegistry::new();
        registry.insert(Arc::new(VideoSurface::new(WEBCAM_SURFACE_ID)));

        assert!(registry.lookup(WEBCAM_SURFACE_ID).is_some());
        assert!(registry.lookup("missing").is_none());
    }

    #[test]
    fn test_surface_source_starts_unset() {
        let surface = VideoSurface::new(WEBCAM_SURFACE_ID);
        assert!(surface.source().is_none());

        let stream = MediaStream::video();
        surface.set_source(stream.clone());
        assert_eq!(surface.source(), Some(stream));
    }
}
