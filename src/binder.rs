//! Capture binding
//!
//! The single operation of this crate: request a video-only stream
//! from the host capability and attach it as the live source of a
//! named display surface. One request per invocation, two outcomes,
//! no retry.

use std::sync::Arc;

use tracing::debug;

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::{CaptureError, CaptureResult};
use crate::host::CaptureHost;
use crate::request::CaptureRequest;
use crate::surface::SurfaceRegistry;

/// Fixed prefix of the diagnostic emitted when capture access fails
pub const DENIAL_PREFIX: &str = "camera access was denied: ";

/// Binds a granted capture stream to a display surface
pub struct CaptureBinder {
    host: Arc<dyn CaptureHost>,
    registry: Arc<dyn SurfaceRegistry>,
    sink: Arc<dyn DiagnosticSink>,
}

impl CaptureBinder {
    /// Create a binder reporting diagnostics through `tracing`
    pub fn new(host: Arc<dyn CaptureHost>, registry: Arc<dyn SurfaceRegistry>) -> Self {
        Self::with_sink(host, registry, Arc::new(TracingSink))
    }

    /// Create a binder with an explicit diagnostic sink
    pub fn with_sink(
        host: Arc<dyn CaptureHost>,
        registry: Arc<dyn SurfaceRegistry>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            host,
            registry,
            sink,
        }
    }

    /// Request a video-only stream and bind it to the surface
    /// registered under `surface_id`.
    ///
    /// On success the surface's live source is set to the granted
    /// stream. On denial exactly one diagnostic is emitted, prefixed
    /// with [`DENIAL_PREFIX`], and the host's failure is returned; the
    /// surface is left untouched. A missing surface is reported as
    /// [`CaptureError::SurfaceNotFound`].
    pub async fn request_and_bind(&self, surface_id: &str) -> CaptureResult<()> {
        self.bind_with_request(CaptureRequest::video_only(), surface_id)
            .await
    }

    /// Same as [`request_and_bind`](Self::request_and_bind) with an
    /// explicit request configuration. The request is validated before
    /// the host is touched.
    pub async fn bind_with_request(
        &self,
        request: CaptureRequest,
        surface_id: &str,
    ) -> CaptureResult<()> {
        request.validate()?;

        let stream = match self.host.request_stream(request).await {
            Ok(stream) => stream,
            Err(err) => {
                self.sink.report(&format!("{DENIAL_PREFIX}{err}"));
                return Err(err);
            }
        };

        let surface = match self.registry.lookup(surface_id) {
            Some(surface) => surface,
            None => {
                let err = CaptureError::SurfaceNotFound {
                    surface_id: surface_id.to_string(),
                };
                self.sink.report(&err.to_string());
                return Err(err);
            }
        };

        debug!(target: "camlink", surface_id, stream_id = stream.id(), "bound capture stream");
        surface.set_source(stream);

        Ok(())
    }
}
