//! # camlink
//!
//! Requests a video-only media stream from a host environment's
//! capture capability and binds it to a named display surface. The
//! host capability, the surface lookup, and the diagnostic output are
//! all injected dependencies, so the binding flow can be exercised
//! without any real hardware or document state.
//!
//! ```no_run
//! use std::sync::Arc;
//! use camlink::{CaptureBinder, GrantingHost, InMemorySurfaceRegistry, VideoSurface, WEBCAM_SURFACE_ID};
//!
//! # async fn run() -> camlink::CaptureResult<()> {
//! let registry = Arc::new(InMemorySurfaceRegistry::new());
//! registry.insert(Arc::new(VideoSurface::new(WEBCAM_SURFACE_ID)));
//!
//! let binder = CaptureBinder::new(Arc::new(GrantingHost::new()), registry);
//! binder.request_and_bind(WEBCAM_SURFACE_ID).await?;
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod binder;
pub mod diagnostics;
pub mod error;
pub mod host;
pub mod request;
pub mod stream;
pub mod surface;

// Re-export main types
pub use binder::{CaptureBinder, DENIAL_PREFIX};
pub use diagnostics::{DiagnosticSink, RecordingSink, TracingSink};
pub use error::{CaptureError, CaptureResult};
pub use host::{CaptureHost, DenyingHost, GrantingHost};
pub use request::CaptureRequest;
pub use stream::{MediaKind, MediaStream};
pub use surface::{
    DisplaySurface, InMemorySurfaceRegistry, SurfaceRegistry, VideoSurface, WEBCAM_SURFACE_ID,
};
