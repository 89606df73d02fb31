//! Integration tests for the capture binding flow
//!
//! These run against the in-crate hosts and registry, so no capture
//! hardware or host document is involved.

use std::sync::Arc;

use camlink::*;

fn registry_with_webcam_surface() -> (Arc<InMemorySurfaceRegistry>, Arc<VideoSurface>) {
    let registry = Arc::new(InMemorySurfaceRegistry::new());
    let surface = Arc::new(VideoSurface::new(WEBCAM_SURFACE_ID));
    registry.insert(surface.clone());
    (registry, surface)
}

#[tokio::test]
async fn test_granted_stream_is_bound_to_surface() {
    let (registry, surface) = registry_with_webcam_surface();
    let host = Arc::new(GrantingHost::new());
    let sink = Arc::new(RecordingSink::new());

    let binder = CaptureBinder::with_sink(host.clone(), registry, sink.clone());
    let result = binder.request_and_bind(WEBCAM_SURFACE_ID).await;

    assert!(result.is_ok());
    assert_eq!(surface.source(), Some(host.granted_stream()));
    assert!(sink.messages().is_empty());
}

#[tokio::test]
async fn test_denial_emits_prefixed_diagnostic_and_leaves_surface_unset() {
    let (registry, surface) = registry_with_webcam_surface();
    let host = Arc::new(DenyingHost::new("Permission denied"));
    let sink = Arc::new(RecordingSink::new());

    let binder = CaptureBinder::with_sink(host, registry, sink.clone());
    let result = binder.request_and_bind(WEBCAM_SURFACE_ID).await;

    assert!(matches!(
        result,
        Err(CaptureError::PermissionDenied { .. })
    ));
    assert_eq!(
        sink.messages(),
        vec!["camera access was denied: Permission denied".to_string()]
    );
    assert!(surface.source().is_none());
}

#[tokio::test]
async fn test_exactly_one_request_per_invocation() {
    let (registry, _surface) = registry_with_webcam_surface();
    let host = Arc::new(GrantingHost::new());

    let binder = CaptureBinder::new(host.clone(), registry);
    binder.request_and_bind(WEBCAM_SURFACE_ID).await.unwrap();

    assert_eq!(host.requests_issued(), 1);
}

#[tokio::test]
async fn test_denial_is_terminal_no_retry() {
    let (registry, _surface) = registry_with_webcam_surface();
    let host = Arc::new(DenyingHost::new("Permission denied"));
    let sink = Arc::new(RecordingSink::new());

    let binder = CaptureBinder::with_sink(host.clone(), registry, sink.clone());
    let _ = binder.request_and_bind(WEBCAM_SURFACE_ID).await;

    assert_eq!(host.requests_issued(), 1);
    assert_eq!(sink.messages().len(), 1);
}

#[tokio::test]
async fn test_missing_surface_is_a_reported_error() {
    let registry = Arc::new(InMemorySurfaceRegistry::new());
    let host = Arc::new(GrantingHost::new());
    let sink = Arc::new(RecordingSink::new());

    let binder = CaptureBinder::with_sink(host, registry, sink.clone());
    let result = binder.request_and_bind(WEBCAM_SURFACE_ID).await;

    assert_eq!(
        result,
        Err(CaptureError::SurfaceNotFound {
            surface_id: WEBCAM_SURFACE_ID.to_string(),
        })
    );
    assert_eq!(
        sink.messages(),
        vec!["Display surface not found: webcam-stream".to_string()]
    );
}

#[tokio::test]
async fn test_empty_request_never_reaches_the_host() {
    let (registry, surface) = registry_with_webcam_surface();
    let host = Arc::new(DenyingHost::new("should not be consulted"));
    let sink = Arc::new(RecordingSink::new());

    let binder = CaptureBinder::with_sink(host.clone(), registry, sink.clone());
    let result = binder
        .bind_with_request(CaptureRequest::new(false, false), WEBCAM_SURFACE_ID)
        .await;

    assert!(matches!(result, Err(CaptureError::InvalidRequest { .. })));
    assert_eq!(host.requests_issued(), 0);
    assert!(sink.messages().is_empty());
    assert!(surface.source().is_none());
}

#[tokio::test]
async fn test_undifferentiated_failure_path() {
    // Device failures travel the same diagnostic path as denials.
    let (registry, surface) = registry_with_webcam_surface();
    let host = Arc::new(DenyingHost::with_failure(CaptureError::DeviceBusy));
    let sink = Arc::new(RecordingSink::new());

    let binder = CaptureBinder::with_sink(host, registry, sink.clone());
    let result = binder.request_and_bind(WEBCAM_SURFACE_ID).await;

    assert_eq!(result, Err(CaptureError::DeviceBusy));
    assert_eq!(
        sink.messages(),
        vec!["camera access was denied: Capture device is busy".to_string()]
    );
    assert!(surface.source().is_none());
}
