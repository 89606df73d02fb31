//! Host capture capability
//!
//! The host environment's facility for requesting live media input is
//! modeled as an async trait: one request in, asynchronously either a
//! stream handle or a failure reason out. Real hosts live outside this
//! crate; the implementations here serve tests and hostless platforms.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::error::{CaptureError, CaptureResult};
use crate::request::CaptureRequest;
use crate::stream::MediaStream;

/// The host environment's media-capture capability
#[async_trait]
pub trait CaptureHost: Send + Sync {
    /// Request a live media stream matching the given configuration.
    ///
    /// Resolves at an indeterminate later time with exactly one of two
    /// outcomes: a granted stream handle, or the reason access could
    /// not be granted.
    async fn request_stream(&self, request: CaptureRequest) -> CaptureResult<MediaStream>;
}

/// Capture host that grants every request with a fixed stream
pub struct GrantingHost {
    stream: MediaStream,
    issued: AtomicU64,
}

impl GrantingHost {
    /// Create a host granting a fresh video stream handle
    pub fn new() -> Self {
        Self {
            stream: MediaStream::video(),
            issued: AtomicU64::new(0),
        }
    }

    /// The stream handle this host grants
    pub fn granted_stream(&self) -> MediaStream {
        self.stream.clone()
    }

    /// Number of capture requests issued to this host
    pub fn requests_issued(&self) -> u64 {
        self.issued.load(Ordering::Relaxed)
    }
}

impl Default for GrantingHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CaptureHost for GrantingHost {
    async fn request_stream(&self, _request: CaptureRequest) -> CaptureResult<MediaStream> {
        self.issued.fetch_add(1, Ordering::Relaxed);

        // Model the suspension point: completion happens on a later
        // turn of the scheduler, never inline with the caller.
        tokio::task::yield_now().await;

        Ok(self.stream.clone())
    }
}

/// Capture host that denies every request with a fixed failure
pub struct DenyingHost {
    failure: CaptureError,
    issued: AtomicU64,
}

impl DenyingHost {
    /// Create a host denying with the given permission reason
    pub fn new(reason: impl Into<String>) -> Self {
        Self::with_failure(CaptureError::PermissionDenied {
            reason: reason.into(),
        })
    }

    /// Create a host denying with an arbitrary failure
    pub fn with_failure(failure: CaptureError) -> Self {
        Self {
            failure,
            issued: AtomicU64::new(0),
        }
    }

    /// Number of capture requests issued to this host
    pub fn requests_issued(&self) -> u64 {
        self.issued.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CaptureHost for DenyingHost {
    async fn request_stream(&self, _request: CaptureRequest) -> CaptureResult<MediaStream> {
        self.issued.fetch_add(1, Ordering::Relaxed);

        tokio::task::yield_now().await;

        Err(self.failure.clone())
    }
}
