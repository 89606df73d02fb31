//! Capture request configuration

use crate::error::CaptureError;

/// Configuration value naming which media kinds a capture request asks
/// the host for. Constructed once per invocation and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaptureRequest {
    /// Request a live video source
    pub video: bool,
    /// Request a live audio source
    pub audio: bool,
}

impl CaptureRequest {
    /// Create a request for the given media kinds
    pub const fn new(video: bool, audio: bool) -> Self {
        Self { video, audio }
    }

    /// The fixed configuration used for webcam binding: video enabled,
    /// audio excluded.
    pub const fn video_only() -> Self {
        Self::new(true, false)
    }

    /// Validate the request before it reaches the host
    pub fn validate(&self) -> Result<(), CaptureError> {
        if !self.video && !self.audio {
            return Err(CaptureError::InvalidRequest {
                message: "no media kind requested".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for CaptureRequest {
    fn default() -> Self {
        Self::video_only()
    }
}
