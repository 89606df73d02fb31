//! Capture error types and handling
//!
//! This module defines the error type shared by the capture host, the
//! surface registry, and the binder. Every failure the host can raise
//! travels through the same path; the variants keep the cause for
//! callers that care, but the binder reports them uniformly.

use thiserror::Error;

/// Main error type for capture and binding operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// Capture access was refused by the user or host environment.
    ///
    /// Displays as the bare reason text, so a diagnostic built by
    /// prefixing this error reads exactly as the host reported it.
    #[error("{reason}")]
    PermissionDenied {
        /// Host-supplied reason text
        reason: String,
    },

    /// No capture device is attached or visible to the host
    #[error("No capture device available")]
    DeviceNotFound,

    /// The capture device is held exclusively by another process
    #[error("Capture device is busy")]
    DeviceBusy,

    /// A host-level policy forbids capture access
    #[error("Capture blocked by host policy: {reason}")]
    PolicyRestricted {
        /// Policy description
        reason: String,
    },

    /// The capture request named no media kind at all
    #[error("Invalid capture request: {message}")]
    InvalidRequest {
        /// Error message
        message: String,
    },

    /// No display surface is registered under the requested identifier
    #[error("Display surface not found: {surface_id}")]
    SurfaceNotFound {
        /// Identifier that failed to resolve
        surface_id: String,
    },
}

/// Result type alias for capture operations
pub type CaptureResult<T> = Result<T, CaptureError>;

impl CaptureError {
    /// Whether this failure originated in the host capture capability,
    /// as opposed to a misuse of the library itself.
    pub fn is_host_failure(&self) -> bool {
        match self {
            CaptureError::PermissionDenied { .. } => true,
            CaptureError::DeviceNotFound => true,
            CaptureError::DeviceBusy => true,
            CaptureError::PolicyRestricted { .. } => true,
            CaptureError::InvalidRequest { .. } => false,
            CaptureError::SurfaceNotFound { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_displays_bare_reason() {
        let error = CaptureError::PermissionDenied {
            reason: "Permission denied".to_string(),
        };
        assert_eq!(error.to_string(), "Permission denied");
    }

    #[test]
    fn test_surface_not_found_names_identifier() {
        let error = CaptureError::SurfaceNotFound {
            surface_id: "webcam-stream".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Display surface not found: webcam-stream"
        );
    }

    #[test]
    fn test_host_failure_classification() {
        assert!(CaptureError::DeviceBusy.is_host_failure());
        assert!(!CaptureError::InvalidRequest {
            message: "empty".to_string()
        }
        .is_host_failure());
    }
}
