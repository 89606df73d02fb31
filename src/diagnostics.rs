//! Diagnostic output
//!
//! Failure reports go through an injected sink instead of a
//! process-wide global, so the binder stays testable in isolation.

use parking_lot::Mutex;
use tracing::error;

/// Destination for developer-facing diagnostic messages
pub trait DiagnosticSink: Send + Sync {
    /// Report one diagnostic message
    fn report(&self, message: &str);
}

/// Sink forwarding diagnostics to the `tracing` error level
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, message: &str) {
        error!(target: "camlink", "{message}");
    }
}

/// Sink recording diagnostics in memory, for tests
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Create an empty recording sink
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    /// All messages reported so far, in order
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
