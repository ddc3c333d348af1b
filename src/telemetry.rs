//! Application telemetry events and sinks.
//!
//! The list view reports what it displayed and what it deleted as structured
//! events. Nothing leaves the machine: the only real sink writes JSON lines to
//! stderr for local debugging.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by the list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A listing was rendered.
    ArticlesLoaded {
        /// Load request token.
        request: u64,
        /// Number of articles rendered.
        count: usize,
    },
    /// A listing failed and the error placeholder was rendered.
    ArticleLoadFailed {
        /// Load request token.
        request: u64,
        /// Error message shown to the user.
        message: String,
    },
    /// A listing response arrived after a newer request and was dropped.
    StaleListingDiscarded {
        /// Token of the discarded request.
        request: u64,
        /// Token of the newest request at the time.
        latest: u64,
    },
    /// The service accepted a deletion.
    ArticleDeleted {
        /// Identifier of the deleted article.
        id: String,
    },
    /// The service rejected a deletion or could not be reached.
    ArticleDeleteFailed {
        /// Identifier of the article.
        id: String,
        /// Error detail.
        message: String,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

#[cfg(any(test, feature = "test-support"))]
pub use recording::RecordingTelemetrySink;

#[cfg(any(test, feature = "test-support"))]
mod recording {
    use std::sync::{Mutex, PoisonError};

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps events in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Drains the recorded events.
        #[must_use]
        pub fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .drain(..)
                .collect()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event);
        }
    }
}
