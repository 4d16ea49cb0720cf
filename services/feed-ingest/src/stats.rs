//! Ingestion counters
//!
//! Lock-free counters updated from the feed callback and read by the
//! reporting path.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Message and processing-time accounting for the feed
#[derive(Debug, Default)]
pub struct IngestStats {
    /// Trade events processed end-to-end
    messages_processed: AtomicU64,
    /// Malformed events dropped at decode
    events_dropped: AtomicU64,
    /// Total processing time across all processed events
    processing_nanos: AtomicU64,
}

impl IngestStats {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one fully processed event and its handling time
    pub fn record_message(&self, elapsed: Duration) {
        self.messages_processed.fetch_add(1, Ordering::Relaxed);
        self.processing_nanos
            .fetch_add(elapsed.as_nanos() as u64, Ordering::Relaxed);
    }

    /// Record one dropped (malformed) event
    pub fn record_dropped(&self) {
        self.events_dropped.fetch_add(1, Ordering::Relaxed);
    }

    /// Events processed so far
    pub fn messages_processed(&self) -> u64 {
        self.messages_processed.load(Ordering::Relaxed)
    }

    /// Malformed events dropped so far
    pub fn events_dropped(&self) -> u64 {
        self.events_dropped.load(Ordering::Relaxed)
    }

    /// Mean per-event processing time in milliseconds
    pub fn avg_processing_ms(&self) -> f64 {
        let count = self.messages_processed.load(Ordering::Relaxed);
        if count == 0 {
            return 0.0;
        }
        let total_nanos = self.processing_nanos.load(Ordering::Relaxed);
        total_nanos as f64 / count as f64 / 1_000_000.0
    }

    /// Point-in-time copy for reporting
    pub fn snapshot(&self) -> IngestStatsSnapshot {
        IngestStatsSnapshot {
            message_count: self.messages_processed(),
            events_dropped: self.events_dropped(),
            avg_processing_ms: self.avg_processing_ms(),
        }
    }
}

/// Point-in-time view of the ingestion counters
#[derive(Debug, Clone, Copy)]
pub struct IngestStatsSnapshot {
    pub message_count: u64,
    pub events_dropped: u64,
    pub avg_processing_ms: f64,
}
