//! Per-session analytics: submissions, rejections, outcome counts,
//! classification split, and round-trip latency.

use std::time::Duration;

use chrono::{DateTime, Utc};

use satya_core::FailureReason;

use crate::view::Classification;

/// Counters for a single session. Never persisted.
#[derive(Debug, Clone)]
pub struct SessionAnalytics {
    pub started_at: DateTime<Utc>,
    /// Requests actually issued.
    pub submissions: u64,
    pub rejected_empty: u64,
    pub rejected_in_flight: u64,
    pub resolved: u64,
    pub trusted: u64,
    pub flagged: u64,
    pub backend_failures: u64,
    pub connectivity_failures: u64,
    /// Round-trip latencies in milliseconds, in completion order.
    pub latencies_ms: Vec<f64>,
}

impl Default for SessionAnalytics {
    fn default() -> Self {
        Self {
            started_at: Utc::now(),
            submissions: 0,
            rejected_empty: 0,
            rejected_in_flight: 0,
            resolved: 0,
            trusted: 0,
            flagged: 0,
            backend_failures: 0,
            connectivity_failures: 0,
            latencies_ms: Vec::new(),
        }
    }
}

impl SessionAnalytics {
    pub fn record_submission(&mut self) {
        self.submissions += 1;
    }

    pub fn record_rejected_empty(&mut self) {
        self.rejected_empty += 1;
    }

    pub fn record_rejected_in_flight(&mut self) {
        self.rejected_in_flight += 1;
    }

    pub fn record_resolved(&mut self, classification: Classification, latency: Duration) {
        self.resolved += 1;
        match classification {
            Classification::Trusted => self.trusted += 1,
            Classification::Flagged => self.flagged += 1,
        }
        self.record_latency(latency);
    }

    pub fn record_failure(&mut self, reason: &FailureReason, latency: Duration) {
        match reason {
            FailureReason::Backend(_) => self.backend_failures += 1,
            FailureReason::Connectivity(_) => self.connectivity_failures += 1,
        }
        self.record_latency(latency);
    }

    fn record_latency(&mut self, latency: Duration) {
        self.latencies_ms.push(latency.as_secs_f64() * 1000.0);
    }

    pub fn failures(&self) -> u64 {
        self.backend_failures + self.connectivity_failures
    }

    /// Average round-trip latency in milliseconds.
    pub fn avg_latency_ms(&self) -> f64 {
        if self.latencies_ms.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.latencies_ms.iter().sum();
        sum / self.latencies_ms.len() as f64
    }
}
