//! Test fixtures for the Satya workspace: canned service response bodies and
//! a scripted verification service.
//!
//! Bodies live under `fixtures/responses/` as the backend would send them and
//! are classified through the real wire protocol, so tests exercise the same
//! path as production responses.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use satya_core::traits::{ISessionObserver, IVerificationService};
use satya_core::{ServiceOutcome, SessionEvent, VerificationRecord};
use satya_transport::classify_response;

/// Scenario A: "The moon landing was staged", trust score 12, block 2.
pub const MOON_LANDING_FLAGGED: &str = "responses/moon_landing_flagged.json";
/// Scenario B: "Water boils at 100C at sea level", trust score 95, block 3.
pub const WATER_BOILS_TRUSTED: &str = "responses/water_boils_trusted.json";
/// Trust score exactly at the threshold, no evidence, no optional block fields.
pub const THRESHOLD_EXACT: &str = "responses/threshold_exact.json";
/// Scenario C: backend `detail` error.
pub const RATE_LIMIT_DETAIL: &str = "responses/rate_limit_detail.json";
/// Success-shaped body missing `blockchain_record`.
pub const MALFORMED_SUCCESS: &str = "responses/malformed_success.json";

/// Root directory of this crate's fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load a fixture file as raw bytes.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_body(relative_path: &str) -> Vec<u8> {
    let path = fixture_path(relative_path);
    std::fs::read(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_value(relative_path: &str) -> serde_json::Value {
    let body = load_body(relative_path);
    serde_json::from_slice(&body)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {relative_path}: {e}"))
}

/// Classify a fixture body through the wire protocol.
pub fn load_outcome(relative_path: &str) -> ServiceOutcome {
    classify_response(&load_body(relative_path))
}

/// Load a fixture that must classify as a success.
///
/// # Panics
/// Panics if the fixture is not a complete verification record.
pub fn load_record(relative_path: &str) -> VerificationRecord {
    match load_outcome(relative_path) {
        ServiceOutcome::Success(record) => record,
        other => panic!("fixture {relative_path} is not a success: {other:?}"),
    }
}

/// Build a record in code for property tests and ordering checks.
pub fn make_record(index: u64, trust_score: f64, hash: &str) -> VerificationRecord {
    serde_json::from_value(serde_json::json!({
        "satya_score": {
            "verdict": if trust_score > 70.0 { "VERIFIED" } else { "MISINFORMATION" },
            "trust_score": trust_score,
            "claim_summary": format!("summary for block {index}"),
            "evidence": [format!("https://example.org/evidence/{index}")]
        },
        "blockchain_record": { "index": index, "hash": hash }
    }))
    .unwrap_or_else(|e| panic!("make_record produced an invalid record: {e}"))
}

/// A verification service that replays queued outcomes in FIFO order and
/// records every claim it was asked to verify.
///
/// An exhausted script answers with a transport error, so a test that
/// issues more requests than it scripted fails loudly instead of hanging.
#[derive(Debug, Default)]
pub struct ScriptedService {
    script: Mutex<VecDeque<ServiceOutcome>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedService {
    pub fn new(outcomes: impl IntoIterator<Item = ServiceOutcome>) -> Self {
        Self {
            script: Mutex::new(outcomes.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Script built from fixture files, in order.
    pub fn from_fixtures(paths: &[&str]) -> Self {
        Self::new(paths.iter().map(|p| load_outcome(p)))
    }

    pub fn push(&self, outcome: ServiceOutcome) {
        self.script.lock().unwrap().push_back(outcome);
    }

    /// Claims received so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl IVerificationService for ScriptedService {
    async fn verify(&self, claim: &str) -> ServiceOutcome {
        self.calls.lock().unwrap().push(claim.to_string());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ServiceOutcome::transport("script exhausted"))
    }

    fn explorer_url(&self) -> Option<String> {
        Some("http://scripted.invalid/chain".to_string())
    }
}

/// Shared log of every event an observer was notified of.
pub type EventLog = Arc<Mutex<Vec<SessionEvent>>>;

/// Observer that appends each event to a shared log the test keeps a handle to.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: EventLog,
}

impl RecordingObserver {
    /// Returns the observer to subscribe and the log to inspect afterwards.
    pub fn new() -> (Self, EventLog) {
        let events = EventLog::default();
        (
            Self {
                events: Arc::clone(&events),
            },
            events,
        )
    }
}

impl ISessionObserver for RecordingObserver {
    fn notify(&mut self, event: &SessionEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
