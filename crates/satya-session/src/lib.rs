//! # satya-session
//!
//! Client-side verification session: holds the claim being edited, drives one
//! request at a time through Idle → Pending → Resolved/Failed, keeps the
//! session's newest-first ledger of verified records, and derives what the
//! view layer shows.
//!
//! ## Modules
//!
//! - `input`: `ClaimInput` and the two submission triggers
//! - `lifecycle`: `LifecycleManager`, the request state machine and sole ledger writer
//! - `ledger`: `HistoryLedger`, append-only log read newest-first
//! - `view`: pure derivation of result and ledger panels
//! - `analytics`: per-session submission and outcome counters
//! - `controller`: `VerificationSession`, wiring the above to a service

pub mod analytics;
pub mod controller;
pub mod input;
pub mod ledger;
pub mod lifecycle;
pub mod view;

pub use analytics::SessionAnalytics;
pub use controller::{InFlight, VerificationSession};
pub use input::{ClaimInput, Trigger};
pub use ledger::{HistoryLedger, LedgerEntry};
pub use lifecycle::{Completion, LifecycleManager, Rejection, SubmitOutcome};
pub use view::{Classification, LedgerEntryView, LedgerPanel, ResultView};
