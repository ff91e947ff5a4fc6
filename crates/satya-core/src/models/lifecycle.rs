//! Lifecycle vocabulary for a single verification request.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use super::record::VerificationRecord;

/// Generic text shown for any connectivity-class failure. Never includes
/// the underlying transport reason.
pub const CONNECTIVITY_ALERT: &str = "Backend not connected!";

/// Prefix for alerts that carry a backend `detail` message.
pub const BACKEND_ALERT_PREFIX: &str = "Backend Error: ";

/// Handle for one issued request. Completions must present the ticket they
/// were issued so a stale or foreign completion cannot land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTicket {
    pub id: u64,
    pub claim: String,
    pub issued_at: Instant,
}

/// Exactly one of these holds at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleState {
    Idle,
    Pending { ticket: u64 },
    Resolved(Arc<VerificationRecord>),
    Failed(FailureReason),
}

impl LifecycleState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The record currently on display, if any.
    pub fn resolved(&self) -> Option<&Arc<VerificationRecord>> {
        match self {
            Self::Resolved(record) => Some(record),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending { .. } => "pending",
            Self::Resolved(_) => "resolved",
            Self::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a request failed. Both kinds are user-visible and neither touches
/// the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The service answered with a `detail` message.
    Backend(String),
    /// The round trip itself failed or the body was unusable.
    Connectivity(String),
}

impl FailureReason {
    pub fn alert(&self) -> Alert {
        match self {
            Self::Backend(detail) => Alert {
                kind: AlertKind::Backend,
                text: format!("{BACKEND_ALERT_PREFIX}{detail}"),
            },
            Self::Connectivity(_) => Alert {
                kind: AlertKind::Connectivity,
                text: CONNECTIVITY_ALERT.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Backend,
    Connectivity,
}

/// A blocking, user-visible message. Observers acknowledge it by returning
/// from `notify`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub text: String,
}

/// Everything an observer is told, in the order it happens.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    StateChanged(LifecycleState),
    /// A record was placed at the head of the ledger.
    LedgerPrepended { block_index: u64, ledger_len: usize },
    Alert(Alert),
}
