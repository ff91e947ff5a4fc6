//! Session history ledger.
//!
//! An append-only log read in reverse: `prepend` is a push onto the tail of
//! the backing `Vec`, and every read walks it newest-first. Nothing is ever
//! removed; the ledger lives exactly as long as the session.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use satya_core::VerificationRecord;

/// One ledger row: the immutable record plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub record: Arc<VerificationRecord>,
    /// The claim text as submitted.
    pub claim: String,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    log: Vec<LedgerEntry>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a record at the head. Returns the new length.
    pub fn prepend(&mut self, record: Arc<VerificationRecord>, claim: impl Into<String>) -> usize {
        self.log.push(LedgerEntry {
            record,
            claim: claim.into(),
            received_at: Utc::now(),
        });
        self.log.len()
    }

    /// Newest-first snapshot of every record.
    pub fn all(&self) -> Vec<Arc<VerificationRecord>> {
        self.entries().map(|e| Arc::clone(&e.record)).collect()
    }

    /// Newest-first iterator over entries.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &LedgerEntry> + DoubleEndedIterator {
        self.log.iter().rev()
    }

    pub fn head(&self) -> Option<&LedgerEntry> {
        self.log.last()
    }

    /// Entry at `position`, where 0 is the newest.
    pub fn get(&self, position: usize) -> Option<&LedgerEntry> {
        self.log
            .len()
            .checked_sub(position + 1)
            .and_then(|i| self.log.get(i))
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}
