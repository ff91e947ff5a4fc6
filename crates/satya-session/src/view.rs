//! Result view model. Pure derivation from records and config: no hidden
//! state, so deriving twice from the same record yields the same view.

use satya_core::config::SessionConfig;
use satya_core::VerificationRecord;

use crate::ledger::HistoryLedger;

/// Shown in place of the ledger feed before anything has been verified.
pub const EMPTY_LEDGER_TEXT: &str = "Verify a claim to mine the first block...";

/// Appended to every truncated hash preview.
pub const HASH_ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Score strictly above the threshold.
    Trusted,
    /// Everything else, including a score exactly at the threshold.
    Flagged,
}

impl Classification {
    pub fn from_score(trust_score: f64, threshold: f64) -> Self {
        if trust_score > threshold {
            Self::Trusted
        } else {
            Self::Flagged
        }
    }

    pub fn is_trusted(self) -> bool {
        self == Self::Trusted
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Trusted => "trusted",
            Self::Flagged => "flagged",
        }
    }

    /// Icon stand-in for the positive/warning badge.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Trusted => "[OK]",
            Self::Flagged => "[!!]",
        }
    }
}

/// The detailed result panel. Carries the full, untruncated hash.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub verdict: String,
    pub trust_score: f64,
    pub classification: Classification,
    pub claim_summary: String,
    /// External links in the order the service returned them.
    pub evidence: Vec<String>,
    pub block_index: u64,
    pub block_hash: String,
    pub previous_hash: Option<String>,
}

impl ResultView {
    pub fn derive(record: &VerificationRecord, config: &SessionConfig) -> Self {
        let score = &record.satya_score;
        Self {
            verdict: score.verdict.clone(),
            trust_score: score.trust_score,
            classification: Classification::from_score(score.trust_score, config.trust_threshold),
            claim_summary: score.claim_summary.clone(),
            evidence: score.evidence.clone(),
            block_index: record.blockchain_record.index,
            block_hash: record.blockchain_record.hash.clone(),
            previous_hash: record.blockchain_record.previous_hash.clone(),
        }
    }

    /// Score as displayed: integral scores without a fractional part.
    pub fn score_text(&self) -> String {
        self.trust_score.to_string()
    }
}

/// One compact row of the ledger feed.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntryView {
    pub verdict: String,
    pub classification: Classification,
    pub claim_summary: String,
    pub block_index: u64,
    pub hash_preview: String,
}

impl LedgerEntryView {
    pub fn derive(record: &VerificationRecord, config: &SessionConfig) -> Self {
        let score = &record.satya_score;
        Self {
            verdict: score.verdict.clone(),
            classification: Classification::from_score(score.trust_score, config.trust_threshold),
            claim_summary: score.claim_summary.clone(),
            block_index: record.blockchain_record.index,
            hash_preview: hash_preview(&record.blockchain_record.hash, config.hash_preview_len),
        }
    }
}

/// First `len` characters of `hash` followed by the ellipsis marker.
pub fn hash_preview(hash: &str, len: usize) -> String {
    let prefix: String = hash.chars().take(len).collect();
    format!("{prefix}{HASH_ELLIPSIS}")
}

/// The ledger feed: either the explicit empty state or newest-first rows.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerPanel {
    Empty,
    Entries(Vec<LedgerEntryView>),
}

impl LedgerPanel {
    pub fn from_ledger(ledger: &HistoryLedger, config: &SessionConfig) -> Self {
        if ledger.is_empty() {
            return Self::Empty;
        }
        Self::Entries(
            ledger
                .entries()
                .map(|entry| LedgerEntryView::derive(&entry.record, config))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
