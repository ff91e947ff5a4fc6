use serde::{Deserialize, Serialize};

use super::defaults;

/// Session behaviour: display derivation constants and the double-submit
/// policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Scores strictly above this classify as trusted.
    pub trust_threshold: f64,
    /// Characters of the block hash shown in the ledger feed.
    pub hash_preview_len: usize,
    /// When false, a submit while a request is in flight is rejected.
    /// When true, requests may overlap and land in completion order.
    pub allow_concurrent_submissions: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            trust_threshold: defaults::DEFAULT_TRUST_THRESHOLD,
            hash_preview_len: defaults::DEFAULT_HASH_PREVIEW_LEN,
            allow_concurrent_submissions: defaults::DEFAULT_ALLOW_CONCURRENT_SUBMISSIONS,
        }
    }
}
