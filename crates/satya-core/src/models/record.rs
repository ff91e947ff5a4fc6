use serde::{Deserialize, Serialize};

/// The verdict half of a verification, as produced by the investigation
/// pipeline behind the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatyaScore {
    /// Short human-readable label, e.g. "VERIFIED" or "MISINFORMATION".
    pub verdict: String,
    /// Confidence backing the verdict, expected in 0–100.
    pub trust_score: f64,
    /// Short summary of the facts found.
    pub claim_summary: String,
    /// Source URLs in the order the service returned them.
    #[serde(default)]
    pub evidence: Vec<String>,
}

/// Where the verification was persisted on the service's chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockchainRecord {
    pub index: u64,
    pub hash: String,
    /// Block creation time in UNIX seconds, when the service reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_hash: Option<String>,
}

/// A complete, immutable verification result. Both halves are required:
/// a body missing either one does not deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub satya_score: SatyaScore,
    pub blockchain_record: BlockchainRecord,
}

impl VerificationRecord {
    pub fn trust_score(&self) -> f64 {
        self.satya_score.trust_score
    }

    pub fn block_index(&self) -> u64 {
        self.blockchain_record.index
    }

    pub fn block_hash(&self) -> &str {
        &self.blockchain_record.hash
    }
}
