//! Claim input holder.

/// Which entry point fired a submission. Both behave identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The explicit verify action.
    Action,
    /// The designated submit key.
    Key,
}

/// The claim currently being edited. Replaced wholesale on every edit and
/// never cleared by a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimInput {
    claim: String,
}

impl ClaimInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held text. No length limit, no sanitization.
    pub fn set_claim(&mut self, text: impl Into<String>) {
        self.claim = text.into();
    }

    pub fn current_claim(&self) -> &str {
        &self.claim
    }

    /// Whitespace-only claims are not submittable.
    pub fn is_submittable(&self) -> bool {
        is_submittable(&self.claim)
    }
}

pub(crate) fn is_submittable(claim: &str) -> bool {
    !claim.trim().is_empty()
}
