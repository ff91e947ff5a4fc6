use crate::models::ServiceOutcome;

/// The external verification service.
///
/// Implementations make exactly one attempt per call: no retry, no backoff,
/// no cancellation. Every way the round trip can end is reported through
/// [`ServiceOutcome`].
#[allow(async_fn_in_trait)]
pub trait IVerificationService: Send + Sync {
    /// Submit `claim` for analysis and persistence.
    async fn verify(&self, claim: &str) -> ServiceOutcome;

    /// Navigation target for the ledger explorer, if the service has one.
    fn explorer_url(&self) -> Option<String> {
        None
    }
}
