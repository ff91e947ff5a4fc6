/// Transport construction errors. Failures during a round trip are reported
/// as `ServiceOutcome::TransportError` instead.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },

    #[error("invalid service URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}
