use super::record::VerificationRecord;

/// Tagged result of exactly one round trip to the verification service.
///
/// The service boundary never returns `Err`: every way a round trip can end
/// is one of these variants, so callers handle all three at one site.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceOutcome {
    /// Well-formed body carrying both `satya_score` and `blockchain_record`.
    Success(VerificationRecord),
    /// Body carried a top-level `detail`; the message is surfaced verbatim.
    LogicalError { detail: String },
    /// Unreachable service, unreadable body, non-JSON, or a body that is
    /// neither an error nor a complete success.
    TransportError { reason: String },
}

impl ServiceOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn transport(reason: impl Into<String>) -> Self {
        Self::TransportError {
            reason: reason.into(),
        }
    }

    pub fn logical(detail: impl Into<String>) -> Self {
        Self::LogicalError {
            detail: detail.into(),
        }
    }
}
