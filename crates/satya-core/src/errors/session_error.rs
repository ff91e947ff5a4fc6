/// Lifecycle misuse: a completion arriving when nothing is awaiting it.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no verification is pending")]
    NotPending,

    /// `latest` is the most recently issued outstanding ticket; with
    /// concurrent submissions enabled older ones may be outstanding too.
    #[error("ticket {actual} matches no outstanding request (latest outstanding is {latest})")]
    TicketMismatch { latest: u64, actual: u64 },
}
