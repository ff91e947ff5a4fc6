//! Data model: verification records as received from the service, the
//! tagged outcome of one round trip, and the lifecycle vocabulary shared by
//! the session and its observers.

pub mod lifecycle;
pub mod outcome;
pub mod record;

pub use lifecycle::{Alert, AlertKind, FailureReason, LifecycleState, PendingTicket, SessionEvent};
pub use outcome::ServiceOutcome;
pub use record::{BlockchainRecord, SatyaScore, VerificationRecord};
