//! # satya-core
//!
//! Foundation crate for the Satya verification console.
//! Defines the verification data model, the error taxonomy, layered config,
//! and the traits at the service and observer seams.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SatyaConfig;
pub use errors::{SatyaError, SatyaResult};
pub use models::{
    Alert, AlertKind, BlockchainRecord, FailureReason, LifecycleState, PendingTicket, SatyaScore,
    ServiceOutcome, SessionEvent, VerificationRecord,
};
