//! Trait seams: the external verification service and session observers.

pub mod session_observer;
pub mod verification_service;

pub use session_observer::ISessionObserver;
pub use verification_service::IVerificationService;
