//! Error taxonomy. Round-trip failures are not errors here: they are
//! `ServiceOutcome` variants. These cover configuration, misuse of the
//! lifecycle, and transport construction.

pub mod config_error;
pub mod session_error;
pub mod transport_error;

pub use config_error::ConfigError;
pub use session_error::SessionError;
pub use transport_error::TransportError;

/// Top-level error for the workspace.
#[derive(Debug, thiserror::Error)]
pub enum SatyaError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

pub type SatyaResult<T> = Result<T, SatyaError>;
