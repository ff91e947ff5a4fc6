//! # satya-transport
//!
//! Client for the external verification service: the JSON wire protocol,
//! classification of response bodies into [`ServiceOutcome`]s, and an async
//! HTTP client making exactly one attempt per claim.
//!
//! [`ServiceOutcome`]: satya_core::ServiceOutcome

pub mod http_client;
pub mod protocol;

pub use http_client::HttpClient;
pub use protocol::{classify_response, VerifyRequest};
