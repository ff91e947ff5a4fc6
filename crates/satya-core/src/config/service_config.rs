use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the verification service lives and how to reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Scheme, host and port of the service, without a trailing path.
    pub base_url: String,
    /// Path of the verify-and-log endpoint.
    pub verify_path: String,
    /// Path of the ledger explorer page. Navigation only.
    pub explorer_path: String,
    /// Optional request timeout. Unset means the network stack's own bound.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_BASE_URL.to_string(),
            verify_path: defaults::DEFAULT_VERIFY_PATH.to_string(),
            explorer_path: defaults::DEFAULT_EXPLORER_PATH.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl ServiceConfig {
    pub fn verify_url(&self) -> String {
        join_url(&self.base_url, &self.verify_path)
    }

    pub fn explorer_url(&self) -> String {
        join_url(&self.base_url, &self.explorer_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
