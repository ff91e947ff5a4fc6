//! Async HTTP client for the verification service. One attempt per claim,
//! no retry, no backoff, optional timeout.

use std::time::Duration;

use satya_core::config::ServiceConfig;
use satya_core::errors::TransportError;
use satya_core::traits::IVerificationService;
use satya_core::ServiceOutcome;

use crate::protocol::{classify_response, VerifyRequest};

/// HTTP transport client wrapping a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: ServiceConfig,
    client: reqwest::Client,
    verify_url: reqwest::Url,
}

impl HttpClient {
    pub fn new(config: ServiceConfig) -> Result<Self, TransportError> {
        let verify_url_raw = config.verify_url();
        let verify_url =
            reqwest::Url::parse(&verify_url_raw).map_err(|e| TransportError::InvalidUrl {
                url: verify_url_raw.clone(),
                reason: e.to_string(),
            })?;

        let mut builder = reqwest::Client::builder().gzip(true);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| TransportError::ClientBuild {
            reason: e.to_string(),
        })?;

        Ok(Self {
            config,
            client,
            verify_url,
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn verify_url(&self) -> &str {
        self.verify_url.as_str()
    }
}

impl IVerificationService for HttpClient {
    async fn verify(&self, claim: &str) -> ServiceOutcome {
        tracing::debug!(url = %self.verify_url, claim_len = claim.len(), "verify: sending claim");

        let response = match self
            .client
            .post(self.verify_url.clone())
            .json(&VerifyRequest::new(claim))
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(url = %self.verify_url, "verify: request failed: {e}");
                return ServiceOutcome::transport(e.to_string());
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(%status, "verify: failed reading response body: {e}");
                return ServiceOutcome::transport(format!("failed reading body: {e}"));
            }
        };

        let outcome = classify_response(&body);
        match &outcome {
            ServiceOutcome::Success(record) => tracing::debug!(
                %status,
                block = record.block_index(),
                "verify: record received"
            ),
            ServiceOutcome::LogicalError { detail } => {
                tracing::warn!(%status, "verify: backend reported error: {detail}")
            }
            ServiceOutcome::TransportError { reason } => {
                tracing::warn!(%status, "verify: unusable response: {reason}")
            }
        }
        outcome
    }

    fn explorer_url(&self) -> Option<String> {
        Some(self.config.explorer_url())
    }
}
