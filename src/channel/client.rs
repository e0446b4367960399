//! HTTP client for delivering booking requests
//!
//! Posts the JSON-encoded payload to the configured endpoint and hands the
//! JSON reply back to the workflow.

use super::traits::SubmissionChannel;
use crate::config::BookingConfig;
use crate::error::SubmissionError;
use crate::payload::BookingPayload;
use anyhow::{anyhow, Result};
use async_trait::async_trait;

/// Submission channel backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpSubmissionChannel {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmissionChannel {
    pub fn new(config: &BookingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl SubmissionChannel for HttpSubmissionChannel {
    #[tracing::instrument(skip(self, payload), fields(endpoint = %self.endpoint))]
    async fn submit(&self, payload: &BookingPayload) -> Result<serde_json::Value, SubmissionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(format!("Submission request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Status(status.as_u16()));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| SubmissionError::Decode(e.to_string()))
    }

    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }
}
