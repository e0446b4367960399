//! Trait abstraction for the submission channel to enable mocking in tests

use crate::error::SubmissionError;
use crate::payload::BookingPayload;
use async_trait::async_trait;

/// Outbound path a booking request takes
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionChannel: Send + Sync {
    /// Deliver the payload, returning the endpoint's JSON reply
    async fn submit(&self, payload: &BookingPayload) -> Result<serde_json::Value, SubmissionError>;

    /// Where submissions go, for logging
    fn endpoint(&self) -> String;
}
