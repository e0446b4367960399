//! Runtime configuration, read from the environment

use anyhow::{anyhow, Result};
use std::time::Duration;

/// Default submission endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/api/bookings";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENDPOINT_VAR: &str = "BOOKING_ENDPOINT";
const TIMEOUT_VAR: &str = "BOOKING_TIMEOUT_SECS";

/// Settings for the submission channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfig {
    /// Where booking requests are posted
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl BookingConfig {
    /// Load configuration from `BOOKING_ENDPOINT` and `BOOKING_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_VAR).filter(|v| !v.trim().is_empty()) {
            config.endpoint = endpoint.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            config.timeout_secs = raw
                .trim()
                .parse()
                .map_err(|e| anyhow!("Invalid {TIMEOUT_VAR} '{raw}': {e}"))?;
        }

        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
