//! Error types surfaced by the controller

use thiserror::Error;

/// Why a submission did not produce a booking
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The request never completed (connect, timeout, aborted task)
    #[error("{0}")]
    Transport(String),
    /// The endpoint answered with a non-2xx status
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// 2xx answer whose body was not JSON
    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Host page is missing something the controller needs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("Booking form not found")]
    MissingForm,
    #[error("Submit control not found in form '{0}'")]
    MissingSubmitControl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        assert_eq!(
            SubmissionError::Status(503).to_string(),
            "HTTP error! status: 503"
        );
    }

    #[test]
    fn test_transport_message_is_reason() {
        assert_eq!(
            SubmissionError::Transport("connection refused".to_string()).to_string(),
            "connection refused"
        );
    }

    #[test]
    fn test_bind_messages() {
        assert_eq!(BindError::MissingForm.to_string(), "Booking form not found");
        assert_eq!(
            BindError::MissingSubmitControl("bookingForm".to_string()).to_string(),
            "Submit control not found in form 'bookingForm'"
        );
    }
}
