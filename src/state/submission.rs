//! Submission state machine and submit control

use std::fmt;

/// Where a form is in its submission lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Error(String),
}

impl SubmissionState {
    /// Whether `self -> next` is a legal move
    pub fn can_transition_to(&self, next: &SubmissionState) -> bool {
        use SubmissionState::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Idle)
                | (Validating, Submitting)
                | (Submitting, Success)
                | (Submitting, Error(_))
                | (Success, Idle)
                | (Error(_), Idle)
                | (Error(_), Validating)
        )
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error(_) => "error",
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(reason) => write!(f, "error: {reason}"),
            other => f.write_str(other.label()),
        }
    }
}

/// The form's submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    /// Label shown right now
    pub label: String,
    original_label: String,
    pub disabled: bool,
    /// `loading` class present
    pub loading: bool,
}

impl SubmitControl {
    pub const LOADING_LABEL: &'static str = "Submitting...";

    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            original_label: label.to_string(),
            disabled: false,
            loading: false,
        }
    }

    /// Disable and swap the label for the loading indicator
    pub fn show_loading(&mut self) {
        self.disabled = true;
        self.loading = true;
        self.label = Self::LOADING_LABEL.to_string();
    }

    /// Re-enable and restore the label captured at bind time
    pub fn hide_loading(&mut self) {
        self.disabled = false;
        self.loading = false;
        self.label = self.original_label.clone();
    }

    #[cfg(test)]
    pub fn original_label(&self) -> &str {
        &self.original_label
    }
}
