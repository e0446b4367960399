//! Submission lifecycle: validate, send, then show success or error

use super::{BookingController, BoundForm};
use crate::error::SubmissionError;
use crate::payload::BookingPayload;
use crate::presenter::{ErrorBanner, ScrollTarget, SuccessPanel};
use crate::state::{Form, SubmissionState, TimerAction};
use chrono::NaiveDateTime;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::Instrument;
use uuid::Uuid;

/// How long the success panel stays before fading (10s)
pub const SUCCESS_DWELL: Duration = Duration::from_secs(10);

/// How long the error banner stays before fading (5s)
pub const ERROR_DWELL: Duration = Duration::from_secs(5);

/// Banner text when a failure carries no reason of its own
pub const GENERIC_SUBMISSION_ERROR: &str = "Failed to submit booking. Please try again.";

type Reply = Result<serde_json::Value, SubmissionError>;

/// Result of a submit event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already running, or the form is not on screen
    Ignored,
    /// Validation failed; focus moved to the first invalid field
    Rejected { first_invalid: String },
    /// Payload handed to the channel
    Submitted { attempt: Uuid },
}

/// A submission on the wire
pub(super) struct InFlight {
    attempt: Uuid,
    reply: oneshot::Receiver<Reply>,
}

impl BookingController {
    pub(super) fn start_submission(&mut self) -> SubmitOutcome {
        let now_local = self.clock.local_now();
        let now = self.clock.instant();
        let submitted_at = self.clock.utc_now();
        let Some(bound) = self.bound.as_mut() else {
            return SubmitOutcome::Ignored;
        };

        if bound.submit.disabled || !bound.form.visible {
            tracing::debug!(state = %bound.state, "Submit ignored");
            return SubmitOutcome::Ignored;
        }

        // a fresh attempt replaces the previous failure; Error goes straight to Validating
        bound.drop_banner();
        bound.transition(SubmissionState::Validating);

        if let Some(index) = bound.validate_required(now_local, now) {
            bound.transition(SubmissionState::Idle);
            bound.form.set_active_field(index);
            let name = bound.form.fields[index].name.clone();
            bound.scroll_target = Some(ScrollTarget::Field(name.clone()));
            tracing::info!(field = %name, "Booking form has invalid fields");
            return SubmitOutcome::Rejected {
                first_invalid: name,
            };
        }

        bound.transition(SubmissionState::Submitting);
        bound.submit.show_loading();

        let payload = BookingPayload::from_form(&bound.form, submitted_at);
        let attempt = Uuid::new_v4();
        let (tx, rx) = oneshot::channel();
        let channel = Arc::clone(&self.channel);
        let span = tracing::info_span!("submission", %attempt, endpoint = %channel.endpoint());

        tokio::spawn(
            async move {
                let reply = channel.submit(&payload).await;
                if tx.send(reply).is_err() {
                    tracing::debug!("Submission finished after the form went away");
                }
            }
            .instrument(span),
        );

        tracing::info!(%attempt, "Booking request sent");
        bound.in_flight = Some(InFlight { attempt, reply: rx });
        SubmitOutcome::Submitted { attempt }
    }

    /// Apply the in-flight result if it has arrived
    pub(super) fn poll_submission(&mut self) {
        let now = self.clock.instant();
        let Some(bound) = self.bound.as_mut() else {
            return;
        };
        let Some(in_flight) = bound.in_flight.as_mut() else {
            return;
        };
        let reply = match in_flight.reply.try_recv() {
            Ok(reply) => reply,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(abandoned()),
        };
        let attempt = in_flight.attempt;
        bound.in_flight = None;
        bound.resolve(attempt, reply, now);
    }

    /// Wait for the in-flight submission, if any, and apply its result
    pub async fn settle(&mut self) {
        let Some(in_flight) = self.bound.as_mut().and_then(|b| b.in_flight.take()) else {
            return;
        };
        let attempt = in_flight.attempt;
        let reply = in_flight.reply.await.unwrap_or_else(|_| Err(abandoned()));
        let now = self.clock.instant();
        if let Some(bound) = self.bound.as_mut() {
            bound.resolve(attempt, reply, now);
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.bound.as_ref().is_some_and(|b| b.in_flight.is_some())
    }
}

fn abandoned() -> SubmissionError {
    SubmissionError::Transport("Submission ended without a reply".to_string())
}

impl BoundForm {
    /// Check every required field. Returns the first one that failed.
    fn validate_required(&mut self, now_local: NaiveDateTime, now: Instant) -> Option<usize> {
        let required: Vec<usize> = (0..self.form.fields.len())
            .filter(|&i| self.form.fields[i].required)
            .collect();
        for index in required {
            self.refresh(index, now_local, now);
        }
        self.form
            .fields
            .iter()
            .position(|f| f.required && f.validity.is_invalid())
    }

    fn resolve(&mut self, attempt: Uuid, reply: Reply, now: Instant) {
        self.submit.hide_loading();
        match reply {
            Ok(reply) => {
                tracing::info!(%attempt, "Booking request accepted");
                self.transition(SubmissionState::Success);
                self.last_reply = Some(reply);
                self.notices.success = Some(SuccessPanel { fade: None });
                self.form.visible = false;
                self.scroll_target = None;
                self.scheduler
                    .schedule(now, SUCCESS_DWELL, TimerAction::FadeSuccessPanel);
            }
            Err(e) => {
                tracing::error!(%attempt, error = %e, "Booking submission failed");
                let reason = e.to_string();
                let message = if reason.trim().is_empty() {
                    GENERIC_SUBMISSION_ERROR.to_string()
                } else {
                    reason
                };
                self.transition(SubmissionState::Error(message.clone()));
                self.notices.banner = Some(ErrorBanner {
                    message,
                    fade: None,
                });
                self.scroll_target = Some(ScrollTarget::ErrorBanner);
                self.banner_timer = Some(self.scheduler.schedule(
                    now,
                    ERROR_DWELL,
                    TimerAction::FadeErrorBanner,
                ));
            }
        }
    }
}
