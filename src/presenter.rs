//! Error annotations on fields and form-level notices

use crate::state::{ErrorAnnotation, Fade, FormField, Scheduler, TimerAction, TimerId, Validity};
use std::time::{Duration, Instant};

/// Length of the attention animation on a field that just failed (300ms)
pub const SHAKE_DURATION: Duration = Duration::from_millis(300);

/// Attach an error annotation, replacing any existing one.
///
/// Marks the field invalid, adds the alert message node and starts the
/// shake. A shake still running from the replaced annotation is cancelled
/// so the new one plays for its full length.
pub fn show(
    field: &mut FormField,
    message: &str,
    scheduler: &mut Scheduler,
    now: Instant,
) -> TimerId {
    clear(field, scheduler);
    let timer = scheduler.schedule(
        now,
        SHAKE_DURATION,
        TimerAction::StopShake {
            field: field.name.clone(),
        },
    );
    field.validity = Validity::invalid(message);
    field.annotation = Some(ErrorAnnotation {
        message: message.to_string(),
        shaking: true,
        shake_timer: Some(timer),
    });
    timer
}

/// Remove the annotation if present. Clearing a clear field does nothing.
pub fn clear(field: &mut FormField, scheduler: &mut Scheduler) {
    let Some(annotation) = field.annotation.take() else {
        return;
    };
    if let Some(timer) = annotation.shake_timer {
        scheduler.cancel(timer);
    }
    if field.validity.is_invalid() {
        field.validity = Validity::Unchecked;
    }
}

/// Record a verdict and make the annotation agree with it
pub fn present(field: &mut FormField, verdict: Validity, scheduler: &mut Scheduler, now: Instant) {
    match &verdict {
        Validity::Invalid(message) => {
            let message = message.clone();
            show(field, &message, scheduler, now);
        }
        _ => {
            clear(field, scheduler);
            field.validity = verdict;
        }
    }
}

/// Panel shown in place of the form after a booking goes through
#[derive(Debug, Clone, PartialEq)]
pub struct SuccessPanel {
    pub fade: Option<Fade>,
}

impl SuccessPanel {
    pub const TITLE: &'static str = "Booking Request Received!";
    pub const BODY: &'static str =
        "Thank you for your interest. We'll contact you shortly to confirm your appointment.";
}

/// Dismissible banner at the top of the form after a failed submission
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBanner {
    pub message: String,
    pub fade: Option<Fade>,
}

/// Form-level notices currently on screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notices {
    pub success: Option<SuccessPanel>,
    pub banner: Option<ErrorBanner>,
}

/// What the host should bring into view on its next draw.
///
/// The success panel replaces the whole form body, so it never needs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    Field(String),
    ErrorBanner,
}
