//! Booking form controller
//!
//! One controller is bound to one host form. It owns that form's fields,
//! submission state and timers, reacts to [`FormEvent`]s through the
//! subscriptions registered at bind time, and can be torn down cleanly.
//!
//! - `events`: typed events and the subscription table
//! - `workflow`: the validate → submit → success/error lifecycle

mod events;
mod workflow;

pub use events::{EventKind, EventTarget, FormEvent, Handler, Subscription};
pub use workflow::SubmitOutcome;

use crate::channel::SubmissionChannel;
use crate::error::BindError;
use crate::presenter::{self, Notices, ScrollTarget};
use crate::state::{
    BookingForm, Clock, Fade, FieldKind, Form, HostForm, Scheduler, SubmissionState,
    SubmitControl, TimerAction, TimerId, Validity,
};
use crate::validation::{datetime, field_validator, format_phone};
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;
use std::time::Instant;
use workflow::InFlight;

/// Everything a bound form owns
struct BoundForm {
    form: BookingForm,
    submit: SubmitControl,
    state: SubmissionState,
    notices: Notices,
    scheduler: Scheduler,
    listeners: Vec<Subscription>,
    in_flight: Option<InFlight>,
    banner_timer: Option<TimerId>,
    scroll_target: Option<ScrollTarget>,
    last_reply: Option<serde_json::Value>,
    torn_down: bool,
}

impl BoundForm {
    fn new(host: Option<HostForm>, today: NaiveDate) -> Result<Self, BindError> {
        let host = host.ok_or(BindError::MissingForm)?;
        let label = host
            .submit_label
            .clone()
            .ok_or_else(|| BindError::MissingSubmitControl(host.id.clone()))?;

        let mut form = BookingForm::from_host(&host);
        let range = datetime::date_range_hint(today);
        for field in form.fields.iter_mut().filter(|f| f.kind == FieldKind::Date) {
            field.range_hint = Some(range);
        }
        let listeners = events::subscriptions_for(&form);

        Ok(Self {
            form,
            submit: SubmitControl::new(&label),
            state: SubmissionState::Idle,
            notices: Notices::default(),
            scheduler: Scheduler::new(),
            listeners,
            in_flight: None,
            banner_timer: None,
            scroll_target: None,
            last_reply: None,
            torn_down: false,
        })
    }

    fn transition(&mut self, next: SubmissionState) {
        if !self.state.can_transition_to(&next) {
            tracing::warn!(from = %self.state, to = %next, "Ignoring illegal submission transition");
            return;
        }
        tracing::debug!(from = %self.state, to = %next, "Submission state changed");
        self.state = next;
    }

    /// Re-check one field and bring its annotation in line
    fn refresh(&mut self, index: usize, now_local: NaiveDateTime, now: Instant) {
        let verdict = field_verdict(&self.form, index, now_local);
        presenter::present(&mut self.form.fields[index], verdict, &mut self.scheduler, now);
    }

    fn apply_timer(&mut self, action: TimerAction, now: Instant) {
        match action {
            TimerAction::StopShake { field } => {
                if let Some(annotation) = self
                    .form
                    .field_mut(&field)
                    .and_then(|f| f.annotation.as_mut())
                {
                    annotation.shaking = false;
                    annotation.shake_timer = None;
                }
            }
            TimerAction::FadeSuccessPanel => {
                if let Some(panel) = self.notices.success.as_mut() {
                    panel.fade = Some(Fade::new(now));
                    self.scheduler
                        .schedule(now, Fade::DURATION, TimerAction::RemoveSuccessPanel);
                }
            }
            TimerAction::RemoveSuccessPanel => {
                if self.notices.success.take().is_some() {
                    self.form.visible = true;
                    self.reset_fields();
                    self.transition(SubmissionState::Idle);
                }
            }
            TimerAction::FadeErrorBanner => {
                if let Some(banner) = self.notices.banner.as_mut() {
                    banner.fade = Some(Fade::new(now));
                    self.banner_timer = Some(self.scheduler.schedule(
                        now,
                        Fade::DURATION,
                        TimerAction::RemoveErrorBanner,
                    ));
                }
            }
            TimerAction::RemoveErrorBanner => self.remove_banner(),
        }
    }

    /// Drop the banner and return to Idle
    fn remove_banner(&mut self) {
        if self.drop_banner() && matches!(self.state, SubmissionState::Error(_)) {
            self.transition(SubmissionState::Idle);
        }
    }

    /// Take the banner off screen without touching the submission state.
    /// Returns whether one was shown.
    fn drop_banner(&mut self) -> bool {
        if let Some(id) = self.banner_timer.take() {
            self.scheduler.cancel(id);
        }
        let shown = self.notices.banner.take().is_some();
        if shown && self.scroll_target == Some(ScrollTarget::ErrorBanner) {
            self.scroll_target = None;
        }
        shown
    }

    fn reset_fields(&mut self) {
        self.form.reset();
        for field in &mut self.form.fields {
            presenter::clear(field, &mut self.scheduler);
            field.validity = Validity::Unchecked;
        }
        self.scroll_target = None;
    }
}

/// Field rules first, then the date/time guard for fields that passed them
fn field_verdict(form: &BookingForm, index: usize, now: NaiveDateTime) -> Validity {
    let field = &form.fields[index];
    let verdict = field_validator::validate(field);
    if verdict.is_invalid() {
        return verdict;
    }
    match field.kind {
        FieldKind::Date => datetime::validate_date(field.value(), now),
        FieldKind::Time => {
            let date = form.first_of_kind(FieldKind::Date).map(|d| d.value());
            datetime::validate_time(field.value(), date, now)
        }
        _ => verdict,
    }
}

/// Controller for one booking form
pub struct BookingController {
    /// `None` when binding failed; every operation is then a no-op
    bound: Option<BoundForm>,
    channel: Arc<dyn SubmissionChannel>,
    clock: Arc<dyn Clock>,
}

impl BookingController {
    /// Bind to a host form. A missing form or submit control leaves the
    /// controller inert instead of failing.
    pub fn bind(
        host: Option<HostForm>,
        channel: Arc<dyn SubmissionChannel>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let bound = match BoundForm::new(host, clock.local_now().date()) {
            Ok(bound) => {
                tracing::info!(
                    form = %bound.form.id,
                    listeners = bound.listeners.len(),
                    endpoint = %channel.endpoint(),
                    "Booking form bound"
                );
                Some(bound)
            }
            Err(e) => {
                tracing::warn!("{e}; booking controller is inert");
                None
            }
        };
        Self {
            bound,
            channel,
            clock,
        }
    }

    pub fn form(&self) -> Option<&BookingForm> {
        self.bound.as_ref().map(|b| &b.form)
    }

    pub fn state(&self) -> Option<&SubmissionState> {
        self.bound.as_ref().map(|b| &b.state)
    }

    pub fn submit_control(&self) -> Option<&SubmitControl> {
        self.bound.as_ref().map(|b| &b.submit)
    }

    pub fn notices(&self) -> Option<&Notices> {
        self.bound.as_ref().map(|b| &b.notices)
    }

    pub fn scroll_target(&self) -> Option<&ScrollTarget> {
        self.bound.as_ref().and_then(|b| b.scroll_target.as_ref())
    }

    /// JSON reply of the last successful submission
    pub fn last_reply(&self) -> Option<&serde_json::Value> {
        self.bound.as_ref().and_then(|b| b.last_reply.as_ref())
    }

    /// Monotonic "now" of the controller's clock, for rendering fades
    pub fn now(&self) -> Instant {
        self.clock.instant()
    }

    /// Index of the focused field
    pub fn focused(&self) -> Option<usize> {
        self.bound.as_ref().map(|b| b.form.active_field())
    }

    /// Leave the focused field and focus its neighbour, wrapping at the ends
    pub fn move_focus(&mut self, forward: bool) {
        let Some(leaving) = self
            .bound
            .as_ref()
            .filter(|b| b.form.visible)
            .and_then(|b| b.form.get_field(b.form.active_field()))
            .map(|f| f.name.clone())
        else {
            return;
        };
        self.leave_field(&leaving);
        if let Some(bound) = self.bound.as_mut() {
            if forward {
                bound.form.next_field();
            } else {
                bound.form.prev_field();
            }
            // the user took over scrolling
            bound.scroll_target = None;
        }
    }

    /// Run every handler subscribed to `event`, in registration order.
    ///
    /// Returns the submit outcome when the event reached the submit handler.
    pub fn dispatch(&mut self, event: FormEvent) -> Option<SubmitOutcome> {
        let handlers: Vec<Handler> = self
            .bound
            .as_ref()?
            .listeners
            .iter()
            .filter(|s| s.matches(&event))
            .map(|s| s.handler)
            .collect();

        let mut outcome = None;
        for handler in handlers {
            match (&event.target, handler) {
                (_, Handler::Submit) => outcome = Some(self.start_submission()),
                (EventTarget::Field(name), Handler::Validate) => self.validate_field(name),
                (EventTarget::Field(name), Handler::ClearError) => self.clear_error(name),
                (EventTarget::Field(name), Handler::FormatPhone) => self.format_phone(name),
                (EventTarget::Form, _) => {}
            }
        }
        outcome
    }

    /// Replace a field's raw value and fire `Input`. Does nothing once torn down.
    pub fn input(&mut self, name: &str, value: &str) {
        let Some(field) = self
            .bound
            .as_mut()
            .filter(|b| !b.torn_down)
            .and_then(|b| b.form.field_mut(name))
        else {
            return;
        };
        field.set_value(value);
        self.dispatch(FormEvent::field(name, EventKind::Input));
    }

    /// Fire `Change` then `Blur`, as when focus leaves a field
    pub fn leave_field(&mut self, name: &str) {
        self.dispatch(FormEvent::field(name, EventKind::Change));
        self.dispatch(FormEvent::field(name, EventKind::Blur));
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.dispatch(FormEvent::submit())
            .unwrap_or(SubmitOutcome::Ignored)
    }

    /// Remove the error banner before its dwell runs out
    pub fn dismiss_banner(&mut self) {
        if let Some(bound) = self.bound.as_mut() {
            bound.remove_banner();
        }
    }

    /// Apply a finished submission and any timers that came due
    pub fn tick(&mut self) {
        self.poll_submission();
        let now = self.clock.instant();
        let Some(bound) = self.bound.as_mut() else {
            return;
        };
        for action in bound.scheduler.due(now) {
            bound.apply_timer(action, now);
        }
    }

    /// Remove every listener and cancel every timer.
    ///
    /// A submission already on the wire still runs to completion; its
    /// result is dropped.
    pub fn teardown(&mut self) {
        let Some(bound) = self.bound.as_mut() else {
            return;
        };
        let listeners = bound.listeners.len();
        bound.listeners.clear();
        bound.torn_down = true;
        bound.scheduler.cancel_all();
        bound.banner_timer = None;
        if bound.in_flight.take().is_some() {
            tracing::debug!("Submission in flight at teardown; its result will be discarded");
        }
        tracing::info!(form = %bound.form.id, listeners, "Booking form torn down");
    }

    fn validate_field(&mut self, name: &str) {
        let now_local = self.clock.local_now();
        let now = self.clock.instant();
        let Some(bound) = self.bound.as_mut() else {
            return;
        };
        let Some(index) = bound.form.index_of(name) else {
            return;
        };
        bound.refresh(index, now_local, now);

        // a new date can turn an already checked time into a past one
        if bound.form.fields[index].kind == FieldKind::Date {
            if let Some(time_index) = bound.form.fields.iter().position(|f| {
                f.kind == FieldKind::Time
                    && !f.value().is_empty()
                    && f.validity != Validity::Unchecked
            }) {
                bound.refresh(time_index, now_local, now);
            }
        }
    }

    fn clear_error(&mut self, name: &str) {
        let Some(bound) = self.bound.as_mut() else {
            return;
        };
        if let Some(field) = bound.form.field_mut(name) {
            presenter::clear(field, &mut bound.scheduler);
        }
    }

    fn format_phone(&mut self, name: &str) {
        if let Some(field) = self.bound.as_mut().and_then(|b| b.form.field_mut(name)) {
            let formatted = format_phone(field.value());
            field.set_value(formatted);
        }
    }
}

#[cfg(test)]
impl BookingController {
    pub fn is_inert(&self) -> bool {
        self.bound.is_none()
    }

    pub fn listener_count(&self) -> usize {
        self.bound.as_ref().map_or(0, |b| b.listeners.len())
    }

    pub fn pending_timers(&self) -> usize {
        self.bound.as_ref().map_or(0, |b| b.scheduler.len())
    }

    /// Move focus without firing events
    pub fn focus(&mut self, index: usize) {
        if let Some(bound) = self.bound.as_mut() {
            bound.form.set_active_field(index);
            bound.scroll_target = None;
        }
    }
}
