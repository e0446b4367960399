//! Typed events and the subscriptions registered for them

use crate::state::{BookingForm, FieldKind};

/// Element an event is aimed at
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventTarget {
    Form,
    Field(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Raw value changed
    Input,
    /// Field lost focus
    Blur,
    /// Value committed (date and time pickers)
    Change,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormEvent {
    pub target: EventTarget,
    pub kind: EventKind,
}

impl FormEvent {
    pub fn field(name: &str, kind: EventKind) -> Self {
        Self {
            target: EventTarget::Field(name.to_string()),
            kind,
        }
    }

    pub fn submit() -> Self {
        Self {
            target: EventTarget::Form,
            kind: EventKind::Submit,
        }
    }
}

/// What runs when a subscription matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Run the field's rules (and date/time guard) and annotate
    Validate,
    /// Drop the annotation left by an earlier check
    ClearError,
    /// Rewrite the tel value into display form
    FormatPhone,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub target: EventTarget,
    pub kind: EventKind,
    pub handler: Handler,
}

impl Subscription {
    fn new(target: EventTarget, kind: EventKind, handler: Handler) -> Self {
        Self {
            target,
            kind,
            handler,
        }
    }

    pub fn matches(&self, event: &FormEvent) -> bool {
        self.target == event.target && self.kind == event.kind
    }
}

/// Listeners a freshly bound form gets, in dispatch order
pub fn subscriptions_for(form: &BookingForm) -> Vec<Subscription> {
    let mut subscriptions = vec![Subscription::new(
        EventTarget::Form,
        EventKind::Submit,
        Handler::Submit,
    )];

    for field in &form.fields {
        let target = EventTarget::Field(field.name.clone());
        subscriptions.push(Subscription::new(target.clone(), EventKind::Blur, Handler::Validate));
        subscriptions.push(Subscription::new(target, EventKind::Input, Handler::ClearError));
    }

    if let Some(tel) = form.first_of_kind(FieldKind::Tel) {
        subscriptions.push(Subscription::new(
            EventTarget::Field(tel.name.clone()),
            EventKind::Input,
            Handler::FormatPhone,
        ));
    }

    for kind in [FieldKind::Date, FieldKind::Time] {
        if let Some(field) = form.first_of_kind(kind) {
            subscriptions.push(Subscription::new(
                EventTarget::Field(field.name.clone()),
                EventKind::Change,
                Handler::Validate,
            ));
        }
    }

    subscriptions
}
