//! Form field value objects

use crate::state::TimerId;
use chrono::NaiveDate;

/// Declared input kind of a field, as read from the host's type attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Time,
    TextArea,
}

impl FieldKind {
    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::TextArea)
    }
}

/// Per-field verdict
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Validity {
    /// Not checked since the raw value last changed
    #[default]
    Unchecked,
    Valid,
    Invalid(String),
}

impl Validity {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid(message) => Some(message),
            _ => None,
        }
    }
}

/// Visible error annotation attached to a field.
///
/// Mirrors what a host surface renders: the `error` class, `aria-invalid`,
/// and a `role="alert"` message node placed right after the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorAnnotation {
    pub message: String,
    /// Attention animation still playing
    pub shaking: bool,
    /// Timer that ends the animation, while it is pending
    pub shake_timer: Option<TimerId>,
}

/// Host-supplied description of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn new(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required,
        }
    }
}

/// Represents a single form field with its configuration, value and validity
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    value: String,
    pub validity: Validity,
    pub annotation: Option<ErrorAnnotation>,
    /// Allowed range shown to the user (`min`/`max`); presentation only
    pub range_hint: Option<(NaiveDate, NaiveDate)>,
}

impl FormField {
    pub fn from_spec(spec: &FieldSpec) -> Self {
        Self {
            name: spec.name.clone(),
            label: spec.label.clone(),
            kind: spec.kind,
            required: spec.required,
            value: String::new(),
            validity: Validity::Unchecked,
            annotation: None,
            range_hint: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the raw value. Any previous verdict no longer applies.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value != self.value {
            self.validity = Validity::Unchecked;
        }
        self.value = value;
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.set_value(String::new());
    }

    pub fn is_multiline(&self) -> bool {
        self.kind.is_multiline()
    }

    /// True when the CSS-equivalent `error` class is present
    pub fn has_error_class(&self) -> bool {
        self.annotation.is_some()
    }

    /// `aria-invalid` attribute as the host would read it
    pub fn aria_invalid(&self) -> Option<&'static str> {
        self.annotation.as_ref().map(|_| "true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_field() -> FormField {
        FormField::from_spec(&FieldSpec::new("email", "Email", FieldKind::Email, true))
    }

    #[test]
    fn test_from_spec_starts_empty_and_unchecked() {
        let field = email_field();
        assert_eq!(field.value(), "");
        assert_eq!(field.validity, Validity::Unchecked);
        assert!(field.annotation.is_none());
        assert!(field.required);
    }

    #[test]
    fn test_set_value_invalidates_verdict() {
        let mut field = email_field();
        field.validity = Validity::invalid("bad");
        field.set_value("a@b.co");
        assert_eq!(field.validity, Validity::Unchecked);
    }

    #[test]
    fn test_set_same_value_keeps_verdict() {
        let mut field = email_field();
        field.set_value("a@b.co");
        field.validity = Validity::Valid;
        field.set_value("a@b.co");
        assert_eq!(field.validity, Validity::Valid);
    }

    #[test]
    fn test_clear_empties_value() {
        let mut field = email_field();
        field.set_value("a@b.co");
        field.clear();
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_aria_invalid_follows_annotation() {
        let mut field = email_field();
        assert_eq!(field.aria_invalid(), None);
        field.annotation = Some(ErrorAnnotation {
            message: "x".to_string(),
            shaking: false,
            shake_timer: None,
        });
        assert_eq!(field.aria_invalid(), Some("true"));
        assert!(field.has_error_class());
    }

    #[test]
    fn test_kind_attrs() {
        assert!(FieldKind::TextArea.is_multiline());
        assert!(!FieldKind::Text.is_multiline());
    }

    #[test]
    fn test_validity_message() {
        assert_eq!(Validity::invalid("nope").message(), Some("nope"));
        assert_eq!(Validity::Valid.message(), None);
        assert!(!Validity::Unchecked.is_invalid());
    }
}
