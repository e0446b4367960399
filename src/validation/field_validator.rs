//! Per-field validation rules

use super::patterns::ValidationPattern;
use super::phone::digits_only;
use crate::state::{FieldKind, FormField, Validity};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const NAME_MESSAGE: &str = "Please enter a valid name (2-50 characters, letters only)";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PHONE_MESSAGE: &str = "Please enter a valid Australian phone number";

/// Accepted digit counts for a phone number (leading trunk or country digit allowed)
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=11;

/// Validate a field against its declared kind.
///
/// Rules apply in order and the first failing rule decides the message:
/// required-and-empty, human name (text fields whose name mentions "name"),
/// email shape, phone digit count. Date and time fields only get the
/// required check here; [`super::datetime`] covers the rest.
pub fn validate(field: &FormField) -> Validity {
    validate_value(&field.name, field.kind, field.required, field.value())
}

pub fn validate_value(name: &str, kind: FieldKind, required: bool, raw: &str) -> Validity {
    let value = raw.trim();

    if required && value.is_empty() {
        return Validity::invalid(REQUIRED_MESSAGE);
    }

    match kind {
        FieldKind::Text if is_name_like(name) => {
            if !ValidationPattern::HumanName.matches(value) {
                return Validity::invalid(NAME_MESSAGE);
            }
        }
        FieldKind::Email => {
            if !ValidationPattern::Email.matches(value) {
                return Validity::invalid(EMAIL_MESSAGE);
            }
        }
        FieldKind::Tel => {
            if !PHONE_DIGITS.contains(&digits_only(value).len()) {
                return Validity::invalid(PHONE_MESSAGE);
            }
        }
        _ => {}
    }

    Validity::Valid
}

fn is_name_like(name: &str) -> bool {
    name.to_lowercase().contains("name")
}
