//! Booking form state and the host surface description it is bound from

use super::field::{FieldKind, FieldSpec, FormField};
use std::collections::BTreeMap;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// What the host page supplies when a controller binds to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostForm {
    pub id: String,
    pub fields: Vec<FieldSpec>,
    /// Label of the submit control; `None` when the host has no such control
    pub submit_label: Option<String>,
}

impl HostForm {
    /// The booking request form the terminal host presents
    pub fn booking() -> Self {
        Self {
            id: "bookingForm".to_string(),
            fields: vec![
                FieldSpec::new("name", "Full Name", FieldKind::Text, true),
                FieldSpec::new("email", "Email", FieldKind::Email, true),
                FieldSpec::new("phone", "Phone", FieldKind::Tel, true),
                FieldSpec::new("date", "Preferred Date (YYYY-MM-DD)", FieldKind::Date, true),
                FieldSpec::new("time", "Preferred Time (HH:MM)", FieldKind::Time, true),
                FieldSpec::new("notes", "Notes", FieldKind::TextArea, false),
            ],
            submit_label: Some("Request Booking".to_string()),
        }
    }
}

/// Field set of one bound form
#[derive(Debug, Clone)]
pub struct BookingForm {
    pub id: String,
    pub fields: Vec<FormField>,
    pub active_field_index: usize,
    /// False while the success panel stands in for the form
    pub visible: bool,
}

impl BookingForm {
    pub fn from_host(host: &HostForm) -> Self {
        Self {
            id: host.id.clone(),
            fields: host.fields.iter().map(FormField::from_spec).collect(),
            active_field_index: 0,
            visible: true,
        }
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// First field of the given kind, like a `querySelector` on the type attribute
    pub fn first_of_kind(&self, kind: FieldKind) -> Option<&FormField> {
        self.fields.iter().find(|f| f.kind == kind)
    }

    /// Name to raw value for every field, empty values included
    pub fn values(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.value().to_string()))
            .collect()
    }

    /// Restore every field to its initial empty value
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
    }
}

impl Form for BookingForm {
    fn field_count(&self) -> usize {
        self.fields.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len().saturating_sub(1));
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod host_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_booking_host_has_expected_fields() {
            let host = HostForm::booking();
            let names: Vec<&str> = host.fields.iter().map(|f| f.name.as_str()).collect();
            assert_eq!(names, vec!["name", "email", "phone", "date", "time", "notes"]);
            assert_eq!(host.submit_label.as_deref(), Some("Request Booking"));
        }

        #[test]
        fn test_notes_is_optional() {
            let host = HostForm::booking();
            let notes = host.fields.iter().find(|f| f.name == "notes").unwrap();
            assert!(!notes.required);
            assert_eq!(notes.kind, FieldKind::TextArea);
        }
    }

    mod booking_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_from_host_copies_fields() {
            let form = BookingForm::from_host(&HostForm::booking());
            assert_eq!(form.field_count(), 6);
            assert_eq!(form.active_field_index, 0);
            assert!(form.visible);
        }

        #[test]
        fn test_next_field_wraps() {
            let mut form = BookingForm::from_host(&HostForm::booking());
            for _ in 0..6 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps() {
            let mut form = BookingForm::from_host(&HostForm::booking());
            form.prev_field();
            assert_eq!(form.active_field_index, 5);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = BookingForm::from_host(&HostForm::booking());
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 5);
        }

        #[test]
        fn test_first_of_kind() {
            let form = BookingForm::from_host(&HostForm::booking());
            assert_eq!(form.first_of_kind(FieldKind::Tel).unwrap().name, "phone");
            assert!(BookingForm::from_host(&HostForm {
                id: "f".to_string(),
                fields: vec![],
                submit_label: None,
            })
            .first_of_kind(FieldKind::Tel)
            .is_none());
        }

        #[test]
        fn test_values_include_empty_fields() {
            let mut form = BookingForm::from_host(&HostForm::booking());
            form.field_mut("name").unwrap().set_value("Ada");
            let values = form.values();
            assert_eq!(values.get("name").map(String::as_str), Some("Ada"));
            assert_eq!(values.get("notes").map(String::as_str), Some(""));
            assert_eq!(values.len(), 6);
        }

        #[test]
        fn test_reset_clears_values() {
            let mut form = BookingForm::from_host(&HostForm::booking());
            form.field_mut("email").unwrap().set_value("a@b.co");
            form.active_field_index = 3;
            form.reset();
            assert_eq!(form.field("email").unwrap().value(), "");
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_navigation_on_empty_form_is_noop() {
            let mut form = BookingForm::from_host(&HostForm {
                id: "f".to_string(),
                fields: vec![],
                submit_label: None,
            });
            form.next_field();
            form.prev_field();
            assert_eq!(form.active_field(), 0);
            assert!(form.get_field(form.active_field()).is_none());
        }
    }
}
