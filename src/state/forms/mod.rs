//! Form domain layer
//!
//! Field values, their validity and the host surface a form is bound from.

mod field;
mod form_state;

pub use field::{ErrorAnnotation, FieldKind, FieldSpec, FormField, Validity};
pub use form_state::{BookingForm, Form, HostForm};
