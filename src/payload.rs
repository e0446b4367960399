//! Snapshot of a form sent to the submission channel

use crate::state::{BookingForm, FieldKind};
use crate::validation::digits_only;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field values at the moment of a submit attempt.
///
/// Built once per attempt and never touched afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
    /// ISO-8601 UTC, millisecond precision
    pub submitted_at: String,
    /// Digits of the phone number, absent when no number was entered
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone_clean: Option<String>,
}

impl BookingPayload {
    pub fn from_form(form: &BookingForm, submitted_at: DateTime<Utc>) -> Self {
        let phone_clean = form
            .first_of_kind(FieldKind::Tel)
            .map(|f| f.value())
            .filter(|v| !v.is_empty())
            .map(digits_only);

        Self {
            fields: form.values(),
            submitted_at: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            phone_clean,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}
