//! Guards against booking in the past

use crate::state::Validity;
use chrono::{Months, NaiveDate, NaiveDateTime, NaiveTime};

pub const PAST_DATE_MESSAGE: &str = "Please select a future date";
pub const PAST_TIME_MESSAGE: &str = "Please select a future time";
pub const DATE_FORMAT_MESSAGE: &str = "Please enter a date as YYYY-MM-DD";
pub const TIME_FORMAT_MESSAGE: &str = "Please enter a time as HH:MM";

/// Months ahead a booking may be requested, shown as the date input's `max`
const BOOKING_WINDOW_MONTHS: u32 = 6;

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// A date before today is rejected; time of day is ignored.
///
/// An empty value passes, leaving presence to the required rule.
pub fn validate_date(value: &str, now: NaiveDateTime) -> Validity {
    if value.trim().is_empty() {
        return Validity::Valid;
    }
    match parse_date(value) {
        Some(date) if date < now.date() => Validity::invalid(PAST_DATE_MESSAGE),
        Some(_) => Validity::Valid,
        None => Validity::invalid(DATE_FORMAT_MESSAGE),
    }
}

/// A time is only checked when its paired date is today, and must then be
/// strictly later than `now`. No date (or no time) means nothing to check.
pub fn validate_time(time: &str, date: Option<&str>, now: NaiveDateTime) -> Validity {
    if time.trim().is_empty() {
        return Validity::Valid;
    }
    let Some(date) = date.and_then(parse_date) else {
        return Validity::Valid;
    };
    let Some(time) = parse_time(time) else {
        return Validity::invalid(TIME_FORMAT_MESSAGE);
    };

    if date == now.date() && date.and_time(time) <= now {
        return Validity::invalid(PAST_TIME_MESSAGE);
    }
    Validity::Valid
}

/// `[today, today + 6 months]`, the range offered to the user
pub fn date_range_hint(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let max = today
        .checked_add_months(Months::new(BOOKING_WINDOW_MONTHS))
        .unwrap_or(NaiveDate::MAX);
    (today, max)
}
