//! Field value parsing
//!
//! Dates, timestamps and 12-hour clock strings as they appear in the clinic
//! fixtures. Unparsable text yields None; callers treat that as missing.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::record::Record;

/// Parses `YYYY-MM-DD`
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

/// Parses an RFC 3339 timestamp such as `2025-06-10T08:30:00Z`
pub fn parse_timestamp(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text.trim()).ok()
}

/// Parses a 12-hour clock string into a time of day.
///
/// `12:xx AM` is just after midnight, `12:xx PM` just after noon. A
/// comma-separated schedule (`08:00 AM, 08:00 PM`) yields its first entry.
pub fn parse_clock12h(text: &str) -> Option<NaiveTime> {
    let first = text.split(',').next()?.trim();
    NaiveTime::parse_from_str(first, "%I:%M %p").ok()
}

/// Minutes since midnight of a 12-hour clock string
pub fn clock_minutes(text: &str) -> Option<u32> {
    parse_clock12h(text).map(|t| t.hour() * 60 + t.minute())
}

/// Calendar date of a record field.
///
/// Accepts plain dates and RFC 3339 timestamps (taken on their own offset).
pub fn field_date(record: &Record, field: &str) -> Option<NaiveDate> {
    let text = record.str_field(field)?;
    parse_date(text).or_else(|| parse_timestamp(text).map(|ts| ts.date_naive()))
}

/// Combines a date field and a 12-hour time field into one timestamp.
///
/// A missing or unparsable time falls back to midnight; a missing date
/// yields None.
pub fn field_datetime(record: &Record, date_field: &str, time_field: &str) -> Option<NaiveDateTime> {
    let date = field_date(record, date_field)?;
    match record.str_field(time_field).and_then(parse_clock12h) {
        Some(time) => Some(date.and_time(time)),
        None => date.and_hms_opt(0, 0, 0),
    }
}
