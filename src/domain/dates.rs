//! Conversions between the Unix-seconds deadlines stored on todos and the
//! calendar dates shown in the UI and typed into the drawer form.
//!
//! All calendar values are UTC so a deadline renders the same date on
//! every machine.

use chrono::{DateTime, NaiveDate, Utc};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `YYYY-MM-DD` for display; `None` for a missing or zero timestamp.
pub fn timestamp_to_date_string(timestamp: Option<i64>) -> Option<String> {
    let ts = timestamp.filter(|ts| *ts != 0)?;
    timestamp_to_date_time(ts).map(|dt| dt.format(DATE_FORMAT).to_string())
}

/// `None` only when the timestamp is outside chrono's representable range.
pub fn timestamp_to_date_time(timestamp: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp, 0)
}

pub fn date_time_to_timestamp(date_time: Option<DateTime<Utc>>) -> Option<i64> {
    date_time.map(|dt| dt.timestamp())
}

/// Midnight UTC of the given day.
pub fn date_to_timestamp(date: NaiveDate) -> i64 {
    date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp()
}

pub fn timestamp_to_date(timestamp: i64) -> Option<NaiveDate> {
    timestamp_to_date_time(timestamp).map(|dt| dt.date_naive())
}

pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}
