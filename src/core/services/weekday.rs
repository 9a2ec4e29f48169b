//! Weekday evaluation
//!
//! The one question fritoto exists to answer.

use chrono::{DateTime, Datelike, TimeZone, Weekday};

/// Whether `time` falls on a Friday in its own timezone
///
/// The weekday is read from the timestamp's local calendar date, so
/// `2025-09-26T23:30:00-05:00` is a Friday even though it is already
/// Saturday in UTC.
#[must_use]
pub fn is_it_friday<Tz: TimeZone>(time: &DateTime<Tz>) -> bool {
    time.weekday() == Weekday::Fri
}
