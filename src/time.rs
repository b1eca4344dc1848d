//! Time related utils.

use chrono::Timelike;
use chrono::Utc;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Take the current time, truncated to second precision.
///
/// Signatures never carry sub-second precision, so truncating here keeps
/// the timestamp we sign identical to the timestamp we emit.
pub fn now() -> DateTime {
    // SAFETY: zero nanoseconds is always a valid value
    Utc::now().with_nanosecond(0).unwrap()
}

/// Format a datetime into an 8-digit UTC calendar date like `20130524`.
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format a datetime into basic ISO 8601 like `20130524T000000Z`.
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}
