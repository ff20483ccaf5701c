//! Display formatting for feed timestamps.

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Formats an ISO-8601 timestamp as `YYYY-MM-DD HH:MM`.
///
/// The time is shown in the timestamp's own offset. Input that cannot be
/// parsed is returned unchanged.
pub fn format_timestamp(timestamp: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, fmt) {
            return dt.format(DISPLAY_FORMAT).to_string();
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(timestamp, "%Y-%m-%d")
        && let Some(dt) = date.and_hms_opt(0, 0, 0)
    {
        return dt.format(DISPLAY_FORMAT).to_string();
    }

    timestamp.to_string()
}
