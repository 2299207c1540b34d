use chrono::{DateTime, Local, Utc};

/// Renders a UTC timestamp as an RFC 3339 string.
///
/// Example: "2025-09-13T03:49:58.123456789+00:00"
pub fn to_rfc3339_string(time: &DateTime<Utc>) -> String {
    time.to_rfc3339()
}

/// Formats a timestamp in the local time zone as a medium-length date and time,
/// e.g. "Oct 17, 2026 at 3:04 PM". Used as the subtitle of a list row.
pub fn format_medium(time: &DateTime<Utc>) -> String {
    time.with_timezone(&Local)
        .format("%b %-d, %Y at %-I:%M %p")
        .to_string()
}
