//! Wall-clock helpers.

use chrono::{Datelike, TimeZone, Utc};

/// Unix epoch milliseconds.
pub type TimestampMs = i64;

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;
const WEEK_MS: i64 = 604_800_000;

/// Returns the current wall-clock time in epoch milliseconds.
pub fn now_ms() -> TimestampMs {
    Utc::now().timestamp_millis()
}

/// Renders `timestamp` relative to `now` for comment headers.
///
/// Falls back to a short calendar date (`Jan 5`, or `Jan 5, 2023` when the
/// year differs from `now`) once the distance reaches one week.
pub fn format_relative_time(timestamp: TimestampMs, now: TimestampMs) -> String {
    let diff = now.saturating_sub(timestamp);

    if diff < MINUTE_MS {
        return "just now".to_string();
    }
    if diff < HOUR_MS {
        return plural_ago(diff / MINUTE_MS, "minute");
    }
    if diff < DAY_MS {
        return plural_ago(diff / HOUR_MS, "hour");
    }
    if diff < WEEK_MS {
        return plural_ago(diff / DAY_MS, "day");
    }

    let (Some(at), Some(reference)) = (
        Utc.timestamp_millis_opt(timestamp).single(),
        Utc.timestamp_millis_opt(now).single(),
    ) else {
        return "just now".to_string();
    };

    if at.year() == reference.year() {
        at.format("%b %-d").to_string()
    } else {
        at.format("%b %-d, %Y").to_string()
    }
}

fn plural_ago(count: i64, unit: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{suffix} ago")
}

#[cfg(test)]
mod tests {
    use super::{format_relative_time, DAY_MS, HOUR_MS, MINUTE_MS};

    // 2024-03-15T12:00:00Z
    const NOW: i64 = 1_710_504_000_000;

    #[test]
    fn recent_timestamps_render_as_just_now() {
        assert_eq!(format_relative_time(NOW - 5_000, NOW), "just now");
        assert_eq!(format_relative_time(NOW + 10_000, NOW), "just now");
    }

    #[test]
    fn units_pluralize() {
        assert_eq!(format_relative_time(NOW - MINUTE_MS, NOW), "1 minute ago");
        assert_eq!(format_relative_time(NOW - 5 * MINUTE_MS, NOW), "5 minutes ago");
        assert_eq!(format_relative_time(NOW - HOUR_MS, NOW), "1 hour ago");
        assert_eq!(format_relative_time(NOW - 3 * DAY_MS, NOW), "3 days ago");
    }

    #[test]
    fn old_timestamps_render_as_calendar_date() {
        assert_eq!(format_relative_time(NOW - 10 * DAY_MS, NOW), "Mar 5");
        // 2023-12-25T00:00:00Z
        assert_eq!(format_relative_time(1_703_462_400_000, NOW), "Dec 25, 2023");
    }
}
