//! Small display formatters shared by the panels.

use chrono::{DateTime, Utc};

/// Format a game clock as `m:ss`.
pub fn format_clock(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Relative time label ("just now", "5m ago", "3h ago", "2d ago").
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(then);
    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(9), "0:09");
        assert_eq!(format_clock(75), "1:15");
        assert_eq!(format_clock(3600), "60:00");
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = Utc::now();
        assert_eq!(time_ago(now - Duration::seconds(30), now), "just now");
        assert_eq!(time_ago(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(time_ago(now - Duration::hours(3), now), "3h ago");
        assert_eq!(time_ago(now - Duration::days(2), now), "2d ago");
    }

    #[test]
    fn test_time_ago_future_is_just_now() {
        let now = Utc::now();
        assert_eq!(time_ago(now + Duration::minutes(5), now), "just now");
    }
}
