//! Coarse relative-time strings ("5 minutes ago").

use chrono::{DateTime, Utc};

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Formats the distance between `then` and `now` as seconds, minutes, hours or days.
///
/// Every bucket is computed from the raw millisecond delta with floor division.
/// Timestamps later than `now` render as "just now".
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta_ms = (now - then).num_milliseconds();
    if delta_ms < 0 {
        return "just now".to_string();
    }

    if delta_ms < MS_PER_MINUTE {
        format!("{} seconds ago", delta_ms / MS_PER_SECOND)
    } else if delta_ms < MS_PER_HOUR {
        format!("{} minutes ago", delta_ms / MS_PER_MINUTE)
    } else if delta_ms < MS_PER_DAY {
        format!("{} hours ago", delta_ms / MS_PER_HOUR)
    } else {
        format!("{} days ago", delta_ms / MS_PER_DAY)
    }
}
