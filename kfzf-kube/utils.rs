use k8s_openapi::jiff::Timestamp;

#[cfg(test)]
#[path = "./utils.tests.rs"]
mod utils_tests;

/// Text used when age cannot be computed.
pub const UNKNOWN_AGE: &str = "n/a";

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Formats time elapsed between `time` and `now` to a short human-readable string.
pub fn format_age(time: &Timestamp, now: &Timestamp) -> String {
    format_elapsed_seconds(now.as_second() - time.as_second())
}

/// Formats time elapsed between optional `time` and `now`.
pub fn format_optional_age(time: Option<&Timestamp>, now: &Timestamp) -> String {
    time.map_or_else(|| UNKNOWN_AGE.to_owned(), |time| format_age(time, now))
}

/// Formats number of seconds to minutes, hours or days.\
/// **Note** that negative values (clock skew) are treated as zero.
pub fn format_elapsed_seconds(seconds: i64) -> String {
    let seconds = seconds.max(0);

    if seconds >= 2 * DAY {
        format!("{}d", seconds / DAY)
    } else if seconds >= 2 * HOUR {
        format!("{}h", seconds / HOUR)
    } else {
        format!("{}m", seconds / MINUTE)
    }
}
