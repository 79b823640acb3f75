use chrono::NaiveDateTime;

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Formats a non-negative duration as `"{D}d HHh MMm SSs"`, dropping the day
/// part when it is zero.
pub fn format_countdown(total_seconds: u64) -> String {
    let days = total_seconds / SECONDS_PER_DAY;
    let hours = (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;

    let day_label = if days > 0 { format!("{}d ", days) } else { String::new() };
    format!("{}{:02}h {:02}m {:02}s", day_label, hours, minutes, seconds)
}

/// Whole seconds from `now` until `target`, floored and clamped at zero.
pub fn seconds_until(now: NaiveDateTime, target: NaiveDateTime) -> u64 {
    let millis = (target - now).num_milliseconds().max(0);
    (millis / 1_000) as u64
}
