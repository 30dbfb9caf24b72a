use time::{OffsetDateTime, UtcOffset};

use crate::model::{Item, TimeRange, Timestamp};

/// Total tracked time of an item in milliseconds. Open ranges add nothing.
pub fn compute_duration(item: &Item) -> u64 {
    item.time_ranges.iter().map(TimeRange::elapsed_ms).sum()
}

/// Format milliseconds as `{m}m{s}s`, leaving out zero parts.
///
/// A zero duration formats as an empty string.
pub fn format_duration(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;

    let mut out = String::new();
    if minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    if seconds > 0 {
        out.push_str(&format!("{}s", seconds));
    }
    out
}

/// Local `HH:MM` for a timestamp.
pub fn format_clock_time(ts: Timestamp) -> String {
    format_clock_time_at(ts, local_offset())
}

pub fn format_clock_time_at(ts: Timestamp, offset: UtcOffset) -> String {
    let dt = OffsetDateTime::from_unix_timestamp_nanos(ts as i128 * 1_000_000)
        .unwrap_or(OffsetDateTime::UNIX_EPOCH)
        .to_offset(offset);
    format!("{:02}:{:02}", dt.hour(), dt.minute())
}

/// The process's local UTC offset, or UTC when it cannot be determined.
pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}
