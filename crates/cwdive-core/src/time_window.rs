//! Absolute time-window arithmetic around a log timestamp.

use chrono::{DateTime, Duration, FixedOffset, SecondsFormat, Utc};

/// Parses a timestamp the scanner matched.
///
/// RFC 3339 with the console's space-separated variant normalized to `T`;
/// the scan pattern guarantees an explicit offset or `Z`.
pub fn parse_log_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let normalized = raw.replacen(' ', "T", 1);
    DateTime::parse_from_rfc3339(&normalized).ok()
}

/// `(start, end)` bracketing `ts` by `minutes` on either side, rendered in
/// UTC with millisecond precision — the rendering the console stores in its
/// URLs.
pub fn window_around(ts: DateTime<FixedOffset>, minutes: i64) -> (String, String) {
    let half = Duration::minutes(minutes);
    let start = (ts - half).with_timezone(&Utc);
    let end = (ts + half).with_timezone(&Utc);
    (
        start.to_rfc3339_opts(SecondsFormat::Millis, true),
        end.to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}
