//! Deep-dive derivation: point an existing console session at one request id.

use chrono::{DateTime, FixedOffset};

use crate::insights_url::{build_insights_url, QueryDescriptor};
use crate::time_window::window_around;

/// Query body that pulls every log line mentioning `request_id`, newest
/// first.
///
/// The id is spliced into the filter literal unescaped. Callers validate it
/// with [`crate::scan::is_request_id`] first, so quote characters never
/// reach the template.
pub fn deep_dive_query(request_id: &str) -> String {
    format!(
        "fields @timestamp, @message\n| sort @timestamp desc\n| filter @message like '{request_id}'\n"
    )
}

/// Clone of `base` pointed at `request_id`.
///
/// Replaces the editor text with [`deep_dive_query`] and, when `timestamp`
/// is known, recenters `start`/`end` on it. Everything else — saved query
/// id, range mode, source groups — rides along unchanged.
pub fn deep_dive_descriptor(
    base: &QueryDescriptor,
    request_id: &str,
    timestamp: Option<DateTime<FixedOffset>>,
    window_minutes: i64,
) -> QueryDescriptor {
    let mut derived = base.clone();
    derived.editor_string = Some(deep_dive_query(request_id));
    if let Some(ts) = timestamp {
        let (start, end) = window_around(ts, window_minutes);
        derived.start = Some(start);
        derived.end = Some(end);
    }
    derived
}

/// [`deep_dive_descriptor`] re-encoded into a console URL.
pub fn deep_dive_url(
    base: &QueryDescriptor,
    request_id: &str,
    timestamp: Option<DateTime<FixedOffset>>,
    window_minutes: i64,
) -> String {
    build_insights_url(&deep_dive_descriptor(base, request_id, timestamp, window_minutes))
}
