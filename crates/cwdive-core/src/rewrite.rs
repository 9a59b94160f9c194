//! Log-row rewriting: request ids become deep-dive anchors.

use regex::Regex;

use crate::deep_dive::deep_dive_url;
use crate::insights_url::QueryDescriptor;
use crate::scan::{first_timestamp, request_id_pattern};
use crate::time_window::parse_log_timestamp;

/// Rewrites one rendered log row, wrapping every request id in an anchor to
/// its deep-dive query.
///
/// The row's first timestamp, when present and parseable, recenters the
/// linked query's range; otherwise the base descriptor's range is kept. An
/// id the input row already wraps in an `<a>` tag is left alone, so feeding
/// a rewritten row back through is a no-op.
pub fn linkify_row(
    row: &str,
    base: &QueryDescriptor,
    window_minutes: i64,
    link_target: &str,
) -> String {
    let timestamp = first_timestamp(row).and_then(parse_log_timestamp);

    request_id_pattern()
        .replace_all(row, |caps: &regex::Captures<'_>| {
            let id = &caps[0];
            if already_linked(row, id) {
                return id.to_string();
            }
            let url = deep_dive_url(base, id, timestamp, window_minutes);
            format!("<a href=\"{url}\" target=\"{link_target}\">{id}</a>")
        })
        .into_owned()
}

/// True when the row already carries `<a ...>id</a>` for this exact id.
fn already_linked(row: &str, id: &str) -> bool {
    // Request ids are hex and hyphens, safe to splice into a pattern.
    let wrapped = Regex::new(&format!("<a[^>]*>{id}</a>")).expect("anchor pattern is valid");
    wrapped.is_match(row)
}
