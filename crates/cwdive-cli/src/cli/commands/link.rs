//! `cwdive link <url> <request-id>` – print a deep-dive console URL.

use anyhow::{bail, Context, Result};
use cwdive_core::deep_dive::deep_dive_url;
use cwdive_core::insights_url::parse_insights_url;
use cwdive_core::scan::is_request_id;
use cwdive_core::time_window::parse_log_timestamp;

pub fn run_link(url: &str, request_id: &str, at: Option<&str>, window_minutes: i64) -> Result<()> {
    if !is_request_id(request_id) {
        bail!("'{request_id}' is not a request id (expected UUID shape)");
    }
    let base = parse_insights_url(url).context("failed to decode console URL")?;

    let timestamp = match at {
        Some(raw) => Some(
            parse_log_timestamp(raw)
                .with_context(|| format!("'{raw}' is not an RFC 3339 timestamp"))?,
        ),
        None => None,
    };

    println!("{}", deep_dive_url(&base, request_id, timestamp, window_minutes));
    Ok(())
}
