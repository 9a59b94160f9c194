//! `cwdive rewrite <url>` – linkify log rows piped through stdin.

use anyhow::{Context, Result};
use cwdive_core::insights_url::parse_insights_url;
use cwdive_core::rewrite::linkify_row;
use std::io::BufRead;

pub fn run_rewrite(url: &str, window_minutes: i64, link_target: &str) -> Result<()> {
    let base = parse_insights_url(url).context("failed to decode console URL")?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        println!("{}", linkify_row(&line, &base, window_minutes, link_target));
    }
    Ok(())
}
