//! `cwdive decode <url>` – print the query descriptor as JSON.

use anyhow::{Context, Result};
use cwdive_core::insights_url::parse_insights_url;

pub fn run_decode(url: &str) -> Result<()> {
    let descriptor = parse_insights_url(url).context("failed to decode console URL")?;
    println!("{}", serde_json::to_string_pretty(&descriptor)?);
    Ok(())
}
