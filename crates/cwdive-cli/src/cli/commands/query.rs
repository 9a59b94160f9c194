//! `cwdive query <request-id>` – print the deep-dive query body.

use anyhow::{bail, Result};
use cwdive_core::deep_dive::deep_dive_query;
use cwdive_core::scan::is_request_id;

pub fn run_query(request_id: &str) -> Result<()> {
    if !is_request_id(request_id) {
        bail!("'{request_id}' is not a request id (expected UUID shape)");
    }
    // The template already ends with a newline.
    print!("{}", deep_dive_query(request_id));
    Ok(())
}
