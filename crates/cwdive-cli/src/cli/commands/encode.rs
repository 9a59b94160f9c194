//! `cwdive encode [file]` – read a descriptor JSON, print the console URL.

use anyhow::{Context, Result};
use cwdive_core::insights_url::{build_insights_url, QueryDescriptor};
use std::fs;
use std::io::Read;
use std::path::Path;

pub fn run_encode(file: Option<&Path>) -> Result<()> {
    let json = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    let descriptor: QueryDescriptor =
        serde_json::from_str(&json).context("descriptor JSON did not parse")?;
    println!("{}", build_insights_url(&descriptor));
    Ok(())
}
