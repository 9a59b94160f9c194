//! CLI for the cwdive deep-dive toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cwdive_core::config;
use std::path::PathBuf;

use commands::{run_decode, run_encode, run_link, run_query, run_rewrite};

/// Top-level CLI for the cwdive deep-dive toolkit.
#[derive(Debug, Parser)]
#[command(name = "cwdive")]
#[command(about = "cwdive: deep-dive links for CloudWatch Logs Insights", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decode a console URL into its query descriptor (JSON on stdout).
    Decode {
        /// Logs Insights console URL.
        url: String,
    },

    /// Encode a query descriptor (JSON) back into a console URL.
    Encode {
        /// Path to a descriptor JSON file; stdin when omitted.
        file: Option<PathBuf>,
    },

    /// Print the deep-dive query body for a request id.
    Query {
        /// Request id (UUID shape).
        request_id: String,
    },

    /// Build a deep-dive URL for a request id from an existing console URL.
    Link {
        /// Logs Insights console URL to derive from.
        url: String,

        /// Request id (UUID shape).
        request_id: String,

        /// Recenter the query range on this timestamp (RFC 3339).
        #[arg(long, value_name = "TIMESTAMP")]
        at: Option<String>,

        /// Minutes either side of the timestamp (config default when omitted).
        #[arg(long, value_name = "N")]
        window_mins: Option<i64>,
    },

    /// Rewrite log rows from stdin, linking request ids to deep-dive queries.
    Rewrite {
        /// Logs Insights console URL the rows came from.
        url: String,

        /// Minutes either side of each row's timestamp (config default when omitted).
        #[arg(long, value_name = "N")]
        window_mins: Option<i64>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Decode { url } => run_decode(&url)?,
            CliCommand::Encode { file } => run_encode(file.as_deref())?,
            CliCommand::Query { request_id } => run_query(&request_id)?,
            CliCommand::Link {
                url,
                request_id,
                at,
                window_mins,
            } => run_link(
                &url,
                &request_id,
                at.as_deref(),
                window_mins.unwrap_or(cfg.window_minutes),
            )?,
            CliCommand::Rewrite { url, window_mins } => run_rewrite(
                &url,
                window_mins.unwrap_or(cfg.window_minutes),
                &cfg.link_target,
            )?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
