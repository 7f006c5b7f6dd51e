//! Rosterline CLI
//!
//! Runs the Rosterline normalizers over exported JSON and prints JSON.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use rosterline_cli::cli::Args;
use rosterline_cli::config::RosterlineConfig;
use rosterline_cli::{commands, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = RosterlineConfig::load(args.config.as_deref())?;
    logging::init(&config.logging.level, args.verbose);
    tracing::debug!(?config, "loaded configuration");

    match commands::dispatch(&args, &config).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            tracing::error!("{e}");
            Err(e.into())
        }
    }
}
