//! Binary crate for the `weather-assistant` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and interactive prompts
//! - Interactive configuration
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod logging;
mod output;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    logging::init(cmd.verbose)?;
    cmd.run().await
}
