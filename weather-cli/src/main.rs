//! Binary crate for the `weather` command-line dashboard.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration and the dashboard loop
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod interactive;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
