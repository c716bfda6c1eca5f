//! Binary crate for the `findmyip` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Triggering one fetch on the view model
//! - Human-friendly output of the settled view state

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
