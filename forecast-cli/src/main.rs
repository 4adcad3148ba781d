//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Interactive prompting and the disambiguation menu
//! - Turning provider failures into user-facing messages
//! - Human-friendly output formatting

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod console;
mod driver;
mod fetcher;
mod resolver;
#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")))
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
