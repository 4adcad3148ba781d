use std::{
    future::Future,
    io::{self, Write},
};

use anyhow::Context;
use clap::Parser;
use forecast_core::{ClientConfig, provider_from_config};
use tracing::{debug, warn};

use crate::{
    console::TerminalConsole,
    driver::{Driver, GOODBYE},
};

/// Top-level CLI struct. The tool is purely interactive and takes no options.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Ask for a city and print its five-day midday forecast"
)]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = ClientConfig::default();
        let provider = provider_from_config(&config).context("Failed to set up weather provider")?;
        debug!(base_url = %config.base_url, "starting interactive session");

        // Ctrl-C outside a terminal prompt (piped stdin, mid-request) arrives as a signal.
        tokio::spawn(async {
            if farewell_on(tokio::signal::ctrl_c(), io::stdout()).await {
                std::process::exit(0);
            }
        });

        let mut console = TerminalConsole::new();
        Driver::new(provider.as_ref(), &mut console, &config).run().await;

        Ok(())
    }
}

/// Wait for `signal`, then print the goodbye line. Returns whether the
/// signal actually fired.
async fn farewell_on<S, W>(signal: S, mut out: W) -> bool
where
    S: Future<Output = io::Result<()>>,
    W: Write,
{
    if let Err(err) = signal.await {
        warn!(error = %err, "could not listen for Ctrl-C");
        return false;
    }

    let _ = writeln!(out, "{GOODBYE}").and_then(|()| out.flush());
    true
}
