//! Binary crate for the `meteo` terminal weather viewer.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration and the session loop
//! - Rendering state into text panels

use clap::Parser;

mod cli;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with rendered panels.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
