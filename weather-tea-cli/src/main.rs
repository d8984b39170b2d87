//! Binary crate for the `weather-tea` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Resolving the API key from flag or environment
//! - Human-friendly output formatting

use clap::Parser;
use tracing_subscriber::EnvFilter;
use weather_tea_core::API_KEY_ENV;

mod cli;
mod output;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    let env_key = std::env::var(API_KEY_ENV).ok();

    let summary = cmd.run(env_key, cli::connect_openweather).await?;
    print!("{summary}");
    Ok(())
}
