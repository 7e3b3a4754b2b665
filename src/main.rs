mod cli;
mod client;
mod config;
mod error;
mod pipeline;
mod planner;
mod search;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    cli.run(config).await
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "edugenie=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
