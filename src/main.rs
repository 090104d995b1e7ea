//! GitHub Repository Statistics Tool
//!
//! A command-line application for collecting GitHub commit and release
//! history and charting repository activity.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use repostats::app::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Cli::parse().execute().await
}
