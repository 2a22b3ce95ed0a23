// src/main.rs
// =============================================================================
// Entry point: parse the command line, crawl the site, write the sitemap.
// Any failure is logged and terminates the process with a non-zero code.
// =============================================================================

mod cli;
mod crawler;
mod sitemap;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use crawler::CrawlerConfig;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = CrawlerConfig {
        workers: cli.parallel,
        ..CrawlerConfig::default()
    };
    sitemap::generate(
        &cli.url,
        cli.output_file.as_deref(),
        config,
        cli.max_depth,
    )
    .await
}
