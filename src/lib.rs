pub mod api;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod pagination;
pub mod parsers;
pub mod rate_limiter;
pub mod services;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

use crate::config::AppConfig;
use crate::http::PageFetcher;
use crate::services::crawler::SweepFinder;
use crate::services::server::ServerService;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_serve(port: u16, config: AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_scan(pretty: bool, config: AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let matches = runtime.block_on(async {
        let scraper = &config.scraper;
        let fetcher =
            PageFetcher::new(scraper.user_agent, scraper.timeout_secs, scraper.rate_limit_ms)?;
        let finder = SweepFinder::new(fetcher, &config)?;
        anyhow::Ok(finder.run().await)
    })?;

    let json = if pretty {
        serde_json::to_string_pretty(&matches)
    } else {
        serde_json::to_string(&matches)
    }
    .context("Failed to serialize matches")?;

    println!("{}", json);
    Ok(())
}
