//! Trending videos CLI
//!
//! Loads the API key, walks every page of the trending chart once and
//! writes the result to a JSON file.

use std::path::Path;

use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;
use trending_core::{
    ClientConfig, PopularVideoParams, Result, Settings, TrendingScraper, build_http_client,
    write_json,
};

mod args;

use args::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let spec = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_level, &spec))
        .init();

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// `RUST_LOG`-style filter; `default_level` applies only when `spec` sets nothing
fn build_filter(default_level: Level, spec: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .parse_lossy(spec)
}

fn build_params(key: String, cli: &Cli) -> PopularVideoParams {
    PopularVideoParams::new(key, cli.category)
        .with_region(cli.region.clone())
        .with_max_results(cli.max_results)
        .with_chart(Some(cli.chart.clone()))
}

/// Returns `Ok(false)` when the fetch produced nothing usable
async fn run(cli: Cli) -> Result<bool> {
    let key = match cli.api_key.clone() {
        Some(key) => key,
        None => Settings::from_env()?.youtube.key,
    };

    let params = build_params(key, &cli);
    let scraper = TrendingScraper::with_config(ClientConfig::default());

    fetch_and_write(&scraper, &params, &cli.output).await
}

/// Fetch once and write the result; nothing is written if the fetch failed
async fn fetch_and_write(
    scraper: &TrendingScraper,
    params: &PopularVideoParams,
    output: &Path,
) -> Result<bool> {
    let session = build_http_client(scraper.config())?;

    let Some(result) = scraper.fetch_all(&session, params).await else {
        error!("No trending videos fetched, nothing written");
        return Ok(false);
    };

    info!(pages = result.len(), "Fetched trending videos");
    write_json(output, &result)?;
    Ok(true)
}
